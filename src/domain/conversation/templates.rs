//! Reply templates for every mode.
//!
//! Search and think replies embed the user's text, so they are built with
//! functions; everything else is a constant.

/// Seeded into every new conversation.
pub const WELCOME_MESSAGE: &str = "Hello! I'm Elena, your advanced AI assistant. I can help you with coding, searching, thinking through problems, and much more. What would you like to work on today?";

// ============================================================================
// Code
// ============================================================================

pub const CODE_REACT_COMPONENT: &str = r#"I'll help you create a React component. Here's a modern approach:

```tsx
import React from 'react';
import { cn } from '@/lib/utils';

interface MyComponentProps {
  className?: string;
  children: React.ReactNode;
}

export const MyComponent = ({ className, children }: MyComponentProps) => {
  return (
    <div className={cn("flex items-center justify-center", className)}>
      {children}
    </div>
  );
};
```

This component follows modern React patterns with TypeScript, proper props typing, and Tailwind CSS integration. Would you like me to add any specific functionality?"#;

pub const CODE_PYTHON_SCRIPT: &str = r#"Here's a Python solution for you:

```python
def advanced_function(data):
    """
    Advanced data processing function
    """
    processed_data = []
    for item in data:
        if isinstance(item, str):
            processed_data.append(item.upper())
        elif isinstance(item, (int, float)):
            processed_data.append(item * 2)
    return processed_data

# Example usage
result = advanced_function(['hello', 'world', 42, 3.14])
print(result)  # ['HELLO', 'WORLD', 84, 6.28]
```

This demonstrates type checking, list comprehension alternatives, and proper Python conventions. Need help with anything specific?"#;

pub const CODE_CAPABILITIES: &str = r#"I understand you need help with coding. I can assist with:

• **Languages**: Python, JavaScript/TypeScript, React, Node.js, C++
• **Frameworks**: React, Vue, Express, FastAPI
• **Databases**: SQL, MongoDB, Redis
• **Tools**: Git, Docker, CI/CD

Please provide more details about what you'd like to build or the problem you're trying to solve, and I'll generate the appropriate code for you!"#;

// ============================================================================
// Search
// ============================================================================

/// Sandboxed "search results" that echo the query verbatim.
pub fn search_results(query: &str) -> String {
    format!(
        r#"🔍 **Search Results for: "{query}"**

I would typically search the web for current information, but I'm running in a sandboxed browser environment. However, I can help you with:

• **Technical Documentation**: I have extensive knowledge of programming languages, frameworks, and tools
• **Concepts & Explanations**: I can explain complex topics in detail
• **Best Practices**: Current industry standards and methodologies
• **Problem Solving**: Analytical approaches to challenges

For real-time web searches, I'd recommend integrating with search APIs. Would you like me to explain how to implement web search functionality in your application?"#
    )
}

// ============================================================================
// Think
// ============================================================================

/// Multi-section analysis with the problem statement echoed verbatim.
pub fn deep_analysis(problem: &str) -> String {
    format!(
        r#"🧠 **Deep Analysis Mode**

Let me think through this systematically:

**Problem Analysis:**
{problem}

**My Reasoning Process:**
1. **Context Assessment**: Understanding the core question/challenge
2. **Knowledge Synthesis**: Drawing from multiple domains of information
3. **Solution Mapping**: Identifying potential approaches and their trade-offs
4. **Risk Evaluation**: Considering potential issues and mitigation strategies

**Strategic Recommendations:**
• Break complex problems into smaller, manageable components
• Consider both technical and human factors
• Always have backup plans and error handling
• Optimize for maintainability and scalability

**Next Steps:**
What specific aspect would you like me to dive deeper into? I can analyze technical architectures, business logic, user experience considerations, or implementation strategies."#
    )
}

// ============================================================================
// Chat
// ============================================================================

pub const CHAT_GREETING: &str = "Hello! I'm Elena, your advanced AI assistant. I'm ready to help you with anything you need - from coding complex applications to solving challenging problems. What would you like to work on together?";

pub const CHAT_CAPABILITIES: &str = r#"I'm here to assist you! I can help with:

• **Software Development**: Build apps, debug code, architect solutions
• **Problem Solving**: Analyze challenges and provide strategic solutions
• **Learning**: Explain concepts, teach new skills, provide tutorials
• **Creative Tasks**: Design systems, optimize workflows, brainstorm ideas

Just tell me what you're working on, and I'll adapt my assistance to your specific needs!"#;

/// General-purpose replies; one is sampled when no chat keyword matches.
pub const CHAT_FALLBACKS: [&str; 4] = [
    "Absolutely! I'm here to help you with whatever you need. As your AI assistant, I can handle a wide range of tasks from coding to problem-solving. What's on your mind?",
    "I understand what you're looking for. While I can't directly access your computer system like you described, I can be incredibly powerful within this browser environment. I can help you build applications, solve coding problems, explain concepts, and much more!",
    "That's an exciting vision! I'm designed to be your intelligent coding companion. I can help you create applications, debug code, explain complex concepts, and assist with various technical challenges. How can I start helping you today?",
    "I appreciate your ambitious goals! I'm Elena, and I'm here to be your powerful AI assistant. I can help with coding, analysis, problem-solving, and creative tasks. While I operate within browser constraints, I can still be incredibly useful. What project should we work on?",
];
