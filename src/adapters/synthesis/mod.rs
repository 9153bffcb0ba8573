//! Response generator adapters.
//!
//! - `TemplateResponseGenerator` - Keyword-driven template replies
//! - `MockResponseGenerator` - Scripted replies and injected failures (tests)

mod mock_generator;
mod template_generator;

pub use mock_generator::{MockReply, MockResponseGenerator};
pub use template_generator::TemplateResponseGenerator;
