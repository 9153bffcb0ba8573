//! Conversation store.
//!
//! Owns one session's [`ConversationState`] and runs submissions against it.
//! Readers get snapshots through [`ConversationStore::get_state`] or follow
//! changes through a `watch` receiver; discrete changes are also published as
//! [`ConversationEvent`]s on a broadcast channel.
//!
//! # Submission lifecycle
//!
//! ```text
//! validate ──► append user msg + busy=true ──► pause ──► generate
//!                                                          │
//!                        ┌─────────────────────────────────┤
//!                        ▼                                 ▼
//!          append reply + busy=false          busy=false + notice
//! ```
//!
//! `busy` is released by a drop guard, so a submission future that is
//! dropped mid-pause still leaves the store idle.

use std::sync::Arc;

use tokio::sync::{broadcast, watch};

use crate::adapters::delay::RandomThinkingDelay;
use crate::adapters::synthesis::TemplateResponseGenerator;
use crate::config::ConversationConfig;
use crate::domain::conversation::{
    templates::WELCOME_MESSAGE, ConversationEvent, ConversationState, Message, Notice,
};
use crate::domain::foundation::SessionId;
use crate::ports::{RandomSource, ResponseGenerator, SynthesisError, ThinkingDelay};

use super::handlers::{SubmitMessageCommand, SubmitMessageError, SubmitMessageResult};

/// Default number of buffered events per subscriber.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Observable store for a single conversation session.
///
/// Share it behind an `Arc` between the task that submits and the tasks that
/// render.
pub struct ConversationStore {
    session_id: SessionId,
    state: watch::Sender<ConversationState>,
    events: broadcast::Sender<ConversationEvent>,
    generator: Arc<dyn ResponseGenerator>,
    delay: Arc<dyn ThinkingDelay>,
}

impl ConversationStore {
    /// Creates a store with the standard welcome message.
    pub fn new(generator: Arc<dyn ResponseGenerator>, delay: Arc<dyn ThinkingDelay>) -> Self {
        Self::with_settings(generator, delay, WELCOME_MESSAGE, DEFAULT_EVENT_CAPACITY)
    }

    /// Creates a store with a custom welcome message and event buffer size.
    ///
    /// A zero capacity is raised to one.
    pub fn with_settings(
        generator: Arc<dyn ResponseGenerator>,
        delay: Arc<dyn ThinkingDelay>,
        welcome: &str,
        event_capacity: usize,
    ) -> Self {
        let (state, _) = watch::channel(ConversationState::seeded(welcome));
        let (events, _) = broadcast::channel(event_capacity.max(1));

        Self {
            session_id: SessionId::new(),
            state,
            events,
            generator,
            delay,
        }
    }

    /// Wires the template generator and random thinking delay from config.
    pub fn from_config(config: &ConversationConfig, random: Arc<dyn RandomSource>) -> Self {
        let generator = Arc::new(TemplateResponseGenerator::new(random.clone()));
        let delay = Arc::new(RandomThinkingDelay::new(config.delay_window_ms(), random));

        Self::with_settings(
            generator,
            delay,
            &config.welcome_message,
            config.event_capacity,
        )
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    /// Snapshot of the current state.
    pub fn get_state(&self) -> ConversationState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    /// Receiver that observes every state change.
    pub fn watch(&self) -> watch::Receiver<ConversationState> {
        self.state.subscribe()
    }

    /// Receiver for events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<ConversationEvent> {
        self.events.subscribe()
    }

    /// Submits a user message and waits for the assistant's reply.
    ///
    /// # Errors
    ///
    /// - `Validation` if the text is blank; nothing is appended
    /// - `Busy` if another submission is in flight; nothing is appended
    /// - `Synthesis` if no reply could be produced; the user message stays,
    ///   busy is cleared and a notice event is published
    pub async fn submit(
        &self,
        cmd: SubmitMessageCommand,
    ) -> Result<SubmitMessageResult, SubmitMessageError> {
        cmd.validate()?;
        let SubmitMessageCommand { text, mode } = cmd;

        let user_message = Message::user(text.clone(), mode)?;
        let user_message_id = *user_message.id();
        let guard = self.begin(user_message)?;

        tracing::info!(
            session_id = %self.session_id,
            message_id = %user_message_id,
            mode = %mode,
            "Message accepted"
        );

        let thinking_time = self.delay.pause().await;

        let reply = self
            .generator
            .generate(mode, &text)
            .and_then(|reply| {
                Message::assistant(reply, mode).map_err(|_| SynthesisError::EmptyResponse { mode })
            });

        match reply {
            Ok(assistant) => {
                let assistant_message_id = *assistant.id();
                guard.finish(Some(assistant));

                tracing::info!(
                    session_id = %self.session_id,
                    message_id = %assistant_message_id,
                    mode = %mode,
                    thinking_ms = thinking_time.as_millis() as u64,
                    "Reply appended"
                );

                Ok(SubmitMessageResult {
                    user_message_id,
                    assistant_message_id,
                    mode,
                    thinking_time,
                })
            }
            Err(source) => {
                guard.finish(None);

                let notice = Notice::synthesis_failure();
                self.emit(ConversationEvent::Notice {
                    notice: notice.clone(),
                });

                let err = SubmitMessageError::Synthesis { source, notice };
                tracing::warn!(
                    session_id = %self.session_id,
                    mode = %mode,
                    code = %err.code(),
                    error = %err,
                    "Reply failed"
                );
                Err(err)
            }
        }
    }

    /// Appends the user message and marks the store busy in one update.
    fn begin(&self, message: Message) -> Result<BusyGuard<'_>, SubmitMessageError> {
        let accepted = self.state.send_if_modified(|state| {
            if state.is_busy() {
                return false;
            }
            state.push(message.clone());
            state.set_busy(true);
            true
        });

        if !accepted {
            tracing::warn!(
                session_id = %self.session_id,
                code = %SubmitMessageError::Busy.code(),
                "Message rejected while busy"
            );
            return Err(SubmitMessageError::Busy);
        }

        self.emit(ConversationEvent::MessageAppended { message });
        self.emit(ConversationEvent::BusyChanged { busy: true });

        Ok(BusyGuard {
            store: self,
            armed: true,
        })
    }

    /// Appends the reply, if any, and clears busy in one update.
    fn release(&self, reply: Option<Message>) {
        self.state.send_modify(|state| {
            if let Some(message) = &reply {
                state.push(message.clone());
            }
            state.set_busy(false);
        });

        if let Some(message) = reply {
            self.emit(ConversationEvent::MessageAppended { message });
        }
        self.emit(ConversationEvent::BusyChanged { busy: false });
    }

    // No subscribers is fine; the state channel still records the change.
    fn emit(&self, event: ConversationEvent) {
        tracing::trace!(session_id = %self.session_id, event = event.kind(), "Publishing event");
        let _ = self.events.send(event);
    }
}

impl std::fmt::Debug for ConversationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ConversationStore")
            .field("session_id", &self.session_id)
            .field("messages", &state.len())
            .field("busy", &state.is_busy())
            .finish_non_exhaustive()
    }
}

/// Clears busy when dropped unless `finish` already did.
struct BusyGuard<'a> {
    store: &'a ConversationStore,
    armed: bool,
}

impl BusyGuard<'_> {
    fn finish(mut self, reply: Option<Message>) {
        self.armed = false;
        self.store.release(reply);
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!(
                session_id = %self.store.session_id,
                "Submission dropped before its reply; clearing busy"
            );
            self.store.release(None);
        }
    }
}
