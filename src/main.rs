//! Terminal front end for the Elena conversation store.
//!
//! Reads lines from stdin and submits them in the current mode. Output is
//! rendered from the store's event stream.
//!
//! Commands: `/mode <name>`, `/modes`, `/export`, `/quit`.

use std::io::Write;
use std::sync::Arc;

use elena::adapters::ThreadRandom;
use elena::application::{ConversationStore, SubmitMessageCommand, SubmitMessageError};
use elena::config::{AppConfig, LoggingConfig};
use elena::domain::conversation::{ConversationEvent, Message, Mode};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::{broadcast, watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging);

    let store = Arc::new(ConversationStore::from_config(
        &config.conversation,
        Arc::new(ThreadRandom::new()),
    ));
    tracing::info!(
        session_id = %store.session_id(),
        delay_window_ms = ?config.conversation.delay_window_ms(),
        "Conversation started"
    );

    let (mode_tx, mode_rx) = watch::channel(Mode::default());
    let renderer = tokio::spawn(render_events(store.subscribe(), mode_rx.clone()));

    for message in store.get_state().messages() {
        print_message(message);
    }
    print_prompt(*mode_rx.borrow());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        let mode = *mode_rx.borrow();

        match input {
            "" => print_prompt(mode),
            "/quit" => break,
            "/modes" => {
                let labels: Vec<_> = Mode::ALL.iter().map(|m| m.label()).collect();
                println!("Modes: {}", labels.join(", "));
                print_prompt(mode);
            }
            "/export" => {
                println!("{}", serde_json::to_string_pretty(&store.get_state())?);
                print_prompt(mode);
            }
            _ if input.starts_with("/mode") => {
                let name = input.trim_start_matches("/mode");
                match name.parse::<Mode>() {
                    Ok(next) => {
                        mode_tx.send_replace(next);
                        println!("Switched to {} mode", next.label());
                        print_prompt(next);
                    }
                    Err(err) => {
                        println!("{err}");
                        print_prompt(mode);
                    }
                }
            }
            _ => match store.submit(SubmitMessageCommand::new(line.clone(), mode)).await {
                Ok(_) => {}
                // Rendered from the notice event.
                Err(SubmitMessageError::Synthesis { .. }) => {}
                Err(err) => {
                    println!("{err}");
                    print_prompt(mode);
                }
            },
        }
    }

    renderer.abort();
    tracing::info!(session_id = %store.session_id(), "Conversation ended");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| logging.filter.clone().into());

    // Logs go to stderr so they never interleave with the chat on stdout.
    tracing_subscriber::registry()
        .with(filter)
        .with(logging.json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .with_writer(std::io::stderr)
        }))
        .with((!logging.json).then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
        }))
        .init();
}

async fn render_events(
    mut events: broadcast::Receiver<ConversationEvent>,
    mode: watch::Receiver<Mode>,
) {
    loop {
        match events.recv().await {
            Ok(ConversationEvent::BusyChanged { busy: true }) => {
                println!("Elena is thinking...");
            }
            Ok(ConversationEvent::BusyChanged { busy: false }) => {}
            Ok(ConversationEvent::MessageAppended { message }) if message.is_assistant() => {
                print_message(&message);
                print_prompt(*mode.borrow());
            }
            Ok(ConversationEvent::MessageAppended { .. }) => {}
            Ok(ConversationEvent::Notice { notice }) => {
                println!("[{}] {}", notice.title, notice.description);
                print_prompt(*mode.borrow());
            }
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Renderer fell behind; events dropped");
            }
            Err(broadcast::error::RecvError::Closed) => break,
        }
    }
}

fn print_message(message: &Message) {
    println!(
        "\n{} [{}] ({})\n{}\n",
        message.sender().display_name(),
        message.timestamp().local_time_of_day(),
        message.mode(),
        message.content()
    );
}

fn print_prompt(mode: Mode) {
    print!("Ask Elena anything... ({mode} mode)\n> ");
    let _ = std::io::stdout().flush();
}
