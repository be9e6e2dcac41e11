use softsell_assistant::assistant::transcript::Transcript;
use softsell_assistant::assistant::{ChatWidget, SubmitOutcome};
use softsell_assistant::command::Command;
use softsell_assistant::config::{AssistantConfig, ConfigError};
use softsell_assistant::render;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("stdin: {0}")]
    Io(#[from] std::io::Error),
    #[error("transcript export: {0}")]
    Export(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = AssistantConfig::from_env()?;
    tracing::info!(delay = ?config.reply_delay, start_open = config.start_open, "assistant starting");

    let mut widget = ChatWidget::from_config(&config);
    let mut replies = widget.subscribe();
    let mut shown = 0;

    println!("{}", render::help());
    if widget.is_open() {
        show_window(&widget, &mut shown);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if !handle_line(&mut widget, &line, &mut shown)? {
                    break;
                }
            }
            Some(_) = replies.recv() => {
                if widget.is_open() {
                    show_new(&widget, &mut shown);
                }
            }
        }
    }

    widget.teardown();
    Ok(())
}

/// Apply one input line. Returns `false` on quit.
fn handle_line(widget: &mut ChatWidget, line: &str, shown: &mut usize) -> Result<bool, CliError> {
    match Command::parse(line) {
        Command::Open => {
            widget.open();
            show_window(widget, shown);
        }
        Command::Close => widget.close(),
        Command::Toggle => {
            widget.toggle();
            if widget.is_open() {
                show_window(widget, shown);
            }
        }
        Command::Suggestion(qr) => report(widget.select_quick_reply(qr)),
        Command::Label(qr) => {
            // Once the buttons are gone a typed label is just text.
            if widget.select_quick_reply(qr) == SubmitOutcome::SuggestionsHidden {
                widget.set_draft(qr.question());
                report(widget.submit());
            }
        }
        Command::Say(text) => {
            widget.set_draft(text);
            report(widget.submit());
        }
        Command::Transcript => println!("{}", widget.with_transcript(Transcript::to_json)?),
        Command::Help => println!("{}", render::help()),
        Command::Unknown(name) => println!("unknown command {name}; try /help"),
        Command::Quit => return Ok(false),
    }

    if widget.is_open() {
        show_new(widget, shown);
    }
    Ok(true)
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Sent | SubmitOutcome::Empty => {}
        SubmitOutcome::Closed => println!("(assistant is closed; /open to chat)"),
        SubmitOutcome::SuggestionsHidden => println!("(suggestions are no longer available)"),
    }
}

fn show_window(widget: &ChatWidget, shown: &mut usize) {
    println!("{}", render::header());
    show_new(widget, shown);
    print!("{}", render::suggestions(widget.suggestions()));
}

fn show_new(widget: &ChatWidget, shown: &mut usize) {
    let messages = widget.transcript();
    if let Some(unseen) = messages.get(*shown..) {
        print!("{}", render::transcript(unseen));
    }
    *shown = messages.len();
}

