//! `enhancer-client` -- terminal client for the enhancement service.
//!
//! Reads a website idea from stdin, enforces the 15-character soft
//! minimum, submits it, and shows a before/after view of the idea and
//! the enhanced prompt. After a result is shown:
//!
//! - `:copy`  prints the raw prompt on its own (pipe it to a clipboard
//!   tool such as `xclip` or `pbcopy`)
//! - `:reset` starts over with a fresh session
//! - `:quit`  exits
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                 | Description             |
//! |----------------|----------|-------------------------|-------------------------|
//! | `ENHANCER_URL` | no       | `http://localhost:5000` | Service base URL        |

use std::io::{self, BufRead, Write};
use std::time::Instant;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use enhancer_client::http::EnhanceClient;
use enhancer_client::session::{Phase, Session, MIN_IDEA_CHARS};

/// Default service base URL (the server's default port).
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "enhancer_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("ENHANCER_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
    let client = EnhanceClient::new(base_url);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new();

    println!("Describe your website idea (min {MIN_IDEA_CHARS} characters), or :quit to exit.");

    loop {
        match session.phase() {
            Phase::Idle => {
                print!("> ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else { break };
                let line = line?;

                if line.trim() == ":quit" {
                    break;
                }

                session.set_input(&line);
                if !session.can_submit() {
                    println!(
                        "{} / {} characters minimum",
                        session.char_count(),
                        MIN_IDEA_CHARS
                    );
                    continue;
                }

                if session.begin_submit() {
                    println!("Enhancing...");
                    match client.enhance(session.input()).await {
                        Ok(text) => session.complete(text),
                        Err(err) => {
                            tracing::warn!(error = %err, "Enhancement request failed");
                            session.fail();
                        }
                    }
                    show_result(&session);
                }
            }

            Phase::Result => {
                print!("[:copy | :reset | :quit] > ");
                io::stdout().flush()?;

                let Some(line) = lines.next() else { break };
                match line?.trim() {
                    ":copy" => {
                        if let Some(text) = session.result() {
                            println!("{text}");
                        }
                        session.mark_copied(Instant::now());
                        println!("Copied!");
                    }
                    ":reset" => {
                        session.reset();
                        println!(
                            "Describe your website idea (min {MIN_IDEA_CHARS} characters)."
                        );
                    }
                    ":quit" => break,
                    other => println!("Unknown command: {other}"),
                }
            }

            // The request is awaited inline above, so the loop never
            // observes this phase.
            Phase::Submitting => unreachable!("no request is left outstanding across iterations"),
        }
    }

    Ok(())
}

/// Print the before/after panels for a completed session.
fn show_result(session: &Session) {
    println!();
    println!("--- Before ---");
    println!("{}", session.input());
    println!();
    println!("--- After ---");
    if let Some(text) = session.result() {
        println!("{text}");
    }
    println!();
}
