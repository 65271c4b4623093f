//! Cidade Limpa - headless form driver
//!
//! Reads one input event per line from stdin, applies it to the active
//! form and prints a JSON snapshot of the form to stdout.

use anyhow::Result;
use cidade_limpa::{App, AppConfig, InputEvent, InputError};
use std::io;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cidade_limpa=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load()?;
    let mut app = App::new(&config)?;

    let result = run_app(&mut app).await;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app(app: &mut App) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let event = match line.parse::<InputEvent>() {
            Ok(event) => event,
            Err(InputError::Empty) => continue,
            Err(err) => {
                tracing::warn!("{err}");
                continue;
            }
        };

        app.handle_event(event).await;

        if app.should_quit() {
            return Ok(());
        }

        println!("{}", serde_json::to_string(&app.state.snapshot())?);
    }

    Ok(())
}
