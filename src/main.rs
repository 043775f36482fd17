use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use bookflow::config::FlowConfig;
use bookflow::console::{ConsoleOpener, ConsoleSurface};
use bookflow::handoff::ticks::IntervalTicks;
use bookflow::submission::fields::TemplateKind;
use bookflow::submission::parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = FlowConfig::from_env().expect("Failed to load configuration");

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    tracing::info!("Starting bookflow");

    let mut args = std::env::args().skip(1);
    let kind = match args.next().as_deref() {
        Some("quote") | None => TemplateKind::Quote,
        Some("registration") => TemplateKind::Registration,
        Some(other) => {
            eprintln!("Unknown form kind: {other} (expected quote or registration)");
            std::process::exit(2);
        }
    };
    let body = args.next().unwrap_or_default();

    let fields = parser::parse_body(None, body.as_bytes()).map_err(std::io::Error::other)?;

    let flow = bookflow::build_flow(
        config,
        Arc::new(ConsoleSurface::new(fields)),
        Arc::new(ConsoleOpener),
        Arc::new(IntervalTicks::per_second()),
    )
    .map_err(|e| std::io::Error::other(e.to_string()))?;

    match flow.submit(kind).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
