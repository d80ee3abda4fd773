use shelf::adapters::{ReqwestHttpClient, TerminalPrompt};
use shelf::app::App;
use shelf::cli::{run_command, CliArgs, CliCommand};
use shelf::config::ShelfConfig;

use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr so markup on stdout stays clean.
///
/// `RUST_LOG` overrides the default `shelf=info`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shelf=info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let args = CliArgs::parse();

    let mut config = ShelfConfig::from_env();
    if let Some(url) = &args.api_url {
        config = config.with_api_url(url.as_str());
    }
    tracing::debug!("Using API at {}", config.api_url);

    let client = match config.request_timeout {
        Some(timeout) => ReqwestHttpClient::with_timeout(timeout)?,
        None => ReqwestHttpClient::new(),
    };

    let assume_yes = matches!(args.command, CliCommand::Delete { yes: true, .. });
    let prompt = TerminalPrompt::stdio().with_assume_yes(assume_yes);
    let mut app = App::new(client, prompt, config);

    let runtime = tokio::runtime::Runtime::new()?;
    let ok = runtime.block_on(run_command(&mut app, args.command, &mut std::io::stdout()))?;

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
