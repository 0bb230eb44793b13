//! Terminal client entry point.
mod app;
mod config;
mod input;
mod presentation;

use anyhow::Result;
use app::App;
use config::CliConfig;
use tilevale_content::ScenarioLoader;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    let config = CliConfig::from_env();

    // Log to a file; stderr belongs to the TUI.
    let file_appender = tracing_appender::rolling::never(&config.log_dir, "tilevale.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    let state = match &config.scenario {
        Some(path) => ScenarioLoader::load(path)?,
        None => tilevale_content::starting_state()?,
    };
    tracing::info!(
        npcs = state.npcs.len(),
        scale = config.scale,
        "session starting"
    );

    let terminal = ratatui::init();
    let outcome = App::new(state, config).run(terminal);
    ratatui::restore();
    outcome
}
