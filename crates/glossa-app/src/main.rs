use clap::Parser;
use glossa_app::cli::{Cli, Command};
use glossa_app::state::AppState;
use glossa_app::{logging, profile};
use glossa_types::{ExplainRequest, Language};
use glossa_config::ModeKind;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    logging::init();

    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }

    match cli.command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }

            let state = AppState::new(config);
            let shutdown = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl+c: {e}");
                    std::future::pending::<()>().await;
                }
            };

            glossa_app::serve(state, shutdown).await
        }
        Command::Explain {
            word,
            target,
            native,
            simulated,
        } => {
            if simulated {
                config.mode = ModeKind::Simulated;
            }

            for lang in [&target, &native] {
                if Language::find(lang).is_none() {
                    tracing::warn!("'{lang}' is not one of the offered languages");
                }
            }

            let state = AppState::new(config);
            let request = ExplainRequest::new(word, target, native);
            let explanation = state.service.retrieve(&request).await?;

            println!("{}", serde_json::to_string_pretty(&explanation)?);
            Ok(())
        }
    }
}
