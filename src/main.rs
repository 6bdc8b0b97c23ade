use carnet::cli::{Cli, Commands};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carnet=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init { path, name }) => {
            carnet::cli::init::run(path, name).await?;
        }
        Some(Commands::Serve { host, port }) => {
            carnet::cli::serve::run(&cli.config, host, port).await?;
        }
        Some(Commands::Migrate { command }) => {
            carnet::cli::migrate::run(&cli.config, command).await?;
        }
        Some(Commands::Post { command }) => {
            carnet::cli::post::run(&cli.config, command).await?;
        }
        Some(Commands::Category { command }) => {
            carnet::cli::category::run(&cli.config, command).await?;
        }
        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
        }
    }

    Ok(())
}
