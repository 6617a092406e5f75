mod config;
mod http;
mod views;

use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::DEMO_ROSTER;
use tracing::info;

use crate::{
    config::AppConfig,
    http::{AppState, ServeConfig},
};

#[derive(Parser, Debug)]
#[command(name = "employee-registry", version, about = "Employee records over HTML forms")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve(ServeCommand),
    /// Print the demo roster seeded at startup.
    Roster,
}

#[derive(Args, Debug)]
struct ServeCommand {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: std::net::IpAddr,
    #[arg(long, env = "PORT", default_value_t = 7000)]
    port: u16,
}

impl From<ServeCommand> for ServeConfig {
    fn from(value: ServeCommand) -> Self {
        ServeConfig::new(value.host, value.port)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let app_config = Arc::new(AppConfig::load()?);
    init_tracing(ObsConfig::from_env(app_config.service_name.clone()))?;
    match cli.command {
        Command::Serve(cmd) => run_server(cmd, app_config).await,
        Command::Roster => {
            print_roster();
            Ok(())
        }
    }
}

fn print_roster() {
    for (name, role, salary) in DEMO_ROSTER {
        println!("{name}\t{role}\t{salary:.2}");
    }
}

async fn run_server(cmd: ServeCommand, config: Arc<AppConfig>) -> Result<()> {
    let state = AppState::new(config.clone());
    if config.seed_demo_data {
        let seeded = state.employees.seed_demo_data()?;
        info!(seeded, "demo roster loaded");
    }
    http::serve(cmd.into(), state).await
}
