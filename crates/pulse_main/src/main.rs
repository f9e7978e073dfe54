use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use pulse::{init_tracing, Cli, EnvironmentService, PulseInquire, UI};
use pulse_client::Client;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let env = EnvironmentService::new(cli.api_url.clone(), !cli.no_animation).get()?;
    let _guard = init_tracing(env.log_path(), cli.verbose)?;

    let client = Arc::new(Client::new(env.api_url.clone())?);
    let mut ui = UI::new(env, client, PulseInquire::new());

    if ui.run(cli.command).await {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
