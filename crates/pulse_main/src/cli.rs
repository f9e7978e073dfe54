use clap::{Parser, Subcommand};
use pulse_domain::ClientCode;

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Base url of the diagnostics backend.
    ///
    /// Overrides PULSE_API_URL and NEXT_PUBLIC_API_URL. Defaults to
    /// http://localhost:8000.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Mirror log output to stderr.
    #[arg(long, default_value_t = false, global = true)]
    pub verbose: bool,

    /// Skip the progress animation and the pause before results are shown.
    #[arg(long, default_value_t = false, global = true)]
    pub no_animation: bool,

    #[command(subcommand)]
    pub command: Option<TopLevelCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum TopLevelCommand {
    /// Print the client list and exit.
    Clients,

    /// Run diagnostics for one client and exit.
    Diagnose {
        /// Code of the client as shown by `pulse clients`
        client_code: ClientCode,
    },

    /// Show which backend is configured and whether it answers.
    Info,
}
