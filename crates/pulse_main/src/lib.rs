mod banner;
mod cli;
mod env;
mod input;
mod log;
mod state;
mod ui;

pub use cli::{Cli, TopLevelCommand};
pub use env::{Environment, EnvironmentService, DEFAULT_API_URL};
pub use input::{Action, InputService, PulseInquire};
pub use log::{init_tracing, Guard};
pub use state::DashboardState;
pub use ui::{RunOutcome, UI};
