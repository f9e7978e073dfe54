use thiserror::Error;

use crate::ClientCode;

#[derive(Debug, Error)]
pub enum Error {
    #[error("No client selected for diagnostics")]
    NoClientSelected,

    #[error("Client not found: {0}")]
    ClientNotFound(ClientCode),

    #[error("Diagnostics already running for client {0}")]
    DiagnosticsInProgress(ClientCode),
}

pub type Result<A> = std::result::Result<A, Error>;
