mod client;
mod confidence;
mod error;
mod product;
mod recommendation;
mod report;
mod service;

pub use client::*;
pub use confidence::*;
pub use error::*;
pub use product::*;
pub use recommendation::*;
pub use report::*;
pub use service::*;
