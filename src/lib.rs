pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::DifyClient;
pub use config::Config;
pub use error::{ProbeError, Result};
pub use types::{ChatMessageRequest, ChatReply, ResponseMode};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
