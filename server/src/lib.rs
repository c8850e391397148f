//! TokenLens server library: configuration, authentication, and backend state.

pub mod config;
pub mod hf_auth;
pub mod state;

pub use config::{load_backends, BackendsFile, CliArgs};
pub use hf_auth::{read_token, report_hub_auth};
pub use state::AppState;
