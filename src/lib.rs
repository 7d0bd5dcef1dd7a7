pub mod api;
pub mod config;

pub use api::{HaloClient, HaloError};
pub use config::HaloConfig;
