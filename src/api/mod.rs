//! HaloPSA REST API module
//!
//! Token lifecycle, authenticated REST and report calls, and read-only
//! navigation of the bundled API description document.

pub mod auth;
pub mod client;
pub mod constants;
pub mod error;
pub mod metadata;
pub mod models;

pub use auth::{Clock, SystemClock, TokenManager};
pub use client::HaloClient;
pub use error::{Failure, HaloError};
pub use metadata::{ApiDocument, DetailOptions, DocumentSource, FileDocument, InlineDocument};
pub use models::{ApiResponse, TokenInfo};
pub use reqwest::Method;
