//! # Breach Check
//!
//! A typed client for the Have I Been Pwned v3 API plus a batch runner
//! that checks a file of email addresses against the breach database.
//!
//! ## Architecture
//!
//! - `utils::http`: GET-only libcurl wrapper
//! - `client::transport`: base URL + auth headers + the 404-is-absent policy
//! - `client::api`: one typed method per API endpoint
//! - `runner`: email extraction, sequential checks, report formatting
//!
//! Not-found is never an error here: an email with no breach data is a
//! successful check with an empty result.
//!
//! ## Example
//!
//! ```rust,no_run
//! use breach_check::client::HibpClient;
//! use breach_check::core::Config;
//!
//! # async fn run() -> breach_check::Result<()> {
//! let config = Config::from_env()?;
//! let client = HibpClient::new(&config);
//!
//! if let Some(breaches) = client.get_breaches_for_account("test@example.com", true, None, true).await? {
//!     println!("Found {} breaches", breaches.names().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod core;
pub mod runner;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    AccountBreaches, Breach, BreachCheckError, BreachLookup, BreachName, CheckStatus, Config,
    EmailCheckResult, Paste, Result, SubscribedDomain,
};

pub use client::HibpClient;
pub use runner::{
    extract_emails, format_result, run_batch, BatchReporter, BatchSummary, SilentReporter,
};
