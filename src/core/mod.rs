pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::Config;
pub use error::{BreachCheckError, Result};
pub use models::{
    AccountBreaches, Breach, BreachName, CheckStatus, EmailCheckResult, Paste, SubscribedDomain,
};
pub use traits::BreachLookup;
