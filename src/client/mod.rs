pub mod api;
pub mod transport;

pub use api::HibpClient;
pub use transport::{Payload, RestClient};
