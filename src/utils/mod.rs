pub mod http;

pub use http::{HttpClient, HttpResponse};
