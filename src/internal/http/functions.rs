pub mod build_http_client;

pub use build_http_client::{build_http_client, HttpClientConfig};
