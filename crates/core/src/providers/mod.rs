pub mod endpoint;
pub mod http;
pub mod traits;
