//! The footy stats API library that the program uses.
//!
//! The content of this library is only made for the API program. Overall, it uses the
//! [`footy_lib`] crate as a main dependency.

mod env;
mod error;
mod http;
mod utils;

pub mod configure;

pub use env::ApiConfig;
pub use error::*;
pub use http::api_route;
