//! The library of the seminar API program.
//!
//! It contains the HTTP routes of the service, the mapping of the [`seminar_lib`] errors to
//! HTTP responses, and the configuration of the program. The server itself is started by the
//! binary, which uses the [`configure`] function of this library.

pub mod auth;
pub mod configure;
pub mod http;

mod env;
mod error;
mod utils;

pub use configure::configure;
pub use env::*;
pub use error::*;
pub use utils::*;
