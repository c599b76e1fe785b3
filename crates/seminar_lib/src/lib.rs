//! The core crate of the seminar service.
//!
//! It contains the operations on seminars and their participants, the validation of the
//! input forms, and the shapes used to display the seminars. Every operation takes the
//! current user explicitly, so the crate can be used without any HTTP context.
//!
//! If you wish to see the crate of the server program itself, take a look
//! at the [`seminar_api`](../seminar_api_lib/index.html) package.

#![warn(missing_docs)]

mod env;
mod ids;
mod pool;

pub mod category;
pub mod error;
pub mod form;
pub mod must;
pub mod participant;
pub mod seminar;
pub mod time;
pub mod user;
pub mod view;

pub use entity::bounds;
pub use env::*;
pub use ids::*;
pub use pool::*;
