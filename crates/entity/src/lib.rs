//! The sea-orm entities of the seminar database.
//!
//! The column sizes of the text fields are taken from the [`bounds`] module, which is
//! shared with the validation of the input forms.

mod entities;
pub use entities::*;

pub mod bounds;
