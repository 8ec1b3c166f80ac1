//! Form domain layer
//!
//! Field identifiers and values, constraint checking, and the contact form
//! with its submission lifecycle.

mod contact_form;
mod field;
mod validation;

pub use contact_form::*;
pub use field::*;
pub use validation::*;
