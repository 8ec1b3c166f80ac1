//! Form rendering module
//!
//! - `field_renderer`: a single bordered input with its label and error
//! - `contact_form`: the enquiry inputs and the submit button

mod contact_form;
mod field_renderer;

pub use contact_form::draw as draw_contact_form;
