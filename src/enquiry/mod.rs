//! Enquiry delivery: the send capability used by the contact form

mod simulated;
mod traits;

pub use simulated::SimulatedSender;
pub use traits::{EnquiryReceipt, EnquirySender, SendError};

#[cfg(test)]
pub use traits::MockEnquirySender;
