//! Trait abstraction for enquiry delivery to enable mocking in tests

use crate::state::FormValues;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement returned when an enquiry was accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnquiryReceipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl EnquiryReceipt {
    pub fn new() -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for EnquiryReceipt {
    fn default() -> Self {
        Self::new()
    }
}

/// Why an enquiry could not be delivered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendError {
    #[error("enquiry rejected: {0}")]
    Rejected(String),
    /// The delivery task ended without reporting a result
    #[error("enquiry delivery was interrupted")]
    Interrupted,
}

/// Delivers a validated enquiry. Resolves once with success or failure.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnquirySender: Send + Sync {
    async fn send(&self, values: &FormValues) -> Result<EnquiryReceipt, SendError>;
}
