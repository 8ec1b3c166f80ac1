//! Stand-in sender that waits and then accepts the enquiry

use super::traits::{EnquiryReceipt, EnquirySender, SendError};
use crate::state::FormValues;
use async_trait::async_trait;
use std::time::Duration;

/// Accepts every enquiry after a fixed delay, or rejects every one when
/// configured to fail.
#[derive(Debug, Clone)]
pub struct SimulatedSender {
    delay: Duration,
    fail: bool,
}

impl SimulatedSender {
    /// Delay applied when nothing is configured
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// A sender that rejects every enquiry after the delay
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSender {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl EnquirySender for SimulatedSender {
    async fn send(&self, values: &FormValues) -> Result<EnquiryReceipt, SendError> {
        tracing::debug!(
            "simulating delivery of {} filled fields",
            values.filled_count()
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.fail {
            return Err(SendError::Rejected("simulated failure".to_string()));
        }
        Ok(EnquiryReceipt::new())
    }
}
