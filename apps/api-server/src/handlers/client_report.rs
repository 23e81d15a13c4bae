//! Clipboard and share run in the browser. The client performs the action and
//! reports the outcome; this adapter replays that report through the ports so
//! the core applies the same success/failure rules as for a local device.

use async_trait::async_trait;
use rotta_core::ports::{ActionError, Clipboard, ShareLauncher};
use rotta_shared::dto::ActionReport;

pub struct ClientReport {
    report: ActionReport,
}

impl ClientReport {
    pub fn new(report: ActionReport) -> Self {
        Self { report }
    }

    fn outcome(&self) -> Result<(), ActionError> {
        if self.report.succeeded {
            Ok(())
        } else {
            Err(ActionError(self.report.error.clone().unwrap_or_else(|| {
                "client reported failure".to_string()
            })))
        }
    }
}

#[async_trait]
impl Clipboard for ClientReport {
    async fn write_text(&self, _text: &str) -> Result<(), ActionError> {
        self.outcome()
    }
}

#[async_trait]
impl ShareLauncher for ClientReport {
    async fn open(&self, url: &str) -> Result<(), ActionError> {
        tracing::debug!(%url, succeeded = self.report.succeeded, "Share reported by client");
        self.outcome()
    }
}
