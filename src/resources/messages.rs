use crate::client::{ApiResult, Executor, TermiiError};
use crate::domain::{SendBulkMessage, SendMessage, SentMessage};
use crate::transport::{encode_send_bulk_message, encode_send_message};

/// Messages sent from an approved sender name.
#[derive(Debug, Clone, Copy)]
pub struct Messages<'a> {
    executor: &'a Executor,
}

impl<'a> Messages<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// Send one message (`POST sms/send`).
    pub async fn send_message(self, request: SendMessage) -> ApiResult<SentMessage> {
        let descriptor = encode_send_message(&request).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }

    /// Send the same message to several recipients (`POST sms/send/bulk`).
    pub async fn send_bulk_message(self, request: SendBulkMessage) -> ApiResult<SentMessage> {
        let descriptor = encode_send_bulk_message(&request).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }
}
