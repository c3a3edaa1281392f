use crate::client::{ApiResult, Executor, TermiiError};
use crate::domain::{SendWithNumber, SentMessage};
use crate::transport::encode_send_with_number;

/// Messages sent from an auto-generated numeric sender.
#[derive(Debug, Clone, Copy)]
pub struct Numbers<'a> {
    executor: &'a Executor,
}

impl<'a> Numbers<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// `POST sms/number/send`
    pub async fn send_message_with_number(self, request: SendWithNumber) -> ApiResult<SentMessage> {
        let descriptor = encode_send_with_number(&request).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }
}
