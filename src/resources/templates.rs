use crate::client::{ApiResult, Executor, TermiiError};
use crate::domain::{SendWithTemplate, SentMessage};
use crate::transport::encode_send_with_template;

/// Messages rendered from a device template.
#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    executor: &'a Executor,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// `POST send/template`
    pub async fn send_message_with_template(
        self,
        request: SendWithTemplate,
    ) -> ApiResult<SentMessage> {
        let descriptor = encode_send_with_template(&request).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }
}
