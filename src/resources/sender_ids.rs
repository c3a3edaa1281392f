use crate::client::{ApiResult, Executor, TermiiError};
use crate::domain::{RequestSenderId, SenderIdEntry, StatusMessage};
use crate::transport::{encode_fetch_sender_ids, encode_request_sender_id};

/// Sender names registered on the account.
#[derive(Debug, Clone, Copy)]
pub struct SenderIds<'a> {
    executor: &'a Executor,
}

impl<'a> SenderIds<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// List sender names and their approval status (`GET sender-id`).
    pub async fn fetch_sender_ids(self, page: Option<u32>) -> ApiResult<Vec<SenderIdEntry>> {
        self.executor.call(encode_fetch_sender_ids(page)).await
    }

    /// Ask Termii to approve a new sender name (`POST sender-id/request`).
    pub async fn request_sender_id(self, request: RequestSenderId) -> ApiResult<StatusMessage> {
        let descriptor = encode_request_sender_id(&request).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }
}
