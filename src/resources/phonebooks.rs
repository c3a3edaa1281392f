use crate::client::{ApiResult, Executor, TermiiError};
use crate::domain::{Phonebook, PhonebookId, PhonebookPayload, StatusMessage};
use crate::transport::{
    encode_create_phonebook, encode_delete_phonebook, encode_fetch_phonebooks,
    encode_update_phonebook,
};

/// Phonebooks: named contact lists used as campaign audiences.
#[derive(Debug, Clone, Copy)]
pub struct Phonebooks<'a> {
    executor: &'a Executor,
}

impl<'a> Phonebooks<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// `GET /phonebooks`
    pub async fn fetch_phonebooks(self, page: Option<u32>) -> ApiResult<Vec<Phonebook>> {
        self.executor.call(encode_fetch_phonebooks(page)).await
    }

    /// `POST phonebooks`
    pub async fn create_phonebook(self, payload: PhonebookPayload) -> ApiResult<StatusMessage> {
        let descriptor = encode_create_phonebook(&payload).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }

    /// Rename or re-describe a phonebook (`PATCH phonebooks/{phonebook_id}`).
    pub async fn update_phonebook(
        self,
        phonebook_id: &PhonebookId,
        payload: PhonebookPayload,
    ) -> ApiResult<StatusMessage> {
        let descriptor =
            encode_update_phonebook(phonebook_id, &payload).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }

    /// `DELETE phonebooks/{phonebook_id}`
    pub async fn delete_phonebook(self, phonebook_id: &PhonebookId) -> ApiResult<StatusMessage> {
        self.executor
            .call(encode_delete_phonebook(phonebook_id))
            .await
    }
}
