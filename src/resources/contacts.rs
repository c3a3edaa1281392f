use crate::client::{ApiResult, Executor, TermiiError};
use crate::domain::{Contact, ContactId, CreateContact, PhonebookId, StatusMessage};
use crate::transport::{encode_create_contact, encode_delete_contact, encode_fetch_contacts};

/// Contacts stored inside phonebooks.
#[derive(Debug, Clone, Copy)]
pub struct Contacts<'a> {
    executor: &'a Executor,
}

impl<'a> Contacts<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// `GET phonebooks/{phonebook_id}/contacts`
    pub async fn fetch_contacts(
        self,
        phonebook_id: &PhonebookId,
        page: Option<u32>,
    ) -> ApiResult<Vec<Contact>> {
        self.executor
            .call(encode_fetch_contacts(phonebook_id, page))
            .await
    }

    /// `POST phonebooks/{phonebook_id}/contacts`
    pub async fn create_contact(
        self,
        phonebook_id: &PhonebookId,
        contact: CreateContact,
    ) -> ApiResult<Contact> {
        let descriptor =
            encode_create_contact(phonebook_id, &contact).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }

    /// `DELETE phonebook/{contact_id}/contacts`
    pub async fn delete_contact(self, contact_id: &ContactId) -> ApiResult<StatusMessage> {
        self.executor.call(encode_delete_contact(contact_id)).await
    }
}
