use serde::Serialize;

use super::{RequestDescriptor, TransportError};
use crate::domain::{ContactId, CreateContact, PhonebookId, PhonebookPayload};

#[derive(Debug, Serialize)]
struct PhonebookWire<'a> {
    phonebook_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct CreateContactWire<'a> {
    phone_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    country_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    email_address: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    company: Option<&'a str>,
}

fn phonebook_body(payload: &PhonebookPayload) -> Result<serde_json::Value, TransportError> {
    Ok(serde_json::to_value(PhonebookWire {
        phonebook_name: &payload.phonebook_name,
        description: payload.description.as_deref(),
    })?)
}

pub fn encode_fetch_phonebooks(page: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("/phonebooks").page(page)
}

pub fn encode_create_phonebook(
    payload: &PhonebookPayload,
) -> Result<RequestDescriptor, TransportError> {
    Ok(RequestDescriptor::post("phonebooks").body(phonebook_body(payload)?))
}

pub fn encode_update_phonebook(
    id: &PhonebookId,
    payload: &PhonebookPayload,
) -> Result<RequestDescriptor, TransportError> {
    Ok(RequestDescriptor::patch(format!("phonebooks/{id}")).body(phonebook_body(payload)?))
}

pub fn encode_delete_phonebook(id: &PhonebookId) -> RequestDescriptor {
    RequestDescriptor::delete(format!("phonebooks/{id}"))
}

pub fn encode_fetch_contacts(phonebook: &PhonebookId, page: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get(format!("phonebooks/{phonebook}/contacts")).page(page)
}

pub fn encode_create_contact(
    phonebook: &PhonebookId,
    contact: &CreateContact,
) -> Result<RequestDescriptor, TransportError> {
    let wire = CreateContactWire {
        phone_number: &contact.phone_number,
        country_code: contact.country_code.as_deref(),
        email_address: contact.email_address.as_deref(),
        first_name: contact.first_name.as_deref(),
        last_name: contact.last_name.as_deref(),
        company: contact.company.as_deref(),
    };
    Ok(RequestDescriptor::post(format!("phonebooks/{phonebook}/contacts"))
        .body(serde_json::to_value(wire)?))
}

pub fn encode_delete_contact(id: &ContactId) -> RequestDescriptor {
    RequestDescriptor::delete(format!("phonebook/{id}/contacts"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::Method;

    #[test]
    fn encode_fetch_phonebooks_without_page() {
        let descriptor = encode_fetch_phonebooks(None);
        assert_eq!(descriptor.method, Method::Get);
        assert_eq!(descriptor.path, "/phonebooks");
        assert_eq!(descriptor.page, None);
    }

    #[test]
    fn encode_create_phonebook_skips_missing_description() {
        let descriptor = encode_create_phonebook(&PhonebookPayload::new("Friends")).unwrap();
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "phonebooks");
        assert_eq!(descriptor.body, Some(json!({"phonebook_name": "Friends"})));
    }

    #[test]
    fn encode_update_phonebook_patches_member() {
        let id = PhonebookId::new("pb1").unwrap();
        let payload = PhonebookPayload::new("Family").description("close family");
        let descriptor = encode_update_phonebook(&id, &payload).unwrap();
        assert_eq!(descriptor.method, Method::Patch);
        assert_eq!(descriptor.path, "phonebooks/pb1");
        assert_eq!(
            descriptor.body,
            Some(json!({"phonebook_name": "Family", "description": "close family"}))
        );
    }

    #[test]
    fn encode_delete_phonebook_has_no_body() {
        let descriptor = encode_delete_phonebook(&PhonebookId::new("pb1").unwrap());
        assert_eq!(descriptor.method, Method::Delete);
        assert_eq!(descriptor.path, "phonebooks/pb1");
        assert_eq!(descriptor.body, None);
    }

    #[test]
    fn encode_contacts_paths() {
        let phonebook = PhonebookId::new("pb1").unwrap();
        let fetch = encode_fetch_contacts(&phonebook, Some(2));
        assert_eq!(fetch.path, "phonebooks/pb1/contacts");
        assert_eq!(fetch.page, Some(2));

        let delete = encode_delete_contact(&ContactId::new("42").unwrap());
        assert_eq!(delete.method, Method::Delete);
        assert_eq!(delete.path, "phonebook/42/contacts");
    }

    #[test]
    fn encode_create_contact_body() {
        let phonebook = PhonebookId::new("pb1").unwrap();
        let contact = CreateContact {
            country_code: Some("234".to_owned()),
            first_name: Some("Ada".to_owned()),
            ..CreateContact::new("8123696237")
        };
        let descriptor = encode_create_contact(&phonebook, &contact).unwrap();
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "phonebooks/pb1/contacts");
        assert_eq!(
            descriptor.body,
            Some(json!({
                "phone_number": "8123696237",
                "country_code": "234",
                "first_name": "Ada"
            }))
        );
    }
}
