//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{
    CreateContact, Media, PhonebookPayload, RequestSenderId, SendBulkMessage, SendCampaign,
    SendMessage, SendWithNumber, SendWithTemplate,
};
pub use response::{
    Balance, Campaign, CampaignDispatch, CampaignHistory, CampaignHistoryEntry, Contact,
    Phonebook, SenderIdEntry, SentMessage, StatusMessage,
};
pub use validation::ValidationError;
pub use value::{
    ApiKey, CampaignId, CampaignType, Channel, ContactId, MessageType, Money, PhoneNumber,
    PhonebookId, Recipient, SenderName,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_rejects_empty() {
        assert!(matches!(
            ApiKey::new("   "),
            Err(ValidationError::Empty {
                field: ApiKey::FIELD
            })
        ));
    }

    #[test]
    fn api_key_debug_is_redacted() {
        let key = ApiKey::new("abc123").unwrap();
        assert_eq!(key.as_str(), "abc123");
        assert!(!format!("{key:?}").contains("abc123"));
    }

    #[test]
    fn path_ids_trim_and_reject_empty() {
        assert_eq!(CampaignId::new(" c1 ").unwrap().as_str(), "c1");
        assert_eq!(PhonebookId::new("pb-9").unwrap().to_string(), "pb-9");
        assert!(matches!(
            ContactId::new(""),
            Err(ValidationError::Empty {
                field: ContactId::FIELD
            })
        ));
    }

    #[test]
    fn path_ids_reject_values_that_are_not_one_segment() {
        for input in ["c1?page=9", "../../get-balance", "..", ".", "a/b", "a#b", "a%2Fb", "a\\b"] {
            assert!(
                matches!(
                    CampaignId::new(input),
                    Err(ValidationError::InvalidPathSegment {
                        field: CampaignId::FIELD,
                        ..
                    })
                ),
                "{input} should be rejected"
            );
        }
        assert_eq!(ContactId::new("3647982").unwrap().as_str(), "3647982");
        assert_eq!(
            PhonebookId::new("f9c28de9-ab5a-4513-9c9f-338be8e785a8")
                .unwrap()
                .as_str(),
            "f9c28de9-ab5a-4513-9c9f-338be8e785a8"
        );
    }

    #[test]
    fn sender_name_rejects_empty() {
        assert!(SenderName::new(" ").is_err());
        assert_eq!(SenderName::new("Acme").unwrap().as_str(), "Acme");
    }

    #[test]
    fn phone_number_parses_with_region_and_trims() {
        let pn = PhoneNumber::parse(Some(phonenumber::country::Id::NG), " 07065250817 ").unwrap();
        assert_eq!(pn.raw(), "07065250817");
        assert_eq!(pn.e164(), "+2347065250817");
        assert_eq!(pn.country_code(), 234);
    }

    #[test]
    fn recipient_from_phone_number_drops_plus() {
        let pn = PhoneNumber::parse(None, "+2347065250817").unwrap();
        let recipient: Recipient = pn.into();
        assert_eq!(recipient.raw(), "2347065250817");
    }

    #[test]
    fn phone_number_rejects_garbage() {
        assert!(matches!(
            PhoneNumber::parse(None, "not a number"),
            Err(ValidationError::InvalidPhoneNumber { .. })
        ));
    }

    #[test]
    fn money_preserves_numeric_token_and_accepts_strings() {
        let numeric: Balance = serde_json::from_str(r#"{"balance": 10.50}"#).unwrap();
        assert_eq!(numeric.balance.as_str(), "10.50");

        let string: Balance =
            serde_json::from_str(r#"{"user": "Acme", "balance": "7.00", "currency": "NGN"}"#)
                .unwrap();
        assert_eq!(string.balance.into_string(), "7.00");
        assert_eq!(string.currency.as_deref(), Some("NGN"));
    }

    #[test]
    fn money_rejects_non_scalar_tokens() {
        assert!(serde_json::from_str::<Balance>(r#"{"balance": {"amount": 1}}"#).is_err());
    }

    #[test]
    fn enum_wire_values() {
        assert_eq!(Channel::default().as_str(), "generic");
        assert_eq!(Channel::WhatsApp.as_str(), "whatsapp");
        assert_eq!(MessageType::Unicode.as_str(), "unicode");
        assert_eq!(CampaignType::Personalized.as_str(), "personalized");
    }
}
