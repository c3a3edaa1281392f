use std::fmt;

use phonenumber::country;
use serde::Deserialize;
use serde::de::Error as DeError;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Termii API key (`api_key`).
///
/// Invariant: non-empty after trimming. The `Debug` output never contains the key.
pub struct ApiKey(String);

impl ApiKey {
    /// Field name used by Termii (`api_key`), both in query strings and JSON bodies.
    pub const FIELD: &'static str = "api_key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

// Identifiers interpolated into URL paths as exactly one segment. Empty values,
// dot segments and URL delimiters would address a different endpoint.
fn is_single_path_segment(value: &str) -> bool {
    value != "."
        && value != ".."
        && !value.contains(['/', '\\', '?', '#', '%'])
}

macro_rules! path_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            #[doc = concat!("Field name used by Termii (`", $field, "`).")]
            pub const FIELD: &'static str = $field;

            #[doc = concat!("Create a validated [`", stringify!($name), "`].")]
            pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
                let value = value.into();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(ValidationError::Empty { field: Self::FIELD });
                }
                if !is_single_path_segment(trimmed) {
                    return Err(ValidationError::InvalidPathSegment {
                        field: Self::FIELD,
                        input: trimmed.to_owned(),
                    });
                }
                Ok(Self(trimmed.to_owned()))
            }

            /// Borrow the validated identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

path_id!(
    /// Campaign identifier returned by `sms/campaigns`.
    CampaignId,
    "campaign_id"
);

path_id!(
    /// Phonebook identifier returned by `phonebooks`.
    PhonebookId,
    "phonebook_id"
);

path_id!(
    /// Contact identifier returned by `phonebooks/{phonebook_id}/contacts`.
    ContactId,
    "contact_id"
);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender name a message is sent from (`from`).
///
/// Invariant: non-empty after trimming. The name must be approved on your Termii account.
pub struct SenderName(String);

impl SenderName {
    /// Field name used by Termii (`from`).
    pub const FIELD: &'static str = "from";

    /// Create a validated [`SenderName`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sender name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Phone number as sent to Termii (`to`).
///
/// Termii expects international format without the leading `+` (`2347065250817`).
/// This type only trims; parse into [`PhoneNumber`] and convert it when you want
/// normalization.
pub struct Recipient(String);

impl Recipient {
    /// Field name used by Termii (`to`).
    pub const FIELD: &'static str = "to";

    /// Create a validated (non-empty) recipient.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw (trimmed) value as sent to Termii.
    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for Recipient {
    /// Use the E.164 digits without the `+` prefix.
    fn from(value: PhoneNumber) -> Self {
        Self(value.e164.trim_start_matches('+').to_owned())
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Equality and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Field name used by Termii (`to`).
    pub const FIELD: &'static str = "to";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;
        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber { input: raw });
        }

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation (with the `+`).
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// Country calling code, as Termii expects in `country_code` fields.
    pub fn country_code(&self) -> u16 {
        self.parsed.code().value()
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Route a message is delivered through (`channel`).
pub enum Channel {
    /// Promotional route; not delivered to DND numbers.
    #[default]
    Generic,
    /// Transactional route, delivered to DND numbers.
    Dnd,
    /// WhatsApp delivery.
    WhatsApp,
}

impl Channel {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Dnd => "dnd",
            Self::WhatsApp => "whatsapp",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Message encoding (`type` / `message_type`).
pub enum MessageType {
    #[default]
    Plain,
    Unicode,
    Voice,
}

impl MessageType {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Unicode => "unicode",
            Self::Voice => "voice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Campaign kind (`campaign_type`).
pub enum CampaignType {
    #[default]
    Regular,
    /// Message text contains per-contact placeholders.
    Personalized,
}

impl CampaignType {
    /// Wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Personalized => "personalized",
        }
    }
}

/// Money-like value returned by Termii as either JSON string or JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`10.50` remains `"10.50"` instead of becoming `"10.5"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Money(String);

impl Money {
    /// Borrow the amount exactly as the API sent it.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected money field to be JSON string or number",
            )),
        }
    }
}
