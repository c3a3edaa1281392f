//! Typed success shapes, decoded from the `data` member of the response envelope.
//!
//! Fields the API does not always send are `Option`/defaulted; unknown fields are ignored.

use serde::Deserialize;

use crate::domain::value::Money;

/// Result of a message dispatch (`sms/send`, `sms/send/bulk`, `sms/number/send`, `send/template`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SentMessage {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub balance: Option<Money>,
    #[serde(default)]
    pub user: Option<String>,
}

/// Acknowledgement returned by write operations that carry no entity.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SenderIdEntry {
    pub sender_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub usecase: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phonebook {
    pub id: String,
    #[serde(default, alias = "phonebook_name")]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub total_number_of_contacts: Option<u64>,
    #[serde(default)]
    pub date_created: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub id: serde_json::Value,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub create_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Campaign {
    pub campaign_id: String,
    #[serde(default)]
    pub phone_book: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub camp_type: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub total_recipient: Option<u64>,
    #[serde(default)]
    pub run_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Per-recipient delivery history of one campaign.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CampaignHistory {
    #[serde(default)]
    pub history: Vec<CampaignHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CampaignHistoryEntry {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub receiver: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub amount: Option<Money>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_created: Option<String>,
}

/// Acknowledgement of `sms/campaigns/send`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CampaignDispatch {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, rename = "campaignId")]
    pub campaign_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Account balance (`get-balance`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Balance {
    #[serde(default)]
    pub user: Option<String>,
    pub balance: Money,
    #[serde(default)]
    pub currency: Option<String>,
}
