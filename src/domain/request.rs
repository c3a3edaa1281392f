use std::collections::BTreeMap;

use crate::domain::value::{
    CampaignType, Channel, MessageType, PhonebookId, Recipient, SenderName,
};

/// Attachment for WhatsApp messages (`media`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    pub url: String,
    pub caption: Option<String>,
}

/// Single message for `sms/send`.
#[derive(Debug, Clone)]
pub struct SendMessage {
    pub to: Recipient,
    pub from: SenderName,
    pub sms: String,
    pub message_type: MessageType,
    pub channel: Channel,
    pub media: Option<Media>,
}

impl SendMessage {
    /// Plain text over the generic channel.
    pub fn new(to: Recipient, from: SenderName, sms: impl Into<String>) -> Self {
        Self {
            to,
            from,
            sms: sms.into(),
            message_type: MessageType::default(),
            channel: Channel::default(),
            media: None,
        }
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }
}

/// Same text to many recipients via `sms/send/bulk`.
#[derive(Debug, Clone)]
pub struct SendBulkMessage {
    pub to: Vec<Recipient>,
    pub from: SenderName,
    pub sms: String,
    pub message_type: MessageType,
    pub channel: Channel,
}

impl SendBulkMessage {
    pub fn new(to: Vec<Recipient>, from: SenderName, sms: impl Into<String>) -> Self {
        Self {
            to,
            from,
            sms: sms.into(),
            message_type: MessageType::default(),
            channel: Channel::default(),
        }
    }

    pub fn channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    pub fn message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }
}

/// Request a new sender name (`sender-id/request`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSenderId {
    pub sender_id: SenderName,
    /// Sample of the message that will be sent with this sender name.
    pub usecase: String,
    pub company: String,
}

/// Message sent from an auto-generated numeric sender (`sms/number/send`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendWithNumber {
    pub to: Recipient,
    pub sms: String,
}

/// Message rendered from a device template (`send/template`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendWithTemplate {
    pub phone_number: Recipient,
    pub device_id: String,
    pub template_id: String,
    /// Values substituted into the template placeholders.
    pub data: BTreeMap<String, String>,
}

/// Name and description of a phonebook, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonebookPayload {
    pub phonebook_name: String,
    pub description: Option<String>,
}

impl PhonebookPayload {
    pub fn new(phonebook_name: impl Into<String>) -> Self {
        Self {
            phonebook_name: phonebook_name.into(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// New contact inside a phonebook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateContact {
    pub phone_number: String,
    pub country_code: Option<String>,
    pub email_address: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
}

impl CreateContact {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
            ..Default::default()
        }
    }
}

/// Campaign sent to every contact of a phonebook (`sms/campaigns/send`).
#[derive(Debug, Clone)]
pub struct SendCampaign {
    pub country_code: String,
    pub sender_id: SenderName,
    pub message: String,
    pub channel: Channel,
    pub message_type: MessageType,
    pub phonebook_id: PhonebookId,
    pub campaign_type: CampaignType,
    pub delimiter: Option<String>,
    pub remove_duplicate: bool,
    /// Schedule time formatted as Termii expects (`30-06-2021 6:00`).
    pub schedule_time: Option<String>,
}

impl SendCampaign {
    pub fn new(
        country_code: impl Into<String>,
        sender_id: SenderName,
        message: impl Into<String>,
        phonebook_id: PhonebookId,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            sender_id,
            message: message.into(),
            channel: Channel::default(),
            message_type: MessageType::default(),
            phonebook_id,
            campaign_type: CampaignType::default(),
            delimiter: None,
            remove_duplicate: true,
            schedule_time: None,
        }
    }
}
