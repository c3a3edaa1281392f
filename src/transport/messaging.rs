use std::collections::BTreeMap;

use serde::Serialize;

use super::{RequestDescriptor, TransportError};
use crate::domain::{
    RequestSenderId, SendBulkMessage, SendMessage, SendWithNumber, SendWithTemplate,
};

#[derive(Debug, Serialize)]
struct MediaWire<'a> {
    url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    caption: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct SendMessageWire<'a> {
    to: &'a str,
    from: &'a str,
    sms: &'a str,
    #[serde(rename = "type")]
    message_type: &'static str,
    channel: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    media: Option<MediaWire<'a>>,
}

#[derive(Debug, Serialize)]
struct SendBulkMessageWire<'a> {
    to: Vec<&'a str>,
    from: &'a str,
    sms: &'a str,
    #[serde(rename = "type")]
    message_type: &'static str,
    channel: &'static str,
}

#[derive(Debug, Serialize)]
struct RequestSenderIdWire<'a> {
    sender_id: &'a str,
    usecase: &'a str,
    company: &'a str,
}

#[derive(Debug, Serialize)]
struct SendWithNumberWire<'a> {
    to: &'a str,
    sms: &'a str,
}

#[derive(Debug, Serialize)]
struct SendWithTemplateWire<'a> {
    phone_number: &'a str,
    device_id: &'a str,
    template_id: &'a str,
    data: &'a BTreeMap<String, String>,
}

pub fn encode_send_message(request: &SendMessage) -> Result<RequestDescriptor, TransportError> {
    let wire = SendMessageWire {
        to: request.to.raw(),
        from: request.from.as_str(),
        sms: &request.sms,
        message_type: request.message_type.as_str(),
        channel: request.channel.as_str(),
        media: request.media.as_ref().map(|media| MediaWire {
            url: &media.url,
            caption: media.caption.as_deref(),
        }),
    };
    Ok(RequestDescriptor::post("sms/send").body(serde_json::to_value(wire)?))
}

pub fn encode_send_bulk_message(
    request: &SendBulkMessage,
) -> Result<RequestDescriptor, TransportError> {
    let wire = SendBulkMessageWire {
        to: request.to.iter().map(|to| to.raw()).collect(),
        from: request.from.as_str(),
        sms: &request.sms,
        message_type: request.message_type.as_str(),
        channel: request.channel.as_str(),
    };
    Ok(RequestDescriptor::post("sms/send/bulk").body(serde_json::to_value(wire)?))
}

pub fn encode_fetch_sender_ids(page: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("sender-id").page(page)
}

pub fn encode_request_sender_id(
    request: &RequestSenderId,
) -> Result<RequestDescriptor, TransportError> {
    let wire = RequestSenderIdWire {
        sender_id: request.sender_id.as_str(),
        usecase: &request.usecase,
        company: &request.company,
    };
    Ok(RequestDescriptor::post("sender-id/request").body(serde_json::to_value(wire)?))
}

pub fn encode_send_with_number(
    request: &SendWithNumber,
) -> Result<RequestDescriptor, TransportError> {
    let wire = SendWithNumberWire {
        to: request.to.raw(),
        sms: &request.sms,
    };
    Ok(RequestDescriptor::post("sms/number/send").body(serde_json::to_value(wire)?))
}

pub fn encode_send_with_template(
    request: &SendWithTemplate,
) -> Result<RequestDescriptor, TransportError> {
    let wire = SendWithTemplateWire {
        phone_number: request.phone_number.raw(),
        device_id: &request.device_id,
        template_id: &request.template_id,
        data: &request.data,
    };
    Ok(RequestDescriptor::post("send/template").body(serde_json::to_value(wire)?))
}
