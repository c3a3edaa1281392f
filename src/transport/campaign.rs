use serde::Serialize;

use super::{RequestDescriptor, TransportError};
use crate::domain::{CampaignId, SendCampaign};

#[derive(Debug, Serialize)]
struct SendCampaignWire<'a> {
    country_code: &'a str,
    sender_id: &'a str,
    message: &'a str,
    channel: &'static str,
    message_type: &'static str,
    phonebook_id: &'a str,
    campaign_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    delimiter: Option<&'a str>,
    remove_duplicate: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_sms_status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    schedule_time: Option<&'a str>,
}

pub fn encode_fetch_campaigns(page: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get("sms/campaigns").page(page)
}

pub fn encode_fetch_campaign_history(id: &CampaignId, page: Option<u32>) -> RequestDescriptor {
    RequestDescriptor::get(format!("sms/campaigns/{id}")).page(page)
}

pub fn encode_send_campaign(request: &SendCampaign) -> Result<RequestDescriptor, TransportError> {
    let wire = SendCampaignWire {
        country_code: &request.country_code,
        sender_id: request.sender_id.as_str(),
        message: &request.message,
        channel: request.channel.as_str(),
        message_type: request.message_type.as_str(),
        phonebook_id: request.phonebook_id.as_str(),
        campaign_type: request.campaign_type.as_str(),
        delimiter: request.delimiter.as_deref(),
        remove_duplicate: if request.remove_duplicate { "yes" } else { "no" },
        schedule_sms_status: request.schedule_time.as_ref().map(|_| "scheduled"),
        schedule_time: request.schedule_time.as_deref(),
    };
    Ok(RequestDescriptor::post("sms/campaigns/send").body(serde_json::to_value(wire)?))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::domain::{CampaignType, PhonebookId, SenderName};
    use crate::transport::Method;

    #[test]
    fn encode_fetch_campaigns_passes_page_through() {
        let descriptor = encode_fetch_campaigns(Some(2));
        assert_eq!(descriptor.method, Method::Get);
        assert_eq!(descriptor.path, "sms/campaigns");
        assert_eq!(descriptor.page, Some(2));
    }

    #[test]
    fn encode_fetch_campaign_history_interpolates_id() {
        let descriptor = encode_fetch_campaign_history(&CampaignId::new("c1").unwrap(), None);
        assert_eq!(descriptor.method, Method::Get);
        assert_eq!(descriptor.path, "sms/campaigns/c1");
        assert_eq!(descriptor.page, None);
        assert_eq!(descriptor.body, None);
    }

    #[test]
    fn encode_send_campaign_immediate() {
        let request = SendCampaign::new(
            "234",
            SenderName::new("Acme").unwrap(),
            "Big sale today",
            PhonebookId::new("pb1").unwrap(),
        );
        let descriptor = encode_send_campaign(&request).unwrap();
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "sms/campaigns/send");
        assert_eq!(
            descriptor.body,
            Some(json!({
                "country_code": "234",
                "sender_id": "Acme",
                "message": "Big sale today",
                "channel": "generic",
                "message_type": "plain",
                "phonebook_id": "pb1",
                "campaign_type": "regular",
                "remove_duplicate": "yes"
            }))
        );
    }

    #[test]
    fn encode_send_campaign_scheduled_personalized() {
        let mut request = SendCampaign::new(
            "234",
            SenderName::new("Acme").unwrap(),
            "Hi {first_name}",
            PhonebookId::new("pb1").unwrap(),
        );
        request.campaign_type = CampaignType::Personalized;
        request.delimiter = Some(",".to_owned());
        request.remove_duplicate = false;
        request.schedule_time = Some("30-06-2026 6:00".to_owned());

        let body = encode_send_campaign(&request).unwrap().body.unwrap();
        assert_eq!(body["campaign_type"], "personalized");
        assert_eq!(body["delimiter"], ",");
        assert_eq!(body["remove_duplicate"], "no");
        assert_eq!(body["schedule_sms_status"], "scheduled");
        assert_eq!(body["schedule_time"], "30-06-2026 6:00");
    }
}
