use crate::client::{ApiResult, Executor, TermiiError};
use crate::domain::{Campaign, CampaignDispatch, CampaignHistory, CampaignId, SendCampaign};
use crate::transport::{encode_fetch_campaign_history, encode_fetch_campaigns, encode_send_campaign};

/// Campaigns: messages sent to every contact of a phonebook.
#[derive(Debug, Clone, Copy)]
pub struct Campaigns<'a> {
    executor: &'a Executor,
}

impl<'a> Campaigns<'a> {
    pub(crate) fn new(executor: &'a Executor) -> Self {
        Self { executor }
    }

    /// List campaigns (`GET sms/campaigns`).
    pub async fn fetch_campaigns(self, page: Option<u32>) -> ApiResult<Vec<Campaign>> {
        self.executor.call(encode_fetch_campaigns(page)).await
    }

    /// Delivery history of one campaign (`GET sms/campaigns/{campaign_id}`).
    pub async fn fetch_campaign_history(
        self,
        campaign_id: &CampaignId,
        page: Option<u32>,
    ) -> ApiResult<CampaignHistory> {
        self.executor
            .call(encode_fetch_campaign_history(campaign_id, page))
            .await
    }

    /// Send or schedule a campaign (`POST sms/campaigns/send`).
    pub async fn send_campaign(self, request: SendCampaign) -> ApiResult<CampaignDispatch> {
        let descriptor = encode_send_campaign(&request).map_err(TermiiError::from)?;
        self.executor.call(descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ErrorKind;
    use crate::client::testing::{FakeTransport, make_client, pairs, query};
    use crate::domain::{PhonebookId, SenderName};
    use crate::transport::Method;

    use super::*;

    #[tokio::test]
    async fn fetch_campaign_history_returns_data_unchanged() {
        let transport = FakeTransport::new(200, r#"{"data": {"history": []}}"#);
        let client = make_client(transport.clone());

        let history = client
            .campaigns()
            .fetch_campaign_history(&CampaignId::new("c1").unwrap(), None)
            .await
            .unwrap();
        assert_eq!(history, CampaignHistory { history: vec![] });

        let request = transport.last_request();
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.url.path(), "/api/sms/campaigns/c1");
        assert_eq!(query(&request), pairs(&[("api_key", "abc123")]));
    }

    #[tokio::test]
    async fn fetch_campaigns_passes_page_as_query_parameter() {
        let json = r#"
        {
          "data": [
            {
              "campaign_id": "C1",
              "phone_book": "Friends",
              "sender": "Acme",
              "camp_type": "regular",
              "channel": "generic",
              "total_recipient": 3,
              "status": "completed"
            }
          ]
        }
        "#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let campaigns = client.campaigns().fetch_campaigns(Some(2)).await.unwrap();
        assert_eq!(campaigns.len(), 1);
        assert_eq!(campaigns[0].campaign_id, "C1");
        assert_eq!(campaigns[0].total_recipient, Some(3));

        let request = transport.last_request();
        assert_eq!(request.url.path(), "/api/sms/campaigns");
        assert_eq!(
            query(&request),
            pairs(&[("api_key", "abc123"), ("page", "2")])
        );
    }

    #[tokio::test]
    async fn send_campaign_posts_payload_with_api_key() {
        let json = r#"{"data": {"message": "Your campaign has been scheduled", "campaignId": "C2", "status": "success"}}"#;
        let transport = FakeTransport::new(200, json);
        let client = make_client(transport.clone());

        let request = SendCampaign::new(
            "234",
            SenderName::new("Acme").unwrap(),
            "Big sale",
            PhonebookId::new("pb1").unwrap(),
        );
        let dispatch = client.campaigns().send_campaign(request).await.unwrap();
        assert_eq!(dispatch.campaign_id.as_deref(), Some("C2"));
        assert_eq!(dispatch.status.as_deref(), Some("success"));

        let sent = transport.last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.url.path(), "/api/sms/campaigns/send");
        let body = sent.body.unwrap();
        assert_eq!(body["api_key"], "abc123");
        assert_eq!(body["phonebook_id"], "pb1");
    }

    #[tokio::test]
    async fn fetch_campaign_history_maps_http_error_to_value() {
        let transport = FakeTransport::new(401, r#"{"message": "Unauthorized"}"#);
        let client = make_client(transport);

        let err = client
            .campaigns()
            .fetch_campaign_history(&CampaignId::new("c1").unwrap(), Some(1))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Http);
        assert_eq!(err.status, Some(401));
        assert_eq!(err.body.as_deref(), Some(r#"{"message": "Unauthorized"}"#));
    }

    #[tokio::test]
    async fn fetch_campaigns_maps_connectivity_error_to_value() {
        let client = make_client(FakeTransport::unreachable());

        let err = client.campaigns().fetch_campaigns(None).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Transport);
        assert_eq!(err.status, None);
        assert!(!err.message.is_empty());
    }

    #[tokio::test]
    async fn repeated_fetch_is_idempotent() {
        let transport = FakeTransport::new(
            200,
            r#"{"data": {"history": [{"receiver": "2347065250817", "status": "Delivered"}]}}"#,
        );
        let client = make_client(transport.clone());
        let id = CampaignId::new("c1").unwrap();

        let first = client
            .campaigns()
            .fetch_campaign_history(&id, None)
            .await
            .unwrap();
        let second = client
            .campaigns()
            .fetch_campaign_history(&id, None)
            .await
            .unwrap();
        assert_eq!(first, second);
        assert_eq!(first.history[0].status.as_deref(), Some("Delivered"));
        assert_eq!(transport.request_count(), 2);
    }
}
