//! # Wert Session Client
//!
//! Creates payment sessions through `POST /api/v1/session` on the
//! Wert partner API. One request per call: no retries, no timeout.

use crate::config::WertConfig;
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, error, info, instrument};
use wert_core::{SessionError, SessionProvider, SessionRequest, SessionResult};

/// Session provider backed by the Wert partner API
pub struct WertSessionClient {
    config: WertConfig,
    client: Client,
}

impl WertSessionClient {
    /// Create a new client with its own connection pool
    pub fn new(config: WertConfig) -> SessionResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| SessionError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self::with_client(config, client))
    }

    /// Create a client around an existing `reqwest::Client`
    pub fn with_client(config: WertConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &WertConfig {
        &self.config
    }
}

#[async_trait]
impl SessionProvider for WertSessionClient {
    #[instrument(skip(self, request), fields(amount = %request.amount, currency = %request.currency))]
    async fn create_session(&self, request: &SessionRequest) -> SessionResult<serde_json::Value> {
        let signed = self
            .config
            .build_payload(request)
            .sign(&self.config.private_key)?;
        let body = serde_json::to_vec(&signed)?;

        debug!(
            "Creating Wert session: partner_id={}, wallets={}",
            signed.payload.partner_id,
            signed.payload.extra.wallets.len()
        );

        let response = self
            .client
            .post(self.config.session_url())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.config.auth_header())
            .body(body)
            .send()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| SessionError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Wert API error: status={}, body={}", status, text);
            return Err(SessionError::Upstream {
                status: status.as_u16(),
                body: text,
            });
        }

        let session: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
            SessionError::Serialization(format!("Failed to parse Wert response: {}", e))
        })?;

        info!("Created Wert session: status={}", status);

        Ok(session)
    }

    fn provider_name(&self) -> &'static str {
        "wert"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wert_core::{compute_hmac_sha256, Wallet, WalletList};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> WertSessionClient {
        let config = WertConfig::new("api-key", "01PARTNER", "private").with_api_base_url(server.uri());
        WertSessionClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_sends_signed_payload() {
        let server = MockServer::start().await;

        let unsigned = r#"{"partner_id":"01PARTNER","origin":"https://sandbox.wert.io","amount":10,"currency":"USD","extra":{"wallets":[{"name":"TT","network":"amoy","address":"0x0118E8e2FCb391bCeb110F62b5B7B963477C1E0d"},{"name":"ETH","network":"sepolia","address":"0x0118E8e2FCb391bCeb110F62b5B7B963477C1E0d"}]}}"#;
        let signature = compute_hmac_sha256("private", unsigned.as_bytes()).unwrap();

        let mut expected: serde_json::Value = serde_json::from_str(unsigned).unwrap();
        expected["signature"] = json!(signature);

        Mock::given(method("POST"))
            .and(path("/api/v1/session"))
            .and(header("authorization", "Bearer api-key"))
            .and(header("content-type", "application/json"))
            .and(body_json(&expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "sessionId": "abc" })))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .create_session(&SessionRequest::default())
            .await
            .unwrap();

        assert_eq!(body, json!({ "sessionId": "abc" }));
    }

    #[tokio::test]
    async fn test_response_is_returned_verbatim() {
        let server = MockServer::start().await;
        let reply = json!({
            "sessionId": "01H7",
            "requestId": "req-1",
            "nested": { "list": [1, 2, 3], "flag": true }
        });

        Mock::given(method("POST"))
            .and(path("/api/v1/session"))
            .respond_with(ResponseTemplate::new(201).set_body_json(reply.clone()))
            .mount(&server)
            .await;

        let body = client_for(&server)
            .create_session(&SessionRequest::new(50u64, "EUR"))
            .await
            .unwrap();

        assert_eq!(body, reply);
    }

    #[tokio::test]
    async fn test_configured_wallets_are_sent() {
        let server = MockServer::start().await;
        let wallets = WalletList::new().with_wallet(Wallet::new("USDC", "polygon", "0xfeed"));

        let requests = Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let config = WertConfig::new("k", "pid", "pk")
            .with_api_base_url(server.uri())
            .with_wallets(wallets);
        WertSessionClient::new(config)
            .unwrap()
            .create_session(&SessionRequest::new(7u64, "GBP"))
            .await
            .unwrap();

        let received = requests.received_requests().await;
        let sent: serde_json::Value = serde_json::from_slice(&received[0].body).unwrap();
        assert_eq!(sent["partner_id"], "pid");
        assert_eq!(sent["amount"], 7);
        assert_eq!(sent["currency"], "GBP");
        assert_eq!(
            sent["extra"]["wallets"],
            json!([{ "name": "USDC", "network": "polygon", "address": "0xfeed" }])
        );
    }

    #[tokio::test]
    async fn test_upstream_error_keeps_status_and_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_session(&SessionRequest::default())
            .await
            .unwrap_err();

        match err {
            SessionError::Upstream { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, "bad request");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_success_is_serialization_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_session(&SessionRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::Serialization(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_error() {
        let config = WertConfig::new("k", "pid", "pk").with_api_base_url("http://127.0.0.1:1");
        let err = WertSessionClient::new(config)
            .unwrap()
            .create_session(&SessionRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, SessionError::Network(_)));
    }
}
