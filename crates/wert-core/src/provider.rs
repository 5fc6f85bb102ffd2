//! # Session Provider Trait
//!
//! Seam between the HTTP handler and the payment provider integration.
//! The handler only talks to `dyn SessionProvider`; the Wert client is the
//! production implementation and tests can plug in a fixed one.

use crate::error::SessionResult;
use crate::session::SessionRequest;
use async_trait::async_trait;
use std::sync::Arc;

/// A provider that can open a payment session.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Create a session and return the provider's response body.
    ///
    /// A non-success answer from the provider is reported as
    /// [`SessionError::Upstream`](crate::SessionError::Upstream) carrying
    /// the original status and body text.
    async fn create_session(&self, request: &SessionRequest) -> SessionResult<serde_json::Value>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared provider (dynamic dispatch)
pub type BoxedSessionProvider = Arc<dyn SessionProvider>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use serde_json::json;

    struct EchoProvider;

    #[async_trait]
    impl SessionProvider for EchoProvider {
        async fn create_session(
            &self,
            request: &SessionRequest,
        ) -> SessionResult<serde_json::Value> {
            if request.currency == "XXX" {
                return Err(SessionError::Upstream {
                    status: 400,
                    body: "unsupported".into(),
                });
            }
            Ok(json!({ "amount": request.amount, "currency": request.currency }))
        }

        fn provider_name(&self) -> &'static str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_boxed_provider_dispatch() {
        let provider: BoxedSessionProvider = Arc::new(EchoProvider);
        assert_eq!(provider.provider_name(), "echo");

        let body = provider
            .create_session(&SessionRequest::default())
            .await
            .unwrap();
        assert_eq!(body, json!({ "amount": 10, "currency": "USD" }));

        let err = provider
            .create_session(&SessionRequest::new(1u64, "XXX"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
