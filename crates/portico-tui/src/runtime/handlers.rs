//! Effect handlers for the TUI runtime.
//!
//! Handlers are pure async functions that return `UiEvent`. The runtime
//! spawns them and sends results to the inbox. They perform I/O but never
//! mutate state directly.

use std::sync::Arc;
use std::time::Duration;

use portico_core::client::{AuthClient, LoginRequest, SignupRequest, SubmitOutcome};
use tokio_util::sync::CancellationToken;

use crate::alert::AlertId;
use crate::events::UiEvent;
use crate::form::{LoginFields, SignupFields};

/// Alert message when a login fails without server-provided text.
const LOGIN_FALLBACK: &str = "Login failed";
/// Alert message when a signup fails without server-provided text.
const SIGNUP_FALLBACK: &str = "Signup failed";

/// Submits login credentials and maps the outcome to a result event.
///
/// Rejections surface the server's message when it sent one; rejections
/// without a message and transport failures surface the fallback.
pub async fn submit_login(client: Arc<AuthClient>, fields: LoginFields) -> UiEvent {
    let request = LoginRequest {
        email: fields.email,
        password: fields.password,
    };
    let result = match client.login(&request).await {
        Ok(SubmitOutcome::Accepted) => Ok(()),
        Ok(SubmitOutcome::Rejected { message }) => {
            Err(message.unwrap_or_else(|| LOGIN_FALLBACK.to_string()))
        }
        Err(error) => {
            tracing::warn!(error = %error, "login request failed");
            Err(LOGIN_FALLBACK.to_string())
        }
    };
    UiEvent::LoginResult { result }
}

/// Submits a signup registration and maps the outcome to a result event.
pub async fn submit_signup(client: Arc<AuthClient>, fields: SignupFields) -> UiEvent {
    let request = SignupRequest {
        username: fields.username,
        email: fields.email,
        password: fields.password,
    };
    let result = match client.signup(&request).await {
        Ok(SubmitOutcome::Accepted) => Ok(()),
        Ok(SubmitOutcome::Rejected { message }) => {
            Err(message.unwrap_or_else(|| SIGNUP_FALLBACK.to_string()))
        }
        Err(error) => {
            tracing::warn!(error = %error, "signup request failed");
            Err(SIGNUP_FALLBACK.to_string())
        }
    };
    UiEvent::SignupResult { result }
}

/// Waits out an alert's time-to-live, unless cancelled first.
///
/// Returns the expiry event for the alert this timer was scheduled for;
/// `None` when the alert was replaced or dismissed in the meantime.
pub async fn alert_expiry(
    id: AlertId,
    ttl: Duration,
    cancel: CancellationToken,
) -> Option<UiEvent> {
    tokio::select! {
        () = cancel.cancelled() => None,
        () = tokio::time::sleep(ttl) => Some(UiEvent::AlertTimedOut { id }),
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(uri: &str) -> Arc<AuthClient> {
        Arc::new(AuthClient::new(uri, Some(Duration::from_secs(2))).unwrap())
    }

    #[tokio::test]
    async fn test_login_rejection_prefers_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "success": false,
                "message": "Invalid credentials",
            })))
            .mount(&server)
            .await;

        let event = submit_login(
            client_for(&server.uri()),
            LoginFields {
                email: "test@example.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await;

        match event {
            UiEvent::LoginResult { result } => {
                assert_eq!(result, Err("Invalid credentials".to_string()));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_login_rejection_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"success": false})),
            )
            .mount(&server)
            .await;

        let event = submit_login(
            client_for(&server.uri()),
            LoginFields {
                email: "test@example.com".to_string(),
                password: "wrong".to_string(),
            },
        )
        .await;

        match event {
            UiEvent::LoginResult { result } => {
                assert_eq!(result, Err("Login failed".to_string()));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_signup_transport_failure_uses_fallback() {
        // Nothing listens on this port.
        let event = submit_signup(
            client_for("http://127.0.0.1:9"),
            SignupFields {
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                password: "testPassword123".to_string(),
            },
        )
        .await;

        match event {
            UiEvent::SignupResult { result } => {
                assert_eq!(result, Err("Signup failed".to_string()));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_signup_success_maps_to_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/signup"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": true})),
            )
            .mount(&server)
            .await;

        let event = submit_signup(
            client_for(&server.uri()),
            SignupFields {
                username: "testuser".to_string(),
                email: "test@example.com".to_string(),
                password: "testPassword123".to_string(),
            },
        )
        .await;

        match event {
            UiEvent::SignupResult { result } => assert_eq!(result, Ok(())),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_alert_expiry_fires_after_ttl_and_not_before() {
        let cancel = CancellationToken::new();
        let fut = alert_expiry(AlertId(1), Duration::from_secs(5), cancel);
        tokio::pin!(fut);

        // Not before the TTL elapses.
        assert!(
            tokio::time::timeout(Duration::from_millis(4_999), &mut fut)
                .await
                .is_err()
        );

        // Fires within the remaining millisecond.
        let event = tokio::time::timeout(Duration::from_millis(10), &mut fut)
            .await
            .unwrap();
        assert!(matches!(
            event,
            Some(UiEvent::AlertTimedOut { id: AlertId(1) })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_expiry_emits_nothing() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let result = alert_expiry(AlertId(7), Duration::from_secs(5), cancel).await;
        assert!(result.is_none());
    }
}
