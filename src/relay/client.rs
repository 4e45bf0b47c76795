//! HTTP client for the EmailJS send endpoint
//!
//! Posts the contact form payload to EmailJS, which renders it through the
//! configured template and emails the business owner.

use super::error::RelayError;
use super::traits::MailRelay;
use crate::config::{RelayConfig, RelayCredentials};
use crate::state::FieldSet;
use async_trait::async_trait;
use serde::Serialize;

/// Path of the send endpoint below the API origin
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Request body accepted by the EmailJS send endpoint
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a FieldSet,
}

impl<'a> SendRequest<'a> {
    fn new(credentials: &'a RelayCredentials, payload: &'a FieldSet) -> Self {
        Self {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: payload,
        }
    }
}

/// Client for the EmailJS REST API
pub struct EmailJsClient {
    http: reqwest::Client,
    /// Full URL of the send endpoint
    send_url: String,
}

impl EmailJsClient {
    /// Create a client for the configured endpoint
    pub fn new(config: &RelayConfig) -> Self {
        let origin = config.endpoint.trim_end_matches('/');
        Self {
            http: reqwest::Client::new(),
            send_url: format!("{origin}{SEND_PATH}"),
        }
    }
}

#[async_trait]
impl MailRelay for EmailJsClient {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        payload: &FieldSet,
    ) -> Result<(), RelayError> {
        tracing::debug!("Sending contact message to {}", self.send_url);

        let response = self
            .http
            .post(&self.send_url)
            .json(&SendRequest::new(credentials, payload))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Mail relay accepted message ({status})");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn credentials() -> RelayCredentials {
        RelayCredentials {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            public_key: "pk_z".to_string(),
        }
    }

    fn payload() -> FieldSet {
        FieldSet {
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            title: "Dinner".to_string(),
            message: "Party of 8".to_string(),
        }
    }

    fn config_for(endpoint: String) -> RelayConfig {
        RelayConfig {
            endpoint,
            ..Default::default()
        }
    }

    /// Serve one HTTP request on a loopback port, replying with `status_line`.
    /// Resolves to the raw request body.
    async fn serve_once(status_line: &'static str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let body_start = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let headers = String::from_utf8_lossy(&buf[..body_start]).to_ascii_lowercase();
            let content_length: usize = headers
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .map(|v| v.trim().parse().unwrap())
                .unwrap_or(0);
            while buf.len() < body_start + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }

            let reply = format!(
                "HTTP/1.1 {status_line}\r\ncontent-length: 2\r\nconnection: close\r\n\r\nOK"
            );
            socket.write_all(reply.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();

            String::from_utf8_lossy(&buf[body_start..]).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn test_send_url_joins_origin() {
        let client = EmailJsClient::new(&config_for("https://api.example.test/".to_string()));
        assert_eq!(client.send_url, "https://api.example.test/api/v1.0/email/send");
    }

    #[test]
    fn test_request_body_shape() {
        let creds = credentials();
        let fields = payload();
        let body = serde_json::to_value(SendRequest::new(&creds, &fields)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_x",
                "template_id": "template_y",
                "user_id": "pk_z",
                "template_params": {
                    "name": "Jane",
                    "email": "jane@example.com",
                    "title": "Dinner",
                    "message": "Party of 8",
                },
            })
        );
    }

    #[tokio::test]
    async fn test_send_success_posts_payload() {
        let (endpoint, server) = serve_once("200 OK").await;
        let client = EmailJsClient::new(&config_for(endpoint));

        let result = client.send(&credentials(), &payload()).await;
        tokio_test::assert_ok!(result);

        let body: serde_json::Value = serde_json::from_str(&server.await.unwrap()).unwrap();
        assert_eq!(body["template_params"]["message"], "Party of 8");
        assert_eq!(body["user_id"], "pk_z");
    }

    #[tokio::test]
    async fn test_send_rejected_status() {
        let (endpoint, server) = serve_once("400 Bad Request").await;
        let client = EmailJsClient::new(&config_for(endpoint));

        let result = client.send(&credentials(), &payload()).await;
        server.await.unwrap();

        match result {
            Err(RelayError::Rejected { status, body }) => {
                assert_eq!(status, 400);
                assert_eq!(body, "OK");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_send_unreachable_is_transport_error() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = EmailJsClient::new(&config_for(format!("http://{addr}")));
        let result = client.send(&credentials(), &payload()).await;
        assert!(matches!(result, Err(RelayError::Transport(_))));
    }
}
