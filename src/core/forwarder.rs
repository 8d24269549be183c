use crate::core::{ConfigProvider, ForwardResponse, HiperOrder, OrderForwarder};
use crate::utils::error::{BridgeError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use std::time::Duration;

/// 以 Bearer token 呼叫 Hiper API 建立訂單
pub struct HiperForwarder<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HiperForwarder<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> OrderForwarder for HiperForwarder<C> {
    async fn forward(&self, order: &HiperOrder) -> Result<ForwardResponse> {
        let endpoint = self.config.hiper_api_endpoint();
        tracing::debug!("📡 Sending order to Hiper: POST {}", endpoint);

        let mut request = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .bearer_auth(self.config.hiper_api_key())
            .json(order);

        // 設定超時
        if let Some(timeout) = self.config.request_timeout_seconds() {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 Hiper response status: {}", status);

        let text = response.text().await?;
        let body = parse_body(&text);

        if !status.is_success() {
            return Err(BridgeError::DownstreamRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ForwardResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// 回應內容：JSON 優先，否則保留原始文字
fn parse_body(text: &str) -> serde_json::Value {
    if text.trim().is_empty() {
        return serde_json::Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}
