use crate::domain::model::{ForwardResponse, HiperOrder};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn hiper_api_endpoint(&self) -> &str;
    fn hiper_api_key(&self) -> &str;
    fn request_timeout_seconds(&self) -> Option<u64>;
}

/// 將轉換後的訂單送往下游 API
#[async_trait]
pub trait OrderForwarder: Send + Sync {
    async fn forward(&self, order: &HiperOrder) -> Result<ForwardResponse>;
}
