use crate::core::mapper::{map_mercus_to_hiper, parse_mercus_order};
use crate::core::OrderForwarder;
use crate::utils::error::Result;
use crate::utils::validation::validate_required_field;

pub const ORDER_ID_FIELD: &str = "id_pedido";

/// 單筆訂單整合流程：驗證 → 映射 → 轉送
pub struct OrderIntegration<F: OrderForwarder> {
    forwarder: F,
}

impl<F: OrderForwarder> OrderIntegration<F> {
    pub fn new(forwarder: F) -> Self {
        Self { forwarder }
    }

    /// 處理 Mercus webhook payload，回傳 Hiper API 的回應內容
    pub async fn process(&self, payload: serde_json::Value) -> Result<serde_json::Value> {
        tracing::info!(
            "===> New order received from Mercus:\n{}",
            serde_json::to_string_pretty(&payload)?
        );

        // Validate
        validate_required_field(&payload, ORDER_ID_FIELD)?;

        // Map
        let mercus_order = parse_mercus_order(payload)?;
        let hiper_order = map_mercus_to_hiper(&mercus_order);
        tracing::debug!(
            "Mapped order {} with {} items",
            hiper_order.pedido_id,
            hiper_order.itens.len()
        );

        // Forward
        let response = self.forwarder.forward(&hiper_order).await?;
        tracing::info!("✅ Hiper response ({}): {}", response.status, response.body);

        Ok(response.body)
    }
}
