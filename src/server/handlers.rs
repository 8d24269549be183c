use crate::core::integration::OrderIntegration;
use crate::core::OrderForwarder;
use crate::utils::error::BridgeError;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

pub const HEALTH_MESSAGE: &str = "API de integração funcionando.";
pub const INTEGRATION_ERROR_MESSAGE: &str = "Erro ao processar integração";
pub const MALFORMED_ORDER_MESSAGE: &str = "Pedido com formato inválido";
pub const INVALID_JSON_MESSAGE: &str = "Corpo da requisição não é um JSON válido.";

/// POST /webhook/mercus-order
pub async fn receive_mercus_order<F: OrderForwarder + 'static>(
    State(integration): State<Arc<OrderIntegration<F>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // 非 JSON 媒體型別或空 body 視為 {}
    let payload = if !is_json_content_type(&headers) || body.iter().all(u8::is_ascii_whitespace) {
        json!({})
    } else {
        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("❌ Rejected webhook with invalid JSON: {}", e);
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": INVALID_JSON_MESSAGE })),
                )
                    .into_response();
            }
        }
    };

    match integration.process(payload).await {
        Ok(hiper_response) => (
            StatusCode::OK,
            Json(json!({ "status": "sucesso", "hiperResponse": hiper_response })),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// `application/json`，忽略大小寫與參數（如 charset）
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// GET /health
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

fn error_response(err: &BridgeError) -> Response {
    match err {
        BridgeError::ValidationError { message } => {
            tracing::warn!("❌ Rejected webhook: {}", message);
            (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
        }
        BridgeError::MappingError(_) => {
            tracing::warn!("❌ Malformed Mercus order: {}", err);
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": MALFORMED_ORDER_MESSAGE, "details": err.details() })),
            )
                .into_response()
        }
        _ => {
            let details = err.details();
            tracing::error!("❌ Integration failed: {}", details);
            tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": INTEGRATION_ERROR_MESSAGE, "details": details })),
            )
                .into_response()
        }
    }
}
