use thiserror::Error;

/// 訂單結構驗證失敗（缺少巢狀物件、型別不符）
#[derive(Error, Debug)]
pub enum MappingError {
    #[error("field \"cliente\" must be an object")]
    MissingCustomer,

    #[error("field \"produtos\" must be an array")]
    InvalidProducts,

    #[error("produtos[{index}] must be an object")]
    InvalidProduct { index: usize },

    #[error("invalid order shape: {0}")]
    InvalidShape(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Hiper API responded with status {status}")]
    DownstreamRejected {
        status: u16,
        body: serde_json::Value,
    },

    #[error("Malformed order: {0}")]
    MappingError(#[from] MappingError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Mapping,
    Integration,
    Configuration,
    System,
}

impl BridgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BridgeError::ValidationError { .. } => ErrorCategory::Validation,
            BridgeError::MappingError(_) => ErrorCategory::Mapping,
            BridgeError::ApiError(_)
            | BridgeError::DownstreamRejected { .. }
            | BridgeError::SerializationError(_) => ErrorCategory::Integration,
            BridgeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BridgeError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 回傳給呼叫端的錯誤細節：優先使用 Hiper 回應內容，否則使用錯誤訊息
    pub fn details(&self) -> String {
        if let BridgeError::DownstreamRejected { body, .. } = self {
            let detail = match body {
                serde_json::Value::Null => String::new(),
                serde_json::Value::String(s) => s.trim().to_string(),
                other => other.to_string(),
            };
            if !detail.is_empty() {
                return detail;
            }
        }
        self.to_string()
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Validation => "Check that the webhook payload carries a non-empty id_pedido",
            ErrorCategory::Mapping => "Check the Mercus payload shape (cliente object, produtos array)",
            ErrorCategory::Integration => {
                "Check HIPER_API_ENDPOINT, HIPER_API_KEY and the Hiper API availability"
            }
            ErrorCategory::Configuration => "Review the environment variables and CLI flags",
            ErrorCategory::System => "Check that the listen address is free and reachable",
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;
