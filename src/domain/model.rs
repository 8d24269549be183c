use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 欄位存在即為 `Some`（包含明確的 null），缺少時為 `None`
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Mercus webhook 的訂單內容
///
/// 純量欄位保留原始 JSON 型別（包含 null），不做轉型；未知欄位忽略。
#[derive(Debug, Clone, Deserialize)]
pub struct MercusOrder {
    pub id_pedido: Value,
    #[serde(default, deserialize_with = "present")]
    pub data: Option<Value>,
    pub cliente: MercusCustomer,
    pub produtos: Vec<MercusProduct>,
    #[serde(default, deserialize_with = "present")]
    pub total: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub condicao_pagamento: Option<Value>,
    #[serde(default)]
    pub impostos: Option<MercusTaxes>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MercusCustomer {
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub nome: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub endereco: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub telefone: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MercusProduct {
    #[serde(default, deserialize_with = "present")]
    pub id_produto: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub descricao: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub quantidade: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub preco_unitario: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub gtin: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MercusTaxes {
    #[serde(default, rename = "ICMS", deserialize_with = "present")]
    pub icms: Option<Value>,
    #[serde(default, rename = "IPI", deserialize_with = "present")]
    pub ipi: Option<Value>,
}

/// 送往 Hiper API 的訂單格式
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiperOrder {
    pub pedido_id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_pedido: Option<Value>,
    pub cliente: HiperCustomer,
    pub itens: Vec<HiperItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_valor: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forma_pagamento: Option<Value>,
    pub impostos: HiperTaxes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiperCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endereco: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiperItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codigo_produto: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao_produto: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantidade: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor_unitario: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HiperTaxes {
    pub icms: Value,
    pub ipi: Value,
}

/// Hiper API 的成功回應
#[derive(Debug, Clone)]
pub struct ForwardResponse {
    pub status: u16,
    pub body: Value,
}
