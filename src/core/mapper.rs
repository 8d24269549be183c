use crate::core::{HiperCustomer, HiperItem, HiperOrder, HiperTaxes, MercusOrder};
use crate::utils::error::MappingError;
use serde_json::Value;

/// 驗證 Mercus payload 結構並解析為 `MercusOrder`
///
/// 巢狀欄位缺失時回傳明確的 `MappingError`，而不是在映射途中失敗。
pub fn parse_mercus_order(payload: Value) -> Result<MercusOrder, MappingError> {
    if !payload.get("cliente").is_some_and(Value::is_object) {
        return Err(MappingError::MissingCustomer);
    }

    let produtos = payload
        .get("produtos")
        .and_then(Value::as_array)
        .ok_or(MappingError::InvalidProducts)?;

    if let Some(index) = produtos.iter().position(|p| !p.is_object()) {
        return Err(MappingError::InvalidProduct { index });
    }

    // impostos 非物件時視同未提供
    let mut payload = payload;
    if let Some(obj) = payload.as_object_mut() {
        if obj.get("impostos").is_some_and(|v| !v.is_object()) {
            obj.remove("impostos");
        }
    }

    Ok(serde_json::from_value(payload)?)
}

/// Mercus → Hiper 欄位映射
pub fn map_mercus_to_hiper(order: &MercusOrder) -> HiperOrder {
    let cliente = &order.cliente;

    let itens = order
        .produtos
        .iter()
        .map(|prod| HiperItem {
            codigo_produto: prod.id_produto.clone(),
            descricao_produto: prod.descricao.clone(),
            quantidade: prod.quantidade.clone(),
            valor_unitario: prod.preco_unitario.clone(),
            gtin: prod.gtin.clone(),
        })
        .collect();

    let impostos = match &order.impostos {
        Some(taxes) => HiperTaxes {
            icms: taxes.icms.clone().unwrap_or_else(zero),
            ipi: taxes.ipi.clone().unwrap_or_else(zero),
        },
        None => HiperTaxes {
            icms: zero(),
            ipi: zero(),
        },
    };

    HiperOrder {
        pedido_id: order.id_pedido.clone(),
        data_pedido: order.data.clone(),
        cliente: HiperCustomer {
            codigo: cliente.id.clone(),
            nome: cliente.nome.clone(),
            endereco: cliente.endereco.clone(),
            telefone: cliente.telefone.clone(),
            email: cliente.email.clone(),
        },
        itens,
        total_valor: order.total.clone(),
        forma_pagamento: order.condicao_pagamento.clone(),
        impostos,
    }
}

fn zero() -> Value {
    Value::from(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn sample_payload() -> Value {
        json!({
            "id_pedido": "1",
            "data": "2025-04-10T14:30:00Z",
            "cliente": {
                "id": "C1",
                "nome": "A",
                "endereco": "X",
                "telefone": "1",
                "email": "a@a.com"
            },
            "produtos": [
                {"id_produto": "P1", "descricao": "D", "quantidade": 2, "preco_unitario": 5, "gtin": "G"}
            ],
            "total": 10,
            "condicao_pagamento": "avista"
        })
    }

    #[test]
    fn test_map_sample_order() {
        let order = assert_ok!(parse_mercus_order(sample_payload()));
        let hiper = serde_json::to_value(map_mercus_to_hiper(&order)).unwrap();

        assert_eq!(
            hiper,
            json!({
                "pedido_id": "1",
                "data_pedido": "2025-04-10T14:30:00Z",
                "cliente": {
                    "codigo": "C1",
                    "nome": "A",
                    "endereco": "X",
                    "telefone": "1",
                    "email": "a@a.com"
                },
                "itens": [
                    {"codigo_produto": "P1", "descricao_produto": "D", "quantidade": 2, "valor_unitario": 5, "gtin": "G"}
                ],
                "total_valor": 10,
                "forma_pagamento": "avista",
                "impostos": {"icms": 0, "ipi": 0}
            })
        );
    }

    #[test]
    fn test_map_taxes_when_present() {
        let mut payload = sample_payload();
        payload["impostos"] = json!({"ICMS": 18.5, "IPI": 4});

        let order = parse_mercus_order(payload).unwrap();
        let hiper = map_mercus_to_hiper(&order);

        assert_eq!(hiper.impostos.icms, json!(18.5));
        assert_eq!(hiper.impostos.ipi, json!(4));
    }

    #[test]
    fn test_map_partial_taxes_defaults_missing_key() {
        let mut payload = sample_payload();
        payload["impostos"] = json!({"ICMS": 12});

        let hiper = map_mercus_to_hiper(&parse_mercus_order(payload).unwrap());

        assert_eq!(hiper.impostos.icms, json!(12));
        assert_eq!(hiper.impostos.ipi, json!(0));
    }

    #[test]
    fn test_map_preserves_product_order_and_count() {
        let mut payload = sample_payload();
        payload["produtos"] = json!([
            {"id_produto": "P1", "quantidade": 1},
            {"id_produto": "P2", "quantidade": 3},
            {"id_produto": "P3", "quantidade": 5}
        ]);

        let hiper = map_mercus_to_hiper(&parse_mercus_order(payload).unwrap());
        let codes: Vec<_> = hiper
            .itens
            .iter()
            .map(|item| item.codigo_produto.clone().unwrap())
            .collect();

        assert_eq!(codes, vec![json!("P1"), json!("P2"), json!("P3")]);
        assert_eq!(hiper.itens[1].quantidade, Some(json!(3)));
        assert_eq!(hiper.itens[1].gtin, None);
    }

    #[test]
    fn test_absent_scalars_are_omitted() {
        let payload = json!({
            "id_pedido": 99,
            "cliente": {"id": "C9"},
            "produtos": []
        });

        let hiper = serde_json::to_value(map_mercus_to_hiper(&parse_mercus_order(payload).unwrap())).unwrap();

        assert_eq!(hiper["pedido_id"], json!(99));
        assert!(hiper.get("data_pedido").is_none());
        assert!(hiper.get("total_valor").is_none());
        assert_eq!(hiper["cliente"], json!({"codigo": "C9"}));
        assert_eq!(hiper["itens"], json!([]));
    }

    #[test]
    fn test_explicit_nulls_are_forwarded() {
        let mut payload = sample_payload();
        payload["cliente"]["id"] = json!(null);
        payload["produtos"][0]["gtin"] = json!(null);
        payload["total"] = json!(null);
        payload["impostos"] = json!({"ICMS": null, "IPI": 3});

        let hiper =
            serde_json::to_value(map_mercus_to_hiper(&parse_mercus_order(payload).unwrap())).unwrap();

        assert_eq!(hiper["cliente"].get("codigo"), Some(&json!(null)));
        assert_eq!(hiper["itens"][0].get("gtin"), Some(&json!(null)));
        assert_eq!(hiper.get("total_valor"), Some(&json!(null)));
        assert_eq!(hiper["impostos"], json!({"icms": null, "ipi": 3}));
    }

    #[test]
    fn test_parse_rejects_missing_customer() {
        let mut payload = sample_payload();
        payload.as_object_mut().unwrap().remove("cliente");
        let err = assert_err!(parse_mercus_order(payload));
        assert!(matches!(err, MappingError::MissingCustomer));

        let mut payload = sample_payload();
        payload["cliente"] = json!(null);
        assert!(matches!(
            parse_mercus_order(payload),
            Err(MappingError::MissingCustomer)
        ));
    }

    #[test]
    fn test_parse_rejects_invalid_products() {
        let mut payload = sample_payload();
        payload["produtos"] = json!("P1");
        assert!(matches!(
            parse_mercus_order(payload),
            Err(MappingError::InvalidProducts)
        ));

        let mut payload = sample_payload();
        payload["produtos"] = json!([{"id_produto": "P1"}, null]);
        assert!(matches!(
            parse_mercus_order(payload),
            Err(MappingError::InvalidProduct { index: 1 })
        ));
    }

    #[test]
    fn test_parse_ignores_non_object_taxes() {
        let mut payload = sample_payload();
        payload["impostos"] = json!(null);

        let hiper = map_mercus_to_hiper(&parse_mercus_order(payload).unwrap());
        assert_eq!(hiper.impostos.icms, json!(0));
        assert_eq!(hiper.impostos.ipi, json!(0));
    }
}
