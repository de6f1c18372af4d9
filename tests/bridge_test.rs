use oficina::bridge::BridgeError;
use oficina::lifecycle::OficinaSystem;
use oficina::store::Database;
use serde_json::{json, Value};

async fn system() -> OficinaSystem {
    let db = Database::in_memory().await.expect("in-memory database");
    OficinaSystem::with_database(db, 16).await.expect("system starts")
}

#[tokio::test]
async fn test_customer_channels() {
    let system = system().await;
    let bridge = system.bridge();

    let created = bridge
        .invoke(
            "add-cliente",
            json!({"name": "Roberto Silva", "phone": "(11) 98888-7777", "cars": ["Corolla"]}),
        )
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["cars"], json!(["Corolla"]));

    bridge
        .invoke("add-veiculo", json!({"plate": "bra2e19", "client": "Roberto Silva"}))
        .await
        .unwrap();

    let found = bridge
        .invoke("get-cliente-veiculos", json!("Roberto Silva"))
        .await
        .unwrap();
    assert_eq!(found["client"]["id"], json!(id));
    assert_eq!(found["vehicles"][0]["plate"], json!("BRA2E19"));

    let missing = bridge
        .invoke("get-cliente-veiculos", json!("Fulano"))
        .await
        .unwrap();
    assert_eq!(missing, Value::Null);

    let mut edited = created.clone();
    edited["email"] = json!("roberto@example.com");
    bridge.invoke("update-cliente", edited).await.unwrap();
    let listed = bridge.invoke("get-clientes", Value::Null).await.unwrap();
    assert_eq!(listed[0]["email"], json!("roberto@example.com"));

    assert_eq!(
        bridge.invoke("delete-cliente", json!(id)).await.unwrap(),
        json!(true)
    );
    assert_eq!(
        bridge.invoke("get-clientes", Value::Null).await.unwrap(),
        json!([])
    );

    drop(bridge);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dashboard_channels() {
    let system = system().await;
    let bridge = system.bridge();

    bridge
        .invoke("add-produto", json!({"name": "Filtro", "quantity": 1, "minQuantity": 3}))
        .await
        .unwrap();
    assert_eq!(
        bridge.invoke("count-estoque-baixo", Value::Null).await.unwrap(),
        json!(1)
    );
    assert_eq!(
        bridge.invoke("get-faturamento-diario", Value::Null).await.unwrap(),
        json!(0.0)
    );

    drop(bridge);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_quote_conversion_channel() {
    let system = system().await;
    let bridge = system.bridge();

    let quote = bridge
        .invoke(
            "add-orcamento",
            json!({
                "client": "Ana",
                "vehicle": "Onix - ABC-1D23",
                "date": "2024-05-02",
                "validUntil": "",
                "status": "approved",
                "total": 120.0,
                "items": [{"type": "service", "id": 1, "name": "Revisão", "qty": 1, "price": 120.0, "total": 120.0}]
            }),
        )
        .await
        .unwrap();

    let order = bridge.invoke("converter-orcamento", quote).await.unwrap();
    assert_eq!(order["status"], json!("pending"));
    assert_eq!(order["total"], json!(120.0));

    let orders = bridge.invoke("get-os", Value::Null).await.unwrap();
    assert_eq!(orders.as_array().map(Vec::len), Some(1));

    let pending = json!({"id": 9, "client": "Ana", "vehicle": "Onix", "status": "pending"});
    let err = bridge.invoke("converter-orcamento", pending).await.unwrap_err();
    match err {
        BridgeError::Operation(msg) => assert!(msg.contains("approved")),
        other => panic!("unexpected error: {other:?}"),
    }

    drop(bridge);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_null_lists_are_stored_as_empty() {
    let system = system().await;
    let bridge = system.bridge();

    let quote = bridge
        .invoke(
            "add-orcamento",
            json!({"client": "Ana", "vehicle": "Gol", "status": "pending", "items": null}),
        )
        .await
        .unwrap();
    assert_eq!(quote["items"], json!([]));

    let customer = bridge
        .invoke("add-cliente", json!({"name": "Ana", "cars": null}))
        .await
        .unwrap();
    assert_eq!(customer["cars"], json!([]));

    let order = bridge
        .invoke("add-os", json!({"client": "Ana", "vehicle": "Gol", "items": null}))
        .await
        .unwrap();

    let mut edited = order.clone();
    edited["items"] = Value::Null;
    edited["status"] = json!("in-progress");
    bridge.invoke("update-os", edited).await.unwrap();

    let orders = bridge.invoke("get-os", Value::Null).await.unwrap();
    assert_eq!(orders[0]["items"], json!([]));
    assert_eq!(orders[0]["status"], json!("in-progress"));
    let quotes = bridge.invoke("get-orcamentos", Value::Null).await.unwrap();
    assert_eq!(quotes[0]["items"], json!([]));

    drop(bridge);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_config_channels() {
    let system = system().await;
    let bridge = system.bridge();

    assert_eq!(
        bridge.invoke("get-config", json!("dados_empresa")).await.unwrap(),
        Value::Null
    );
    let profile = json!({"name": "Auto Center", "phone": "(11) 3333-4444"});
    let echoed = bridge
        .invoke("set-config", json!({"key": "dados_empresa", "value": profile}))
        .await
        .unwrap();
    assert_eq!(echoed, profile);
    assert_eq!(
        bridge.invoke("get-config", json!("dados_empresa")).await.unwrap(),
        profile
    );

    drop(bridge);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_bad_calls() {
    let system = system().await;
    let bridge = system.bridge();

    assert!(matches!(
        bridge.invoke("get-pedidos", Value::Null).await,
        Err(BridgeError::UnknownChannel(_))
    ));
    assert!(matches!(
        bridge.invoke("delete-servico", json!("not an id")).await,
        Err(BridgeError::Payload(_))
    ));
    assert!(matches!(
        bridge.invoke("add-servico", json!({"name": ""})).await,
        Err(BridgeError::Operation(_))
    ));

    drop(bridge);
    system.shutdown().await.unwrap();
}
