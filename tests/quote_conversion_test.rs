//! Quote conversion against scripted work-order actors.

use oficina::clients::{QuoteClient, WorkOrderClient};
use oficina::framework::mock::{create_mock_client, expect_create, MockClient};
use oficina::framework::FrameworkError;
use oficina::model::{LineItem, Quote, QuoteStatus, WorkOrder, WorkOrderStatus};
use oficina::quote_actor::QuoteError;

fn approved_quote() -> Quote {
    let mut quote = Quote::new("Roberto Silva", "Corolla - BRA-2E19");
    quote.id = 15;
    quote.status = QuoteStatus::Approved;
    quote.notes = Some("Cliente traz as peças".into());
    quote.items = vec![
        LineItem::service(2, "Troca de pastilhas", 150.0),
        LineItem::product(9, "Pastilha dianteira", 90.0, 2.0),
    ];
    quote.recompute_total();
    quote
}

#[tokio::test]
async fn test_non_approved_quote_sends_nothing() {
    let quotes = MockClient::<Quote>::new();
    let orders = MockClient::<WorkOrder>::new();
    let client = QuoteClient::new(quotes.client(), WorkOrderClient::new(orders.client()));

    for status in [QuoteStatus::Pending, QuoteStatus::Rejected] {
        let quote = Quote {
            status,
            ..approved_quote()
        };
        let err = client.convert_to_work_order(&quote).await.unwrap_err();
        assert!(matches!(err, QuoteError::NotApproved { id: 15, .. }));
    }

    // No expectations were queued; any request would have failed the mock.
    quotes.verify();
    orders.verify();
}

#[tokio::test]
async fn test_approved_quote_creates_exactly_one_order() {
    let quotes = MockClient::<Quote>::new();
    let (order_client, mut requests) = create_mock_client::<WorkOrder>(10);
    let client = QuoteClient::new(quotes.client(), WorkOrderClient::new(order_client));

    let quote = approved_quote();
    let task = {
        let quote = quote.clone();
        tokio::spawn(async move { client.convert_to_work_order(&quote).await })
    };

    let (payload, responder) = expect_create(&mut requests)
        .await
        .expect("Expected Create request");
    assert_eq!(payload.id, 0);
    assert_eq!(payload.client, quote.client);
    assert_eq!(payload.vehicle, quote.vehicle);
    assert_eq!(payload.status, WorkOrderStatus::Pending);
    assert_eq!(payload.items, quote.items);
    assert_eq!(payload.total, 330.0);
    assert!(payload.date.is_some());
    assert_eq!(
        payload.notes.as_deref(),
        Some("Gerada a partir do orçamento #15\nCliente traz as peças")
    );
    responder.send(Ok(WorkOrder { id: 40, ..payload })).unwrap();

    let created = task.await.unwrap().unwrap();
    assert_eq!(created.id, 40);

    // The client was moved into the task and dropped, so the channel is closed.
    assert!(requests.recv().await.is_none());
    quotes.verify();
}

#[tokio::test]
async fn test_work_order_failure_surfaces_as_quote_error() {
    let quotes = MockClient::<Quote>::new();
    let mut orders = MockClient::<WorkOrder>::new();
    orders.expect_create().return_err(FrameworkError::ActorClosed);
    let client = QuoteClient::new(quotes.client(), WorkOrderClient::new(orders.client()));

    let err = client
        .convert_to_work_order(&approved_quote())
        .await
        .unwrap_err();
    assert!(matches!(err, QuoteError::WorkOrder(_)));
    orders.verify();
}
