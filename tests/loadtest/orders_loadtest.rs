//! Orders traffic integration test.
//!
//! Drives the real reqwest transport against the in-process store stub and
//! checks what went over the wire against what was printed.

use crate::store_stub::{status_for, StoreStub};
use loadtest_generator::{OrderPayload, OrderTrafficGenerator};
use loadtest_http::ReqwestTransport;
use loadtest_populate_orders::{OrdersPopulator, OrdersPopulatorError};

const SEED: u64 = 42;
const STEPS: std::ops::Range<u64> = 1..25;
const TRACE_ID: &str = "ead37b0f-e401-4536-a770-527394c5379d";

async fn drive(base_url: &str) -> Result<Vec<String>, OrdersPopulatorError> {
    let transport = ReqwestTransport::new()?;
    let mut populator = OrdersPopulator::new(
        transport,
        OrderTrafficGenerator::from_seed(SEED),
        base_url,
        TRACE_ID,
    );

    let mut out = Vec::new();
    let result = populator.run(STEPS, &mut out).await;
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    result.map(|()| lines)
}

#[tokio::test]
async fn test_orders_traffic_small_scale() {
    tracing_subscriber::fmt()
        .with_env_filter("loadtest_populate_orders=debug")
        .try_init()
        .ok();

    let stub = StoreStub::start("{}").await;
    let lines = drive(&stub.base_url).await.unwrap();
    let requests = stub.requests();

    // The wire sequence is exactly what the seeded generator plans.
    let planned: Vec<(String, String)> = OrderTrafficGenerator::from_seed(SEED)
        .steps(STEPS)
        .unwrap()
        .flat_map(|(_, requests)| requests)
        .map(|r| (r.method.to_string(), r.path))
        .collect();
    let sent: Vec<(String, String)> = requests
        .iter()
        .map(|r| (r.method.clone(), r.path.clone()))
        .collect();
    assert_eq!(sent, planned);

    // One `<path> - <status>` line per call, in call order.
    assert_eq!(lines.len(), requests.len());
    for (line, request) in lines.iter().zip(&requests) {
        let status = status_for(&request.method, &request.path);
        let expected = format!("{} - {}", request.path, status);
        assert_eq!(line, &expected);
    }
    assert!(lines.iter().any(|l| l == "/orders - 200"));

    for request in &requests {
        assert_eq!(request.header("x-trace-id"), Some(TRACE_ID));

        if request.method == "POST" {
            assert_eq!(request.header("content-type"), Some("application/json"));
            let payload: OrderPayload = serde_json::from_str(&request.body).unwrap();
            let ids: Vec<u64> = payload.items.iter().map(|i| i.product.id).collect();
            assert_eq!(ids, vec![1, 2]);
            assert!(payload.items.iter().all(|i| i.quantity < STEPS.end));
        } else {
            assert_eq!(request.header("content-type"), None);
            assert!(request.body.is_empty());
        }
    }
}

#[tokio::test]
async fn test_same_seed_same_wire_sequence() {
    let first = StoreStub::start("{}").await;
    let second = StoreStub::start("{}").await;

    drive(&first.base_url).await.unwrap();
    drive(&second.base_url).await.unwrap();

    let paths = |stub: &StoreStub| -> Vec<(String, String, String)> {
        stub.requests()
            .into_iter()
            .map(|r| (r.method, r.path, r.body))
            .collect()
    };
    assert_eq!(paths(&first), paths(&second));
}

#[tokio::test]
async fn test_unreachable_target_aborts_run() {
    // Reserve a port, then free it so nothing is listening there.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let result = drive(&base_url).await;

    assert!(matches!(result, Err(OrdersPopulatorError::Transport(_))));
}
