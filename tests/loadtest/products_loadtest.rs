//! Product seeding integration test.

use crate::store_stub::StoreStub;
use loadtest_http::ReqwestTransport;
use loadtest_populate_products::ProductsPopulator;

const CATALOGUE: &str = r#"{
  "products": [
    {"id": 1, "title": "Essence Mascara Lash Princess", "description": "Volumizing mascara",
     "category": "beauty", "price": 9.99, "discountPercentage": 7.17, "rating": 4.94,
     "stock": 5, "brand": "Essence"},
    {"id": 16, "title": "Apple", "description": "Fresh apple", "category": "groceries",
     "price": 1.99, "discountPercentage": 12.62, "rating": 4.19, "stock": 8}
  ],
  "total": 2,
  "skip": 0,
  "limit": 2
}"#;

#[tokio::test]
async fn test_products_copied_in_catalogue_order() {
    let stub = StoreStub::start(CATALOGUE).await;
    let populator = ProductsPopulator::new(ReqwestTransport::new().unwrap());
    let mut out = Vec::new();

    let count = populator
        .run(
            &format!("{}/catalogue?limit=200", stub.base_url),
            &format!("{}/products", stub.base_url),
            &mut out,
        )
        .await
        .unwrap();

    assert_eq!(count, 2);
    assert_eq!(String::from_utf8(out).unwrap(), "1 - 201\n16 - 201\n");

    let requests = stub.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/catalogue?limit=200");

    let posts = &requests[1..];
    assert!(posts
        .iter()
        .all(|r| r.method == "POST" && r.path == "/products"));
    assert!(posts
        .iter()
        .all(|r| r.header("content-type") == Some("application/json")));

    let apple: serde_json::Value = serde_json::from_str(&posts[1].body).unwrap();
    assert_eq!(apple["title"], "Apple");
    assert_eq!(apple["category"], "groceries");
    assert_eq!(apple["brand"], serde_json::Value::Null);
    assert!(apple.get("stock").is_none());
}
