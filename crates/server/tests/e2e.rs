use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use service::file::{cart_store::CartStore, product_store::ProductStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use server::routes;
use server::state::ServerState;

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Isolated temp backing files per test run
    let temp_id = Uuid::new_v4();
    let products_path = format!("target/test-data/{}/products.json", temp_id);
    let carts_path = format!("target/test-data/{}/carts.json", temp_id);
    let products = ProductStore::new(&products_path).await?;
    let carts = CartStore::new(&carts_path).await?;

    let state = ServerState { products, carts };
    let app: Router = routes::build_router(state, cors());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_product_create_assigns_id_from_empty_store() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/api/products", app.base_url))
        .json(&json!({"name": "A"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body, json!({"id": 1, "name": "A"}));

    // the created record is readable back with all fields intact
    let res = c.get(format!("{}/api/products/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "A"}));
    Ok(())
}

#[tokio::test]
async fn e2e_product_list_limit_and_order() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for name in ["a", "b", "c"] {
        let res = c
            .post(format!("{}/api/products", app.base_url))
            .json(&json!({"name": name}))
            .send()
            .await?;
        assert_eq!(res.status(), HttpStatusCode::OK);
    }

    let all = c
        .get(format!("{}/api/products", app.base_url))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;
    assert_eq!(all.len(), 3);

    let limited = c
        .get(format!("{}/api/products?limit=2", app.base_url))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0]["name"], "a");
    assert_eq!(limited[1]["name"], "b");

    // a limit above the count, or no limit at all, returns everything
    let wide = c
        .get(format!("{}/api/products?limit=10", app.base_url))
        .send()
        .await?
        .json::<Vec<serde_json::Value>>()
        .await?;
    assert_eq!(wide.len(), 3);
    Ok(())
}

#[tokio::test]
async fn e2e_product_update_merges_partial_fields() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let _ = c
        .post(format!("{}/api/products", app.base_url))
        .json(&json!({"name": "A", "price": 10}))
        .send()
        .await?;

    let res = c
        .put(format!("{}/api/products/1", app.base_url))
        .json(&json!({"price": 12}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!({"id": 1, "name": "A", "price": 12})
    );

    // updating a missing product is a 404, not an error
    let res = c
        .put(format!("{}/api/products/99", app.base_url))
        .json(&json!({"price": 1}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "product not found");
    Ok(())
}

#[tokio::test]
async fn e2e_product_delete_returns_removed_record() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let _ = c
        .post(format!("{}/api/products", app.base_url))
        .json(&json!({"name": "A"}))
        .send()
        .await?;
    let _ = c
        .post(format!("{}/api/products", app.base_url))
        .json(&json!({"name": "B"}))
        .send()
        .await?;

    let res = c.delete(format!("{}/api/products/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"id": 1, "name": "A"}));

    let res = c.get(format!("{}/api/products/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.delete(format!("{}/api/products/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_cart_flow_with_quantity_merge() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(format!("{}/api/carts", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let cart = res.json::<serde_json::Value>().await?;
    let cid = cart["id"].as_str().expect("cart id").to_string();
    assert_eq!(cart["products"], json!([]));

    let res = c
        .post(format!("{}/api/carts/{}/product/7", app.base_url, cid))
        .json(&json!({"quantity": 3}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!([{"id": 7, "quantity": 3}])
    );

    // same product again: one line item, summed quantity
    let res = c
        .post(format!("{}/api/carts/{}/product/7", app.base_url, cid))
        .json(&json!({"quantity": 2}))
        .send()
        .await?;
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!([{"id": 7, "quantity": 5}])
    );

    // no body at all: quantity defaults to 1
    let res = c
        .post(format!("{}/api/carts/{}/product/9", app.base_url, cid))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!([{"id": 7, "quantity": 5}, {"id": 9, "quantity": 1}])
    );

    let res = c.get(format!("{}/api/carts/{}", app.base_url, cid)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(
        res.json::<serde_json::Value>().await?,
        json!([{"id": 7, "quantity": 5}, {"id": 9, "quantity": 1}])
    );
    Ok(())
}

#[tokio::test]
async fn e2e_cart_not_found_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let missing = Uuid::new_v4();

    let res = c
        .get(format!("{}/api/carts/{}", app.base_url, missing))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "cart not found");

    let res = c
        .post(format!("{}/api/carts/{}/product/1", app.base_url, missing))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api-docs/openapi.json", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(body["openapi"].as_str().unwrap_or_default().starts_with('3'));
    assert!(body["paths"].get("/api/products").is_some());
    Ok(())
}
