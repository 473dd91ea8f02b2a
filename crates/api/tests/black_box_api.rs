use reqwest::StatusCode;
use serde_json::json;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod (in-memory store), bound to an ephemeral port.
        let app = chocolab_api::app::build_app().await;
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn dark_40_body() -> serde_json::Value {
    json!({
        "name": "Dark 40",
        "description": "a classic",
        "ingredients": [
            { "name": "Cacao", "isCacao": true, "quantity": { "amount": 40.0, "unit": "g" } },
            { "name": "Sugar", "isCacao": false, "quantity": { "amount": 60.0, "unit": "g" } }
        ],
        "instructions": "Melt, mix, mold."
    })
}

async fn create_dark_40(client: &reqwest::Client, base_url: &str) -> serde_json::Value {
    let resp = client
        .post(format!("{base_url}/recipes"))
        .json(&dark_40_body())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn health_endpoint_responds() {
    let server = TestServer::spawn().await;
    let resp = reqwest::get(format!("{}/health", server.base_url))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_returns_recipe_with_derived_fields() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_dark_40(&client, &server.base_url).await;
    assert!(created["id"].is_string());
    assert_eq!(created["cacaoPercentage"], 40.0);
    assert_eq!(created["yield"]["amount"], 100.0);
    assert_eq!(created["yield"]["unit"], "g");
    assert_eq!(created["instructions"], "Melt, mix, mold.");
}

#[tokio::test]
async fn create_rejects_invalid_requests_by_kind() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut body = dark_40_body();
    body["instructions"] = json!("");
    let resp = client
        .post(format!("{}/recipes", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(err["error"], "instructions_required");

    let mut body = dark_40_body();
    body["name"] = json!("");
    let resp = client
        .post(format!("{}/recipes", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(err["error"], "name_required");

    let mut body = dark_40_body();
    body["ingredients"] = json!([]);
    let resp = client
        .post(format!("{}/recipes", server.base_url))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(err["error"], "ingredients_required");
}

#[tokio::test]
async fn get_by_id_returns_the_recipe_and_unknown_id_is_404() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_dark_40(&client, &server.base_url).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .get(format!("{}/recipes/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);

    let resp = client
        .get(format!(
            "{}/recipes/00000000-0000-7000-8000-000000000000",
            server.base_url
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .get(format!("{}/recipes/not-a-uuid", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn yield_query_rescales_through_the_template() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_dark_40(&client, &server.base_url).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .get(format!("{}/recipes/{id}?yield=200", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let scaled: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(scaled["id"], created["id"]);
    assert_eq!(scaled["ingredients"][0]["quantity"]["amount"], 80.0);
    assert_eq!(scaled["ingredients"][1]["quantity"]["amount"], 120.0);
    assert_eq!(scaled["yield"]["amount"], 200.0);
    assert_eq!(scaled["cacaoPercentage"], 40.0);

    // Non-positive and malformed yields are rejected.
    let resp = client
        .get(format!("{}/recipes/{id}?yield=0", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .get(format!("{}/recipes/{id}?yield=abc", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // "NaN" and "inf" parse as f64, so they get past query decoding and
    // must be rejected by the domain.
    for bad in ["NaN", "inf"] {
        let resp = client
            .get(format!("{}/recipes/{id}?yield={bad}", server.base_url))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn template_endpoint_returns_percentages() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_dark_40(&client, &server.base_url).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .get(format!("{}/recipes/{id}/template", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let template: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(template["recipeId"], created["id"]);
    assert_eq!(template["cacaoPercentage"], 40.0);
    assert_eq!(template["ingredients"][0]["percentage"], 40.0);
    assert_eq!(template["ingredients"][1]["percentage"], 60.0);
}

#[tokio::test]
async fn update_replaces_the_recipe() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_dark_40(&client, &server.base_url).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .put(format!("{}/recipes/{id}", server.base_url))
        .json(&json!({
            "name": "Dark 70",
            "ingredients": [
                { "name": "Cacao", "isCacao": true, "quantity": { "amount": 70.0, "unit": "g" } },
                { "name": "Sugar", "isCacao": false, "quantity": { "amount": 30.0, "unit": "g" } }
            ],
            "instructions": "Melt, mix, mold, temper."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let fetched: serde_json::Value = client
        .get(format!("{}/recipes/{id}", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Dark 70");
    assert_eq!(fetched["cacaoPercentage"], 70.0);
    assert_eq!(fetched["createdAt"], created["createdAt"]);

    // Updating an unknown recipe is 404.
    let resp = client
        .put(format!(
            "{}/recipes/00000000-0000-7000-8000-000000000000",
            server.base_url
        ))
        .json(&dark_40_body())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_removes_the_recipe() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create_dark_40(&client, &server.base_url).await;
    let id = created["id"].as_str().unwrap();

    let resp = client
        .delete(format!("{}/recipes/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = client
        .get(format!("{}/recipes/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = client
        .delete(format!("{}/recipes/{id}", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_and_count_paginate_in_creation_order() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for name in ["a", "b", "c"] {
        let mut body = dark_40_body();
        body["name"] = json!(name);
        let resp = client
            .post(format!("{}/recipes", server.base_url))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let all: serde_json::Value = client
        .get(format!("{}/recipes", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let names: Vec<&str> = all
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    let page: serde_json::Value = client
        .get(format!("{}/recipes?limit=1&offset=1", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page.as_array().unwrap().len(), 1);
    assert_eq!(page[0]["name"], "b");

    let count: serde_json::Value = client
        .get(format!("{}/recipes/count", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(count["count"], 3);
}
