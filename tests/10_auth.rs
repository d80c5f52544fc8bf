mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn health_endpoint_responds() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await?;

    // OK or SERVICE_UNAVAILABLE both count as alive
    assert!(
        res.status() == StatusCode::OK || res.status() == StatusCode::SERVICE_UNAVAILABLE,
        "unexpected status: {}",
        res.status()
    );

    let _body = res.json::<serde_json::Value>().await?;
    Ok(())
}

#[tokio::test]
async fn index_lists_endpoints() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client.get(&server.base_url).send().await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await?;
    assert!(body["endpoints"].is_object());
    Ok(())
}

#[tokio::test]
async fn register_rejects_blank_credentials() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&serde_json::json!({ "username": "  ", "password": "" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["code"], "BAD_REQUEST");
    Ok(())
}

#[tokio::test]
async fn register_then_login_round_trip() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let username = format!("it_auth_{}", common::unique_suffix());
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "pw123456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(
        body["message"],
        format!("Registration successful: {}", username)
    );

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "pw123456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["username"], username);
    assert!(!body["accessToken"].as_str().unwrap_or("").is_empty());
    // Credentials never leave the server
    assert!(body.get("password").is_none());
    Ok(())
}

#[tokio::test]
async fn register_trims_surrounding_whitespace() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let username = format!("it_trim_{}", common::unique_suffix());
    let padded = format!("  {}  ", username);

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&serde_json::json!({ "username": padded, "password": "pw123456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(
        body["message"],
        format!("Registration successful: {}", username)
    );

    // The stored account is the trimmed name
    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "pw123456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Re-registering the padded form collides with it
    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&serde_json::json!({ "username": padded, "password": "pw123456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn duplicate_username_conflicts() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let username = format!("it_dup_{}", common::unique_suffix());
    let payload = serde_json::json!({ "username": username, "password": "pw123456" });

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&payload)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = res.json().await?;
    assert_eq!(body["code"], "CONFLICT");
    Ok(())
}

#[tokio::test]
async fn login_with_wrong_password_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_ready(server).await {
        eprintln!("skipping: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let (username, _token) = common::register_and_login(server).await?;

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Unknown username gets the same answer as a bad password
    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": "no_such_user_anywhere", "password": "wrong" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}
