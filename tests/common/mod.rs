use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/cardvault-api");
        cmd.env("CARDVAULT_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server can see DATABASE_URL and
        // CARDVAULT_DB_NAME from .env (loaded by the server)
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // Server is up once /health answers, even when the
                // database behind it is unavailable
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// True when the server reports a healthy database. Tests that need real
/// data skip themselves when this is false so the suite stays runnable
/// without Postgres.
pub async fn db_ready(server: &TestServer) -> bool {
    let client = reqwest::Client::new();
    match client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
    {
        Ok(resp) => resp.status() == StatusCode::OK,
        Err(_) => false,
    }
}

/// Unique-enough suffix for usernames and category names so repeated
/// test runs against the same database do not collide.
#[allow(dead_code)]
pub fn unique_suffix() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .subsec_nanos();
    format!("{}_{}", std::process::id(), nanos)
}

/// Registers a fresh user and logs in, returning (username, bearer token).
#[allow(dead_code)]
pub async fn register_and_login(server: &TestServer) -> Result<(String, String)> {
    let client = reqwest::Client::new();
    let username = format!("it_user_{}", unique_suffix());
    let password = "test-password-1";

    let res = client
        .post(format!("{}/api/auth/register", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "register failed: {}",
        res.status()
    );

    let res = client
        .post(format!("{}/api/auth/login", server.base_url))
        .json(&serde_json::json!({ "username": username, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "login failed: {}",
        res.status()
    );

    let body: serde_json::Value = res.json().await?;
    let token = body["accessToken"]
        .as_str()
        .context("login response missing accessToken")?
        .to_string();

    Ok((username, token))
}
