use std::sync::Once;

use claimboard_cli::AppContext;
use claimboard_domain::constants::CREDENTIAL_ENV_VAR;
use claimboard_domain::ClaimboardConfig;
use tempfile::TempDir;
use wiremock::MockServer;

static TOKEN: Once = Once::new();

/// Shared context for integration tests that drive the command handlers.
pub struct TestHarness {
    /// Application context wired to the mock server and a scratch store.
    pub ctx: AppContext,
    /// Board API double; tests mount their own responses.
    pub server: MockServer,
    /// Keep the scratch data directory alive for the lifetime of the harness.
    _data_dir: TempDir,
}

/// Builds a context whose gateway talks to a local mock server and whose
/// state store lives in a scratch directory. The API token comes from the
/// environment override so no test touches the real keychain.
pub async fn setup() -> TestHarness {
    TOKEN.call_once(|| std::env::set_var(CREDENTIAL_ENV_VAR, "integration-token"));

    let server = MockServer::start().await;
    let data_dir = TempDir::new().expect("failed to create scratch data directory");
    let config = ClaimboardConfig {
        api_endpoint: server.uri(),
        board_id: "4242".to_string(),
        data_dir: Some(data_dir.path().to_path_buf()),
        ..ClaimboardConfig::default()
    };

    let ctx = AppContext::with_config(config)
        .await
        .expect("failed to build the application context");

    TestHarness { ctx, server, _data_dir: data_dir }
}
