//! Common test utilities for stripe-lite integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::path::PathBuf;
use std::sync::Arc;

use stripe_lite_client::{
    ClientConfig, FixtureMode, FixtureTransport, HttpTransport, RecordingTransport, StripeClient,
};

/// Key used when no real credentials are involved.
pub const TEST_API_KEY: &str = "sk_test_4eC39HqLyjWDarjtT1zdp7dc";

/// Directory holding the checked-in fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

enum Backend {
    Replay(Arc<FixtureTransport>),
    Record(Arc<RecordingTransport<HttpTransport>>),
    Live,
}

/// A client whose responses come from the mode selected by `STRIPE_FIXTURES`.
///
/// Replay (the default) reads `tests/fixtures/{name}.json`. Record and live
/// modes need credentials from `ClientConfig::from_env`.
pub struct FixtureClient {
    /// The client under test.
    pub client: StripeClient,
    backend: Backend,
}

impl FixtureClient {
    /// Build a client for the fixture `name`.
    pub async fn new(name: &str) -> Self {
        Self::with_mode(name, FixtureMode::from_env()).await
    }

    /// Build a client for the fixture `name` in an explicit mode.
    pub async fn with_mode(name: &str, mode: FixtureMode) -> Self {
        match mode {
            FixtureMode::Replay => {
                let transport = Arc::new(
                    FixtureTransport::load(fixtures_dir(), name)
                        .await
                        .expect("Failed to load fixture"),
                );
                let client = StripeClient::with_transport(TEST_API_KEY, transport.clone())
                    .expect("Failed to create client");
                Self {
                    client,
                    backend: Backend::Replay(transport),
                }
            }
            FixtureMode::Record => {
                let config = ClientConfig::from_env().expect("Stripe credentials not found");
                let live = HttpTransport::with_base_url(&config.base_url, config.timeout_seconds)
                    .expect("Failed to build HTTP transport");
                let transport = Arc::new(RecordingTransport::new(live, fixtures_dir(), name));
                let client = StripeClient::with_transport(config.api_key, transport.clone())
                    .expect("Failed to create client");
                Self {
                    client,
                    backend: Backend::Record(transport),
                }
            }
            FixtureMode::Live => {
                let config = ClientConfig::from_env().expect("Stripe credentials not found");
                let client = StripeClient::from_config(&config).expect("Failed to create client");
                Self {
                    client,
                    backend: Backend::Live,
                }
            }
        }
    }

    /// Save recorded exchanges, or check every replayed exchange was used.
    pub async fn finish(self) {
        match self.backend {
            Backend::Replay(transport) => {
                assert_eq!(transport.remaining(), 0, "fixture has unused exchanges");
            }
            Backend::Record(transport) => {
                let path = transport.save().await.expect("Failed to save fixture");
                println!("Recorded fixture: {}", path.display());
            }
            Backend::Live => {}
        }
    }
}
