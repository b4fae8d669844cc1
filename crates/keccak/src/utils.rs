use std::sync::Once;

use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

static INIT: Once = Once::new();

/// A simple logger, filtered by `RUST_LOG` and defaulting to `INFO`.
///
/// Safe to call more than once; only the first call installs the subscriber.
pub fn setup_logger() {
    INIT.call_once(|| {
        let env_filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = Registry::default().with(env_filter).with(ForestLayer::default()).try_init();
    });
}
