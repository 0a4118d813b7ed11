//! Shared setup for integration tests

use ctor::ctor;
use tracing_subscriber::EnvFilter;

/// Route library logs to the test harness once per test binary.
/// Filter with `RUST_LOG`, e.g. `RUST_LOG=line_rating_core=debug`.
#[ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
