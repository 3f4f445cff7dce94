#![allow(dead_code)]

pub mod fixtures;
pub mod generators;

use std::sync::Once;

static INIT: Once = Once::new();

/// Route `tracing` output to the test harness. Set `RUST_LOG=text_ot=debug`
/// to see it.
pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
