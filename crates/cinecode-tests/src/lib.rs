//! Integration test crate for cinecode.
//!
//! This crate exists solely to hold cross-module integration tests.
//! It drives cinecode-core through its public API only.

#[cfg(test)]
mod conversions;

#[cfg(test)]
mod scenarios;

#[cfg(test)]
mod serialization;

/// Install a fmt subscriber for test output, filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
#[cfg(test)]
pub(crate) fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_test_writer()
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
