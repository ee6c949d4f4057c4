//! Clock and nonce adapters.

use crate::ports::{NonceSource, TimeSource};
use chrono::{SecondsFormat, Utc};

/// Wall clock, RFC 3339 UTC with second precision.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now_rfc3339(&self) -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

/// Nonces drawn from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomNonceSource;

impl NonceSource for RandomNonceSource {
    fn next_nonce(&self) -> u64 {
        rand::random()
    }
}
