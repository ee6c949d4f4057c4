//! # Service Configuration
//!
//! Input limits and lookup behaviour for the supply-chain service.

use std::env;

/// Configuration for `SupplyChainService`.
///
/// All values have defaults suitable for a single-channel deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyChainConfig {
    /// Maximum length of entity and drug names, in bytes (default: 128).
    pub max_name_len: usize,

    /// Maximum length of free-text fields such as contacts and symptoms
    /// (default: 4096).
    pub max_text_len: usize,

    /// Maximum number of drugs listed on one medical report (default: 64).
    pub max_needed_drugs: usize,

    /// Whether `trace_drug` scans live inventories for the current holder
    /// (default: true). Decoding never depends on it.
    pub trace_holder_scan: bool,
}

impl Default for SupplyChainConfig {
    fn default() -> Self {
        Self {
            max_name_len: 128,
            max_text_len: 4096,
            max_needed_drugs: 64,
            trace_holder_scan: true,
        }
    }
}

impl SupplyChainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read overrides from the environment.
    ///
    /// - `PHARMA_MAX_NAME_LEN`
    /// - `PHARMA_MAX_TEXT_LEN`
    /// - `PHARMA_MAX_NEEDED_DRUGS`
    /// - `PHARMA_TRACE_HOLDER_SCAN` (`true`/`false`)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_name_len: parse_env("PHARMA_MAX_NAME_LEN").unwrap_or(defaults.max_name_len),
            max_text_len: parse_env("PHARMA_MAX_TEXT_LEN").unwrap_or(defaults.max_text_len),
            max_needed_drugs: parse_env("PHARMA_MAX_NEEDED_DRUGS")
                .unwrap_or(defaults.max_needed_drugs),
            trace_holder_scan: env::var("PHARMA_TRACE_HOLDER_SCAN")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.trace_holder_scan),
        }
    }

    pub fn with_max_name_len(mut self, len: usize) -> Self {
        self.max_name_len = len;
        self
    }

    pub fn with_max_text_len(mut self, len: usize) -> Self {
        self.max_text_len = len;
        self
    }

    pub fn with_max_needed_drugs(mut self, count: usize) -> Self {
        self.max_needed_drugs = count;
        self
    }

    pub fn with_trace_holder_scan(mut self, enabled: bool) -> Self {
        self.trace_holder_scan = enabled;
        self
    }
}

fn parse_env(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SupplyChainConfig::default();
        assert_eq!(config.max_name_len, 128);
        assert_eq!(config.max_needed_drugs, 64);
        assert!(config.trace_holder_scan);
    }

    #[test]
    fn test_config_builder() {
        let config = SupplyChainConfig::new()
            .with_max_name_len(16)
            .with_max_text_len(256)
            .with_max_needed_drugs(2)
            .with_trace_holder_scan(false);

        assert_eq!(config.max_name_len, 16);
        assert_eq!(config.max_text_len, 256);
        assert_eq!(config.max_needed_drugs, 2);
        assert!(!config.trace_holder_scan);
    }
}
