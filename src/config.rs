//! Client Configuration
//!
//! Values baked in at build time from the environment (`CANISTER_ID_TODO`,
//! `DFX_NETWORK`), plus query and notification timings.

use std::time::Duration;

use serde::Serialize;

/// How long a failure notice stays on screen
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(4);

const LOCAL_HOST: &str = "http://localhost:4943";
const IC_HOST: &str = "https://icp-api.io";

/// Which replica the bridge talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Local,
    Ic,
}

impl Network {
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("ic") => Network::Ic,
            _ => Network::Local,
        }
    }

    pub fn host(&self) -> &'static str {
        match self {
            Network::Local => LOCAL_HOST,
            Network::Ic => IC_HOST,
        }
    }
}

/// Settings handed to the bridge at startup
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub canister_id: Option<String>,
    pub network: Network,
    pub host: String,
    /// Retries after the first failed list-all read
    #[serde(skip)]
    pub query_retries: u32,
}

impl ClientConfig {
    pub fn new(canister_id: Option<&str>, network: Option<&str>) -> Self {
        let network = Network::from_env_value(network);
        Self {
            canister_id: canister_id
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
            network,
            host: network.host().to_string(),
            query_retries: 1,
        }
    }

    /// Configuration captured when the crate was built
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CANISTER_ID_TODO"), option_env!("DFX_NETWORK"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_local_replica() {
        let config = ClientConfig::new(None, None);
        assert_eq!(config.network, Network::Local);
        assert_eq!(config.host, "http://localhost:4943");
        assert_eq!(config.canister_id, None);
        assert_eq!(config.query_retries, 1);
    }

    #[test]
    fn test_mainnet_and_canister_id() {
        let config = ClientConfig::new(Some(" bkyz2-fmaaa-aaaaa-qaaaq-cai "), Some("ic"));
        assert_eq!(config.network, Network::Ic);
        assert_eq!(config.host, "https://icp-api.io");
        assert_eq!(config.canister_id.as_deref(), Some("bkyz2-fmaaa-aaaaa-qaaaq-cai"));
    }

    #[test]
    fn test_bridge_json_shape() {
        let config = ClientConfig::new(Some("abc"), Some("local"));
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["canisterId"], "abc");
        assert_eq!(json["network"], "local");
        assert!(json.get("queryRetries").is_none());
    }

    #[test]
    fn test_blank_canister_id_is_none() {
        assert_eq!(ClientConfig::new(Some("  "), None).canister_id, None);
    }
}
