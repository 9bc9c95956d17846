//! Environment-driven selection of the target network.

use std::env;

use thiserror::Error;
use tracing::debug;

use crate::{
    network::{Network, NetworkError},
    resolver::AddressResolver,
};

/// Variable naming the target network, by name (`kovan`) or id (`42`).
pub const NETWORK_VAR: &str = "STO_NETWORK";

/// Selected network derived from `.env`/process variables. Falls back to the
/// local development network when nothing is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverConfig {
    network: Network,
}

impl ResolverConfig {
    pub fn new(network: Network) -> Self {
        Self { network }
    }

    /// Hydrates `.env` (if present) and reads `STO_NETWORK`. A malformed value
    /// surfaces as `ConfigError` instead of silently picking a default.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        hydrate_env_file()?;

        let network = match get_optional_var(NETWORK_VAR) {
            Some(raw) => raw
                .parse()
                .map_err(|source| ConfigError::InvalidNetwork {
                    key: NETWORK_VAR,
                    source,
                })?,
            None => {
                debug!(key = NETWORK_VAR, "network not set, using local development network");
                Network::default()
            }
        };

        Ok(Self { network })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn resolver(&self) -> AddressResolver {
        AddressResolver::new(self.network)
    }
}

fn get_optional_var(key: &'static str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn hydrate_env_file() -> Result<(), ConfigError> {
    if env::var_os("STO_ADDRESSES_SKIP_DOTENV").is_some() {
        return Ok(());
    }
    match dotenvy::dotenv() {
        Ok(_) => {}
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => return Err(ConfigError::Dotenv { source: err }),
    }

    Ok(())
}

/// Errors emitted when `.env` hydration or environment parsing fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid network in `{key}`: {source}")]
    InvalidNetwork {
        key: &'static str,
        #[source]
        source: NetworkError,
    },
    #[error("failed to load .env file: {source}")]
    Dotenv {
        #[from]
        source: dotenvy::Error,
    },
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    pub(crate) static ENV_GUARD: Mutex<()> = Mutex::new(());

    fn reset_env() {
        std::env::set_var("STO_ADDRESSES_SKIP_DOTENV", "1");
        std::env::remove_var(NETWORK_VAR);
    }

    #[test]
    fn defaults_to_local_dev_network() {
        let _guard = ENV_GUARD.lock().unwrap();
        reset_env();

        let config = ResolverConfig::load_from_env().expect("config loads");
        assert_eq!(config.network(), Network::Ganache);
    }

    #[test]
    fn reads_network_by_name_and_id() {
        let _guard = ENV_GUARD.lock().unwrap();
        reset_env();

        std::env::set_var(NETWORK_VAR, "kovan");
        let config = ResolverConfig::load_from_env().expect("config loads");
        assert_eq!(config.network(), Network::Kovan);

        std::env::set_var(NETWORK_VAR, "3");
        let config = ResolverConfig::load_from_env().expect("config loads");
        assert_eq!(config.resolver().network(), Network::Ropsten);

        reset_env();
    }

    #[test]
    fn network_var_is_trimmed_and_empty_means_default() {
        let _guard = ENV_GUARD.lock().unwrap();
        reset_env();

        std::env::set_var(NETWORK_VAR, "  mainnet ");
        let config = ResolverConfig::load_from_env().expect("config loads");
        assert_eq!(config.network(), Network::Mainnet);

        std::env::set_var(NETWORK_VAR, "   ");
        let config = ResolverConfig::load_from_env().expect("config loads");
        assert_eq!(config.network(), Network::Ganache);

        reset_env();
    }

    #[test]
    fn unknown_network_is_rejected() {
        let _guard = ENV_GUARD.lock().unwrap();
        reset_env();
        std::env::set_var(NETWORK_VAR, "rinkeby");

        let err = ResolverConfig::load_from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNetwork {
                key: NETWORK_VAR,
                source: NetworkError::UnknownName(_),
            }
        ));

        reset_env();
    }
}
