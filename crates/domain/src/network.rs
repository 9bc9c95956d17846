//! Closed set of networks the address table knows about.

use std::str::FromStr;

use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter};
use thiserror::Error;

/// Networks with no configured contract addresses. Kept as a named list so the
/// gap shows up in code instead of being an implicit fall-through.
pub const UNCONFIGURED_NETWORKS: &[Network] = &[Network::Mainnet];

/// Target network, identified by its numeric network id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u64)]
pub enum Network {
    /// Local development chain.
    #[default]
    Ganache = 0,
    Mainnet = 1,
    Ropsten = 3,
    Kovan = 42,
}

impl Network {
    pub const fn id(self) -> u64 {
        self as u64
    }

    /// Returns `false` when the table carries no addresses for this network.
    pub fn is_configured(self) -> bool {
        !UNCONFIGURED_NETWORKS.contains(&self)
    }

    /// Iterates every known network in declaration order.
    pub fn all() -> impl Iterator<Item = Network> {
        Network::iter()
    }
}

/// Errors emitted when a network id or name does not match a known network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("unknown network id {0}")]
    UnknownId(u64),
    #[error("unknown network `{0}`")]
    UnknownName(String),
}

impl TryFrom<u64> for Network {
    type Error = NetworkError;

    fn try_from(id: u64) -> Result<Self, Self::Error> {
        Network::iter()
            .find(|network| network.id() == id)
            .ok_or(NetworkError::UnknownId(id))
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if let Ok(id) = trimmed.parse::<u64>() {
            return Network::try_from(id);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "ganache" | "local" | "dev" => Ok(Network::Ganache),
            "mainnet" => Ok(Network::Mainnet),
            "ropsten" => Ok(Network::Ropsten),
            "kovan" => Ok(Network::Kovan),
            _ => Err(NetworkError::UnknownName(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_network_ids() {
        assert_eq!(Network::Ganache.id(), 0);
        assert_eq!(Network::Mainnet.id(), 1);
        assert_eq!(Network::Ropsten.id(), 3);
        assert_eq!(Network::Kovan.id(), 42);
    }

    #[test]
    fn try_from_id_accepts_known_and_rejects_others() {
        for network in Network::all() {
            assert_eq!(Network::try_from(network.id()), Ok(network));
        }
        assert_eq!(Network::try_from(2), Err(NetworkError::UnknownId(2)));
        assert_eq!(Network::try_from(5), Err(NetworkError::UnknownId(5)));
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Kovan".parse::<Network>(), Ok(Network::Kovan));
        assert_eq!(" ROPSTEN ".parse::<Network>(), Ok(Network::Ropsten));
        assert_eq!("local".parse::<Network>(), Ok(Network::Ganache));
        assert_eq!("42".parse::<Network>(), Ok(Network::Kovan));
        assert_eq!(
            "goerli".parse::<Network>(),
            Err(NetworkError::UnknownName("goerli".to_string()))
        );
        assert_eq!("7".parse::<Network>(), Err(NetworkError::UnknownId(7)));
    }

    #[test]
    fn display_is_snake_case_name() {
        assert_eq!(Network::Ganache.to_string(), "ganache");
        assert_eq!(Network::Kovan.as_ref(), "kovan");
    }

    #[test]
    fn only_mainnet_is_unconfigured() {
        let unconfigured: Vec<_> = Network::all().filter(|n| !n.is_configured()).collect();
        assert_eq!(unconfigured, vec![Network::Mainnet]);
    }

    #[test]
    fn default_is_local_dev_network() {
        assert_eq!(Network::default(), Network::Ganache);
    }
}
