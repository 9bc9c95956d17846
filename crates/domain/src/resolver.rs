//! Compiled-in contract address table and the per-network resolver.

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::{address::ContractAddress, contract::Contract, network::Network};

const GANACHE_TICKER_REGISTRY: ContractAddress =
    ContractAddress::from_hex_literal("0xe7cb882cf70eead78d632aecd506451d96564f81");
const GANACHE_SECURITY_TOKEN_REGISTRY: ContractAddress =
    ContractAddress::from_hex_literal("0x1594660e094c6725bac79b27e6d019a30fbf4f23");
const GANACHE_CAPPED_STO_FACTORY: ContractAddress =
    ContractAddress::from_hex_literal("0xacd1e37478cc2a532270dccc63c70ae848be0192");

const ROPSTEN_TICKER_REGISTRY: ContractAddress =
    ContractAddress::from_hex_literal("0x8cd431b23415d132b82d44252c69e3458eec1229");
const ROPSTEN_SECURITY_TOKEN_REGISTRY: ContractAddress =
    ContractAddress::from_hex_literal("0x6487a0c9cc1c5f0d2ff70f0252e4bd2b8e1d014b");
const ROPSTEN_CAPPED_STO_FACTORY: ContractAddress =
    ContractAddress::from_hex_literal("0x4f8de4146250f60075a8357243a1b67c5052d80c");

const KOVAN_TICKER_REGISTRY: ContractAddress =
    ContractAddress::from_hex_literal("0xcf82d3f2abdf777f559e98d85f976283595f0d30");
const KOVAN_SECURITY_TOKEN_REGISTRY: ContractAddress =
    ContractAddress::from_hex_literal("0x00d4671f8c00fcfc2256e008242f07c1428b5836");
const KOVAN_CAPPED_STO_FACTORY: ContractAddress =
    ContractAddress::from_hex_literal("0x30e2c3fa3297808a2e9f176be6cc587cb76259c4");

/// Looks up the deployed address of `contract` on `network`.
///
/// Returns `None` when the table has no entry, which is currently the case for
/// every contract on [`Network::Mainnet`].
pub const fn lookup(contract: Contract, network: Network) -> Option<ContractAddress> {
    match (network, contract) {
        (Network::Ganache, Contract::TickerRegistry) => Some(GANACHE_TICKER_REGISTRY),
        (Network::Ganache, Contract::SecurityTokenRegistry) => {
            Some(GANACHE_SECURITY_TOKEN_REGISTRY)
        }
        (Network::Ganache, Contract::CappedStoFactory) => Some(GANACHE_CAPPED_STO_FACTORY),
        (Network::Ropsten, Contract::TickerRegistry) => Some(ROPSTEN_TICKER_REGISTRY),
        (Network::Ropsten, Contract::SecurityTokenRegistry) => {
            Some(ROPSTEN_SECURITY_TOKEN_REGISTRY)
        }
        (Network::Ropsten, Contract::CappedStoFactory) => Some(ROPSTEN_CAPPED_STO_FACTORY),
        (Network::Kovan, Contract::TickerRegistry) => Some(KOVAN_TICKER_REGISTRY),
        (Network::Kovan, Contract::SecurityTokenRegistry) => Some(KOVAN_SECURITY_TOKEN_REGISTRY),
        (Network::Kovan, Contract::CappedStoFactory) => Some(KOVAN_CAPPED_STO_FACTORY),
        (Network::Mainnet, _) => None,
    }
}

/// Every `(network, contract)` cell of the table, configured or not.
pub fn table() -> impl Iterator<Item = (Network, Contract, Option<ContractAddress>)> {
    Network::iter().flat_map(|network| {
        Contract::iter().map(move |contract| (network, contract, lookup(contract, network)))
    })
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("no {contract} address configured for network `{network}`")]
    Unconfigured { contract: Contract, network: Network },
}

/// Resolves contract addresses for one selected network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddressResolver {
    network: Network,
}

impl AddressResolver {
    pub const fn new(network: Network) -> Self {
        Self { network }
    }

    pub const fn network(&self) -> Network {
        self.network
    }

    pub const fn ticker_registry_address(&self) -> Option<ContractAddress> {
        lookup(Contract::TickerRegistry, self.network)
    }

    pub const fn security_token_registry_address(&self) -> Option<ContractAddress> {
        lookup(Contract::SecurityTokenRegistry, self.network)
    }

    pub const fn capped_sto_factory_address(&self) -> Option<ContractAddress> {
        lookup(Contract::CappedStoFactory, self.network)
    }

    pub const fn address_of(&self, contract: Contract) -> Option<ContractAddress> {
        lookup(contract, self.network)
    }

    /// Same as [`Self::address_of`] but treats a missing entry as an error.
    pub fn require(&self, contract: Contract) -> Result<ContractAddress, ResolveError> {
        self.address_of(contract).ok_or(ResolveError::Unconfigured {
            contract,
            network: self.network,
        })
    }

    /// All contracts with their address on the selected network.
    pub fn entries(&self) -> impl Iterator<Item = (Contract, Option<ContractAddress>)> {
        let network = self.network;
        Contract::iter().map(move |contract| (contract, lookup(contract, network)))
    }
}

impl From<Network> for AddressResolver {
    fn from(network: Network) -> Self {
        Self::new(network)
    }
}
