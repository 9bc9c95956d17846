//! Compiled-in deployment addresses for the STO contract suite.
//!
//! The table is keyed by [`Network`] and [`Contract`]. Callers pick a network
//! once, either explicitly or through [`ResolverConfig::load_from_env`], and
//! query an [`AddressResolver`] for the addresses deployed there. Networks
//! without a deployment resolve to `None`.

pub mod address;
pub mod config;
pub mod contract;
pub mod network;
pub mod resolver;
pub mod telemetry;

pub use address::{AddressFormatError, ContractAddress, ADDRESS_LENGTH};
pub use config::{ConfigError, ResolverConfig, NETWORK_VAR};
pub use contract::Contract;
pub use network::{Network, NetworkError, UNCONFIGURED_NETWORKS};
pub use resolver::{lookup, table, AddressResolver, ResolveError};
pub use telemetry::{init_telemetry, TelemetryConfig, TelemetryError};
