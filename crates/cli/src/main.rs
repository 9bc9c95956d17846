//! Prints the compiled-in STO contract addresses for a network.

mod args;
mod render;

use std::{env, io};

use sto_addresses_domain::{
    init_telemetry, AddressResolver, ConfigError, ResolverConfig, TelemetryConfig, TelemetryError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use args::{parse_args, ArgsError, Command, Options, USAGE};
use render::{render_json, render_text};

fn main() -> io::Result<()> {
    if let Err(err) = run() {
        eprintln!("[sto-addresses] {err}");
        if matches!(err, CliError::Args(_)) {
            eprintln!("{USAGE}");
        }
        return Err(io::Error::other(err.to_string()));
    }

    Ok(())
}

fn run() -> Result<(), CliError> {
    let options = match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Command::Print(options) => options,
    };

    init_telemetry(&TelemetryConfig::from_env("STO_ADDRESSES"))?;
    let resolver = select_resolver(&options)?;
    report_gaps(&resolver);

    let output = if options.json {
        render_json(&resolver, options.checksum)?
    } else {
        render_text(&resolver, options.checksum)
    };
    print!("{output}");
    if options.json {
        println!();
    }

    Ok(())
}

fn select_resolver(options: &Options) -> Result<AddressResolver, CliError> {
    let resolver = match options.network {
        Some(network) => AddressResolver::new(network),
        None => ResolverConfig::load_from_env()?.resolver(),
    };
    let network = resolver.network();
    info!(network = %network, network_id = network.id(), "resolving contract addresses");
    Ok(resolver)
}

fn report_gaps(resolver: &AddressResolver) {
    let network = resolver.network();
    for (contract, address) in resolver.entries() {
        match address {
            Some(address) => debug!(%contract, %address, "address configured"),
            None => warn!(%contract, %network, "no address configured for network"),
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Args(#[from] ArgsError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to encode json: {0}")]
    Json(#[from] serde_json::Error),
}
