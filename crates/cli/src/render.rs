use serde::Serialize;
use serde_json::{Map, Value};
use sto_addresses_domain::{AddressResolver, ContractAddress, Network};

const UNCONFIGURED: &str = "<unconfigured>";

#[derive(Debug, Serialize)]
struct Report {
    network: Network,
    network_id: u64,
    addresses: Map<String, Value>,
}

fn format_address(address: ContractAddress, checksum: bool) -> String {
    if checksum {
        address.to_checksum()
    } else {
        address.to_string()
    }
}

/// One `name: address` line per contract, preceded by a network header.
pub fn render_text(resolver: &AddressResolver, checksum: bool) -> String {
    let network = resolver.network();
    let mut out = format!("network: {} (id {})\n", network, network.id());
    for (contract, address) in resolver.entries() {
        let value = address
            .map(|a| format_address(a, checksum))
            .unwrap_or_else(|| UNCONFIGURED.to_string());
        out.push_str(&format!("{contract}: {value}\n"));
    }
    out
}

pub fn render_json(
    resolver: &AddressResolver,
    checksum: bool,
) -> Result<String, serde_json::Error> {
    let network = resolver.network();
    let addresses = resolver
        .entries()
        .map(|(contract, address)| {
            (
                contract.to_string(),
                address.map_or(Value::Null, |a| Value::String(format_address(a, checksum))),
            )
        })
        .collect();

    serde_json::to_string_pretty(&Report {
        network,
        network_id: network.id(),
        addresses,
    })
}
