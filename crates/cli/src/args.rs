use sto_addresses_domain::{Network, NetworkError};
use thiserror::Error;

pub const USAGE: &str = "Usage: sto-addresses [NETWORK] [--json] [--checksum]

NETWORK     network name (ganache, mainnet, ropsten, kovan) or id; overrides STO_NETWORK
--json      print a JSON object instead of text lines
--checksum  print EIP-55 checksummed addresses";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    pub network: Option<Network>,
    pub json: bool,
    pub checksum: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Print(Options),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
    #[error(transparent)]
    Network(#[from] NetworkError),
}

pub fn parse_args<I>(args: I) -> Result<Command, ArgsError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--json" => options.json = true,
            "--checksum" => options.checksum = true,
            flag if flag.starts_with('-') => return Err(ArgsError::UnknownFlag(flag.to_string())),
            value if options.network.is_some() => {
                return Err(ArgsError::UnexpectedArgument(value.to_string()))
            }
            value => options.network = Some(value.parse()?),
        }
    }

    Ok(Command::Print(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn empty_args_print_with_defaults() {
        assert_eq!(
            parse_args(args(&[])),
            Ok(Command::Print(Options::default()))
        );
    }

    #[test]
    fn parses_network_and_flags() {
        let parsed = parse_args(args(&["--json", "kovan", "--checksum"]));
        assert_eq!(
            parsed,
            Ok(Command::Print(Options {
                network: Some(Network::Kovan),
                json: true,
                checksum: true,
            }))
        );
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse_args(args(&["kovan", "-h"])), Ok(Command::Help));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(
            parse_args(args(&["--yaml"])),
            Err(ArgsError::UnknownFlag("--yaml".to_string()))
        );
        assert_eq!(
            parse_args(args(&["kovan", "ropsten"])),
            Err(ArgsError::UnexpectedArgument("ropsten".to_string()))
        );
        assert_eq!(
            parse_args(args(&["99"])),
            Err(ArgsError::Network(NetworkError::UnknownId(99)))
        );
    }
}
