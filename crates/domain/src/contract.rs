use serde::Serialize;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Contracts whose deployed addresses the table tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Contract {
    TickerRegistry,
    SecurityTokenRegistry,
    CappedStoFactory,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn names_are_snake_case() {
        let names: Vec<String> = Contract::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "ticker_registry",
                "security_token_registry",
                "capped_sto_factory"
            ]
        );
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&Contract::CappedStoFactory).unwrap();
        assert_eq!(json, "\"capped_sto_factory\"");
    }
}
