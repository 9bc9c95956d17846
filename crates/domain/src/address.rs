//! 20-byte contract addresses and their textual forms.

use std::{fmt, str::FromStr};

use hex::encode as hex_encode;
use serde::{Serialize, Serializer};
use sha3::{Digest, Keccak256};
use thiserror::Error;

/// Length of an address in bytes.
pub const ADDRESS_LENGTH: usize = 20;

/// Length of the hex body (without the `0x` prefix).
pub const ADDRESS_HEX_LENGTH: usize = ADDRESS_LENGTH * 2;

/// Errors emitted when user-supplied addresses fail validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressFormatError {
    #[error("address must start with `0x`")]
    MissingPrefix,
    #[error("address must be exactly {ADDRESS_HEX_LENGTH} hex characters after `0x`")]
    WrongLength,
    #[error("address contains non-hex characters")]
    NonHex,
}

/// A deployed contract's 20-byte account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContractAddress([u8; ADDRESS_LENGTH]);

impl ContractAddress {
    /// Builds an address from a `0x`-prefixed hex literal.
    ///
    /// Meant for `const` items: a malformed literal fails the build.
    ///
    /// # Panics
    ///
    /// Panics if `literal` is not `0x` followed by 40 hex characters.
    pub const fn from_hex_literal(literal: &'static str) -> Self {
        let raw = literal.as_bytes();
        if raw.len() != 2 + ADDRESS_HEX_LENGTH || raw[0] != b'0' || raw[1] != b'x' {
            panic!("address literal must be `0x` followed by 40 hex characters");
        }

        let mut bytes = [0u8; ADDRESS_LENGTH];
        let mut index = 0;
        while index < ADDRESS_LENGTH {
            let high = hex_nibble(raw[2 + index * 2]);
            let low = hex_nibble(raw[3 + index * 2]);
            bytes[index] = (high << 4) | low;
            index += 1;
        }

        Self(bytes)
    }

    pub const fn from_bytes(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ADDRESS_LENGTH] {
        &self.0
    }

    /// Renders the EIP-55 mixed-case checksum encoding.
    pub fn to_checksum(&self) -> String {
        let lower = hex_encode(self.0);
        let digest = Keccak256::digest(lower.as_bytes());

        let mut out = String::with_capacity(2 + ADDRESS_HEX_LENGTH);
        out.push_str("0x");
        for (index, ch) in lower.chars().enumerate() {
            let byte = digest[index / 2];
            let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if nibble >= 8 {
                out.push(ch.to_ascii_uppercase());
            } else {
                out.push(ch);
            }
        }
        out
    }
}

const fn hex_nibble(ch: u8) -> u8 {
    match ch {
        b'0'..=b'9' => ch - b'0',
        b'a'..=b'f' => ch - b'a' + 10,
        b'A'..=b'F' => ch - b'A' + 10,
        _ => panic!("address literal contains a non-hex character"),
    }
}

impl FromStr for ContractAddress {
    type Err = AddressFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let body = value.strip_prefix("0x").ok_or(AddressFormatError::MissingPrefix)?;

        if body.len() != ADDRESS_HEX_LENGTH {
            return Err(AddressFormatError::WrongLength);
        }

        let mut bytes = [0u8; ADDRESS_LENGTH];
        hex::decode_to_slice(body, &mut bytes).map_err(|_| AddressFormatError::NonHex)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex_encode(self.0))
    }
}

impl fmt::Debug for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContractAddress({self})")
    }
}

impl Serialize for ContractAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
