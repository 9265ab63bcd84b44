use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{BITCOIN_ADDRESS_PATTERN, EVM_ADDRESS_PATTERN, SUPPORTED_NETWORK};

static EVM_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EVM_ADDRESS_PATTERN).expect("valid EVM address pattern"));

static BITCOIN_ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(BITCOIN_ADDRESS_PATTERN).expect("valid bitcoin address pattern"));

/// Networks the front end lets a user pick. Only Ethereum is analyzed today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Ethereum,
    Bitcoin,
    Polygon,
    Bsc,
    Arbitrum,
    Optimism,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown network: {0}")]
pub struct UnknownNetwork(pub String);

impl FromStr for Network {
    type Err = UnknownNetwork;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ethereum" => Ok(Network::Ethereum),
            "bitcoin" => Ok(Network::Bitcoin),
            "polygon" => Ok(Network::Polygon),
            "bsc" => Ok(Network::Bsc),
            "arbitrum" => Ok(Network::Arbitrum),
            "optimism" => Ok(Network::Optimism),
            _ => Err(UnknownNetwork(s.trim().to_string())),
        }
    }
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ethereum => "ethereum",
            Network::Bitcoin => "bitcoin",
            Network::Polygon => "polygon",
            Network::Bsc => "bsc",
            Network::Arbitrum => "arbitrum",
            Network::Optimism => "optimism",
        }
    }

    pub fn is_supported(&self) -> bool {
        self.as_str() == SUPPORTED_NETWORK
    }

    pub fn is_valid_address(&self, address: &str) -> bool {
        match self {
            Network::Bitcoin => BITCOIN_ADDRESS_RE.is_match(address),
            _ => EVM_ADDRESS_RE.is_match(address),
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lookup request, as submitted by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressQuery {
    pub address: String,
    pub network: String,
}

impl AddressQuery {
    pub fn new(address: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            address: address.into().trim().to_string(),
            network: network.into().trim().to_string(),
        }
    }
}
