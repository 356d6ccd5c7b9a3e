//! CIDR network ranges
//!
//! Serialized as the usual `address/prefix` string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpNetError {
    #[error("'{0}' is missing a '/prefix' length")]
    MissingPrefix(String),

    #[error("'{0}' is not an IP address")]
    InvalidAddress(String),

    #[error("'{0}' is not a valid prefix length")]
    InvalidPrefix(String),

    #[error("prefix length {prefix_len} is too long for {addr}")]
    PrefixTooLong { addr: IpAddr, prefix_len: u8 },
}

/// A network range. The stored address always has its host bits cleared,
/// so `10.0.0.5/16` becomes `10.0.0.0/16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IpNet {
    addr: IpAddr,
    prefix_len: u8,
}

impl IpNet {
    pub fn new(addr: IpAddr, prefix_len: u8) -> Result<Self, IpNetError> {
        match addr {
            IpAddr::V4(v4) if prefix_len <= 32 => Ok(Self::v4(v4, prefix_len)),
            IpAddr::V6(v6) if prefix_len <= 128 => Ok(Self {
                addr: IpAddr::V6(mask_v6(v6, prefix_len)),
                prefix_len,
            }),
            _ => Err(IpNetError::PrefixTooLong { addr, prefix_len }),
        }
    }

    /// IPv4 constructor usable in constants.
    pub const fn v4(addr: Ipv4Addr, prefix_len: u8) -> Self {
        assert!(prefix_len <= 32, "IPv4 prefix length exceeds 32");
        let mask = match prefix_len {
            0 => 0,
            n => u32::MAX << (32 - n as u32),
        };
        let [a, b, c, d] = (u32::from_be_bytes(addr.octets()) & mask).to_be_bytes();
        Self {
            addr: IpAddr::V4(Ipv4Addr::new(a, b, c, d)),
            prefix_len,
        }
    }

    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn prefix_len(&self) -> u8 {
        self.prefix_len
    }
}

fn mask_v6(addr: Ipv6Addr, prefix_len: u8) -> Ipv6Addr {
    let mask = match prefix_len {
        0 => 0,
        n => u128::MAX << (128 - u32::from(n)),
    };
    Ipv6Addr::from(u128::from(addr) & mask)
}

impl FromStr for IpNet {
    type Err = IpNetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, prefix) = s
            .split_once('/')
            .ok_or_else(|| IpNetError::MissingPrefix(s.to_string()))?;
        let addr = addr
            .parse::<IpAddr>()
            .map_err(|_| IpNetError::InvalidAddress(addr.to_string()))?;
        let prefix_len = prefix
            .parse::<u8>()
            .map_err(|_| IpNetError::InvalidPrefix(prefix.to_string()))?;
        Self::new(addr, prefix_len)
    }
}

impl TryFrom<String> for IpNet {
    type Error = IpNetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<IpNet> for String {
    fn from(net: IpNet) -> Self {
        net.to_string()
    }
}

impl fmt::Display for IpNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix_len)
    }
}
