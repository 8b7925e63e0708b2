use crate::prelude::*;

use bech32::{Bech32, Hrp};

/// Human readable part of mainnet payment addresses.
pub const MAINNET_PREFIX: &str = "addr";

/// Human readable part of testnet payment addresses.
pub const TESTNET_PREFIX: &str = "addr_test";

/// Testnet enterprise address that simulated mints pay to unless told otherwise.
pub const DEFAULT_RECIPIENT: &str =
    "addr_test1vz46h2at4w46h2at4w46h2at4w46h2at4w46h2at4w46h2cw5nyuy";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Network {
    #[display("mainnet")]
    Mainnet,
    #[display("testnet")]
    Testnet,
}

impl Network {
    pub fn prefix(&self) -> &'static str {
        match self {
            Network::Mainnet => MAINNET_PREFIX,
            Network::Testnet => TESTNET_PREFIX,
        }
    }

    /// Network id carried in the low nibble of the address header byte.
    pub fn network_id(&self) -> u8 {
        match self {
            Network::Mainnet => 1,
            Network::Testnet => 0,
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            MAINNET_PREFIX => Some(Network::Mainnet),
            TESTNET_PREFIX => Some(Network::Testnet),
            _ => None,
        }
    }
}

/// A Shelley payment address, decoded from its bech32 form.
///
/// The raw payload (header byte followed by the credentials) is kept as is,
/// only the header's network id is checked against the human readable part.
#[derive(Clone, PartialEq, Eq, Hash, Getters)]
pub struct Address {
    #[getset(get = "pub")]
    network: Network,

    #[getset(get = "pub")]
    payload: Vec<u8>,
}

impl Address {
    pub fn from_bech32(bech32: impl AsRef<str>) -> Result<Self, InvalidAddressError> {
        let bech32 = bech32.as_ref();
        let (hrp, payload) =
            bech32::decode(bech32).map_err(|e| InvalidAddressError::Bech32Decode {
                bad_value: bech32.to_owned(),
                underlying: e.to_string(),
            })?;

        let prefix = hrp.as_str().to_ascii_lowercase();
        let Some(network) = Network::from_prefix(&prefix) else {
            return Err(InvalidAddressError::UnsupportedPrefix { prefix });
        };

        let Some(header) = payload.first() else {
            return Err(InvalidAddressError::EmptyPayload);
        };
        let network_id = header & 0x0f;
        if network_id != network.network_id() {
            return Err(InvalidAddressError::NetworkMismatch { prefix, network_id });
        }

        Ok(Self { network, payload })
    }
}

impl std::str::FromStr for Address {
    type Err = InvalidAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bech32(s)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let hrp = Hrp::parse_unchecked(self.network.prefix());
        bech32::encode_lower_to_fmt::<Bech32, _>(f, hrp, &self.payload)
            .map_err(|_| std::fmt::Error)
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({self})")
    }
}

impl Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
