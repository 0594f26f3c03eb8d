use std::fmt;
use std::str::FromStr;

use super::RankingError;

const ADDRESS_LEN: usize = 20;

fn parse_address(input: &str) -> Result<[u8; ADDRESS_LEN], RankingError> {
    let digits = input.strip_prefix("0x").unwrap_or(input);
    let mut bytes = [0u8; ADDRESS_LEN];
    hex::decode_to_slice(digits, &mut bytes)
        .map_err(|_| RankingError::InvalidAddress(input.to_owned()))?;
    Ok(bytes)
}

macro_rules! address_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub [u8; ADDRESS_LEN]);

        impl $name {
            pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
                Self(bytes)
            }

            pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl FromStr for $name {
            type Err = RankingError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_address(s).map(Self)
            }
        }
    };
}

address_id!(
    /// Account that owns avatars. At most one ranking entry exists per owner.
    OwnerId
);

address_id!(
    /// A single avatar (character) of an owner.
    AvatarId
);

/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
