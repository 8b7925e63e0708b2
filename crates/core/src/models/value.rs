use crate::prelude::*;

/// An amount of lovelace, the smallest unit of ada.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, From, Display, Serialize,
)]
#[display("{_0} lovelace")]
#[serde(transparent)]
pub struct Value(u64);

impl Value {
    /// The payment every simulated mint makes.
    pub const ONE: Self = Self(1);

    pub fn lovelace(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}
