//! Network classes used to route notifications.

use core::fmt;

/// The class a network belongs to.
///
/// Every network is either a production network or a test network; the
/// class decides which notification channel its status is reported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NetworkClass {
    Mainnet,
    Testnet,
}

impl NetworkClass {
    /// Classify from a mainnet flag.
    pub const fn from_mainnet(is_mainnet: bool) -> Self {
        if is_mainnet {
            NetworkClass::Mainnet
        } else {
            NetworkClass::Testnet
        }
    }

    /// Returns true for the mainnet class.
    pub const fn is_mainnet(&self) -> bool {
        matches!(self, NetworkClass::Mainnet)
    }

    /// Lowercase label for logs and configuration keys.
    pub const fn label(&self) -> &'static str {
        match self {
            NetworkClass::Mainnet => "mainnet",
            NetworkClass::Testnet => "testnet",
        }
    }
}

impl fmt::Display for NetworkClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
