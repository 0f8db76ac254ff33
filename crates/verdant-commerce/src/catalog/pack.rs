//! Pack sizes and their pricing rules.

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::money::Money;

/// Pack size variants sold for every loose-leaf tea.
///
/// The catalog price is for the 250 g pouch; larger packs are derived from
/// it with a bulk discount (10% off per-gram for 500 g, 15% off for 1 kg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PackSize {
    /// 250 g pouch, the base size.
    #[default]
    #[serde(rename = "250g")]
    G250,
    /// 500 g pack at twice the base price less 10%.
    #[serde(rename = "500g")]
    G500,
    /// 1 kg bulk pack at four times the base price less 15%.
    #[serde(rename = "1kg")]
    Kg1,
}

impl PackSize {
    /// All sizes, smallest first.
    pub const ALL: [PackSize; 3] = [PackSize::G250, PackSize::G500, PackSize::Kg1];

    /// Short size tag (e.g., "250g").
    pub fn as_str(&self) -> &'static str {
        match self {
            PackSize::G250 => "250g",
            PackSize::G500 => "500g",
            PackSize::Kg1 => "1kg",
        }
    }

    /// Shelf label shown on the product page.
    pub fn label(&self) -> &'static str {
        match self {
            PackSize::G250 => "250g Pouch",
            PackSize::G500 => "500g Pack",
            PackSize::Kg1 => "1kg Bulk",
        }
    }

    /// Badge shown next to the label, if any.
    pub fn badge(&self) -> Option<&'static str> {
        match self {
            PackSize::Kg1 => Some("Best Value"),
            _ => None,
        }
    }

    /// Net weight in grams.
    pub fn grams(&self) -> u32 {
        match self {
            PackSize::G250 => 250,
            PackSize::G500 => 500,
            PackSize::Kg1 => 1000,
        }
    }

    /// Parse a size tag (e.g., "500g").
    pub fn from_str_tag(s: &str) -> Option<Self> {
        PackSize::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
    }

    /// Price of this pack given the 250 g base price.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the scaled price does not fit.
    pub fn price_for(&self, base: Money) -> Result<Money, CommerceError> {
        match self {
            PackSize::G250 => Ok(base),
            PackSize::G500 => base.try_multiply(2)?.percent(90),
            PackSize::Kg1 => base.try_multiply(4)?.percent(85),
        }
    }
}

impl std::fmt::Display for PackSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
