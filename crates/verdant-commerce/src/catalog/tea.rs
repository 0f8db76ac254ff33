//! Tea product types.

use serde::{Deserialize, Serialize};

use crate::ids::TeaId;
use crate::money::Money;

/// Catalog category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    GreenTea,
    BlackTea,
    Oolong,
    WhiteTea,
    HerbalInfusions,
    WellnessBlends,
    GiftingSets,
}

impl Category {
    /// All categories, in shop display order.
    pub const ALL: [Category; 7] = [
        Category::GreenTea,
        Category::BlackTea,
        Category::Oolong,
        Category::WhiteTea,
        Category::HerbalInfusions,
        Category::WellnessBlends,
        Category::GiftingSets,
    ];

    /// Display name shown in the shop.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::GreenTea => "Green Tea",
            Category::BlackTea => "Black Tea",
            Category::Oolong => "Oolong",
            Category::WhiteTea => "White Tea",
            Category::HerbalInfusions => "Herbal Infusions",
            Category::WellnessBlends => "Wellness Blends",
            Category::GiftingSets => "Gifting Sets",
        }
    }

    /// Parse a display name back into a category.
    pub fn from_display_name(s: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.display_name().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Caffeine level of a tea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Caffeine {
    None,
    Low,
    Medium,
    High,
}

impl Caffeine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Caffeine::None => "None",
            Caffeine::Low => "Low",
            Caffeine::Medium => "Medium",
            Caffeine::High => "High",
        }
    }
}

/// Brewing guidance printed on the pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteepingInfo {
    /// Water temperature (e.g., "80°C").
    pub temperature: String,
    /// Steeping time (e.g., "2-3 mins").
    pub time: String,
    /// Yield per pack (e.g., "approx. 80 cups").
    pub cups_per_pack: String,
}

/// Provenance details for the harvest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarvestInfo {
    /// Harvest year.
    pub year: String,
    /// Flush (e.g., "First Flush").
    pub flush: String,
    /// Garden elevation (e.g., "800m").
    pub elevation: String,
    /// Tasting notes.
    pub tasting_notes: Vec<String>,
    /// Processing style (e.g., "Sun-dried").
    pub processing: String,
}

/// A tea in the catalog.
///
/// Immutable; `price` is the base price for the 250 g pouch. Larger pack
/// prices derive from it via [`super::PackSize::price_for`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tea {
    /// Unique tea identifier.
    pub id: TeaId,
    /// Display name.
    pub name: String,
    /// Catalog category.
    pub category: Category,
    /// Base price for the 250 g pouch.
    pub price: Money,
    /// Full description for the product page.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Origin (e.g., "Hangzhou, China").
    pub origin: String,
    /// Growing region.
    pub region: String,
    /// Caffeine level.
    pub caffeine: Caffeine,
    /// Average star rating out of 5.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Wellness benefits shown on the product page.
    pub benefits: Vec<String>,
    /// Brewing guidance.
    pub steeping: SteepingInfo,
    /// Harvest provenance.
    pub harvest: HarvestInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display_names() {
        assert_eq!(Category::GreenTea.display_name(), "Green Tea");
        assert_eq!(Category::GiftingSets.display_name(), "Gifting Sets");
    }

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_display_name(category.display_name()),
                Some(category)
            );
        }
        assert_eq!(Category::from_display_name("Builder's Brew"), None);
    }
}
