//! Product catalog: teas, categories, pack sizes.

mod data;
mod pack;
mod tea;

pub use pack::PackSize;
pub use tea::{Caffeine, Category, HarvestInfo, SteepingInfo, Tea};

use crate::ids::TeaId;

/// The static product catalog.
///
/// Seeded with the house collection; immutable for the lifetime of the
/// storefront.
#[derive(Debug, Clone)]
pub struct Catalog {
    teas: Vec<Tea>,
}

impl Catalog {
    /// Create a catalog from an explicit list of teas.
    pub fn new(teas: Vec<Tea>) -> Self {
        Self { teas }
    }

    /// Look up a tea by id.
    pub fn get(&self, id: &TeaId) -> Option<&Tea> {
        self.teas.iter().find(|t| &t.id == id)
    }

    /// All teas in a category, in catalog order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Tea> {
        self.teas.iter().filter(move |t| t.category == category)
    }

    /// Iterate over the full catalog.
    pub fn iter(&self) -> impl Iterator<Item = &Tea> {
        self.teas.iter()
    }

    /// Number of teas in the catalog.
    pub fn len(&self) -> usize {
        self.teas.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.teas.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(data::house_collection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_seeded() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::default();
        let tea = catalog.get(&TeaId::new("1")).unwrap();
        assert_eq!(tea.name, "Misty Peak Dragon Well");
    }

    #[test]
    fn test_lookup_missing() {
        let catalog = Catalog::default();
        assert!(catalog.get(&TeaId::new("no-such-tea")).is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::default();
        let greens: Vec<_> = catalog.by_category(Category::GreenTea).collect();
        assert_eq!(greens.len(), 1);
        assert_eq!(greens[0].id, TeaId::new("1"));
    }
}
