//! The fixed catalog of locations to plot.
//!
//! Some entries are neighborhoods, some are parks. The category flag is
//! necessary even though these parks happen to have "Park" in their name;
//! that is not a given (e.g. "Stony Brook Playground").

use serde::{Deserialize, Serialize};

/// Stable identity of a catalog entry (its index in the ordered catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationId(pub usize);

/// Whether an entry is a park or a neighborhood. Drives which content
/// provider enriches it and which icon its marker gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Park,
    Neighborhood,
}

/// One named place in the fixed catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub display_name: String,
    pub region: String,
    pub category: Category,
    /// Mutated only by the filter engine.
    pub visible: bool,
}

impl Location {
    pub fn new(id: LocationId, display_name: &str, region: &str, category: Category) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            region: region.to_string(),
            category,
            visible: true,
        }
    }

    /// The free-text lookup query for this location, e.g. "Brooklyn, NY".
    pub fn query(&self) -> String {
        format!("{}, {}", self.display_name, self.region)
    }

    /// The haystack the filter predicate runs against.
    pub fn filter_text(&self) -> String {
        format!("{}{}", self.display_name, self.region)
    }
}

/// The default ten NYC locations, in display order.
pub fn default_catalog() -> Vec<Location> {
    let entries: [(&str, Category); 10] = [
        ("Brooklyn", Category::Neighborhood),
        ("Queens", Category::Neighborhood),
        ("Harlem", Category::Neighborhood),
        ("Lower East Side", Category::Neighborhood),
        ("Washington Heights", Category::Neighborhood),
        ("Soho", Category::Neighborhood),
        ("Washington Square Park", Category::Park),
        ("Central Park", Category::Park),
        ("Astoria Park", Category::Park),
        ("Madison Square Park", Category::Park),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (name, category))| Location::new(LocationId(i), name, "NY", *category))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 10);
        assert!(catalog.iter().all(|loc| loc.visible));
        assert_eq!(
            catalog.iter().filter(|l| l.category == Category::Park).count(),
            4
        );
        // Ids follow catalog order.
        for (i, loc) in catalog.iter().enumerate() {
            assert_eq!(loc.id, LocationId(i));
        }
    }

    #[test]
    fn test_query_format() {
        let catalog = default_catalog();
        assert_eq!(catalog[0].query(), "Brooklyn, NY");
        assert_eq!(catalog[7].query(), "Central Park, NY");
    }
}
