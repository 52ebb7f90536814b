//! Business categories recognised by the engine.
//!
//! The enum offers compile-time safety for category lookups; the
//! [`CategoryMap`] translates external places-API identifiers into it.
//!
//! # Examples
//! ```
//! use nightowl_core::Category;
//!
//! assert_eq!(Category::Gas.as_str(), "gas");
//! assert_eq!(Category::Coffee.to_string(), "coffee");
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Internal category tag for a business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    /// Restaurants, diners, and fast food.
    Food,
    /// Coffee shops and cafes.
    Coffee,
    /// Fuel stations.
    Gas,
    /// Pharmacies and drug stores.
    Pharmacy,
    /// Groceries and convenience stores.
    Grocery,
    /// Gyms and fitness centres.
    Gym,
    /// Laundromats and other round-the-clock services.
    Services,
    /// Nightlife and entertainment venues.
    Entertainment,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 8] = [
        Self::Food,
        Self::Coffee,
        Self::Gas,
        Self::Pharmacy,
        Self::Grocery,
        Self::Gym,
        Self::Services,
        Self::Entertainment,
    ];

    /// Return the category as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use nightowl_core::Category;
    ///
    /// assert_eq!(Category::Pharmacy.as_str(), "pharmacy");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Coffee => "coffee",
            Self::Gas => "gas",
            Self::Pharmacy => "pharmacy",
            Self::Grocery => "grocery",
            Self::Gym => "gym",
            Self::Services => "services",
            Self::Entertainment => "entertainment",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "coffee" => Ok(Self::Coffee),
            "gas" => Ok(Self::Gas),
            "pharmacy" => Ok(Self::Pharmacy),
            "grocery" => Ok(Self::Grocery),
            "gym" => Ok(Self::Gym),
            "services" => Ok(Self::Services),
            "entertainment" => Ok(Self::Entertainment),
            _ => Err(format!("unknown category '{s}'")),
        }
    }
}

/// Mapping from external category identifiers to internal tags.
///
/// Modelled as plain configuration data so deployments can swap the
/// table without touching classification logic. The default table
/// covers the Foursquare taxonomy identifiers for each supported
/// category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryMap {
    map: BTreeMap<String, Category>,
}

impl CategoryMap {
    /// Construct an empty mapping.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Register an external identifier for `category`.
    pub fn insert(&mut self, external_id: impl Into<String>, category: Category) {
        self.map.insert(external_id.into(), category);
    }

    /// Add a mapping while returning `self` for chaining.
    #[must_use]
    pub fn with_mapping(mut self, external_id: impl Into<String>, category: Category) -> Self {
        self.insert(external_id, category);
        self
    }

    /// Resolve a place's external category codes to an internal tag.
    ///
    /// Returns the first mapped identifier, or `None` when no code is
    /// recognised.
    ///
    /// # Examples
    /// ```
    /// use nightowl_core::{Category, CategoryMap};
    ///
    /// let map = CategoryMap::default();
    /// assert_eq!(
    ///     map.resolve(&["17069".to_owned()]),
    ///     Some(Category::Gas),
    /// );
    /// assert_eq!(map.resolve(&["99999".to_owned()]), None);
    /// ```
    #[must_use]
    pub fn resolve(&self, external_ids: &[String]) -> Option<Category> {
        external_ids
            .iter()
            .find_map(|id| self.map.get(id.as_str()).copied())
    }

    /// Number of registered identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Report whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl Default for CategoryMap {
    fn default() -> Self {
        const TABLE: [(&str, Category); 20] = [
            ("13065", Category::Food),
            ("13025", Category::Food),
            ("13003", Category::Food),
            ("13035", Category::Food),
            ("13145", Category::Food),
            ("13064", Category::Food),
            ("13009", Category::Food),
            ("13199", Category::Food),
            ("13032", Category::Coffee),
            ("13033", Category::Coffee),
            ("13034", Category::Coffee),
            ("13385", Category::Coffee),
            ("17069", Category::Gas),
            ("17097", Category::Pharmacy),
            ("17043", Category::Grocery),
            ("17051", Category::Grocery),
            ("18021", Category::Gym),
            ("11115", Category::Services),
            ("10000", Category::Entertainment),
            ("10032", Category::Entertainment),
        ];
        let map = TABLE
            .into_iter()
            .map(|(id, category)| (id.to_owned(), category))
            .collect();
        Self { map }
    }
}
