use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::PartyError;

// Emoji used when an ingredient is added without one.
pub const DEFAULT_EMOJI: &str = "🍕";

// Slice count applied when a guest does not pick one.
pub const DEFAULT_CUTTING: u32 = 8;

// Fixed ingredient groupings, declared in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bases,
    Cheeses,
    Meats,
    Veggies,
    Extras,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Bases,
        Category::Cheeses,
        Category::Meats,
        Category::Veggies,
        Category::Extras,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bases => "bases",
            Category::Cheeses => "cheeses",
            Category::Meats => "meats",
            Category::Veggies => "veggies",
            Category::Extras => "extras",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PartyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or(PartyError::InvalidCategory)
    }
}

fn default_emoji() -> String {
    DEFAULT_EMOJI.to_string()
}

fn default_enabled() -> bool {
    true
}

// Single catalog entry; `id` is unique within its category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IngredientRecord")]
pub struct Ingredient {
    pub id: String,
    pub name_en: String,
    pub name_sk: String,
    pub emoji: String,
    pub enabled: bool,
}

// Stored shape. Older files carry `name` instead of (or next to) `name_en`.
#[derive(Deserialize)]
struct IngredientRecord {
    id: String,
    #[serde(default)]
    name_en: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    name_sk: String,
    #[serde(default = "default_emoji")]
    emoji: String,
    #[serde(default = "default_enabled")]
    enabled: bool,
}

impl From<IngredientRecord> for Ingredient {
    fn from(record: IngredientRecord) -> Self {
        let name_en = record
            .name_en
            .filter(|name| !name.trim().is_empty())
            .or(record.name)
            .unwrap_or_default();
        Self {
            id: record.id,
            name_en,
            name_sk: record.name_sk,
            emoji: record.emoji,
            enabled: record.enabled,
        }
    }
}

impl Ingredient {
    pub fn new(id: &str, name_en: &str, name_sk: &str, emoji: &str) -> Self {
        Self {
            id: id.to_string(),
            name_en: name_en.to_string(),
            name_sk: name_sk.to_string(),
            emoji: emoji.to_string(),
            enabled: true,
        }
    }
}

/// Derive a catalog id from a display name.
///
/// Lowercases the name, collapses every run of characters outside `[a-z0-9]`
/// into a single `_` and strips underscores from both ends, so
/// `"Extra  Garlic!"` becomes `"extra_garlic"`.
pub fn ingredient_id_from_name(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_gap = false;
    for c in name.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            id.push(c);
            in_gap = false;
        } else if !in_gap {
            id.push('_');
            in_gap = true;
        }
    }
    id.trim_matches('_').to_string()
}

// Whole ingredient catalog, one ordered list per category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    categories: BTreeMap<Category, Vec<Ingredient>>,
}

// Keys outside the fixed categories are dropped rather than failing the document.
impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Vec<Ingredient>>::deserialize(deserializer)?;
        let categories = raw
            .into_iter()
            .filter_map(|(key, items)| match key.parse::<Category>() {
                Ok(category) => Some((category, items)),
                Err(_) => {
                    tracing::warn!(category = %key, "ignoring unknown ingredient category");
                    None
                }
            })
            .collect();
        Ok(Self { categories })
    }
}

impl Catalog {
    pub fn from_entries(entries: impl IntoIterator<Item = (Category, Vec<Ingredient>)>) -> Self {
        let mut catalog = Self {
            categories: entries.into_iter().collect(),
        };
        catalog.normalize();
        catalog
    }

    /// Fill the gaps older or hand-edited files may leave: every category is
    /// present and every record carries a Slovak name.
    pub fn normalize(&mut self) {
        for category in Category::ALL {
            let items = self.categories.entry(category).or_default();
            for item in items.iter_mut() {
                if item.name_sk.trim().is_empty() {
                    item.name_sk = item.name_en.clone();
                }
            }
        }
    }

    pub fn items(&self, category: Category) -> &[Ingredient] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn items_mut(&mut self, category: Category) -> &mut Vec<Ingredient> {
        self.categories.entry(category).or_default()
    }

    pub fn find(&self, category: Category, id: &str) -> Option<&Ingredient> {
        self.items(category).iter().find(|item| item.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Ingredient])> {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.items(category)))
    }

    /// Copy of the catalog with disabled entries removed, as guests see it.
    pub fn enabled_only(&self) -> Catalog {
        Catalog {
            categories: Category::ALL
                .into_iter()
                .map(|category| {
                    let enabled = self
                        .items(category)
                        .iter()
                        .filter(|item| item.enabled)
                        .cloned()
                        .collect();
                    (category, enabled)
                })
                .collect(),
        }
    }
}

// A guest's pick within one category: one id (e.g. the base) or several.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    One(String),
    Many(Vec<String>),
}

impl Selection {
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Selection::One(id) => vec![id.as_str()],
            Selection::Many(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

pub type IngredientSelection = BTreeMap<Category, Selection>;

// Saved guest order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub display_name: String,
    #[serde(default)]
    pub ingredients: IngredientSelection,
    #[serde(default)]
    pub cutting: Option<u32>,
    #[serde(default)]
    pub done: bool,
}

/// Lookup key for a guest: trimmed and lowercased.
pub fn order_key(name: &str) -> String {
    name.trim().to_lowercase()
}

// All orders keyed by normalized guest name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderBook {
    orders: BTreeMap<String, Order>,
}

impl OrderBook {
    pub fn get(&self, key: &str) -> Option<&Order> {
        self.orders.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Order> {
        self.orders.get_mut(key)
    }

    pub fn insert(&mut self, key: String, order: Order) -> Option<Order> {
        self.orders.insert(key, order)
    }

    pub fn remove(&mut self, key: &str) -> Option<Order> {
        self.orders.remove(key)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Order)> {
        self.orders.iter()
    }
}
