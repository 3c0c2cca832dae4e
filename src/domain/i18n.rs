use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::domain::entities::{Category, Ingredient};

// UI languages the pages can render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Sk,
}

impl Locale {
    // Unknown or missing tags fall back to English.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag.map(str::trim) {
            Some(tag) if tag.eq_ignore_ascii_case("sk") => Locale::Sk,
            _ => Locale::En,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sk => "sk",
        }
    }

    pub fn ingredient_name(self, ingredient: &Ingredient) -> &str {
        match self {
            Locale::Sk if !ingredient.name_sk.is_empty() => &ingredient.name_sk,
            _ => &ingredient.name_en,
        }
    }
}

// Locale tag -> UI string table, as stored in translations.json.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    tables: BTreeMap<String, Map<String, Value>>,
}

impl Default for Translations {
    fn default() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert("en".to_string(), Map::new());
        tables.insert("sk".to_string(), Map::new());
        Self { tables }
    }
}

impl Translations {
    pub fn table(&self, locale: Locale) -> Option<&Map<String, Value>> {
        self.tables.get(locale.tag())
    }

    /// Look up `key` for `locale`, then English, then the built-in text.
    pub fn text(&self, locale: Locale, key: &str) -> String {
        [locale, Locale::En]
            .into_iter()
            .filter_map(|locale| self.table(locale))
            .find_map(|table| table.get(key).and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| builtin_text(locale, key).to_string())
    }

    pub fn category_label(&self, locale: Locale, category: Category) -> String {
        self.text(locale, &format!("category_{category}"))
    }
}

// Texts used when translations.json is missing a key.
fn builtin_text(locale: Locale, key: &str) -> &str {
    let pair = match key {
        "party_title" => ("Pizza Party", "Pizza párty"),
        "admin_title" => ("Pizza Party Admin", "Správa pizza párty"),
        "your_name" => ("Your name", "Tvoje meno"),
        "load_order" => ("Load my order", "Načítať objednávku"),
        "save_order" => ("Save my pizza", "Uložiť pizzu"),
        "cutting" => ("Slices", "Počet kúskov"),
        "orders" => ("Orders", "Objednávky"),
        "no_orders" => ("No orders yet.", "Zatiaľ žiadne objednávky."),
        "ingredients" => ("Ingredients", "Suroviny"),
        "done" => ("Done", "Hotovo"),
        "delete" => ("Delete", "Zmazať"),
        "enabled" => ("Enabled", "Povolené"),
        "add_ingredient" => ("Add ingredient", "Pridať surovinu"),
        "name_en" => ("English name", "Anglický názov"),
        "name_sk" => ("Slovak name", "Slovenský názov"),
        "category_bases" => ("Base", "Základ"),
        "category_cheeses" => ("Cheeses", "Syry"),
        "category_meats" => ("Meats", "Mäso"),
        "category_veggies" => ("Veggies", "Zelenina"),
        "category_extras" => ("Extras", "Extra"),
        _ => return key,
    };
    match locale {
        Locale::En => pair.0,
        Locale::Sk => pair.1,
    }
}
