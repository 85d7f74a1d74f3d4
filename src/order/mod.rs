//! Order record
//!
//! An [`Order`] is the only thing the application persists. Every field is
//! optional: an empty field means "not chosen yet", and empty fields are left
//! out of saved files so they stay small and easy to edit by hand.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Key under which the hamburger cooking level is stored in [`Order::extras`]
pub const COOKING_LEVEL_KEY: &str = "cookingLevel";

/// Free-form dish-specific attributes
pub type Extras = BTreeMap<String, String>;

/// A takeaway order, possibly only partially filled in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_dish"
    )]
    pub main_dish: Option<MainDish>,

    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub toppings: Vec<String>,

    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub extras: Extras,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been chosen yet
    pub fn is_empty(&self) -> bool {
        self.main_dish.is_none() && self.toppings.is_empty() && self.extras.is_empty()
    }

    /// The stored cooking level, if any
    ///
    /// Imported files are not validated, so this returns the raw value rather
    /// than a [`CookingLevel`]. An empty string counts as unset.
    pub fn cooking_level(&self) -> Option<&str> {
        self.extras
            .get(COOKING_LEVEL_KEY)
            .map(String::as_str)
            .filter(|level| !level.is_empty())
    }

    pub fn set_cooking_level(&mut self, level: CookingLevel) {
        self.extras
            .insert(COOKING_LEVEL_KEY.to_string(), level.as_str().to_string());
    }

    pub fn is_hamburger(&self) -> bool {
        matches!(self.main_dish, Some(MainDish::Hamburger))
    }
}

/// The dishes on the menu
///
/// `Other` keeps values read from an order file that are not on the menu, so
/// they are written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MainDish {
    Hamburger,
    Pizza,
    Other(String),
}

impl MainDish {
    /// Orderable dishes, in menu order
    pub const ALL: [MainDish; 2] = [MainDish::Hamburger, MainDish::Pizza];

    pub fn as_str(&self) -> &str {
        match self {
            MainDish::Hamburger => "Hamburger",
            MainDish::Pizza => "Pizza",
            MainDish::Other(name) => name,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, MainDish::Other(_))
    }
}

impl fmt::Display for MainDish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for MainDish {
    fn from(value: &str) -> Self {
        match value {
            "Hamburger" => MainDish::Hamburger,
            "Pizza" => MainDish::Pizza,
            other => MainDish::Other(other.to_string()),
        }
    }
}

impl FromStr for MainDish {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(MainDish::from(s))
    }
}

impl Serialize for MainDish {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MainDish {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(MainDish::from(name.as_str()))
    }
}

/// How well a hamburger is cooked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CookingLevel {
    /// Medium rare
    MR,
    /// Medium
    M,
    /// Medium well
    MW,
    /// Well done
    WD,
}

impl CookingLevel {
    pub const ALL: [CookingLevel; 4] = [
        CookingLevel::MR,
        CookingLevel::M,
        CookingLevel::MW,
        CookingLevel::WD,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CookingLevel::MR => "MR",
            CookingLevel::M => "M",
            CookingLevel::MW => "MW",
            CookingLevel::WD => "WD",
        }
    }
}

impl fmt::Display for CookingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CookingLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CookingLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| format!("unknown cooking level '{}'", s))
    }
}

fn non_empty_dish<'de, D>(deserializer: D) -> Result<Option<MainDish>, D::Error>
where
    D: Deserializer<'de>,
{
    let name: Option<String> = Option::deserialize(deserializer)?;
    Ok(name
        .filter(|n| !n.is_empty())
        .map(|n| MainDish::from(n.as_str())))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_is_empty() {
        let order = Order::new();
        assert!(order.is_empty());
        assert_eq!(order.cooking_level(), None);
        assert!(!order.is_hamburger());
    }

    #[test]
    fn test_cooking_level_accessor() {
        let mut order = Order::new();
        order.set_cooking_level(CookingLevel::MW);
        assert_eq!(order.cooking_level(), Some("MW"));
        assert_eq!(order.extras.get(COOKING_LEVEL_KEY).map(String::as_str), Some("MW"));
    }

    #[test]
    fn test_empty_cooking_level_counts_as_unset() {
        let mut order = Order::new();
        order
            .extras
            .insert(COOKING_LEVEL_KEY.to_string(), String::new());
        assert_eq!(order.cooking_level(), None);
    }

    #[test]
    fn test_main_dish_parsing_keeps_unknown_values() {
        assert_eq!(MainDish::from("Pizza"), MainDish::Pizza);
        assert_eq!(MainDish::from("Hamburger"), MainDish::Hamburger);
        assert_eq!(
            MainDish::from("Sushi"),
            MainDish::Other("Sushi".to_string())
        );
        assert!(!MainDish::from("Sushi").is_known());
        assert_eq!(MainDish::from("Sushi").to_string(), "Sushi");
    }

    #[test]
    fn test_cooking_level_from_str() {
        assert_eq!("MR".parse::<CookingLevel>(), Ok(CookingLevel::MR));
        assert_eq!("WD".parse::<CookingLevel>(), Ok(CookingLevel::WD));
        assert!("rare".parse::<CookingLevel>().is_err());
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let order = Order {
            main_dish: Some(MainDish::Pizza),
            ..Order::default()
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json, serde_json::json!({ "main_dish": "Pizza" }));
    }

    #[test]
    fn test_empty_dish_and_nulls_deserialize_as_unset() {
        let order: Order =
            serde_json::from_str(r#"{"main_dish": "", "toppings": null, "extras": null}"#)
                .unwrap();
        assert_eq!(order, Order::default());
    }
}
