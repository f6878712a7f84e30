//! The `Item` record and its form input

use rust_decimal::Decimal;
use serde::Deserialize;

use super::{parse_price, ValidationError};

/// Stored item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Assigned by the store on insert, never changes
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl Item {
    /// Price with exactly two decimals, or empty when unset.
    pub fn price_display(&self) -> String {
        self.price.map(|p| format!("{:.2}", p)).unwrap_or_default()
    }
}

/// Validated item name: trimmed and non-empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemName(String);

impl ItemName {
    /// Trim and validate a name.
    ///
    /// Length is not checked here; the store rejects names over 120
    /// characters.
    ///
    /// # Example
    /// ```
    /// use items_server::models::ItemName;
    ///
    /// assert_eq!(ItemName::new("  Lamp ").unwrap().as_str(), "Lamp");
    /// assert!(ItemName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required { field: "Name" });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw create/edit form body, exactly as submitted
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
}

/// Form input that passed validation, ready to write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInput {
    pub name: ItemName,
    pub description: Option<String>,
    pub price: Option<Decimal>,
}

impl ItemForm {
    /// Parse and validate. The name is checked before the price, so a form
    /// with both problems reports the missing name.
    pub fn validate(self) -> Result<ItemInput, ValidationError> {
        let name = ItemName::new(&self.name)?;
        let price = parse_price(self.price.as_deref())?;
        let description = self.description.filter(|d| !d.is_empty());

        Ok(ItemInput {
            name,
            description,
            price,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn form(name: &str, description: Option<&str>, price: Option<&str>) -> ItemForm {
        ItemForm {
            name: name.to_string(),
            description: description.map(String::from),
            price: price.map(String::from),
        }
    }

    #[test]
    fn valid_form() {
        let input = form(" Desk lamp ", Some("Brass"), Some("19.99"))
            .validate()
            .unwrap();
        assert_eq!(input.name.as_str(), "Desk lamp");
        assert_eq!(input.description.as_deref(), Some("Brass"));
        assert_eq!(input.price, Some(Decimal::from_str("19.99").unwrap()));
    }

    #[test]
    fn minimal_form() {
        let input = form("Lamp", None, None).validate().unwrap();
        assert_eq!(input.description, None);
        assert_eq!(input.price, None);
    }

    #[test]
    fn empty_description_is_none() {
        let input = form("Lamp", Some(""), Some("")).validate().unwrap();
        assert_eq!(input.description, None);
        assert_eq!(input.price, None);
    }

    #[test]
    fn description_is_kept_verbatim() {
        let input = form("Lamp", Some("  spaced  "), None).validate().unwrap();
        assert_eq!(input.description.as_deref(), Some("  spaced  "));
    }

    #[test]
    fn rejects_blank_name() {
        for name in ["", "   ", "\t\n"] {
            let err = form(name, None, None).validate().unwrap_err();
            assert_eq!(err, ValidationError::Required { field: "Name" });
        }
    }

    #[test]
    fn name_checked_before_price() {
        let err = form("", None, Some("abc")).validate().unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn rejects_bad_price() {
        let err = form("Lamp", None, Some("abc")).validate().unwrap_err();
        assert_eq!(err.to_string(), "Price must be a number");
    }

    #[test]
    fn price_display() {
        let mut item = Item {
            id: 1,
            name: "Lamp".into(),
            description: None,
            price: None,
        };
        assert_eq!(item.price_display(), "");

        item.price = Some(Decimal::from(20));
        assert_eq!(item.price_display(), "20.00");

        item.price = Some(Decimal::from_str("19.9").unwrap());
        assert_eq!(item.price_display(), "19.90");
    }
}
