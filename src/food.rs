//! Food entities exchanged with the remote store.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Server-assigned identifier of a food item.
pub type FoodId = u64;

/// A menu item as stored by the remote food store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Stores created from text forms echo the price back as typed. Text that
    /// is not a number decodes as `0.0` so the record itself is never lost.
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: f64,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub image: String,
}

/// Field values typed into the add/edit forms. Everything is text at this
/// boundary; the draft carries neither an id nor an availability flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    pub image: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

/// Body of a create request: the draft plus `available: true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFood {
    #[serde(flatten)]
    pub draft: FoodDraft,
    pub available: bool,
}

impl From<FoodDraft> for NewFood {
    fn from(draft: FoodDraft) -> Self {
        Self {
            draft,
            available: true,
        }
    }
}

impl From<&Food> for FoodDraft {
    fn from(food: &Food) -> Self {
        Self {
            image: food.image.clone(),
            name: food.name.clone(),
            price: format_price(food.price),
            description: food.description.clone(),
        }
    }
}

impl Display for Food {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} ({}){}",
            self.id,
            self.name,
            format_price(self.price),
            if self.available { "" } else { " [unavailable]" }
        )
    }
}

/// Shallow merge of an existing record with a draft. Draft fields win on key
/// collision; every other field of `food` is carried over untouched.
pub fn merge_draft(food: &Food, draft: &FoodDraft) -> Result<Value, serde_json::Error> {
    let mut merged: Map<String, Value> = match serde_json::to_value(food)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    if let Value::Object(fields) = serde_json::to_value(draft)? {
        merged.extend(fields);
    }
    Ok(Value::Object(merged))
}

/// Render a price with two decimals, the way the cards display it.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Parse a typed price. Accepts `,` or `.` as the decimal separator.
pub fn parse_price(text: &str) -> Option<f64> {
    text.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

fn deserialize_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let price = match RawPrice::deserialize(deserializer)? {
        RawPrice::Number(value) => value,
        RawPrice::Text(text) => parse_price(&text).unwrap_or_else(|| {
            log::warn!("Store returned non-numeric price {:?}; showing 0.00", text);
            0.0
        }),
        RawPrice::Other(_) => {
            log::warn!("Store returned a price that is neither number nor text; showing 0.00");
            0.0
        }
    };
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn soup() -> Food {
        Food {
            id: 1,
            name: "Soup".to_string(),
            description: "Hot".to_string(),
            price: 9.5,
            available: false,
            image: "soup.png".to_string(),
        }
    }

    #[test]
    fn test_price_accepts_number_and_text() {
        let numeric: Food = serde_json::from_value(json!({
            "id": 1, "name": "a", "description": "b",
            "price": 19.9, "available": true, "image": "c"
        }))
        .unwrap();
        assert_eq!(numeric.price, 19.9);

        let textual: Food = serde_json::from_value(json!({
            "id": 2, "name": "a", "description": "b",
            "price": "19,90", "available": true, "image": "c"
        }))
        .unwrap();
        assert_eq!(textual.price, 19.9);

    }

    #[test]
    fn test_unparseable_price_keeps_record() {
        for raw in [json!(""), json!("."), json!(","), json!("cheap"), json!(null)] {
            let food: Food = serde_json::from_value(json!({
                "id": 3, "name": "a", "description": "b",
                "price": raw, "available": true, "image": "c"
            }))
            .unwrap();
            assert_eq!(food.id, 3);
            assert_eq!(food.price, 0.0);
        }

        let sparse: Food = serde_json::from_value(json!({"id": 4, "name": "Tea"})).unwrap();
        assert_eq!(sparse.price, 0.0);
        assert_eq!(sparse.description, "");
        assert_eq!(sparse.image, "");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 12,50 "), Some(12.5));
        assert_eq!(parse_price("7"), Some(7.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("."), None);
        assert_eq!(parse_price(","), None);
        assert_eq!(parse_price("-3"), None);
    }

    #[test]
    fn test_new_food_injects_availability() {
        let draft = FoodDraft {
            image: "img.png".to_string(),
            name: "Pasta".to_string(),
            price: "12.00".to_string(),
            description: "Fresh".to_string(),
        };
        let body = serde_json::to_value(NewFood::from(draft)).unwrap();
        assert_eq!(
            body,
            json!({
                "image": "img.png",
                "name": "Pasta",
                "price": "12.00",
                "description": "Fresh",
                "available": true
            })
        );
    }

    #[test]
    fn test_merge_draft_prefers_draft_fields() {
        let draft = FoodDraft {
            image: "tomato.png".to_string(),
            name: "Tomato Soup".to_string(),
            price: "11".to_string(),
            description: "Hot".to_string(),
        };
        let merged = merge_draft(&soup(), &draft).unwrap();
        assert_eq!(
            merged,
            json!({
                "id": 1,
                "name": "Tomato Soup",
                "description": "Hot",
                "price": "11",
                "available": false,
                "image": "tomato.png"
            })
        );
    }

    #[test]
    fn test_draft_from_food() {
        let draft = FoodDraft::from(&soup());
        assert_eq!(draft.price, "9.50");
        assert_eq!(draft.name, "Soup");
    }
}
