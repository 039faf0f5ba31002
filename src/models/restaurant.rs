// src/models/restaurant.rs
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "ubicacion", default)]
    pub location: String,
    #[serde(rename = "horarios", default)]
    pub hours: String,           // Free-form opening hours, e.g. "12 a 23"
    #[serde(default)]
    pub menu: Vec<MenuItem>,
    #[serde(rename = "reviews", default)]
    pub review_ids: Vec<String>,
    #[serde(rename = "reservas", default)]
    pub reservation_ids: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "precio", deserialize_with = "non_negative_price")]
    pub price: f64,
}

impl MenuItem {
    pub fn display_price(&self) -> String {
        format!("Precio: ${:.2}", self.price)
    }
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = f64::deserialize(deserializer)?;
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(serde::de::Error::custom(format!(
            "menu price must be a non-negative number, got {}",
            price
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn restaurant_deserializes_backend_shape() {
        let raw = json!({
            "_id": "r1",
            "nombre": "La Parrilla",
            "ubicacion": "San Miguel de Tucumán",
            "horarios": "12 a 23",
            "menu": [
                { "_id": "m1", "nombre": "Empanadas", "descripcion": "De carne", "precio": 1200.5 }
            ],
            "reviews": ["rv1", "rv2"],
            "reservas": ["rs1"]
        });

        let restaurant: Restaurant = serde_json::from_value(raw).unwrap();
        assert_eq!(restaurant.name, "La Parrilla");
        assert_eq!(restaurant.menu.len(), 1);
        assert_eq!(restaurant.menu[0].display_price(), "Precio: $1200.50");
        assert_eq!(restaurant.review_ids, vec!["rv1", "rv2"]);
        assert_eq!(restaurant.reservation_ids, vec!["rs1"]);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let raw = json!({ "_id": "r2", "nombre": "Sin menú" });
        let restaurant: Restaurant = serde_json::from_value(raw).unwrap();
        assert!(restaurant.menu.is_empty());
        assert!(restaurant.review_ids.is_empty());
        assert!(restaurant.reservation_ids.is_empty());
    }

    #[test]
    fn negative_price_is_rejected() {
        let raw = json!({ "_id": "m1", "nombre": "Agua", "precio": -1.0 });
        assert!(serde_json::from_value::<MenuItem>(raw).is_err());
    }
}
