// src/models/reservation.rs
use serde::{Deserialize, Deserializer, Serialize};

use crate::conflict::Slot;
use crate::error::ApiError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Reservation {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "restauranteId", default)]
    pub restaurant_id: Option<String>, // Restaurant being booked
    #[serde(rename = "usuarioId", default)]
    pub user_id: Option<String>,       // User who booked it
    #[serde(rename = "fecha", default, deserialize_with = "null_as_empty")]
    pub date: String,                  // Calendar date or ISO timestamp, as stored by the backend
    #[serde(rename = "hora", default, deserialize_with = "null_as_empty")]
    pub time: String,                  // HH:MM
}

// A stored row with a null or missing slot field still loads; its slot is
// unreadable and never matches.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Reservation {
    /// Normalized slot of this reservation, if its stored fields are readable.
    pub fn slot(&self) -> Option<Slot> {
        Slot::parse(&self.date, &self.time).ok()
    }

    /// Whether this reservation can count against `restaurant_id`. Entries
    /// without a restaurant reference are kept.
    pub fn belongs_to(&self, restaurant_id: &str) -> bool {
        self.restaurant_id
            .as_deref()
            .map_or(true, |id| id == restaurant_id)
    }

    pub fn display_date(&self) -> String {
        match self.slot() {
            Some(slot) => slot.date.format("%d/%m/%Y").to_string(),
            None => self.date.clone(),
        }
    }
}

/// Body of `POST /api/reservas`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReservation {
    #[serde(rename = "restauranteId")]
    pub restaurant_id: String,
    #[serde(rename = "usuarioId")]
    pub user_id: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "hora")]
    pub time: String,
}

impl NewReservation {
    pub fn new(
        restaurant_id: String,
        user_id: String,
        date: &str,
        time: &str,
    ) -> Result<Self, ApiError> {
        let slot = Slot::parse(date, time)?;
        Ok(Self::for_slot(restaurant_id, user_id, &slot))
    }

    pub fn for_slot(restaurant_id: String, user_id: String, slot: &Slot) -> Self {
        Self {
            restaurant_id,
            user_id,
            date: slot.iso_timestamp(),
            time: slot.hhmm(),
        }
    }
}
