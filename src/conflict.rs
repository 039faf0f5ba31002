//! Client-side double-booking check.
//!
//! A slot is a calendar date plus an hour:minute time. Both the candidate and
//! every stored reservation are normalized the same way before comparing, so
//! `"2024-05-01"` matches a stored `"2024-05-01T19:00:00.000Z"` and `"19:00:45"`
//! matches `"19:00"`.
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use leptos::logging::warn;

use crate::error::ApiError;
use crate::models::reservation::Reservation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl Slot {
    pub fn parse(date: &str, time: &str) -> Result<Self, ApiError> {
        if date.trim().is_empty() || time.trim().is_empty() {
            return Err(ApiError::Validation(
                "La fecha y la hora son obligatorias".to_string(),
            ));
        }
        let date = normalize_date(date)
            .ok_or_else(|| ApiError::Validation(format!("Fecha inválida: {}", date)))?;
        let time = normalize_time(time)
            .ok_or_else(|| ApiError::Validation(format!("Hora inválida: {}", time)))?;
        Ok(Self { date, time })
    }

    /// `fecha` as posted to the backend: the slot read as UTC, ISO-8601 with
    /// milliseconds.
    pub fn iso_timestamp(&self) -> String {
        self.date
            .and_time(self.time)
            .and_utc()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ")
            .to_string()
    }

    pub fn hhmm(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn is_taken(&self, existing: &[Reservation]) -> bool {
        existing.iter().any(|reservation| match reservation.slot() {
            Some(slot) => slot == *self,
            None => {
                warn!(
                    "[CONFLICT] Skipping reservation {} with unreadable slot {} {}",
                    reservation.id, reservation.date, reservation.time
                );
                false
            }
        })
    }
}

/// True iff some reservation in `existing` occupies the candidate slot.
/// A candidate that cannot be normalized matches nothing.
pub fn is_slot_taken(candidate_date: &str, candidate_time: &str, existing: &[Reservation]) -> bool {
    match Slot::parse(candidate_date, candidate_time) {
        Ok(slot) => slot.is_taken(existing),
        Err(_) => false,
    }
}

/// Reduces a plain date or a full timestamp to its calendar date. Timestamps
/// carrying an offset are converted to UTC first.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Truncates a time of day to hour:minute.
pub fn normalize_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    let parsed = NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S%.f"))
        .ok()?;
    NaiveTime::from_hms_opt(parsed.hour(), parsed.minute(), 0)
}
