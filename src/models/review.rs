// src/models/review.rs
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "restaurantId", default)]
    pub restaurant_id: Option<String>, // Restaurant the review belongs to
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,       // Author of the review
    pub rating: u8,                    // 1 to 5 stars
    #[serde(default)]
    pub comment: String,
}

/// Body of `POST /api/resenas`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "restaurantId")]
    pub restaurant_id: String,
    pub rating: u8,
    pub comment: String,
}

impl NewReview {
    pub fn new(
        user_id: String,
        restaurant_id: String,
        rating: u8,
        comment: String,
    ) -> Result<Self, ApiError> {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::Validation(
                "La calificación debe estar entre 1 y 5".to_string(),
            ));
        }
        if comment.trim().is_empty() {
            return Err(ApiError::Validation("El comentario es obligatorio".to_string()));
        }
        Ok(Self {
            user_id,
            restaurant_id,
            rating,
            comment,
        })
    }
}
