use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// A published business listing (the data behind the listing card).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    pub rating: f32,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied fields for a new listing; id and timestamp are assigned on insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewListing {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub rating: f32,
}

impl Listing {
    /// Build a listing from caller input, assigning a fresh id and creation time.
    pub fn from_new(input: NewListing) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            category: input.category,
            description: input.description,
            address: input.address,
            phone: input.phone,
            website: input.website,
            image_url: input.image_url,
            rating: input.rating,
            created_at: Utc::now(),
        }
    }

    /// Field-level validation; rating is a 0..=5 star scale.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.name.trim().is_empty() {
            return Err(ModelError::Validation("listing name must not be empty".into()));
        }
        if self.category.trim().is_empty() {
            return Err(ModelError::Validation("listing category must not be empty".into()));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ModelError::Validation(format!(
                "rating {} outside 0.0..=5.0",
                self.rating
            )));
        }
        Ok(())
    }
}
