use std::sync::Arc;

use tracing::{info, instrument};

use models::listing::{Listing, NewListing};

use super::repository::ListingRepository;
use crate::errors::ServiceError;

/// Listing business service independent of any presentation layer.
pub struct ListingService<R: ListingRepository> {
    repo: Arc<R>,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and store a new listing.
    #[instrument(skip(self, input), fields(name = %input.name, category = %input.category))]
    pub fn create(&self, input: NewListing) -> Result<Listing, ServiceError> {
        let listing = Listing::from_new(input);
        listing.validate()?;
        let stored = self.repo.insert(listing)?;
        info!(listing_id = %stored.id, "listing_created");
        Ok(stored)
    }

    pub fn get(&self, id: uuid::Uuid) -> Result<Listing, ServiceError> {
        self.repo.get(id)?.ok_or_else(|| ServiceError::not_found("listing"))
    }

    /// All listings, newest first, the order the card rail renders them.
    pub fn list_recent(&self) -> Result<Vec<Listing>, ServiceError> {
        let mut listings = self.repo.list()?;
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }
}
