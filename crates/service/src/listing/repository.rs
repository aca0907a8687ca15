use uuid::Uuid;

use models::listing::Listing;

use crate::errors::ServiceError;

/// Repository abstraction for listing storage.
pub trait ListingRepository: Send + Sync {
    fn insert(&self, listing: Listing) -> Result<Listing, ServiceError>;
    fn get(&self, id: Uuid) -> Result<Option<Listing>, ServiceError>;
    fn list(&self) -> Result<Vec<Listing>, ServiceError>;
}

/// Simple in-memory repository for tests and single-process deployments
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MemoryListingRepository {
        items: Mutex<HashMap<Uuid, Listing>>, // key: listing id
    }

    impl ListingRepository for MemoryListingRepository {
        fn insert(&self, listing: Listing) -> Result<Listing, ServiceError> {
            let mut items = self.items.lock().unwrap();
            items.insert(listing.id, listing.clone());
            Ok(listing)
        }

        fn get(&self, id: Uuid) -> Result<Option<Listing>, ServiceError> {
            let items = self.items.lock().unwrap();
            Ok(items.get(&id).cloned())
        }

        fn list(&self) -> Result<Vec<Listing>, ServiceError> {
            let items = self.items.lock().unwrap();
            Ok(items.values().cloned().collect())
        }
    }
}
