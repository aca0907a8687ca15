//! Listing records behind the listing card (repository and service layers).

pub mod repository;
pub mod service;

pub use service::ListingService;
