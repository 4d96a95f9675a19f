pub mod cache;
pub mod error;
pub mod google_maps_api;
pub mod map_provider;
pub mod route_service;
