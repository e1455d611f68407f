pub mod google_places;
pub mod itinerary_validator;
pub mod poi_discovery;
pub mod poi_filter;
pub mod poi_scoring;
pub mod route_sampler;
