pub mod coordinates;
pub mod itinerary;
pub mod place;
pub mod preference;
pub mod route;

pub use coordinates::Coordinates;
pub use itinerary::{PoiRef, ValidationResult};
pub use place::{BusinessStatus, CategoryBucket, FilteredPoi, RawPlace};
pub use preference::{BudgetTier, Preference};
pub use route::{RouteDescription, RouteLeg, RouteStep};
