pub mod bounds;
pub mod containment;
pub mod degrees;
pub mod sweep;

pub use bounds::BoundingBox;
pub use containment::contains;
pub use degrees::{METERS_PER_DEGREE, flat_distance_m};
pub use sweep::{SweepConfig, generate_sweep};
