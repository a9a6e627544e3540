pub mod client;
pub mod error;
pub mod geo;
pub mod merge;
pub mod normalize;
pub mod pipeline;
pub mod query;
pub mod sample;
pub mod types;

pub use client::OverpassClient;
pub use error::OverpassError;
pub use pipeline::collect_route_parking;
pub use types::{OverpassCenter, OverpassElement, OverpassResponse};
