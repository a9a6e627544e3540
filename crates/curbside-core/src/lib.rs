mod app_config;
mod config;
pub mod parking;
pub mod roads;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use parking::{Coordinate, LaneDetails, ParkingAttributes, ParkingRecord, ParkingSummary};
pub use roads::{RoadAttributes, RoadDetails, RoadNetwork, RoadReport, RouteSummary};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
