use crate::models::Coordinate;
use async_trait::async_trait;

/// Failures surfaced when asking for a location fix
#[derive(thiserror::Error, Debug)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("no location fix available: {0}")]
    Unavailable(String),
}

/// Stand-in for the device location provider
/// This allows swapping in a real GPS-backed source on a host that has one
#[async_trait]
pub trait LocationSource: Send + Sync {
    /// Best-effort current coordinate
    async fn current_location(&self) -> Result<Coordinate, LocationError>;
}

/// Location source pinned to a configured coordinate
pub struct FixedLocationSource {
    coordinate: Option<Coordinate>,
}

impl FixedLocationSource {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
        }
    }

    /// Source with no fix to hand out
    pub fn unavailable() -> Self {
        Self { coordinate: None }
    }
}

#[async_trait]
impl LocationSource for FixedLocationSource {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        self.coordinate
            .ok_or_else(|| LocationError::Unavailable("no configured coordinate".to_string()))
    }
}

/// Location source behind a denied runtime permission
pub struct DeniedLocationSource;

#[async_trait]
impl LocationSource for DeniedLocationSource {
    async fn current_location(&self) -> Result<Coordinate, LocationError> {
        Err(LocationError::PermissionDenied)
    }
}
