use std::num::NonZeroU64;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Domain constants for a checkpoint network
///
/// Fixed at construction time so the same engine can serve networks with different
/// rolling stock or signalling conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    /// Distance units covered per minute; elapsed minutes are `distance / velocity`
    pub velocity: i64,
    pub switch_weight: i64,
    pub switch_distance: i64,
    pub track_weight: i64,
    pub track_distance: i64,
    /// Label prefix identifying switch checkpoints
    pub switch_prefix: String,
    /// Label prefix identifying track circuit checkpoints
    pub track_prefix: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            velocity: 2,
            switch_weight: 5,
            switch_distance: 10,
            track_weight: 0,
            track_distance: 5,
            switch_prefix: "M".to_string(),
            track_prefix: "TC".to_string(),
        }
    }
}

impl NetworkConfig {
    /// Parses a JSON document; missing fields fall back to their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: NetworkConfig =
            serde_json::from_str(json).map_err(|err| Error::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|err| {
            Error::InvalidConfig(format!("failed to read {}: {}", path.display(), err))
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        self.velocity()?;
        for weight in [self.switch_weight, self.track_weight] {
            if weight < 0 {
                return Err(Error::NegativeWeight(weight));
            }
        }
        for distance in [self.switch_distance, self.track_distance] {
            if distance < 0 {
                return Err(Error::NegativeDistance(distance));
            }
        }
        if self.switch_prefix.is_empty() || self.track_prefix.is_empty() {
            return Err(Error::InvalidConfig(
                "checkpoint prefixes must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The velocity as a validated divisor
    pub fn velocity(&self) -> Result<NonZeroU64> {
        u64::try_from(self.velocity)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(Error::InvalidVelocity(self.velocity))
    }
}
