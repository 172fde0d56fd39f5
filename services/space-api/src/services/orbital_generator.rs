use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::*;

use crate::domain::{Coordinates, ObjectType, OrbitalObject, RiskLevel};

pub const OBJECT_COUNT: usize = 50;

/// Probability that a generated object is debris rather than a satellite.
pub const DEBRIS_PROBABILITY: f64 = 0.3;

pub const DEBRIS_ALTITUDE_KM: (f64, f64) = (200.0, 2000.0);
pub const SATELLITE_ALTITUDE_KM: (f64, f64) = (300.0, 36000.0);
pub const VELOCITY_RANGE: (f64, f64) = (5.0, 25.0);

const RISK_LEVELS: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];
const RISK_WEIGHTS: [f64; 3] = [0.7, 0.2, 0.1];

impl ObjectType {
    /// Altitude band sampled for this kind of object, in km.
    pub fn altitude_range(self) -> (f64, f64) {
        match self {
            ObjectType::Debris => DEBRIS_ALTITUDE_KM,
            ObjectType::Satellite => SATELLITE_ALTITUDE_KM,
        }
    }
}

/// Generate `count` mock orbital objects.
///
/// Latitude and longitude are sampled independently, which over-weights the
/// poles compared to a uniform distribution on the sphere.
pub fn generate_objects<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
) -> Result<Vec<OrbitalObject>, WeightedError> {
    let risk_dist = WeightedIndex::new(RISK_WEIGHTS)?;

    let objects = (0..count)
        .map(|i| {
            let object_type = if rng.gen_bool(DEBRIS_PROBABILITY) {
                ObjectType::Debris
            } else {
                ObjectType::Satellite
            };
            let (min_alt, max_alt) = object_type.altitude_range();

            OrbitalObject {
                // Ids are positional, not type-derived
                id: format!("debris-{}", i),
                name: format!("Space Object {}", i),
                object_type,
                coordinates: Coordinates {
                    lat: rng.gen_range(-90.0..=90.0),
                    lng: rng.gen_range(-180.0..=180.0),
                },
                altitude: rng.gen_range(min_alt..=max_alt),
                velocity: rng.gen_range(VELOCITY_RANGE.0..=VELOCITY_RANGE.1),
                risk: RISK_LEVELS[risk_dist.sample(rng)],
            }
        })
        .collect();

    Ok(objects)
}

/// The debris feed: a fresh batch from the thread RNG, or nothing at all.
pub fn debris_feed() -> Vec<OrbitalObject> {
    match generate_objects(&mut rand::thread_rng(), OBJECT_COUNT) {
        Ok(objects) => objects,
        Err(e) => {
            tracing::error!("Error generating space debris: {}", e);
            Vec::new()
        }
    }
}
