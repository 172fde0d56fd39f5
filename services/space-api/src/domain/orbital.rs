use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    Debris,
    Satellite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Mock tracked object for the debris map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitalObject {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub coordinates: Coordinates,
    /// Kilometres above the surface
    pub altitude: f64,
    /// km/s
    pub velocity: f64,
    pub risk: RiskLevel,
}
