//! Domain enums shared between the shop and admin surfaces.
//!
//! Serde renames match the backend's wire strings exactly; `Display` and
//! `FromStr` implementations exist where the CLI accepts the value as an
//! argument.

use serde::{Deserialize, Serialize};

/// Product category in the shop catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    Food,
    Toy,
    Accessory,
    Hygiene,
}

impl core::fmt::Display for ProductKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Food => write!(f, "food"),
            Self::Toy => write!(f, "toy"),
            Self::Accessory => write!(f, "accessory"),
            Self::Hygiene => write!(f, "hygiene"),
        }
    }
}

impl core::str::FromStr for ProductKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(Self::Food),
            "toy" => Ok(Self::Toy),
            "accessory" => Ok(Self::Accessory),
            "hygiene" => Ok(Self::Hygiene),
            _ => Err(format!("invalid product kind: {s}")),
        }
    }
}

/// Product size variant.
///
/// A fixed enum; the admin console toggles membership in a product's size
/// set rather than entering free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductSize {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl core::fmt::Display for ProductSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Xs => write!(f, "XS"),
            Self::S => write!(f, "S"),
            Self::M => write!(f, "M"),
            Self::L => write!(f, "L"),
            Self::Xl => write!(f, "XL"),
        }
    }
}

impl core::str::FromStr for ProductSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "XS" => Ok(Self::Xs),
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::Xl),
            _ => Err(format!("invalid product size: {s}")),
        }
    }
}

/// Animal species, used both for pets and for species-targeted products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Rabbit,
    Other,
}

impl core::fmt::Display for Species {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Dog => write!(f, "dog"),
            Self::Cat => write!(f, "cat"),
            Self::Bird => write!(f, "bird"),
            Self::Rabbit => write!(f, "rabbit"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl core::str::FromStr for Species {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(Self::Dog),
            "cat" => Ok(Self::Cat),
            "bird" => Ok(Self::Bird),
            "rabbit" => Ok(Self::Rabbit),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid species: {s}")),
        }
    }
}

/// Pet gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetGender {
    Male,
    Female,
}

impl core::str::FromStr for PetGender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(format!("invalid pet gender: {s}")),
        }
    }
}

/// Pet temperament, recorded on the profile for groomers and vets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperament {
    Calm,
    Friendly,
    Playful,
    Nervous,
    Aggressive,
}

impl core::str::FromStr for Temperament {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "calm" => Ok(Self::Calm),
            "friendly" => Ok(Self::Friendly),
            "playful" => Ok(Self::Playful),
            "nervous" => Ok(Self::Nervous),
            "aggressive" => Ok(Self::Aggressive),
            _ => Err(format!("invalid temperament: {s}")),
        }
    }
}

/// User role as reported by the auth endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access to the admin console.
    Admin,
    /// Regular shop customer.
    User,
}

impl core::fmt::Display for UserRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::User => write!(f, "user"),
        }
    }
}

/// Appointment lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl core::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_size_wire_format_is_uppercase() {
        let json = serde_json::to_string(&ProductSize::Xs).unwrap();
        assert_eq!(json, "\"XS\"");
        let parsed: ProductSize = serde_json::from_str("\"XL\"").unwrap();
        assert_eq!(parsed, ProductSize::Xl);
    }

    #[test]
    fn test_size_from_str_is_case_insensitive() {
        assert_eq!("xs".parse::<ProductSize>().unwrap(), ProductSize::Xs);
        assert_eq!("XL".parse::<ProductSize>().unwrap(), ProductSize::Xl);
        assert!("XXL".parse::<ProductSize>().is_err());
    }

    #[test]
    fn test_species_wire_format_is_lowercase() {
        let json = serde_json::to_string(&Species::Rabbit).unwrap();
        assert_eq!(json, "\"rabbit\"");
    }

    #[test]
    fn test_kind_roundtrip() {
        for kind in [
            ProductKind::Food,
            ProductKind::Toy,
            ProductKind::Accessory,
            ProductKind::Hygiene,
        ] {
            let parsed: ProductKind = kind.to_string().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn test_appointment_status_default() {
        assert_eq!(AppointmentStatus::default(), AppointmentStatus::Pending);
    }
}
