//! Factory pattern: map a type tag to a freshly constructed vehicle.

use crate::error::VehicleError;
use crate::vehicle::{Bike, Car, Vehicle};

/// Constructs vehicles from their string tags.
///
/// The known set is closed; extending it means adding a match arm. Any
/// other tag is rejected with [`VehicleError::UnknownType`] naming the
/// offender. Construction has no side effects beyond the allocation.
pub struct VehicleFactory;

impl VehicleFactory {
    /// Build the vehicle registered under `kind`.
    pub fn create(&self, kind: &str) -> Result<Box<dyn Vehicle>, VehicleError> {
        match kind {
            "car" => Ok(Box::new(Car)),
            "bike" => Ok(Box::new(Bike)),
            other => Err(VehicleError::UnknownType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_build_their_variant() {
        let factory = VehicleFactory;
        assert_eq!(factory.create("car").unwrap().create(), "Car created.");
        assert_eq!(factory.create("bike").unwrap().create(), "Bike created.");
    }

    #[test]
    fn test_unknown_tag_is_rejected_with_the_tag() {
        let factory = VehicleFactory;
        let err = factory.create("plane").unwrap_err();
        assert_eq!(err, VehicleError::UnknownType("plane".to_string()));
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        let factory = VehicleFactory;
        assert!(factory.create("Car").is_err());
    }
}
