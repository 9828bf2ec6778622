//! Adapter pattern: the registry speaks [`VehicleRegistrar`], while the
//! external registration service exposes its own incompatible call. The
//! adapter translates between the two without changing either side.

use std::fmt;

/// The interface our code expects when handing a vehicle off for
/// registration.
pub trait VehicleRegistrar {
    fn register_vehicle(&self, vehicle_type: &str, details: &VehicleDetails) -> String;
}

/// Structured registration data the external service wants to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDetails {
    pub wheels: u32,
    pub engine: String,
    pub color: String,
}

impl VehicleDetails {
    pub fn new(wheels: u32, engine: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            wheels,
            engine: engine.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for VehicleDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{wheels: {}, engine: {}, color: {}}}",
            self.wheels, self.engine, self.color
        )
    }
}

/// Third-party service with a signature we do not control.
#[derive(Debug, Default)]
pub struct ExternalVehicleService;

impl ExternalVehicleService {
    pub fn external_register(&self, vehicle_type: &str, details: &VehicleDetails) -> String {
        format!(
            "External Service: Registering {} with details: {}",
            vehicle_type, details
        )
    }
}

/// Wraps the external service and presents it as a [`VehicleRegistrar`].
#[derive(Debug, Default)]
pub struct VehicleServiceAdapter {
    service: ExternalVehicleService,
}

impl VehicleServiceAdapter {
    pub fn new(service: ExternalVehicleService) -> Self {
        Self { service }
    }
}

impl VehicleRegistrar for VehicleServiceAdapter {
    fn register_vehicle(&self, vehicle_type: &str, details: &VehicleDetails) -> String {
        self.service.external_register(vehicle_type, details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adapter_forwards_to_the_external_service() {
        let adapter = VehicleServiceAdapter::new(ExternalVehicleService);
        let details = VehicleDetails::new(4, "V8", "Blue");

        assert_eq!(
            adapter.register_vehicle("Car", &details),
            "External Service: Registering Car with details: {wheels: 4, engine: V8, color: Blue}"
        );
    }

    #[test]
    fn test_adapter_and_direct_call_agree() {
        let service = ExternalVehicleService;
        let details = VehicleDetails::new(2, "Single-cylinder", "Black");
        let direct = service.external_register("Bike", &details);

        let adapter = VehicleServiceAdapter::new(service);
        assert_eq!(adapter.register_vehicle("Bike", &details), direct);
    }

    #[test]
    fn test_details_render_every_field() {
        let details = VehicleDetails::new(4, "V12", "Red");
        assert_eq!(
            details.to_string(),
            "{wheels: 4, engine: V12, color: Red}"
        );
    }
}
