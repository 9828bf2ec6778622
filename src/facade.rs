//! Facade pattern: one front door over the factory, the builder with its
//! director, the service-center singleton, and (optionally) the observer
//! system, so callers run whole workflows through a single call.

use crate::builder::{VehicleBuilder, VehicleDirector};
use crate::error::VehicleError;
use crate::factory::VehicleFactory;
use crate::observer::VehicleRegistrationSystem;
use crate::registry::ServiceCenter;

/// Bundles the vehicle subsystems behind workflow-level operations.
///
/// By default the facade registers into [`ServiceCenter::global`]; tests
/// hand it a private center via [`VehicleManagementFacade::with_registry`].
/// Attaching a [`VehicleRegistrationSystem`] is opt-in, and only the
/// factory workflow notifies it.
pub struct VehicleManagementFacade {
    factory: VehicleFactory,
    builder: VehicleBuilder,
    director: VehicleDirector,
    service_center: &'static ServiceCenter,
    registration: Option<VehicleRegistrationSystem>,
}

impl VehicleManagementFacade {
    pub fn new() -> Self {
        Self::with_registry(ServiceCenter::global())
    }

    /// A facade writing into the given service center instead of the
    /// global one.
    pub fn with_registry(service_center: &'static ServiceCenter) -> Self {
        Self {
            factory: VehicleFactory,
            builder: VehicleBuilder::new(),
            director: VehicleDirector::new(),
            service_center,
            registration: None,
        }
    }

    /// Attach an observer system; `create_and_register_vehicle` will fan
    /// registrations out through it.
    pub fn with_registration_system(mut self, system: VehicleRegistrationSystem) -> Self {
        self.registration = Some(system);
        self
    }

    /// Factory workflow: construct the vehicle for `kind`, register it,
    /// and notify the observer system when one is attached. Returns the
    /// narration of every step; an unknown `kind` fails before anything
    /// is registered.
    pub fn create_and_register_vehicle(
        &mut self,
        kind: &str,
    ) -> Result<Vec<String>, VehicleError> {
        let vehicle = self.factory.create(kind)?;
        let mut lines = vec![vehicle.create()];
        lines.push(self.service_center.register(kind));
        if let Some(system) = self.registration.as_mut() {
            lines.extend(system.register_vehicle(kind));
        }
        Ok(lines)
    }

    /// Builder workflow: run the sports-car recipe and register the
    /// result as "Sports Car".
    pub fn build_and_register_sports_car(&mut self) -> Vec<String> {
        self.builder.reset();
        self.director.build_sports_car(&mut self.builder);
        vec![
            self.builder.product().to_string(),
            self.service_center.register("Sports Car"),
        ]
    }

    /// Builder workflow: run the bike recipe and register the result as
    /// "Bike".
    pub fn build_and_register_bike(&mut self) -> Vec<String> {
        self.builder.reset();
        self.director.build_bike(&mut self.builder);
        vec![
            self.builder.product().to_string(),
            self.service_center.register("Bike"),
        ]
    }

    /// The attached observer system, if any.
    pub fn registration_system(&self) -> Option<&VehicleRegistrationSystem> {
        self.registration.as_ref()
    }
}

impl Default for VehicleManagementFacade {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{ExternalServiceObserver, ManagerObserver};
    use std::rc::Rc;

    // Each test leaks its own center so the global register stays out of
    // the assertions.
    fn private_center() -> &'static ServiceCenter {
        Box::leak(Box::new(ServiceCenter::new()))
    }

    #[test]
    fn test_factory_workflow_narrates_creation_then_registration() {
        let center = private_center();
        let mut facade = VehicleManagementFacade::with_registry(center);

        let lines = facade.create_and_register_vehicle("car").unwrap();
        assert_eq!(lines, vec!["Car created.", "Vehicle car registered."]);
        assert_eq!(center.registered(), vec!["car"]);
    }

    #[test]
    fn test_factory_workflow_fans_out_through_an_attached_system() {
        let mut system = VehicleRegistrationSystem::new();
        system.attach(Rc::new(ExternalServiceObserver));
        system.attach(Rc::new(ManagerObserver));

        let mut facade = VehicleManagementFacade::with_registry(private_center())
            .with_registration_system(system);

        let lines = facade.create_and_register_vehicle("car").unwrap();
        assert_eq!(
            lines,
            vec![
                "Car created.",
                "Vehicle car registered.",
                "Vehicle car registered in the system.",
                "External Service notified: Vehicle car has been registered.",
                "Manager notified: Vehicle car has been added to the system.",
            ]
        );
        assert_eq!(facade.registration_system().unwrap().latest(), Some("car"));
    }

    #[test]
    fn test_unknown_kind_fails_before_registering_anything() {
        let center = private_center();
        let mut facade = VehicleManagementFacade::with_registry(center);

        let err = facade.create_and_register_vehicle("plane").unwrap_err();
        assert_eq!(err, VehicleError::UnknownType("plane".to_string()));
        assert!(center.is_empty());
    }

    #[test]
    fn test_stock_recipes_build_and_register() {
        let center = private_center();
        let mut facade = VehicleManagementFacade::with_registry(center);

        assert_eq!(
            facade.build_and_register_sports_car(),
            vec![
                "Vehicle with 4 wheels and V8 engine",
                "Vehicle Sports Car registered.",
            ]
        );
        assert_eq!(
            facade.build_and_register_bike(),
            vec![
                "Vehicle with 2 wheels and Single-cylinder engine",
                "Vehicle Bike registered.",
            ]
        );
        assert_eq!(center.registered(), vec!["Sports Car", "Bike"]);
    }

    #[test]
    fn test_builder_workflows_skip_the_observer_system() {
        let mut system = VehicleRegistrationSystem::new();
        system.attach(Rc::new(ManagerObserver));

        let mut facade = VehicleManagementFacade::with_registry(private_center())
            .with_registration_system(system);

        facade.build_and_register_sports_car();
        assert_eq!(facade.registration_system().unwrap().latest(), None);
    }
}
