//! End-to-end runs of the showroom: commands driving the facade, which
//! drives the factory, builder, registry, and observer system together.

use std::cell::RefCell;
use std::rc::Rc;

use pretty_assertions::assert_eq;

use pattern_catalog::command::{
    BuildBikeCommand, BuildSportsCarCommand, CommandInvoker, CreateVehicleCommand,
};
use pattern_catalog::observer::{
    ExternalServiceObserver, ManagerObserver, VehicleRegistrationSystem,
};
use pattern_catalog::{ServiceCenter, VehicleError, VehicleManagementFacade};

fn private_registry() -> &'static ServiceCenter {
    Box::leak(Box::new(ServiceCenter::new()))
}

fn observed_facade(center: &'static ServiceCenter) -> Rc<RefCell<VehicleManagementFacade>> {
    let mut registration = VehicleRegistrationSystem::new();
    registration.attach(Rc::new(ExternalServiceObserver));
    registration.attach(Rc::new(ManagerObserver));
    Rc::new(RefCell::new(
        VehicleManagementFacade::with_registry(center).with_registration_system(registration),
    ))
}

#[test]
fn test_full_tour_narration_arrives_in_call_order() {
    let center = private_registry();
    let facade = observed_facade(center);

    let mut invoker = CommandInvoker::new();
    invoker.add_command(Box::new(CreateVehicleCommand::new(Rc::clone(&facade), "car")));
    invoker.add_command(Box::new(BuildBikeCommand::new(Rc::clone(&facade))));

    let lines = invoker.execute_commands().unwrap();
    assert_eq!(
        lines,
        vec![
            "Car created.",
            "Vehicle car registered.",
            "Vehicle car registered in the system.",
            "External Service notified: Vehicle car has been registered.",
            "Manager notified: Vehicle car has been added to the system.",
            "Vehicle with 2 wheels and Single-cylinder engine",
            "Vehicle Bike registered.",
        ]
    );
    assert!(invoker.is_empty());
    assert_eq!(center.registered(), vec!["car", "Bike"]);

    let facade = facade.borrow();
    assert_eq!(facade.registration_system().unwrap().latest(), Some("car"));
}

#[test]
fn test_unknown_tag_aborts_the_queue() {
    let center = private_registry();
    let facade = observed_facade(center);

    let mut invoker = CommandInvoker::new();
    invoker.add_command(Box::new(CreateVehicleCommand::new(
        Rc::clone(&facade),
        "plane",
    )));
    invoker.add_command(Box::new(BuildSportsCarCommand::new(Rc::clone(&facade))));

    let err = invoker.execute_commands().unwrap_err();
    assert_eq!(err, VehicleError::UnknownType("plane".to_string()));
    assert_eq!(invoker.len(), 2);
    assert!(center.is_empty());
}

#[test]
fn test_second_sweep_after_success_is_a_no_op() {
    let center = private_registry();
    let facade = observed_facade(center);

    let mut invoker = CommandInvoker::new();
    invoker.add_command(Box::new(BuildSportsCarCommand::new(Rc::clone(&facade))));
    invoker.execute_commands().unwrap();

    assert_eq!(invoker.execute_commands().unwrap(), Vec::<String>::new());
    assert_eq!(center.registered(), vec!["Sports Car"]);
}
