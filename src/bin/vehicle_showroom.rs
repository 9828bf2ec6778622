//! The full showroom tour: facade workflows with observer fan-out,
//! decorators over a shared base, the adapter, a command queue, and the
//! singleton identity check.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use colored::Colorize;

use pattern_catalog::adapter::{
    ExternalVehicleService, VehicleDetails, VehicleRegistrar, VehicleServiceAdapter,
};
use pattern_catalog::command::{
    BuildBikeCommand, BuildSportsCarCommand, CommandInvoker, CreateVehicleCommand,
};
use pattern_catalog::decorator::{LuxuryPackage, SportsPackage};
use pattern_catalog::factory::VehicleFactory;
use pattern_catalog::observer::{
    ExternalServiceObserver, ManagerObserver, VehicleRegistrationSystem,
};
use pattern_catalog::{ServiceCenter, Vehicle, VehicleManagementFacade};

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

fn main() -> Result<()> {
    println!("{}", "=== Facade with observers ===".bold());
    let mut registration = VehicleRegistrationSystem::new();
    registration.attach(Rc::new(ExternalServiceObserver));
    registration.attach(Rc::new(ManagerObserver));
    let mut facade = VehicleManagementFacade::new().with_registration_system(registration);

    print_lines(&facade.create_and_register_vehicle("car")?);
    print_lines(&facade.build_and_register_sports_car());
    print_lines(&facade.build_and_register_bike());

    println!("\n{}", "=== Decorator ===".bold());
    let factory = VehicleFactory;
    let basic_car: Rc<dyn Vehicle> = factory.create("car")?.into();
    let luxury_car = LuxuryPackage::new(Rc::clone(&basic_car));
    let sports_car = SportsPackage::new(Rc::clone(&basic_car));
    println!("Creating a luxury car:");
    println!("{}", luxury_car.create());
    println!("\nCreating a sports car:");
    println!("{}", sports_car.create());

    println!("\n{}", "=== Adapter ===".bold());
    let adapter = VehicleServiceAdapter::new(ExternalVehicleService);
    let details = VehicleDetails::new(4, "V12", "Red");
    println!("{}", adapter.register_vehicle("Luxury Car", &details));

    println!("\n{}", "=== Command queue ===".bold());
    let shared = Rc::new(RefCell::new(facade));
    let mut invoker = CommandInvoker::new();
    invoker.add_command(Box::new(CreateVehicleCommand::new(
        Rc::clone(&shared),
        "bike",
    )));
    invoker.add_command(Box::new(BuildSportsCarCommand::new(Rc::clone(&shared))));
    invoker.add_command(Box::new(BuildBikeCommand::new(Rc::clone(&shared))));
    print_lines(&invoker.execute_commands()?);

    println!("\n{}", "=== Singleton ===".bold());
    let center1 = ServiceCenter::global();
    let center2 = ServiceCenter::global();
    println!("Are service_center1 and service_center2 the same instance?");
    println!("{}", std::ptr::eq(center1, center2));
    println!("Registered so far: {}", center1.registered().join(", "));

    Ok(())
}
