//! Creational patterns one at a time: factory, builder with director,
//! and the service-center singleton.

use anyhow::Result;

use pattern_catalog::builder::{VehicleBuilder, VehicleDirector};
use pattern_catalog::factory::VehicleFactory;
use pattern_catalog::ServiceCenter;

fn main() -> Result<()> {
    println!("=== Factory ===");
    let factory = VehicleFactory;
    let car = factory.create("car")?;
    println!("{}", car.create());
    let bike = factory.create("bike")?;
    println!("{}", bike.create());

    println!("\n=== Builder ===");
    let mut builder = VehicleBuilder::new();
    let director = VehicleDirector::new();
    director.build_sports_car(&mut builder);
    println!("{}", builder.product());
    builder.reset();
    director.build_bike(&mut builder);
    println!("{}", builder.product());

    println!("\n=== Singleton ===");
    let center1 = ServiceCenter::global();
    println!("{}", center1.register("Car"));
    let center2 = ServiceCenter::global();
    println!("{}", center2.register("Bike"));
    println!("Same service center: {}", std::ptr::eq(center1, center2));

    Ok(())
}
