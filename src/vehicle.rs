//! The entities everything else is built around.

/// Capability shared by every vehicle variant.
///
/// `create` performs the variant's creation effect and returns the
/// narration line describing it. Decorators implement the same trait and
/// layer their own lines on top, so a decorated chain stays usable wherever
/// a bare vehicle is.
pub trait Vehicle: std::fmt::Debug {
    /// Produce the creation narration for this vehicle.
    fn create(&self) -> String;
}

#[derive(Debug)]
pub struct Car;

impl Vehicle for Car {
    fn create(&self) -> String {
        "Car created.".to_string()
    }
}

#[derive(Debug)]
pub struct Bike;

impl Vehicle for Bike {
    fn create(&self) -> String {
        "Bike created.".to_string()
    }
}
