//! Builder pattern: stepwise assembly of a vehicle product, with a director
//! that knows the two stock recipes.

use std::fmt;

/// The mutable product a [`VehicleBuilder`] assembles.
///
/// Both fields start unset and are only ever written by builder steps; a
/// product lives for one build cycle, until the builder's `reset`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VehicleProduct {
    pub wheels: Option<u32>,
    pub engine: Option<String>,
}

impl fmt::Display for VehicleProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let wheels = match self.wheels {
            Some(n) => n.to_string(),
            None => "unspecified".to_string(),
        };
        let engine = self.engine.as_deref().unwrap_or("unspecified");
        write!(f, "Vehicle with {} wheels and {} engine", wheels, engine)
    }
}

/// Non-consuming builder over [`VehicleProduct`].
///
/// Steps take `&mut self` and return `&mut Self` so recipes can chain them.
/// Nothing is validated; the steps write whatever they are given.
#[derive(Debug, Default)]
pub struct VehicleBuilder {
    product: VehicleProduct,
}

impl VehicleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Throw away the in-progress product and start over.
    pub fn reset(&mut self) -> &mut Self {
        self.product = VehicleProduct::default();
        self
    }

    pub fn set_wheels(&mut self, wheels: u32) -> &mut Self {
        self.product.wheels = Some(wheels);
        self
    }

    pub fn set_engine(&mut self, engine: impl Into<String>) -> &mut Self {
        self.product.engine = Some(engine.into());
        self
    }

    /// Borrow the current in-progress product. No copy, no reset.
    pub fn product(&self) -> &VehicleProduct {
        &self.product
    }
}

/// Director encapsulating the stock recipes as fixed step sequences.
///
/// The director is stateless and borrows the builder for exactly one recipe
/// at a time.
#[derive(Debug, Default)]
pub struct VehicleDirector;

impl VehicleDirector {
    pub fn new() -> Self {
        Self
    }

    /// Four wheels and a V8.
    pub fn build_sports_car(&self, builder: &mut VehicleBuilder) {
        builder.set_wheels(4).set_engine("V8");
    }

    /// Two wheels and a single-cylinder engine.
    pub fn build_bike(&self, builder: &mut VehicleBuilder) {
        builder.set_wheels(2).set_engine("Single-cylinder");
    }
}
