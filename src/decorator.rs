//! Decorator pattern: wrap a vehicle to layer extra narration around its
//! creation, leaving the base untouched and reusable.

use std::rc::Rc;

use crate::vehicle::Vehicle;

/// Layers the luxury package on top of the wrapped vehicle's creation.
#[derive(Debug)]
pub struct LuxuryPackage {
    inner: Rc<dyn Vehicle>,
}

impl LuxuryPackage {
    pub fn new(inner: Rc<dyn Vehicle>) -> Self {
        Self { inner }
    }
}

impl Vehicle for LuxuryPackage {
    fn create(&self) -> String {
        format!("{}\nAdding luxury package.", self.inner.create())
    }
}

/// Layers the sports package on top of the wrapped vehicle's creation.
#[derive(Debug)]
pub struct SportsPackage {
    inner: Rc<dyn Vehicle>,
}

impl SportsPackage {
    pub fn new(inner: Rc<dyn Vehicle>) -> Self {
        Self { inner }
    }
}

impl Vehicle for SportsPackage {
    fn create(&self) -> String {
        format!("{}\nAdding sports package.", self.inner.create())
    }
}
