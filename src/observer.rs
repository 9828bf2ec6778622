//! Observer pattern: the registration system keeps a list of interested
//! parties and tells each of them about every vehicle it registers.
//!
//! Observers are shared via [`Rc`], so the same observer instance can be
//! attached to several systems. [`VehicleRegistrationSystem::register_vehicle`]
//! borrows the system mutably for the whole sweep, so attaching or
//! detaching from inside an observer does not compile. A panicking
//! observer unwinds out of the sweep, skipping the observers after it.

use std::rc::Rc;

/// Receives a notification for every registered vehicle.
pub trait RegistrationObserver {
    fn update(&self, vehicle: &str) -> String;
}

/// Mirrors registrations out to the external service.
#[derive(Debug, Default)]
pub struct ExternalServiceObserver;

impl RegistrationObserver for ExternalServiceObserver {
    fn update(&self, vehicle: &str) -> String {
        format!(
            "External Service notified: Vehicle {} has been registered.",
            vehicle
        )
    }
}

/// Keeps the showroom manager in the loop.
#[derive(Debug, Default)]
pub struct ManagerObserver;

impl RegistrationObserver for ManagerObserver {
    fn update(&self, vehicle: &str) -> String {
        format!(
            "Manager notified: Vehicle {} has been added to the system.",
            vehicle
        )
    }
}

/// The subject: registers vehicles and fans the news out to observers
/// in the order they were attached.
#[derive(Default)]
pub struct VehicleRegistrationSystem {
    observers: Vec<Rc<dyn RegistrationObserver>>,
    latest_vehicle: Option<String>,
}

impl VehicleRegistrationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, observer: Rc<dyn RegistrationObserver>) {
        self.observers.push(observer);
    }

    /// Removes the first attached entry that is the same instance as
    /// `observer`. Unknown observers are ignored.
    pub fn detach(&mut self, observer: &Rc<dyn RegistrationObserver>) {
        if let Some(index) = self
            .observers
            .iter()
            .position(|attached| Rc::ptr_eq(attached, observer))
        {
            self.observers.remove(index);
        }
    }

    /// Registers a vehicle and returns the system's own confirmation
    /// followed by one line per attached observer.
    pub fn register_vehicle(&mut self, vehicle: impl Into<String>) -> Vec<String> {
        let vehicle = vehicle.into();
        let mut lines = vec![format!("Vehicle {} registered in the system.", vehicle)];
        self.latest_vehicle = Some(vehicle);
        lines.extend(self.notify());
        lines
    }

    /// The most recently registered vehicle, if any.
    pub fn latest(&self) -> Option<&str> {
        self.latest_vehicle.as_deref()
    }

    fn notify(&self) -> Vec<String> {
        match self.latest_vehicle.as_deref() {
            Some(vehicle) => self
                .observers
                .iter()
                .map(|observer| observer.update(vehicle))
                .collect(),
            None => Vec::new(),
        }
    }
}
