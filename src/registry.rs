//! Singleton pattern: the process-wide service center tracking every
//! registered vehicle label.

use std::sync::{Mutex, OnceLock, PoisonError};

/// Ordered, append-only list of registered vehicle labels.
///
/// The process-wide instance lives behind [`ServiceCenter::global`]; the
/// `OnceLock` there settles the first-use construction race, and the
/// interior `Mutex` keeps registration sound should the handle ever cross
/// threads. Dependents are handed the `&'static` handle explicitly rather
/// than reaching for a hidden global, and tests that want isolation build
/// their own instance with [`ServiceCenter::new`].
#[derive(Debug, Default)]
pub struct ServiceCenter {
    vehicles: Mutex<Vec<String>>,
}

impl ServiceCenter {
    /// A private service center, unrelated to the global one.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide service center, constructed on first acquisition.
    /// Every call, from every call site, returns the identical instance.
    pub fn global() -> &'static ServiceCenter {
        static CENTER: OnceLock<ServiceCenter> = OnceLock::new();
        CENTER.get_or_init(ServiceCenter::new)
    }

    /// Append `label` to the register and return the confirmation line.
    pub fn register(&self, label: impl Into<String>) -> String {
        let label = label.into();
        let line = format!("Vehicle {} registered.", label);
        self.lock().push(label);
        line
    }

    /// Snapshot of every label registered so far, in registration order.
    pub fn registered(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panicked writer leaves the list usable.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.vehicles.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_acquisitions_are_the_same_instance() {
        let first = ServiceCenter::global();
        let second = ServiceCenter::global();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_registration_via_one_handle_is_visible_via_another() {
        // The global register is append-only and shared by every test in
        // the process, so assert on a label nothing else uses.
        let first = ServiceCenter::global();
        let second = ServiceCenter::global();

        first.register("Registry Smoke Test Van");
        assert!(second
            .registered()
            .contains(&"Registry Smoke Test Van".to_string()));
    }

    #[test]
    fn test_register_confirms_and_appends_in_order() {
        let center = ServiceCenter::new();
        assert!(center.is_empty());

        assert_eq!(center.register("Car"), "Vehicle Car registered.");
        assert_eq!(center.register("Bike"), "Vehicle Bike registered.");

        assert_eq!(center.registered(), vec!["Car", "Bike"]);
        assert_eq!(center.len(), 2);
    }
}
