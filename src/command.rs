//! Command pattern: facade workflows wrapped as queueable objects, run in
//! order by an invoker.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::VehicleError;
use crate::facade::VehicleManagementFacade;

/// A unit of deferred work against the facade.
pub trait Command {
    fn execute(&mut self) -> Result<Vec<String>, VehicleError>;
}

/// Defers `create_and_register_vehicle` for a given type tag.
pub struct CreateVehicleCommand {
    facade: Rc<RefCell<VehicleManagementFacade>>,
    vehicle_type: String,
}

impl CreateVehicleCommand {
    pub fn new(
        facade: Rc<RefCell<VehicleManagementFacade>>,
        vehicle_type: impl Into<String>,
    ) -> Self {
        Self {
            facade,
            vehicle_type: vehicle_type.into(),
        }
    }
}

impl Command for CreateVehicleCommand {
    fn execute(&mut self) -> Result<Vec<String>, VehicleError> {
        self.facade
            .borrow_mut()
            .create_and_register_vehicle(&self.vehicle_type)
    }
}

/// Defers the sports-car builder workflow.
pub struct BuildSportsCarCommand {
    facade: Rc<RefCell<VehicleManagementFacade>>,
}

impl BuildSportsCarCommand {
    pub fn new(facade: Rc<RefCell<VehicleManagementFacade>>) -> Self {
        Self { facade }
    }
}

impl Command for BuildSportsCarCommand {
    fn execute(&mut self) -> Result<Vec<String>, VehicleError> {
        Ok(self.facade.borrow_mut().build_and_register_sports_car())
    }
}

/// Defers the bike builder workflow.
pub struct BuildBikeCommand {
    facade: Rc<RefCell<VehicleManagementFacade>>,
}

impl BuildBikeCommand {
    pub fn new(facade: Rc<RefCell<VehicleManagementFacade>>) -> Self {
        Self { facade }
    }
}

impl Command for BuildBikeCommand {
    fn execute(&mut self) -> Result<Vec<String>, VehicleError> {
        Ok(self.facade.borrow_mut().build_and_register_bike())
    }
}

/// Queues commands and runs them front to back on demand.
#[derive(Default)]
pub struct CommandInvoker {
    queue: Vec<Box<dyn Command>>,
}

impl CommandInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_command(&mut self, command: Box<dyn Command>) {
        self.queue.push(command);
    }

    /// Runs every queued command in order, collecting their narration.
    ///
    /// The first failure aborts the sweep and returns its error with the
    /// queue left exactly as it was; side effects of the commands that
    /// already ran stand. The queue is drained only after a fully
    /// successful sweep.
    pub fn execute_commands(&mut self) -> Result<Vec<String>, VehicleError> {
        let mut lines = Vec::new();
        for command in &mut self.queue {
            lines.extend(command.execute()?);
        }
        self.queue.clear();
        Ok(lines)
    }

    /// Drop every pending command without running it.
    pub fn clear(&mut self) {
        self.queue.clear();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
