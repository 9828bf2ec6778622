//! # Design Patterns over Two Toy Domains
//!
//! This crate works the classic patterns through a vehicle showroom and a
//! small library desk:
//!
//! ## Creational
//! - **Factory** ([`factory`]): tag-to-vehicle construction over a closed set
//! - **Builder + Director** ([`builder`]): stepwise assembly, two stock recipes
//! - **Singleton** ([`registry`]): `ServiceCenter::global`, one per process
//!
//! ## Structural
//! - **Decorator** ([`decorator`]): luxury/sports packages over any [`Vehicle`]
//! - **Adapter** ([`adapter`]): the external service behind the expected shape
//! - **Facade** ([`facade`]): [`VehicleManagementFacade`] workflow front door
//!
//! ## Behavioral
//! - **Observer** ([`observer`]): registration fan-out in attachment order
//! - **Command** ([`command`]): facade workflows queued behind an invoker
//!
//! ## Principles
//! - **Interface segregation** ([`library`]): narrow capability traits and
//!   injected storage/notifier behind `LibraryManager`
//!
//! Component operations return their narration as strings; the demo
//! binaries (`vehicle_basics`, `vehicle_showroom`, `library_desk`) print
//! them. Try `cargo run --bin vehicle_showroom`.

pub mod adapter;
pub mod builder;
pub mod command;
pub mod decorator;
pub mod error;
pub mod facade;
pub mod factory;
pub mod library;
pub mod observer;
pub mod registry;
pub mod vehicle;

pub use error::VehicleError;
pub use facade::VehicleManagementFacade;
pub use registry::ServiceCenter;
pub use vehicle::Vehicle;
