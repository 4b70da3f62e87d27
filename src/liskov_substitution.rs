//! # Liskov Substitution Principle (LSP)
//!
//! > Values of a subtype must be usable wherever the base type is expected,
//! > without breaking the program.
//!
//! [`Vehicle::start_engine`] is the base behavior: it prints `Engine started`
//! and returns one [`EngineStarted`] event. [`Car`] keeps that behavior.
//! [`ElectricCar`] overrides it with its own message but keeps the contract:
//! the call always succeeds and always reports exactly one engine-start event.
//!
//! ```rust
//! use solid_recipe::liskov_substitution::{ElectricCar, EngineState, Vehicle};
//!
//! let car: Box<dyn Vehicle> = Box::new(ElectricCar);
//! let event = car.start_engine(); // prints "Electric motor started"
//! assert_eq!(event.message(), "Electric motor started");
//! assert_eq!(event.state(), EngineState::Started);
//! ```

use std::fmt;

/// Engine state. The only transition is `Off` to `Started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    #[default]
    Off,
    Started,
}

impl EngineState {
    /// Moves the engine to `Started`. There is no way back to `Off`.
    pub fn start(self) -> Self {
        match self {
            EngineState::Off => EngineState::Started,
            EngineState::Started => self,
        }
    }
}

/// The event reported by every successful engine start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineStarted {
    message: &'static str,
    state: EngineState,
}

impl EngineStarted {
    /// Prints the message to stdout and returns the event.
    pub fn emit(message: &'static str) -> Self {
        let state = EngineState::Off.start();
        println!("{message}");
        tracing::info!(event = message, ?state, "Engine start event");
        Self { message, state }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// The state the engine ended up in.
    pub fn state(&self) -> EngineState {
        self.state
    }
}

impl fmt::Display for EngineStarted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

/// Something with an engine that can be started.
pub trait Vehicle {
    /// Starts the engine. Never fails.
    fn start_engine(&self) -> EngineStarted {
        EngineStarted::emit("Engine started")
    }
}

/// Uses the base behavior unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Car;

impl Vehicle for Car {}

/// Specializes the side effect, keeps the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectricCar;

impl Vehicle for ElectricCar {
    fn start_engine(&self) -> EngineStarted {
        EngineStarted::emit("Electric motor started")
    }
}

/// Starts any vehicle through the base capability.
pub fn start(vehicle: &dyn Vehicle) -> EngineStarted {
    vehicle.start_engine()
}

#[tracing::instrument]
pub fn demonstrate() -> String {
    let car: Box<dyn Vehicle> = Box::new(ElectricCar);
    let event = car.start_engine();
    format!("Vehicle reported: {event}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_uses_base_behavior() {
        let event = Car.start_engine();
        assert_eq!(event.message(), "Engine started");
        assert_eq!(event.state(), EngineState::Started);
    }

    #[test]
    fn test_electric_car_through_base_reference() {
        let car: &dyn Vehicle = &ElectricCar;
        let event = start(car);
        assert_eq!(event.message(), "Electric motor started");
        assert_ne!(event.message(), "Engine started");
    }

    #[test]
    fn test_every_vehicle_reports_one_started_event() {
        let fleet: Vec<Box<dyn Vehicle>> = vec![Box::new(Car), Box::new(ElectricCar)];
        let events: Vec<EngineStarted> = fleet.iter().map(|v| v.start_engine()).collect();
        assert_eq!(events.len(), fleet.len());
        assert!(events.iter().all(|e| e.state() == EngineState::Started));
    }

    #[test]
    fn test_engine_starts_off() {
        assert_eq!(EngineState::default(), EngineState::Off);
    }

    #[test]
    fn test_start_transition_is_one_way() {
        let state = EngineState::default();
        let started = state.start();
        assert_eq!(started, EngineState::Started);
        assert_eq!(started.start(), EngineState::Started);
    }
}
