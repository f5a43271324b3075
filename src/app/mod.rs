//! Application core — pure lamp logic, zero I/O.
//!
//! This module contains the control loop for the lamp: FSM orchestration,
//! the action dispatcher hand-off and brightness updates. All interaction
//! with hardware happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
