//! DuoLamp firmware library.
//!
//! Exposes the pure-logic modules for integration testing and the firmware
//! binary. The state machine, action dispatcher and brightness engine have
//! no hardware dependencies; drivers are generic over `embedded-hal` traits
//! so the same code runs against `esp-idf-hal` on target and fakes on host.

#![deny(unused_must_use)]

pub mod action;
pub mod app;
pub mod brightness;
pub mod config;
pub mod error;
pub mod fsm;
pub mod pins;
pub mod settings;

pub mod adapters;
pub mod drivers;
