//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 temperature
//! and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! Instead of timing individual pulse edges, the driver samples the data line
//! at a fixed cadence into a buffer while interrupts are suspended, then
//! decodes the buffer after the fact: a state machine reduces the samples to
//! one run length per data bit, an adaptive midpoint threshold separates
//! short (0) from long (1) pulses, and the resulting 5-byte frame is
//! validated against its checksum before a reading is returned.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Sampled capture tolerant of clock and sensor timing variation
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
//!
//! The data pin must be open-drain with an external pull-up so the line
//! idles high whenever neither side drives it.
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

pub mod dht11;
pub mod error;
pub mod frame;
pub mod interrupt;
pub mod pulse;

pub use dht11::{Dht11, Reading};
pub use error::DhtError;
pub use interrupt::{InterruptControl, NoopInterruptControl};
