//! DHT11 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 temperature
//! and humidity sensor, built on top of the [`embedded-hal`] traits.
//!
//! The DHT11 talks over a single data line. The driver bit-bangs that line:
//! it sends the start signal, checks the sensor's acknowledgment pulse,
//! clocks in the 40-bit frame, and validates the 8-bit sum checksum before
//! a reading is reported. The sensor resolves whole units only, so readings
//! are integer percent and integer degrees Celsius.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - Designed for `no_std` environments
//! - Bounded waits on every pin poll, so a sensor that stalls mid-frame
//!   surfaces as [`DhtError::Timeout`] instead of hanging the caller
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access
//! - [`DelayNs`] for accurate timing
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

pub use dht11::{Dht11, MIN_READ_INTERVAL_MS};
pub use error::DhtError;
pub use frame::{Frame, Reading};
