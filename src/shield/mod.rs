//! # Shield Module
//!
//! Joystick shield input handling.
//!
//! This module handles:
//! - Naming the shield's switches and joystick axes ([`Channel`])
//! - Mapping channels to hardware pins ([`PinMap`])
//! - Abstracting pin access and time behind injectable traits ([`hal`])
//! - Conditioning raw reads into debounced, zero-calibrated values
//!   ([`Gamepad`])

pub mod channel;
pub mod gamepad;
pub mod hal;

pub use channel::{Channel, PinBinding, PinMap};
pub use gamepad::{Gamepad, DEFAULT_DEADBAND, DEFAULT_READ_INTERVAL};
pub use hal::{Clock, InputSampler, MonotonicClock, PinMode};
