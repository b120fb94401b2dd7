//! # Gamepad Shield Library
//!
//! Debounced, zero-calibrated input polling for joystick shield gamepads.
//!
//! This library conditions the raw, noisy signals of a gamepad shield (seven
//! digital switches plus a two-axis analog joystick) into a stable,
//! rate-limited stream an application loop can consume: switch reads are
//! throttled to suppress repeat reports, axis reads are zero-adjusted against
//! offsets captured at startup and deadbanded around center.

pub mod config;
pub mod error;
pub mod shield;
