//! # Configuration Module
//!
//! Handles loading and validating configuration from TOML files.

use serde::de::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{GamepadShieldError, Result};
use crate::shield::PinMap;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub gamepad: GamepadConfig,

    #[serde(default)]
    pub pins: PinsConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

/// Input conditioning configuration
#[derive(Debug, Deserialize, Clone)]
pub struct GamepadConfig {
    /// Minimum time between hardware reads per sampling group, in
    /// milliseconds. Zero disables throttling.
    #[serde(default = "default_read_interval_ms")]
    pub read_interval_ms: u64,

    /// Deadband around the calibrated joystick zero, in raw units.
    #[serde(default = "default_deadband")]
    pub deadband: u16,
}

/// Channel-to-pin wiring configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PinsConfig {
    #[serde(default = "default_pin_a")]
    pub a: u8,

    #[serde(default = "default_pin_b")]
    pub b: u8,

    #[serde(default = "default_pin_c")]
    pub c: u8,

    #[serde(default = "default_pin_d")]
    pub d: u8,

    #[serde(default = "default_pin_e")]
    pub e: u8,

    #[serde(default = "default_pin_f")]
    pub f: u8,

    #[serde(default = "default_pin_k")]
    pub k: u8,

    #[serde(default = "default_pin_x")]
    pub x: u8,

    #[serde(default = "default_pin_y")]
    pub y: u8,
}

/// Demo polling loop configuration
#[derive(Debug, Deserialize, Clone)]
pub struct DemoConfig {
    /// Polling loop rate in Hz.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,
}

// Default value functions
fn default_read_interval_ms() -> u64 { 100 }
fn default_deadband() -> u16 { 5 }

fn default_pin_a() -> u8 { 2 }
fn default_pin_b() -> u8 { 3 }
fn default_pin_c() -> u8 { 4 }
fn default_pin_d() -> u8 { 5 }
fn default_pin_e() -> u8 { 6 }
fn default_pin_f() -> u8 { 7 }
fn default_pin_k() -> u8 { 8 }
fn default_pin_x() -> u8 { 0 }
fn default_pin_y() -> u8 { 1 }

fn default_tick_hz() -> u32 { 50 }

impl Default for GamepadConfig {
    fn default() -> Self {
        Self {
            read_interval_ms: default_read_interval_ms(),
            deadband: default_deadband(),
        }
    }
}

impl Default for PinsConfig {
    fn default() -> Self {
        Self {
            a: default_pin_a(),
            b: default_pin_b(),
            c: default_pin_c(),
            d: default_pin_d(),
            e: default_pin_e(),
            f: default_pin_f(),
            k: default_pin_k(),
            x: default_pin_x(),
            y: default_pin_y(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            tick_hz: default_tick_hz(),
        }
    }
}

impl GamepadConfig {
    /// The read interval as a [`Duration`].
    #[must_use]
    pub fn read_interval(&self) -> Duration {
        Duration::from_millis(self.read_interval_ms)
    }
}

impl PinsConfig {
    /// Builds the wiring table consumed by the conditioner.
    #[must_use]
    pub fn to_pin_map(&self) -> PinMap {
        PinMap {
            a: self.a,
            b: self.b,
            c: self.c,
            d: self.d,
            e: self.e,
            f: self.f,
            k: self.k,
            x: self.x,
            y: self.y,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - TOML parsing fails
    /// - Validation fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gamepad_shield::config::Config;
    ///
    /// let config = Config::load("config/default.toml")?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns error if any configuration value is out of valid range
    fn validate(&self) -> Result<()> {
        // read_interval_ms = 0 is allowed: it disables throttling
        if self.gamepad.read_interval_ms > 60000 {
            return Err(GamepadShieldError::Config(toml::de::Error::custom(
                "read_interval_ms must be at most 60000",
            )));
        }

        // The converter range is 0..=1023; a larger deadband zeroes everything
        if self.gamepad.deadband > 1023 {
            return Err(GamepadShieldError::Config(toml::de::Error::custom(
                "deadband must be between 0 and 1023",
            )));
        }

        let digital = [
            ("a", self.pins.a),
            ("b", self.pins.b),
            ("c", self.pins.c),
            ("d", self.pins.d),
            ("e", self.pins.e),
            ("f", self.pins.f),
            ("k", self.pins.k),
        ];
        for (i, (name, pin)) in digital.iter().enumerate() {
            for (other_name, other_pin) in &digital[i + 1..] {
                if pin == other_pin {
                    return Err(GamepadShieldError::Config(toml::de::Error::custom(
                        format!("pins.{} and pins.{} are both wired to pin {}", name, other_name, pin),
                    )));
                }
            }
        }

        if self.pins.x == self.pins.y {
            return Err(GamepadShieldError::Config(toml::de::Error::custom(
                "pins.x and pins.y must use different analog inputs",
            )));
        }

        if self.demo.tick_hz == 0 || self.demo.tick_hz > 1000 {
            return Err(GamepadShieldError::Config(toml::de::Error::custom(
                "tick_hz must be between 1 and 1000",
            )));
        }

        Ok(())
    }
}
