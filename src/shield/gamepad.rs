//! # Gamepad Module
//!
//! Conditions raw shield reads into a stable, low-rate input stream.
//!
//! ## Read throttling
//!
//! Hardware pins are noisy and far faster than an application loop wants to
//! see. [`Gamepad`] applies a minimum read interval separately to the switch
//! group and the axis group: within the window, switch polls report
//! [`Channel::None`] (suppressing repeat press reports, which doubles as the
//! debounce), while axis value reads return the last sampled value (stick
//! position is continuous state, so stale-but-valid beats suppressed).
//! [`Gamepad::axis_direction`] is the exception: like switch polls it reports
//! 0 until the window elapses. The asymmetry is kept for compatibility with
//! the shield's established behavior.
//!
//! ## Zero calibration and deadband
//!
//! The joystick's resting raw value is captured per axis at construction and
//! subtracted from every later reading, centering the range on 0. Readings
//! whose magnitude lands inside the deadband are forced to exactly 0 to
//! suppress jitter around center; readings outside it pass through exactly,
//! with no scaling.
//!
//! ## Usage
//!
//! ```
//! use std::time::Duration;
//! use gamepad_shield::shield::{Channel, Clock, Gamepad, InputSampler, PinMap, PinMode};
//!
//! // A shield that is idle: switches released, stick centered at raw 512.
//! struct IdleShield;
//! impl InputSampler for IdleShield {
//!     fn configure_pin(&mut self, _pin: u8, _mode: PinMode) {}
//!     fn read_digital(&mut self, _pin: u8) -> bool { true }
//!     fn read_analog(&mut self, _pin: u8) -> u16 { 512 }
//! }
//!
//! struct FixedClock;
//! impl Clock for FixedClock {
//!     fn now(&self) -> Duration { Duration::ZERO }
//! }
//!
//! let mut gamepad = Gamepad::new(PinMap::default(), IdleShield, FixedClock);
//! assert_eq!(gamepad.poll_switch(), Channel::None);
//! assert_eq!(gamepad.axis_value(Channel::X), 0);
//! ```

use std::time::Duration;

use tracing::{debug, trace};

use super::channel::{Channel, PinMap};
use super::hal::{Clock, InputSampler, PinMode};

/// Default minimum time between reads of a sampling group.
pub const DEFAULT_READ_INTERVAL: Duration = Duration::from_millis(100);

/// Default deadband around the calibrated zero, in raw units.
pub const DEFAULT_DEADBAND: u16 = 5;

/// Conditions a shield's switches and joystick into debounced,
/// zero-calibrated readings.
///
/// Construction configures every pin through the injected sampler and
/// captures the joystick's current raw position as the per-axis zero offsets,
/// so the stick is assumed centered when the `Gamepad` is created. All later
/// reads are throttled against the injected clock.
///
/// Intended for a single-threaded cooperative polling loop; the struct keeps
/// its throttle timestamps and axis caches without any internal locking.
pub struct Gamepad<S, C> {
    sampler: S,
    clock: C,
    pins: PinMap,
    read_interval: Duration,
    deadband: u16,
    offset_x: u16,
    offset_y: u16,
    value_x: i16,
    value_y: i16,
    last_digital: Option<Duration>,
    last_analog: Option<Duration>,
}

impl<S: InputSampler, C: Clock> Gamepad<S, C> {
    /// Creates a gamepad over the given wiring, sampler and clock.
    ///
    /// Configures each switch pin for pulled-up active-low input and both
    /// axis pins for plain input, then captures the current raw X/Y readings
    /// as the zero offsets. The offsets are fixed for the life of the value
    /// and never recomputed.
    ///
    /// Read interval and deadband start at [`DEFAULT_READ_INTERVAL`] and
    /// [`DEFAULT_DEADBAND`].
    pub fn new(pins: PinMap, mut sampler: S, clock: C) -> Self {
        for binding in pins.digital_bindings() {
            sampler.configure_pin(binding.pin, PinMode::InputPullup);
        }
        sampler.configure_pin(pins.x, PinMode::Input);
        sampler.configure_pin(pins.y, PinMode::Input);

        let offset_x = sampler.read_analog(pins.x);
        let offset_y = sampler.read_analog(pins.y);
        debug!(offset_x, offset_y, "captured joystick zero offsets");

        Self {
            sampler,
            clock,
            pins,
            read_interval: DEFAULT_READ_INTERVAL,
            deadband: DEFAULT_DEADBAND,
            offset_x,
            offset_y,
            value_x: 0,
            value_y: 0,
            last_digital: None,
            last_analog: None,
        }
    }

    /// Sets the minimum time between reads for both sampling groups.
    ///
    /// Applications use this to throttle repeat press detection while a
    /// switch is held. `Duration::ZERO` disables throttling entirely, so
    /// every call takes a fresh hardware sample.
    pub fn set_read_interval(&mut self, interval: Duration) {
        self.read_interval = interval;
    }

    /// Returns the configured read interval.
    #[must_use]
    pub fn read_interval(&self) -> Duration {
        self.read_interval
    }

    /// Sets the deadband applied around the calibrated zero, in raw units.
    pub fn set_deadband(&mut self, deadband: u16) {
        self.deadband = deadband;
    }

    /// Returns the configured deadband.
    #[must_use]
    pub fn deadband(&self) -> u16 {
        self.deadband
    }

    /// Returns the first pressed switch, scanning in priority order
    /// A, B, C, D, E, F, K.
    ///
    /// Returns [`Channel::None`] when no switch is active, or when less than
    /// the read interval has elapsed since the previous switch scan. During
    /// the throttle window the result is unconditionally `None` rather than
    /// a cached press, so a held switch is reported once per interval instead
    /// of once per call.
    ///
    /// A fresh scan updates the switch-group timestamp even when it finds
    /// nothing pressed.
    ///
    /// When several switches are held at once only the highest-priority one
    /// is reported; there is no chording.
    pub fn poll_switch(&mut self) -> Channel {
        let now = self.clock.now();
        if !throttle_elapsed(self.last_digital, now, self.read_interval) {
            return Channel::None;
        }
        self.last_digital = Some(now);

        for binding in self.pins.digital_bindings() {
            // Pulled-up inputs read low when pressed
            if !self.sampler.read_digital(binding.pin) {
                trace!(channel = %binding.channel, "switch active");
                return binding.channel;
            }
        }

        Channel::None
    }

    /// True if any switch is currently reported pressed.
    ///
    /// This is `poll_switch() != Channel::None` and consumes a sample the
    /// same way: calling both in one tick counts as a single sample, with the
    /// second call landing in the throttle window.
    pub fn any_switch_pressed(&mut self) -> bool {
        self.poll_switch() != Channel::None
    }

    /// Returns the zero-adjusted, deadbanded value of a joystick axis.
    ///
    /// The value is the raw analog reading minus the offset captured at
    /// construction, forced to 0 when its magnitude is below the deadband.
    /// With the standard 10-bit converter and a centered stick the result
    /// spans roughly -512..=511.
    ///
    /// If the read interval has not elapsed since the last axis sample the
    /// cached value for the requested axis is returned instead of a fresh
    /// reading. A fresh sample updates the axis-group timestamp and the
    /// per-axis cache. Both axes share one timestamp, so sampling X freshly
    /// starts the window for Y as well.
    ///
    /// Channels other than X and Y return 0 and leave all state untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use gamepad_shield::shield::{Channel, Clock, Gamepad, InputSampler, PinMap, PinMode};
    ///
    /// struct PushedRight;
    /// impl InputSampler for PushedRight {
    ///     fn configure_pin(&mut self, _pin: u8, _mode: PinMode) {}
    ///     fn read_digital(&mut self, _pin: u8) -> bool { true }
    ///     fn read_analog(&mut self, pin: u8) -> u16 {
    ///         if pin == 0 { 700 } else { 512 }
    ///     }
    /// }
    /// struct FixedClock;
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> Duration { Duration::ZERO }
    /// }
    ///
    /// let mut gamepad = Gamepad::new(PinMap::default(), PushedRight, FixedClock);
    /// // Offset was captured at 700, so the "pushed" stick reads as zero...
    /// assert_eq!(gamepad.axis_value(Channel::X), 0);
    /// // ...and a non-axis channel always reads 0.
    /// assert_eq!(gamepad.axis_value(Channel::B), 0);
    /// ```
    pub fn axis_value(&mut self, channel: Channel) -> i16 {
        if !channel.is_axis() {
            return 0;
        }

        let now = self.clock.now();
        if !throttle_elapsed(self.last_analog, now, self.read_interval) {
            return match channel {
                Channel::X => self.value_x,
                _ => self.value_y,
            };
        }
        self.last_analog = Some(now);

        let (pin, offset) = match channel {
            Channel::X => (self.pins.x, self.offset_x),
            _ => (self.pins.y, self.offset_y),
        };

        let raw = self.sampler.read_analog(pin);
        let mut adjusted = raw as i16 - offset as i16;
        if adjusted.unsigned_abs() < self.deadband {
            adjusted = 0;
        }
        trace!(channel = %channel, raw, adjusted, "sampled axis");

        match channel {
            Channel::X => self.value_x = adjusted,
            _ => self.value_y = adjusted,
        }
        adjusted
    }

    /// Returns which side of center a joystick axis is pushed to.
    ///
    /// -1 for the negative range, +1 for the positive range, 0 when the axis
    /// is centered (inside the deadband). Axis position usually matters more
    /// than its exact value, so this is the common per-tick call.
    ///
    /// Returns 0 unconditionally while the axis read interval has not
    /// elapsed. Note this is stricter than [`Gamepad::axis_value`], which
    /// serves its cache during the window; poll direction before value in a
    /// tick if both are needed.
    pub fn axis_direction(&mut self, channel: Channel) -> i8 {
        let now = self.clock.now();
        if !throttle_elapsed(self.last_analog, now, self.read_interval) {
            return 0;
        }

        match self.axis_value(channel) {
            0 => 0,
            v if v < 0 => -1,
            _ => 1,
        }
    }
}

/// True when `last` is unset or at least `interval` before `now`.
fn throttle_elapsed(last: Option<Duration>, now: Duration, interval: Duration) -> bool {
    match last {
        None => true,
        Some(t) => now.saturating_sub(t) >= interval,
    }
}
