//! Trait abstractions for pin access and time to enable testing.
//!
//! The conditioner never touches hardware registers or the wall clock
//! directly; it goes through [`InputSampler`] and [`Clock`], so tests can
//! supply deterministic raw values and simulated elapsed time.

use std::time::{Duration, Instant};

/// Pin configuration applied during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Plain input (analog axes).
    Input,
    /// Input with internal pull-up (active-low switches).
    InputPullup,
}

/// Raw access to the shield's pins.
///
/// Digital reads follow the idle-high convention: a pulled-up switch pin
/// reads `true` when released and `false` (low) when pressed. Analog reads
/// return the converter's raw value in `0..=1023`.
#[cfg_attr(test, mockall::automock)]
pub trait InputSampler {
    /// Configure a pin's mode. Called once per pin during setup.
    fn configure_pin(&mut self, pin: u8, mode: PinMode);

    /// Read a digital pin level (`false` = low = pressed).
    fn read_digital(&mut self, pin: u8) -> bool;

    /// Read an analog input's raw value (`0..=1023`).
    fn read_analog(&mut self, pin: u8) -> u16;
}

/// Monotonic time source for read throttling.
pub trait Clock {
    /// Time elapsed since an arbitrary fixed origin.
    fn now(&self) -> Duration;
}

/// [`Clock`] backed by [`std::time::Instant`], counting from construction.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    started: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
pub mod mocks {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Fake shield for testing: pin levels and analog values settable from
    /// the test while the conditioner owns the sampler.
    #[derive(Clone)]
    pub struct FakeShield {
        state: Rc<RefCell<ShieldState>>,
    }

    struct ShieldState {
        levels: HashMap<u8, bool>,
        analog: HashMap<u8, u16>,
        configured: Vec<(u8, PinMode)>,
    }

    impl FakeShield {
        /// All switches released (pulled up), all axes at raw 512.
        pub fn new() -> Self {
            Self {
                state: Rc::new(RefCell::new(ShieldState {
                    levels: HashMap::new(),
                    analog: HashMap::new(),
                    configured: Vec::new(),
                })),
            }
        }

        /// Force a switch pin low (pressed).
        pub fn press(&self, pin: u8) {
            self.state.borrow_mut().levels.insert(pin, false);
        }

        /// Return a switch pin to its pulled-up idle level.
        pub fn release(&self, pin: u8) {
            self.state.borrow_mut().levels.insert(pin, true);
        }

        /// Set an analog input's raw value.
        pub fn set_analog(&self, pin: u8, raw: u16) {
            self.state.borrow_mut().analog.insert(pin, raw);
        }

        /// Pin configurations applied so far, in call order.
        pub fn configured(&self) -> Vec<(u8, PinMode)> {
            self.state.borrow().configured.clone()
        }
    }

    impl InputSampler for FakeShield {
        fn configure_pin(&mut self, pin: u8, mode: PinMode) {
            self.state.borrow_mut().configured.push((pin, mode));
        }

        fn read_digital(&mut self, pin: u8) -> bool {
            *self.state.borrow().levels.get(&pin).unwrap_or(&true)
        }

        fn read_analog(&mut self, pin: u8) -> u16 {
            *self.state.borrow().analog.get(&pin).unwrap_or(&512)
        }
    }

    /// Fake clock advanced manually by the test.
    #[derive(Clone)]
    pub struct FakeClock {
        now: Rc<RefCell<Duration>>,
    }

    impl FakeClock {
        /// Start at `ms` milliseconds.
        pub fn at(ms: u64) -> Self {
            Self {
                now: Rc::new(RefCell::new(Duration::from_millis(ms))),
            }
        }

        /// Jump forward by `ms` milliseconds.
        pub fn advance(&self, ms: u64) {
            let mut now = self.now.borrow_mut();
            *now += Duration::from_millis(ms);
        }

        /// Jump to an absolute time in milliseconds.
        pub fn set(&self, ms: u64) {
            *self.now.borrow_mut() = Duration::from_millis(ms);
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> Duration {
            *self.now.borrow()
        }
    }
}
