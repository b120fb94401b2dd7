//! # Channel Module
//!
//! Names for the shield's input sources and their pin wiring.
//!
//! A shield exposes seven momentary switches (A-F on the gamepad face, K on
//! the joystick push-button) and one two-axis analog joystick (X, Y). The
//! [`PinMap`] ties those channels to hardware pins; the defaults match the
//! common JoyStick Shield V1 layout, but consumers with different wiring can
//! supply their own map.

use std::fmt;

/// A named input source on the shield.
///
/// `None` is the sentinel returned by switch polling when nothing is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    /// No channel / nothing active.
    None,
    /// A switch on the gamepad.
    A,
    /// B switch on the gamepad.
    B,
    /// C switch on the gamepad.
    C,
    /// D switch on the gamepad.
    D,
    /// E selection switch.
    E,
    /// F selection switch.
    F,
    /// K switch (joystick push-button).
    K,
    /// Joystick X axis.
    X,
    /// Joystick Y axis.
    Y,
}

impl Channel {
    /// True for the seven digital switches (A-F, K).
    #[must_use]
    pub fn is_switch(&self) -> bool {
        matches!(
            self,
            Channel::A
                | Channel::B
                | Channel::C
                | Channel::D
                | Channel::E
                | Channel::F
                | Channel::K
        )
    }

    /// True for the analog joystick axes (X, Y).
    #[must_use]
    pub fn is_axis(&self) -> bool {
        matches!(self, Channel::X | Channel::Y)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::None => "none",
            Channel::A => "A",
            Channel::B => "B",
            Channel::C => "C",
            Channel::D => "D",
            Channel::E => "E",
            Channel::F => "F",
            Channel::K => "K",
            Channel::X => "X",
            Channel::Y => "Y",
        };
        f.write_str(name)
    }
}

/// One entry of the digital channel-to-pin wiring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinBinding {
    /// Hardware pin carrying the switch signal.
    pub pin: u8,
    /// The channel wired to that pin.
    pub channel: Channel,
}

/// Channel-to-pin wiring for a shield.
///
/// Digital switch pins are numbered like the host board's digital header;
/// `x` and `y` are analog input indices (0 = A0, 1 = A1).
///
/// # Examples
///
/// ```
/// use gamepad_shield::shield::PinMap;
///
/// // Standard JoyStick Shield V1 wiring
/// let pins = PinMap::default();
/// assert_eq!(pins.a, 2);
/// assert_eq!(pins.k, 8);
/// assert_eq!(pins.x, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinMap {
    /// A switch pin.
    pub a: u8,
    /// B switch pin.
    pub b: u8,
    /// C switch pin.
    pub c: u8,
    /// D switch pin.
    pub d: u8,
    /// E switch pin.
    pub e: u8,
    /// F switch pin.
    pub f: u8,
    /// K (joystick push-button) pin.
    pub k: u8,
    /// X axis analog input.
    pub x: u8,
    /// Y axis analog input.
    pub y: u8,
}

impl Default for PinMap {
    /// JoyStick Shield V1 wiring: A-F on D2-D7, K on D8, joystick on A0/A1.
    fn default() -> Self {
        Self {
            a: 2,
            b: 3,
            c: 4,
            d: 5,
            e: 6,
            f: 7,
            k: 8,
            x: 0,
            y: 1,
        }
    }
}

impl PinMap {
    /// The digital switch bindings in scan priority order.
    ///
    /// Switch polling reports the first active entry of this table, so the
    /// order doubles as the priority when several switches are held at once:
    /// A, B, C, D, E, F, K.
    #[must_use]
    pub fn digital_bindings(&self) -> [PinBinding; 7] {
        [
            PinBinding { pin: self.a, channel: Channel::A },
            PinBinding { pin: self.b, channel: Channel::B },
            PinBinding { pin: self.c, channel: Channel::C },
            PinBinding { pin: self.d, channel: Channel::D },
            PinBinding { pin: self.e, channel: Channel::E },
            PinBinding { pin: self.f, channel: Channel::F },
            PinBinding { pin: self.k, channel: Channel::K },
        ]
    }
}
