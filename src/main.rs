//! # Gamepad Shield Demo
//!
//! Polls a simulated joystick shield and logs the conditioned input stream.
//!
//! The demo stands in for the application loop a real consumer would run:
//! every scheduler tick it polls the conditioner for switch presses and
//! joystick movement and logs what comes back. Hardware is replaced by a
//! deterministic simulated shield so the conditioning behavior (throttling,
//! zero calibration, deadband) can be observed without a board attached.

use anyhow::Result;
use tokio::time::{interval, Duration};
use tracing::{debug, info};

use gamepad_shield::config::Config;
use gamepad_shield::shield::{Channel, Gamepad, InputSampler, MonotonicClock, PinMap, PinMode};

/// Configuration file read when no path argument is given.
const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Number of ticks between status log messages
const STATUS_LOG_INTERVAL_TICKS: u64 = 500;

/// Period of the simulated X axis sweep in milliseconds
const DEMO_AXIS_PERIOD_MS: u64 = 8000;

/// Peak deflection of the simulated X axis sweep, in raw units
const DEMO_AXIS_AMPLITUDE: i64 = 300;

/// Simulated X axis: a triangle wave around raw center 512.
///
/// Starts centered (so offset capture at startup sees the resting position),
/// sweeps to +amplitude, through center to -amplitude, and back, over
/// [`DEMO_AXIS_PERIOD_MS`].
fn demo_axis_raw(ms: u64) -> u16 {
    let quarter = (DEMO_AXIS_PERIOD_MS / 4) as i64;
    let phase = (ms % DEMO_AXIS_PERIOD_MS) as i64;

    let deflection = if phase < quarter {
        phase * DEMO_AXIS_AMPLITUDE / quarter
    } else if phase < 3 * quarter {
        DEMO_AXIS_AMPLITUDE - (phase - quarter) * DEMO_AXIS_AMPLITUDE / quarter
    } else {
        (phase - 3 * quarter) * DEMO_AXIS_AMPLITUDE / quarter - DEMO_AXIS_AMPLITUDE
    };

    (512 + deflection) as u16
}

/// Simulated Y axis: small drift around center that stays inside the default
/// deadband, so the conditioned value holds at 0.
fn demo_jitter_raw(ms: u64) -> u16 {
    512 + ((ms / 250) % 7) as u16 - 3
}

/// Simulated switch level for a pin (idle-high, low = pressed).
///
/// B taps for 150 ms every 2 s; A joins for 120 ms every 5 s, overlapping B
/// at the 10 s mark to show scan priority.
fn demo_switch_level(pins: &PinMap, pin: u8, ms: u64) -> bool {
    if pin == pins.b {
        ms % 2000 >= 150
    } else if pin == pins.a {
        ms % 5000 >= 120
    } else {
        true
    }
}

/// Deterministic stand-in for shield hardware.
struct DemoShield {
    pins: PinMap,
    started: std::time::Instant,
}

impl DemoShield {
    fn new(pins: PinMap) -> Self {
        Self {
            pins,
            started: std::time::Instant::now(),
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }
}

impl InputSampler for DemoShield {
    fn configure_pin(&mut self, pin: u8, mode: PinMode) {
        debug!(pin, ?mode, "configured simulated pin");
    }

    fn read_digital(&mut self, pin: u8) -> bool {
        demo_switch_level(&self.pins, pin, self.elapsed_ms())
    }

    fn read_analog(&mut self, pin: u8) -> u16 {
        let ms = self.elapsed_ms();
        if pin == self.pins.x {
            demo_axis_raw(ms)
        } else {
            demo_jitter_raw(ms)
        }
    }
}

/// Main entry point for the gamepad-shield demo
///
/// Initializes logging, loads the TOML configuration, builds the conditioner
/// over a simulated shield and runs the polling loop until Ctrl+C.
///
/// # Control Flow
///
/// 1. **Initialization**
///    - Set up logging with tracing subscriber
///    - Load configuration (path from first CLI argument, else
///      `config/default.toml`)
///    - Build the conditioner; zero offsets are captured here, while the
///      simulated stick rests at center
///
/// 2. **Main Loop**
///    - Poll switches and the joystick once per tick
///    - Log presses as they are reported and movement as it changes
///    - Log a status summary every [`STATUS_LOG_INTERVAL_TICKS`] ticks
///
/// 3. **Graceful Shutdown**
///    - Ctrl+C stops the loop and logs final counters
///
/// # Errors
///
/// Returns error if the configuration file cannot be read or fails
/// validation.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("gamepad-shield v{} starting...", env!("CARGO_PKG_VERSION"));

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;
    info!("Loaded configuration from {}", config_path);

    let pins = config.pins.to_pin_map();
    let mut gamepad = Gamepad::new(pins, DemoShield::new(pins), MonotonicClock::new());
    gamepad.set_read_interval(config.gamepad.read_interval());
    gamepad.set_deadband(config.gamepad.deadband);

    let period_ms = 1000 / config.demo.tick_hz;
    let mut ticker = interval(Duration::from_millis(period_ms as u64));

    info!(
        "Starting polling loop at {}Hz (read interval {}ms, deadband {})",
        config.demo.tick_hz, config.gamepad.read_interval_ms, config.gamepad.deadband
    );
    info!("Press Ctrl+C to exit");

    let mut tick_count: u64 = 0;
    let mut press_count: u64 = 0;
    let mut last_position: (i16, i16) = (0, 0);

    // Main polling loop
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match gamepad.poll_switch() {
                    Channel::None => {}
                    switch => {
                        press_count += 1;
                        info!(%switch, "switch pressed");
                    }
                }

                // Direction before value, so both see this tick's sample
                let direction = gamepad.axis_direction(Channel::X);
                let position = (
                    gamepad.axis_value(Channel::X),
                    gamepad.axis_value(Channel::Y),
                );
                if position != last_position {
                    debug!(x = position.0, y = position.1, direction, "joystick moved");
                    last_position = position;
                }

                tick_count += 1;
                if tick_count % STATUS_LOG_INTERVAL_TICKS == 0 {
                    info!(
                        "{} ticks, {} switch presses, joystick at ({}, {})",
                        tick_count, press_count, position.0, position.1
                    );
                }
            }

            // Handle Ctrl+C for graceful shutdown
            _ = tokio::signal::ctrl_c() => {
                info!("Received Ctrl+C, shutting down...");
                info!("Total ticks: {}, switch presses: {}", tick_count, press_count);
                break;
            }
        }
    }

    Ok(())
}
