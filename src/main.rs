//! Reel Positioner Demo
//!
//! Spins one reel on a fixed frame timer and logs what a renderer would
//! draw each frame.
//!
//! Usage: `reel-positioner [config.json]`

use std::path::Path;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use reel_positioner::{
    MonotonicClock, ReelConfig, ReelPositioner, SymbolPositioner, VERSION, VISIBLE_SLOTS,
};

/// Demo run settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    /// Reel to spin
    reel: ReelConfig,
    /// Time between frames
    frame_interval_millis: u64,
    /// Frames to render before exiting
    frames: u32,
    /// Slots drawn per frame
    visible_slots: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            reel: ReelConfig::default(),
            frame_interval_millis: 20,
            frames: 250,
            visible_slots: VISIBLE_SLOTS,
        }
    }
}

impl DemoConfig {
    fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing {}", path.display()))?;
        config.reel.validate().context("validating reel")?;
        Ok(config)
    }
}

/// What one frame draws.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    moving: bool,
    offset: i64,
    symbols: String,
}

/// Run one renderer frame against any positioner.
fn render_frame<P: SymbolPositioner>(positioner: &mut P, slots: usize) -> Frame {
    let moving = positioner.update();
    Frame {
        moving,
        offset: positioner.first_symbol_position(),
        symbols: (0..slots).map(|slot| positioner.symbol(slot)).collect(),
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Reel Positioner v{}", VERSION);

    let config = match std::env::args_os().nth(1) {
        Some(path) => DemoConfig::load(Path::new(&path))?,
        None => DemoConfig::default(),
    };

    run_demo(&config)
}

fn run_demo(config: &DemoConfig) -> Result<()> {
    let reel = &config.reel;
    info!(
        "Reelset {:?}, start {}, {} ms/symbol, {:?}",
        reel.symbols, reel.start_index, reel.speed_millis, reel.policy
    );

    let mut positioner = ReelPositioner::with_clock(MonotonicClock::new());

    // Nothing has started yet: the renderer sees blanks
    let idle = render_frame(&mut positioner, config.visible_slots);
    info!("Before start: moving={} [{}]", idle.moving, idle.symbols);

    positioner
        .start_with(reel)
        .context("starting reel")?;

    let interval = Duration::from_millis(config.frame_interval_millis);
    let mut last_symbols = String::new();

    for frame_no in 0..config.frames {
        let frame = render_frame(&mut positioner, config.visible_slots);
        debug!(frame_no, offset = frame.offset, symbols = %frame.symbols, "frame");

        if frame.symbols != last_symbols {
            info!("Frame {:>4}: [{}] offset {:>4}", frame_no, frame.symbols, frame.offset);
            last_symbols = frame.symbols;
        }

        thread::sleep(interval);
    }

    if let Some(state) = positioner.state() {
        info!("Final index {} after {} frames", state.index(), config.frames);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reel_positioner::ManualClock;

    #[test]
    fn test_render_frame_idle_then_running() {
        let clock = ManualClock::new(0);
        let mut positioner = ReelPositioner::with_clock(clock.clone());

        let idle = render_frame(&mut positioner, 4);
        assert_eq!(idle, Frame { moving: false, offset: 0, symbols: "    ".into() });

        positioner.start_with(&ReelConfig::new(0, "AGHHBX", 100)).unwrap();
        clock.advance(100);
        let frame = render_frame(&mut positioner, 4);
        assert!(frame.moving);
        assert_eq!(frame.symbols, "XAGH");
        assert_eq!(frame.offset, -100);
    }

    #[test]
    fn test_demo_config_defaults_fill_gaps() {
        let config: DemoConfig = serde_json::from_str(r#"{"frames": 10, "reel": {"symbols": "QQ"}}"#).unwrap();
        assert_eq!(config.frames, 10);
        assert_eq!(config.frame_interval_millis, 20);
        assert_eq!(config.visible_slots, VISIBLE_SLOTS);
        assert_eq!(config.reel.symbols, "QQ");
    }

    #[test]
    fn test_demo_config_rejects_invalid_reel() {
        let path = std::env::temp_dir().join("reel-positioner-demo-invalid.json");
        std::fs::write(&path, r#"{"reel": {"speed_millis": -1}}"#).unwrap();

        let err = DemoConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("negative speed"));

        let _ = std::fs::remove_file(&path);
    }
}
