//! Gameplay tuning and the cosmetic overrides read from the page URL.
//!
//! Distances are CSS pixels and rates are per simulation tick; one tick is
//! [`STEP`] seconds.

/// Fixed simulation step.
pub const STEP: f32 = 1.0 / 60.0;
/// Longest backlog the frame timer will try to catch up on.
pub const MAX_CATCH_UP_STEPS: f32 = 5.0;

pub const BIRD_X: f32 = 50.0;
pub const BIRD_START_Y: f32 = 150.0;
pub const BIRD_RADIUS: f32 = 15.0;
pub const GRAVITY: f32 = 0.25;
pub const FLAP_VELOCITY: f32 = -4.5;

pub const PIPE_WIDTH: f32 = 50.0;
pub const PIPE_GAP: f32 = 150.0;
pub const PIPE_MIN_HEIGHT: f32 = 50.0;
pub const PIPE_CAP_HEIGHT: f32 = 20.0;
/// Ticks between obstacle spawns.
pub const PIPE_INTERVAL: u64 = 120;

/// Ticks between background cloud spawns.
pub const CLOUD_INTERVAL: u64 = 100;
pub const CLOUD_DESPAWN_X: f32 = -100.0;

pub const INITIAL_SPEED: f32 = 3.0;
pub const SPEED_STEP: f32 = 0.2;
/// Every this many points the world speeds up by [`SPEED_STEP`].
pub const SPEED_MILESTONE: u32 = 5;

pub const READY_BOB_PERIOD_MS: f32 = 300.0;
pub const READY_BOB_HEIGHT: f32 = 10.0;

/// Smallest playfield that still fits a gap between two minimum walls.
pub const MIN_WORLD_HEIGHT: f32 = PIPE_MIN_HEIGHT * 2.0 + PIPE_GAP;

pub const HIGH_SCORE_KEY: &str = "flappyHighScore";

pub const DEFAULT_SKY: [f32; 3] = [0.44, 0.77, 0.81];

/// Overrides taken from the page query string, e.g. `?bg=203040&uncapped=1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub sky: [f32; 3],
    pub uncapped: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sky: DEFAULT_SKY,
            uncapped: false,
        }
    }
}

impl Settings {
    pub fn from_query(query: &str) -> Self {
        let mut settings = Self::default();
        for pair in query.trim_start_matches('?').split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "bg" => {
                    if let Some(sky) = parse_hex_rgb(value) {
                        settings.sky = sky;
                    }
                }
                "uncapped" => settings.uncapped = value == "1",
                _ => {}
            }
        }
        settings
    }
}

fn parse_hex_rgb(hex: &str) -> Option<[f32; 3]> {
    let hex = hex.get(0..6).filter(|h| h.is_ascii())?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .ok()
            .map(|c| c as f32 / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
