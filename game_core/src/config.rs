/// Game tuning parameters for the apple-catch round
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Basket
    pub const BASKET_WIDTH: f32 = 80.0;
    pub const BASKET_HEIGHT: f32 = 48.0;
    pub const BASKET_Y: f32 = 400.0; // Shelf the basket slides along
    pub const BASKET_SPEED: f32 = 350.0; // px per second

    // Apple
    pub const APPLE_WIDTH: f32 = 32.0;
    pub const APPLE_HEIGHT: f32 = 32.0;
    pub const GRAVITY: f32 = 300.0; // px per second squared
    pub const APPLE_MAX_FALL_SPEED: f32 = 300.0; // Terminal velocity

    // Round
    pub const ROUND_MILLIS: u32 = 60_000;
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub basket_width: f32,
    pub basket_height: f32,
    pub basket_y: f32,
    pub basket_speed: f32,
    pub apple_width: f32,
    pub apple_height: f32,
    pub gravity: f32,
    pub apple_max_fall_speed: f32,
    pub round_millis: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            basket_width: Params::BASKET_WIDTH,
            basket_height: Params::BASKET_HEIGHT,
            basket_y: Params::BASKET_Y,
            basket_speed: Params::BASKET_SPEED,
            apple_width: Params::APPLE_WIDTH,
            apple_height: Params::APPLE_HEIGHT,
            gravity: Params::GRAVITY,
            apple_max_fall_speed: Params::APPLE_MAX_FALL_SPEED,
            round_millis: Params::ROUND_MILLIS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position the basket starts a round at
    pub fn basket_spawn_x(&self) -> f32 {
        0.0
    }

    /// Largest X the apple can occupy and still fit inside the field
    pub fn apple_max_x(&self) -> f32 {
        self.field_width - self.apple_width
    }
}
