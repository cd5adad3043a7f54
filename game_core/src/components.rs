use glam::Vec2;

/// Horizontal movement direction held for the current frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dir {
    Left,
    #[default]
    None,
    Right,
}

impl Dir {
    /// Sign of the horizontal movement (-1.0, 0.0 or 1.0)
    pub fn sign(self) -> f32 {
        match self {
            Dir::Left => -1.0,
            Dir::None => 0.0,
            Dir::Right => 1.0,
        }
    }
}

/// Basket component - the player-controlled catcher
#[derive(Debug, Clone, Copy)]
pub struct Basket {
    pub x: f32, // Left edge, clamped to the field
}

impl Basket {
    pub fn new(x: f32) -> Self {
        Self { x }
    }
}

/// Apple component - the falling object
#[derive(Debug, Clone, Copy)]
pub struct Apple {
    pub pos: Vec2, // Top-left corner
    pub vy: f32,   // Downward speed, capped at terminal velocity
}

impl Apple {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, vy: 0.0 }
    }

    /// Put the apple back at the top of the field in a random column.
    /// The current fall speed is kept.
    pub fn respawn(&mut self, max_x: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        self.pos = Vec2::new(rng.0.gen_range(0.0..=max_x), 0.0);
    }
}

/// Movement intent for the basket
#[derive(Debug, Clone, Copy, Default)]
pub struct BasketIntent {
    pub dir: Dir,
}

impl BasketIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
