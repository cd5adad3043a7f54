use glam::Vec2;

use crate::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build a box from a top-left corner and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Check if two boxes overlap
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Playfield bounds
#[derive(Debug, Clone, Copy)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Clamp an object's left edge so the whole object stays in the field
    pub fn clamp_x(&self, x: f32, object_width: f32) -> f32 {
        x.clamp(0.0, self.width - object_width)
    }

    /// Y coordinate at which a falling object has left the field
    pub fn floor(&self) -> f32 {
        self.height
    }
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(Params::FIELD_WIDTH, Params::FIELD_HEIGHT)
    }
}
