pub mod components;
pub mod config;
pub mod field;
pub mod resources;
pub mod round;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use resources::*;
pub use round::*;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic catch-game simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &Time,
    field: &Playfield,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    dir: Dir,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest input (apply to basket intent)
    apply_intent(world, dir);

    // 2. Move the basket along its shelf
    move_basket(world, time, field, config);

    // 3. Let the apple fall, wrapping at the floor
    fall_apple(world, time, field, config, events, rng);

    // 4. Test the catch and score it
    check_catch(world, config, score, events, rng);
}

/// Helper to create the basket entity
pub fn create_basket(world: &mut World, x: f32) -> hecs::Entity {
    world.spawn((Basket::new(x), BasketIntent::new()))
}

/// Helper to create the apple entity
pub fn create_apple(world: &mut World, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Apple::new(pos),))
}
