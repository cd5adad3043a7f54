use crate::{Aabb, Apple, Basket, Config, Events, GameRng, Score};
use glam::Vec2;
use hecs::World;

/// Test the basket against the apple and score the catch.
/// A caught apple wraps back to the top exactly like a missed one.
pub fn check_catch(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let basket_box = world.query::<&Basket>().iter().next().map(|(_e, basket)| {
        Aabb::from_pos_size(
            Vec2::new(basket.x, config.basket_y),
            Vec2::new(config.basket_width, config.basket_height),
        )
    });

    if let Some(basket_box) = basket_box {
        for (_entity, apple) in world.query_mut::<&mut Apple>() {
            let apple_box = Aabb::from_pos_size(
                apple.pos,
                Vec2::new(config.apple_width, config.apple_height),
            );
            if basket_box.intersects(&apple_box) {
                score.increment();
                events.caught = true;
                apple.respawn(config.apple_max_x(), rng);
            }
        }
    }
}
