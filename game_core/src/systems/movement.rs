use crate::{Basket, BasketIntent, Config, Dir, Playfield, Time};
use hecs::World;

/// Slide the basket along its shelf based on the current intent
pub fn move_basket(world: &mut World, time: &Time, field: &Playfield, config: &Config) {
    for (_entity, (basket, intent)) in world.query_mut::<(&mut Basket, &BasketIntent)>() {
        if intent.dir != Dir::None {
            basket.x += intent.dir.sign() * config.basket_speed * time.dt;

            // Clamp to the field bounds
            basket.x = field.clamp_x(basket.x, config.basket_width);
        }
    }
}
