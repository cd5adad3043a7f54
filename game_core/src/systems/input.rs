use hecs::World;

use crate::components::*;

/// Feed this frame's held direction into the basket intent
pub fn apply_intent(world: &mut World, dir: Dir) {
    for (_entity, intent) in world.query_mut::<&mut BasketIntent>() {
        intent.dir = dir;
    }
}
