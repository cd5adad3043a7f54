use crate::{Apple, Config, Events, GameRng, Playfield, Time};
use hecs::World;

/// Advance the apple under gravity, capped at terminal velocity.
/// An apple that crosses the floor wraps back to the top in a fresh
/// random column.
pub fn fall_apple(
    world: &mut World,
    time: &Time,
    field: &Playfield,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, apple) in world.query_mut::<&mut Apple>() {
        apple.vy = (apple.vy + config.gravity * time.dt).min(config.apple_max_fall_speed);
        apple.pos.y += apple.vy * time.dt;

        if apple.pos.y >= field.floor() {
            events.missed = true;
            apple.respawn(config.apple_max_x(), rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_apple, Config, Events, GameRng, Playfield, Time};
    use glam::Vec2;

    fn setup() -> (hecs::World, Playfield, Config, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let field = Playfield::new(config.field_width, config.field_height);
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, field, config, events, rng)
    }

    #[test]
    fn test_apple_accelerates_from_rest() {
        let (mut world, field, config, mut events, mut rng) = setup();
        create_apple(&mut world, Vec2::new(100.0, 0.0));

        let time = Time::new(0.1, 0.0);
        fall_apple(&mut world, &time, &field, &config, &mut events, &mut rng);

        for (_e, apple) in world.query::<&crate::Apple>().iter() {
            assert_eq!(apple.vy, config.gravity * 0.1);
            assert!(apple.pos.y > 0.0, "Apple should have moved down");
        }
    }

    #[test]
    fn test_apple_fall_speed_is_capped() {
        let (mut world, field, config, mut events, mut rng) = setup();
        let entity = create_apple(&mut world, Vec2::new(100.0, 0.0));
        world.get::<&mut crate::Apple>(entity).unwrap().vy = config.apple_max_fall_speed;

        let time = Time::new(0.1, 0.0);
        fall_apple(&mut world, &time, &field, &config, &mut events, &mut rng);

        let apple = world.get::<&crate::Apple>(entity).unwrap();
        assert_eq!(
            apple.vy, config.apple_max_fall_speed,
            "Terminal velocity is never exceeded"
        );
    }

    #[test]
    fn test_apple_wraps_at_floor() {
        let (mut world, field, config, mut events, mut rng) = setup();
        let entity = create_apple(&mut world, Vec2::new(250.0, field.floor() - 0.1));
        world.get::<&mut crate::Apple>(entity).unwrap().vy = config.apple_max_fall_speed;

        let time = Time::new(0.1, 0.0);
        fall_apple(&mut world, &time, &field, &config, &mut events, &mut rng);

        assert!(events.missed, "Crossing the floor raises the missed event");
        let apple = world.get::<&crate::Apple>(entity).unwrap();
        assert_eq!(apple.pos.y, 0.0, "Apple wraps back to the top");
        assert!(
            apple.pos.x >= 0.0 && apple.pos.x <= config.apple_max_x(),
            "Respawn column stays inside the field"
        );
        assert_eq!(
            apple.vy, config.apple_max_fall_speed,
            "Fall speed survives the wrap"
        );
    }

    #[test]
    fn test_no_wrap_above_floor() {
        let (mut world, field, config, mut events, mut rng) = setup();
        create_apple(&mut world, Vec2::new(250.0, 100.0));

        let time = Time::new(0.016, 0.0);
        fall_apple(&mut world, &time, &field, &config, &mut events, &mut rng);

        assert!(!events.missed, "No missed event while the apple is airborne");
    }
}
