//! Round lifecycle and phase state machine
//!
//! `GameRound` owns every piece of round state and is its only mutator:
//! the host feeds it one `on_tick` per rendered frame plus the button
//! commands, and reads immutable snapshots back for display.

use glam::Vec2;
use hecs::World;

use crate::{
    create_apple, create_basket, step, Apple, Basket, Config, Dir, Events, GameRng, Playfield,
    RoundClock, Score, Time,
};

/// Coarse lifecycle state of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Paused,
    Over,
}

/// Button-driven control commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Pause,
    Resume,
    Replay,
}

/// Result of a control command
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub applied: bool,
    pub from: Phase,
    pub to: Phase,
}

/// Read-only per-frame view of the round for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub remaining_ms: u32,
    pub basket_x: f32,
    pub apple_x: f32,
    pub apple_y: f32,
}

/// The round state machine
pub struct GameRound {
    world: World,
    field: Playfield,
    config: Config,
    time: Time,
    clock: RoundClock,
    score: Score,
    events: Events,
    rng: GameRng,
    phase: Phase,
}

impl GameRound {
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::new(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        let field = Playfield::new(config.field_width, config.field_height);
        let mut world = World::new();
        let mut rng = GameRng::new(seed);

        spawn_round_entities(&mut world, &config, &mut rng);

        Self {
            world,
            field,
            clock: RoundClock::new(config.round_millis),
            config,
            time: Time::new(0.0, 0.0),
            score: Score::new(),
            events: Events::new(),
            rng,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score.points
    }

    pub fn remaining_millis(&self) -> u32 {
        self.clock.remaining_ms
    }

    /// One-shot signals raised by the latest tick (catch, miss, expiry)
    pub fn events(&self) -> Events {
        self.events
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Advance one frame. A no-op unless the round is running.
    ///
    /// Effects are applied in a fixed order: clock, basket movement,
    /// apple fall, catch test. A clock that reaches zero this frame ends
    /// the round before anything else moves.
    pub fn on_tick(&mut self, elapsed_ms: u32, dir: Dir) {
        if self.phase != Phase::Running {
            // One-shot signals do not outlive the frame they were raised in
            self.events.clear();
            return;
        }

        if self.clock.advance(elapsed_ms) {
            self.events.clear();
            self.events.time_expired = true;
            self.phase = Phase::Over;
            return;
        }

        let dt = elapsed_ms as f32 / 1000.0;
        self.time = Time::new(dt, self.time.now + dt);

        step(
            &mut self.world,
            &self.time,
            &self.field,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            dir,
        );
    }

    /// Apply a button command. Invalid transitions are no-ops.
    pub fn on_control(&mut self, cmd: Command) -> Transition {
        let from = self.phase;

        // Replay is a full restart from any phase, not a table entry
        if cmd == Command::Replay {
            self.reset();
            self.phase = Phase::Running;
            return Transition {
                applied: true,
                from,
                to: self.phase,
            };
        }

        if let Some(next) = self.next_phase(cmd) {
            self.phase = next;
            Transition {
                applied: true,
                from,
                to: next,
            }
        } else {
            Transition {
                applied: false,
                from,
                to: from,
            }
        }
    }

    /// Get the next phase for a command (if valid)
    fn next_phase(&self, cmd: Command) -> Option<Phase> {
        match (self.phase, cmd) {
            (Phase::Idle, Command::Start) => Some(Phase::Running),
            (Phase::Running, Command::Pause) => Some(Phase::Paused),
            (Phase::Paused, Command::Resume) => Some(Phase::Running),
            _ => None,
        }
    }

    /// Discard the current round state and rebuild the reset one
    fn reset(&mut self) {
        self.world.clear();
        self.score = Score::new();
        self.events = Events::new();
        self.clock = RoundClock::new(self.config.round_millis);
        self.time = Time::new(0.0, 0.0);
        spawn_round_entities(&mut self.world, &self.config, &mut self.rng);
    }

    /// Immutable display snapshot for the host renderer
    pub fn snapshot(&self) -> RoundSnapshot {
        let basket_x = self
            .world
            .query::<&Basket>()
            .iter()
            .next()
            .map(|(_e, basket)| basket.x)
            .unwrap_or(0.0);

        let (apple_x, apple_y) = self
            .world
            .query::<&Apple>()
            .iter()
            .next()
            .map(|(_e, apple)| (apple.pos.x, apple.pos.y))
            .unwrap_or((0.0, 0.0));

        RoundSnapshot {
            phase: self.phase,
            score: self.score.points,
            remaining_ms: self.clock.remaining_ms,
            basket_x,
            apple_x,
            apple_y,
        }
    }
}

/// Spawn the basket and the apple for a fresh round
fn spawn_round_entities(world: &mut World, config: &Config, rng: &mut GameRng) {
    use rand::Rng;
    create_basket(world, config.basket_spawn_x());
    let apple_x = rng.0.gen_range(0.0..=config.apple_max_x());
    create_apple(world, Vec2::new(apple_x, 0.0));
}
