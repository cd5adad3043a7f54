//! WebAssembly adapter for the catch-the-apple round
//!
//! The JavaScript host owns rendering, audio and particles; this crate only
//! translates its callbacks (DOM buttons, key events, animation frames) into
//! round commands and hands immutable display state back. Button callbacks
//! run to completion before the next animation frame fires, so control
//! commands always land ahead of the tick they precede.

pub mod hud;
pub mod input;

use game_core::{Command, Dir, GameRound, Phase, Transition};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// One browser-hosted game: a round plus the currently held direction
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct BasketGame {
    round: GameRound,
    dir: Dir,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl BasketGame {
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        console_error_panic_hook::set_once();
        Self::with_seed(default_seed())
    }

    /// Build a game with a fixed rng seed (deterministic rounds)
    pub fn with_seed(seed: u64) -> Self {
        Self {
            round: GameRound::new(seed),
            dir: Dir::None,
        }
    }

    /// Advance one animation frame. No-op unless the round is running.
    pub fn tick(&mut self, elapsed_ms: f64) {
        self.round.on_tick(elapsed_ms.max(0.0) as u32, self.dir);
    }

    // Button surface, one method per DOM button

    pub fn play(&mut self) {
        self.control(Command::Start);
    }

    pub fn pause(&mut self) {
        self.control(Command::Pause);
    }

    pub fn resume(&mut self) {
        self.control(Command::Resume);
    }

    pub fn replay(&mut self) {
        self.control(Command::Replay);
    }

    // Keyboard surface, fed from the host's key listeners

    pub fn key_down(&mut self, key: &str) {
        self.dir = input::handle_key_down(key, self.dir);
    }

    pub fn key_up(&mut self, key: &str) {
        self.dir = input::handle_key_up(key, self.dir);
    }

    // Display state read back by the host each frame

    pub fn score(&self) -> u32 {
        self.round.score()
    }

    pub fn remaining_millis(&self) -> u32 {
        self.round.remaining_millis()
    }

    pub fn basket_x(&self) -> f32 {
        self.round.snapshot().basket_x
    }

    pub fn apple_x(&self) -> f32 {
        self.round.snapshot().apple_x
    }

    pub fn apple_y(&self) -> f32 {
        self.round.snapshot().apple_y
    }

    pub fn score_text(&self) -> String {
        hud::score_text(self.round.score())
    }

    pub fn timer_text(&self) -> String {
        hud::timer_text(self.round.remaining_millis())
    }

    /// True on the frame the apple landed in the basket (audio + particles)
    pub fn caught(&self) -> bool {
        self.round.events().caught
    }

    /// True on the frame the apple fell past the basket
    pub fn missed(&self) -> bool {
        self.round.events().missed
    }

    pub fn is_running(&self) -> bool {
        self.round.phase() == Phase::Running
    }

    pub fn is_over(&self) -> bool {
        self.round.phase() == Phase::Over
    }

    /// Current phase as a string (for JS interop)
    pub fn phase_string(&self) -> String {
        format!("{:?}", self.round.phase())
    }

    fn control(&mut self, cmd: Command) {
        let transition = self.round.on_control(cmd);
        if transition.applied {
            log_transition(&transition);
        }
    }
}

impl Default for BasketGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn default_seed() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn default_seed() -> u64 {
    12345
}

#[allow(unused_variables)]
fn log_transition(transition: &Transition) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(
        &format!("round: {:?} -> {:?}", transition.from, transition.to).into(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 12345;

    #[test]
    fn test_buttons_drive_phases() {
        let mut game = BasketGame::with_seed(SEED);
        assert_eq!(game.phase_string(), "Idle");

        game.play();
        assert!(game.is_running());

        game.pause();
        assert_eq!(game.phase_string(), "Paused");

        game.resume();
        assert!(game.is_running());

        game.replay();
        assert!(game.is_running());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_tick_before_play_changes_nothing() {
        let mut game = BasketGame::with_seed(SEED);
        game.tick(1000.0);
        assert_eq!(game.remaining_millis(), 60_000);
    }

    #[test]
    fn test_held_key_moves_the_basket() {
        let mut game = BasketGame::with_seed(SEED);
        game.play();

        game.key_down("ArrowRight");
        game.tick(100.0);
        let moved = game.basket_x();
        assert!(moved > 0.0, "Basket moves while the key is held");

        game.key_up("ArrowRight");
        game.tick(100.0);
        assert_eq!(game.basket_x(), moved, "Basket stops on key release");
    }

    #[test]
    fn test_hud_strings_follow_the_round() {
        let mut game = BasketGame::with_seed(SEED);
        assert_eq!(game.score_text(), "Score: 0");
        assert_eq!(game.timer_text(), "Time: 60");

        game.play();
        game.tick(1000.0);
        assert_eq!(game.timer_text(), "Time: 59");
    }

    #[test]
    fn test_round_ends_through_the_adapter() {
        let mut game = BasketGame::with_seed(SEED);
        game.play();
        for _ in 0..60 {
            game.tick(1000.0);
        }
        assert!(game.is_over());
        assert_eq!(game.remaining_millis(), 0);
    }
}
