//! Keyboard input handling

use game_core::Dir;

/// Handle key down event
pub fn handle_key_down(key: &str, current: Dir) -> Dir {
    match key {
        "ArrowLeft" | "a" | "A" => Dir::Left,
        "ArrowRight" | "d" | "D" => Dir::Right,
        _ => current,
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str, current: Dir) -> Dir {
    match key {
        "ArrowLeft" | "a" | "A" | "ArrowRight" | "d" | "D" => Dir::None,
        _ => current,
    }
}
