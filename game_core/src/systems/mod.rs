pub mod catching;
pub mod falling;
pub mod input;
pub mod movement;

pub use catching::*;
pub use falling::*;
pub use input::*;
pub use movement::*;
