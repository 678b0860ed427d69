//! The side-scrolling world the controls act on.

pub mod daynight;
pub mod player;
pub mod scenery;

pub use daynight::DayNight;
pub use player::Player;
pub use scenery::Scenery;
