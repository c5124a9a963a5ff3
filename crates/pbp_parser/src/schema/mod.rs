pub mod directions;
pub mod play_by_play;
pub mod play_type;
pub mod yards;

pub use directions::*;
pub use play_by_play::*;
pub use play_type::*;
pub use yards::*;
