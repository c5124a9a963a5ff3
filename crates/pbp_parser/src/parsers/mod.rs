pub mod defense;
pub mod misc;
pub mod pass;
pub mod play_parser;
pub mod play_type;
pub mod run;
pub mod special_teams;

pub use play_parser::{parse_play, scan_fumble, scan_penalties};
pub use play_type::PlaySubtype;
