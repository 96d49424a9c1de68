pub mod game;
pub mod participation;
pub mod player;
pub mod round;
pub mod standings;
pub mod tournament;
