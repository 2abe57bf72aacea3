pub mod game;
pub mod watch;
pub mod wire;
