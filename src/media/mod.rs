pub mod player;
pub mod scanner;
