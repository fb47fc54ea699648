mod game;
mod player;
mod pool;
mod rotation;
mod round;
mod song;

pub use game::Game;
pub use pool::SongPool;
pub use rotation::PlayerRotation;
pub use round::Quizmaster;
