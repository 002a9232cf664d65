mod agent;
mod constants;
mod game;
mod options;
mod outcome;

pub use agent::*;
pub use constants::*;
pub use game::*;
pub use options::*;
pub use outcome::*;
