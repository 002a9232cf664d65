mod accuracy;
mod trueskill;

pub use accuracy::*;
pub use trueskill::*;
