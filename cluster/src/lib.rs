mod local;
mod nodes;
mod pool;

pub use local::*;
pub use nodes::*;
pub use pool::*;
