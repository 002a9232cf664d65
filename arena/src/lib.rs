mod compute;
mod dispatch;
mod options;
mod record;
mod run;
mod track;
mod validate;

#[cfg(test)]
mod testutil;

pub use compute::*;
pub use dispatch::*;
pub use options::*;
pub use record::*;
pub use run::*;
pub use track::*;
pub use validate::*;
