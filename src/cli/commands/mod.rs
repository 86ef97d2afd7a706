//! Command implementations

mod policy;
mod run;

pub use policy::policy;
pub use run::run;
