//! Domain models for the dog-lifespan system.

mod assessment;
mod breed;
mod estimation;
mod profile;

pub use assessment::*;
pub use breed::*;
pub use estimation::*;
pub use profile::*;
