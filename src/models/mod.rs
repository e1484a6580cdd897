//! Data models

pub mod record;
pub mod observation;
pub mod prediction;

pub use record::*;
pub use observation::*;
pub use prediction::*;
