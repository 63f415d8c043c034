pub mod catalog;
pub use catalog::*;

pub mod profile;
pub use profile::*;

pub mod role;
pub use role::*;

pub mod selector;
pub use selector::*;

pub mod tightness;
pub use tightness::*;
