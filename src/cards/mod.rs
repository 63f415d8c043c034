pub mod card;
pub use card::*;

pub mod hand;
pub use hand::*;

pub mod hole;
pub use hole::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;

pub mod suitedness;
pub use suitedness::*;

pub mod universe;
pub use universe::*;
