pub mod expansion;
pub use expansion::*;

pub mod malformed;
pub use malformed::*;

pub mod shorthand;
pub use shorthand::*;

use crate::cards::Hand;

/// Comma-joined canonical renderings, e.g. "AA,AKs,KK".
pub fn render(hands: &[Hand]) -> String {
    hands
        .iter()
        .map(|h| h.to_string())
        .collect::<Vec<String>>()
        .join(",")
}
