//! How cards act on a target caravan.
//!
//! | Rank | Effect |
//! |---|---|
//! | 1-10 | `Place`: append, subject to the trend |
//! | Jack | `DiscardTop` |
//! | Queen | `Reverse` |
//! | King | `DuplicateTop` |
//! | Joker | `Clear` |

pub mod special;

pub use special::{play_onto, preview_play, CardEffect, SpecialEffect};
