//! Caravans: the stacks each seat builds toward the sold range.

pub mod stack;
pub mod trend;

pub use stack::Caravan;
pub use trend::Trend;
