//! Stat vocabulary and stat blocks.
//!
//! # Layout
//!
//! ```text
//! [ StatName ]  closed vocabulary, declares Float / Integer subtype
//!      ↓
//! [ StatValue ] tagged Float(f64) | Int(i64) slot
//!      ↓
//! [ StatBlock ] StatName → StatValue, absent = no slot
//! ```

pub mod block;
pub mod name;
pub mod value;

pub use block::StatBlock;
pub use name::{StatKind, StatName};
pub use value::{IntegerRounding, StatValue};
