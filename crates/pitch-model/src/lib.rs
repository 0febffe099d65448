//! PitchScope Data Model
//!
//! Defines the data contracts consumed by the analytics engine:
//! - **Categories:** Hands, velocity tiers, and strike-zone bands with fixed ordinal order
//! - **Pitches:** One row per recorded pitch, already classified upstream
//! - **Zone quality:** Sparse per-cell quality summaries
//! - **Dataset:** Loading both tables from CSV or JSON files
//!
//! Tables are immutable snapshots once loaded; nothing here writes back.

pub mod category;
pub mod dataset;
pub mod pitch;
pub mod zone;

pub use category::*;
pub use dataset::*;
pub use pitch::*;
pub use zone::*;
