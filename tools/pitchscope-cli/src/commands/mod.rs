pub mod labels;
pub mod movement;
pub mod pitchers;
pub mod report;
pub mod seasons;
pub mod summary;
pub mod tiers;
pub mod usage;
pub mod zones;
