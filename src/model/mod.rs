pub mod ids;
pub mod intern;
pub mod placement;

// Re-exports for convenience
pub use ids::Id;
pub use intern::{
    ActivityStatus, Intern, Performance, Segregation, SheetStatus, YesNo, SPEAKERS_MAX,
    SPEAKERS_TARGET,
};
pub use placement::{Department, Placement, PlacementStatus, SCORE_MAX};
