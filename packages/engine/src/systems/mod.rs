//! Systems - the numeric cores driven once per frame

pub mod fringe;
pub mod gradient;
pub mod trajectory;

pub use fringe::{fringe_spacing, FringePattern};
pub use gradient::{fill_gradient, Axis, Direction, GradientSpec};
pub use trajectory::{
    run_trajectory, step_trajectory, tick_budget, FieldRegion, ParticleState, Trajectory, TrajectoryExit,
    TrajectoryResult,
};
