//! Trajectory integrator for an electron crossing charged plates
//!
//! Forward integration where every increment is scaled by the elapsed tick
//! time `t`, not a constant dt. The displayed distances, heights and times
//! were calibrated against exactly this update, so it stays as is:
//!
//! ```text
//! vy += a * t / VELOCITY_SCALE      (only while x_start < x <= x_end)
//! x  += vx * t / POSITION_SCALE
//! y  -= vy * t / POSITION_SCALE     (screen y grows downward)
//! t  += TIME_STEP_SECONDS
//! ```
//!
//! The plate-hit check runs before the field-exit check. Both can hold on the
//! same tick and the first one decides which exit formula is reported.
//!
//! Since the step grows with `t`, a particle that starts at rest in time
//! covers `vx * TIME_STEP_SECONDS / POSITION_SCALE * n(n-1)/2` pixels in `n`
//! ticks. The tick budget is sized from that so slow particles still reach
//! the far plate edge.

use std::iter::FusedIterator;

use crate::domain::constants::{
    MAX_TICKS, PIXELS_PER_CM, PLATE_X_OFFSET, POSITION_SCALE, TICK_CEILING, TIME_STEP_SECONDS,
    VELOCITY_SCALE,
};
use crate::domain::params::CrtParameters;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParticleState {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub elapsed_time: f64,
}

impl ParticleState {
    /// Fresh particle with horizontal speed only
    pub fn launch(x: f64, y: f64, vx: f64) -> Self {
        Self { x, y, vx, vy: 0.0, elapsed_time: 0.0 }
    }
}

/// Region between the plates where the field acts
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRegion {
    pub x_start: f64,
    pub x_end: f64,
    pub acceleration: f64,
    /// Gap between the plates in pixels, centred on the screen midline
    pub plate_separation: f64,
}

impl FieldRegion {
    pub fn from_crt(params: &CrtParameters) -> Self {
        Self {
            x_start: PLATE_X_OFFSET,
            x_end: PLATE_X_OFFSET + params.plate_length_px(),
            acceleration: params.acceleration(),
            plate_separation: params.plate_separation_px(),
        }
    }

    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x > self.x_start && x <= self.x_end
    }

    /// Distance from the midline to either plate, whole pixels
    #[inline]
    pub fn plate_offset(&self) -> f64 {
        (self.plate_separation / 2.0).floor()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrajectoryExit {
    /// Left the plate gap while still between the plates
    HitPlate,
    /// Passed the far end of the plates
    LeftField,
    /// Reached the top or bottom of the screen (or started outside it)
    LeftScreen,
    /// Used up its tick budget without any other exit
    TickLimit,
}

impl TrajectoryExit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrajectoryExit::HitPlate => "hit_plate",
            TrajectoryExit::LeftField => "left_field",
            TrajectoryExit::LeftScreen => "left_screen",
            TrajectoryExit::TickLimit => "tick_limit",
        }
    }
}

/// Outcome of one trajectory. Height and distance are in centimetres and stay
/// zero unless the particle hit a plate or left the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryResult {
    pub exit: TrajectoryExit,
    pub exit_height_cm: f64,
    pub exit_distance_cm: f64,
    pub elapsed_time: f64,
    pub ticks: u32,
}

impl Default for TrajectoryResult {
    fn default() -> Self {
        Self {
            exit: TrajectoryExit::LeftScreen,
            exit_height_cm: 0.0,
            exit_distance_cm: 0.0,
            elapsed_time: 0.0,
            ticks: 0,
        }
    }
}

/// Lazy sequence of particle states, one per tick. Finite and not restartable:
/// once it returns `None` it stays exhausted and `result()` is set.
pub struct Trajectory {
    state: ParticleState,
    field: FieldRegion,
    screen_height: f64,
    midline: f64,
    ticks: u32,
    tick_budget: u32,
    result: Option<TrajectoryResult>,
}

/// Ticks for `initial` to pass `field.x_end`, with headroom, clamped to
/// `MAX_TICKS..=TICK_CEILING`. No forward speed gets `MAX_TICKS`.
pub fn tick_budget(initial: &ParticleState, field: &FieldRegion) -> u32 {
    let per_tick = initial.vx * TIME_STEP_SECONDS / POSITION_SCALE;
    if !(per_tick.is_finite() && per_tick > 0.0) {
        return MAX_TICKS;
    }
    // Ignores any head start in elapsed_time, which only shortens the flight
    let remaining = (field.x_end - initial.x).max(0.0);
    let needed = (2.0 * remaining / per_tick).sqrt() + 2.0;
    let budget = needed * 1.25;
    if budget >= TICK_CEILING as f64 {
        TICK_CEILING
    } else {
        (budget as u32).max(MAX_TICKS)
    }
}

pub fn step_trajectory(initial: ParticleState, field: FieldRegion, screen_height: f64) -> Trajectory {
    Trajectory {
        state: initial,
        field,
        screen_height,
        midline: (screen_height / 2.0).floor(),
        ticks: 0,
        tick_budget: tick_budget(&initial, &field),
        result: None,
    }
}

impl Trajectory {
    pub fn result(&self) -> Option<TrajectoryResult> {
        self.result
    }

    pub fn is_finished(&self) -> bool {
        self.result.is_some()
    }

    pub fn tick_budget(&self) -> u32 {
        self.tick_budget
    }

    fn finish(&mut self, exit: TrajectoryExit, height_cm: f64, distance_cm: f64) {
        self.result = Some(TrajectoryResult {
            exit,
            exit_height_cm: height_cm,
            exit_distance_cm: distance_cm,
            elapsed_time: self.state.elapsed_time,
            ticks: self.ticks,
        });
    }

    fn advance(&mut self) {
        let s = &mut self.state;
        let t = s.elapsed_time;
        if self.field.contains(s.x) {
            s.vy += self.field.acceleration * t / VELOCITY_SCALE;
        }
        s.x += s.vx * t / POSITION_SCALE;
        s.y -= s.vy * t / POSITION_SCALE;
        s.elapsed_time += TIME_STEP_SECONDS;
    }
}

impl Iterator for Trajectory {
    type Item = ParticleState;

    fn next(&mut self) -> Option<ParticleState> {
        if self.result.is_some() {
            return None;
        }

        let current = self.state;
        if !(current.y > 0.0 && current.y < self.screen_height) {
            self.finish(TrajectoryExit::LeftScreen, 0.0, 0.0);
            return None;
        }
        if self.ticks >= self.tick_budget {
            self.finish(TrajectoryExit::TickLimit, 0.0, 0.0);
            return None;
        }
        self.ticks += 1;

        let distance = (current.x - self.field.x_start) / PIXELS_PER_CM;
        let gap = self.field.plate_offset();
        let outside_gap = current.y > self.midline + gap || current.y < self.midline - gap;

        if outside_gap && current.x < self.field.x_end {
            self.finish(TrajectoryExit::HitPlate, (self.midline + current.y) / PIXELS_PER_CM, distance);
            return Some(current);
        }
        if current.x > self.field.x_end {
            self.finish(TrajectoryExit::LeftField, (self.midline - current.y) / PIXELS_PER_CM, distance);
            return Some(current);
        }

        self.advance();
        Some(current)
    }
}

impl FusedIterator for Trajectory {}

/// Drive a trajectory to completion, handing every emitted state to `visit`
pub fn run_trajectory<F>(
    initial: ParticleState,
    field: FieldRegion,
    screen_height: f64,
    mut visit: F,
) -> TrajectoryResult
where
    F: FnMut(&ParticleState),
{
    let mut trajectory = step_trajectory(initial, field, screen_height);
    for state in trajectory.by_ref() {
        visit(&state);
    }
    trajectory.result().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(acceleration: f64, separation: f64) -> FieldRegion {
        FieldRegion { x_start: 20.0, x_end: 220.0, acceleration, plate_separation: separation }
    }

    #[test]
    fn zero_acceleration_flies_straight() {
        let initial = ParticleState::launch(0.0, 300.0, 1e7);
        let points: Vec<ParticleState> = step_trajectory(initial, field(0.0, 200.0), 600.0).collect();

        assert!(!points.is_empty());
        assert!(points.iter().all(|p| p.y == 300.0));
        assert!(points.last().unwrap().x > 220.0);
    }

    #[test]
    fn zero_acceleration_exits_past_field_with_zero_height() {
        let initial = ParticleState::launch(0.0, 300.0, 1e7);
        let result = run_trajectory(initial, field(0.0, 200.0), 600.0, |_| {});
        assert_eq!(result.exit, TrajectoryExit::LeftField);
        assert_eq!(result.exit_height_cm, 0.0);
        assert!(result.exit_distance_cm >= 1.0);
    }

    #[test]
    fn reference_scenario_terminates_with_positive_exit() {
        let initial = ParticleState::launch(0.0, 300.0, 1e7);
        let mut trajectory = step_trajectory(initial, field(1e15, 200.0), 600.0);
        let count = trajectory.by_ref().count();
        let result = trajectory.result().expect("exhausted trajectory has a result");

        assert!(count > 0);
        assert!((count as u32) < MAX_TICKS);
        assert_eq!(result.ticks as usize, count);
        assert_eq!(result.exit, TrajectoryExit::LeftField);
        assert!(result.exit_distance_cm.is_finite() && result.exit_distance_cm > 0.0);
        assert!(result.exit_height_cm.is_finite() && result.exit_height_cm > 0.0);
    }

    #[test]
    fn narrow_gap_hits_plate_inside_field() {
        let initial = ParticleState::launch(0.0, 300.0, 1e7);
        let result = run_trajectory(initial, field(1e15, 10.0), 600.0, |_| {});

        assert_eq!(result.exit, TrajectoryExit::HitPlate);
        assert!(result.exit_height_cm > 0.0);
        assert!(result.exit_distance_cm > 0.0);
        assert!(result.exit_distance_cm < 200.0 / PIXELS_PER_CM);
    }

    #[test]
    fn deflection_is_upward_for_positive_acceleration() {
        let initial = ParticleState::launch(0.0, 300.0, 1e7);
        let mut last = initial;
        run_trajectory(initial, field(1e15, 200.0), 600.0, |p| last = *p);
        assert!(last.y < 300.0);
        assert!(last.vy > 0.0);
    }

    #[test]
    fn plate_check_wins_over_field_exit() {
        // Already past the plates and outside the gap: the plate branch only
        // applies while x < x_end, so this reports a field exit.
        let past = ParticleState { x: 230.0, y: 150.0, vx: 1e7, vy: 0.0, elapsed_time: 0.0 };
        let result = run_trajectory(past, field(0.0, 200.0), 600.0, |_| {});
        assert_eq!(result.exit, TrajectoryExit::LeftField);
        assert_eq!(result.exit_height_cm, (300.0 - 150.0) / PIXELS_PER_CM);

        // Same height before the far edge is a plate hit with the (mid + y) formula.
        let inside = ParticleState { x: 100.0, ..past };
        let result = run_trajectory(inside, field(0.0, 200.0), 600.0, |_| {});
        assert_eq!(result.exit, TrajectoryExit::HitPlate);
        assert_eq!(result.exit_height_cm, (300.0 + 150.0) / PIXELS_PER_CM);
        assert_eq!(result.exit_distance_cm, 80.0 / PIXELS_PER_CM);
    }

    #[test]
    fn start_outside_screen_is_empty() {
        for y in [0.0, -5.0, 600.0, 900.0] {
            let mut t = step_trajectory(ParticleState::launch(0.0, y, 1e7), field(1e15, 200.0), 600.0);
            assert_eq!(t.next(), None);
            assert_eq!(t.result().map(|r| r.exit), Some(TrajectoryExit::LeftScreen));
        }
    }

    #[test]
    fn exhausted_trajectory_stays_exhausted() {
        let past = ParticleState::launch(300.0, 300.0, 1e7);
        let mut t = step_trajectory(past, field(0.0, 200.0), 600.0);
        assert!(t.next().is_some());
        assert!(t.is_finished());
        assert_eq!(t.next(), None);
        assert_eq!(t.next(), None);
    }

    #[test]
    fn stalled_particle_hits_tick_limit() {
        let stalled = ParticleState::launch(0.0, 300.0, 0.0);
        let result = run_trajectory(stalled, field(1e15, 200.0), 600.0, |_| {});
        assert_eq!(result.exit, TrajectoryExit::TickLimit);
        assert_eq!(result.ticks, MAX_TICKS);
    }

    #[test]
    fn slow_particle_gets_enough_ticks_to_clear_the_plates() {
        let slow = ParticleState::launch(0.0, 300.0, 1e4);
        let mut trajectory = step_trajectory(slow, field(0.0, 200.0), 600.0);
        assert!(trajectory.tick_budget() > MAX_TICKS);

        let count = trajectory.by_ref().count();
        let result = trajectory.result().expect("exhausted trajectory has a result");
        assert_eq!(result.exit, TrajectoryExit::LeftField);
        assert!(count > MAX_TICKS as usize);
        assert!((result.exit_distance_cm - 1.0).abs() < 1e-5);
        assert_eq!(result.exit_height_cm, 0.0);
    }

    #[test]
    fn tick_budget_bounds() {
        let f = field(1e15, 200.0);
        // Fast particles keep the floor
        assert_eq!(tick_budget(&ParticleState::launch(0.0, 300.0, 1e7), &f), MAX_TICKS);
        // No forward progress
        assert_eq!(tick_budget(&ParticleState::launch(0.0, 300.0, 0.0), &f), MAX_TICKS);
        assert_eq!(tick_budget(&ParticleState::launch(0.0, 300.0, -5.0), &f), MAX_TICKS);
        // Crawling particles hit the ceiling instead of running unbounded
        assert_eq!(tick_budget(&ParticleState::launch(0.0, 300.0, 1e-3), &f), TICK_CEILING);
    }

    #[test]
    fn field_region_from_default_parameters() {
        let region = FieldRegion::from_crt(&CrtParameters::default());
        assert_eq!(region.x_start, 20.0);
        assert_eq!(region.x_end, 220.0);
        assert_eq!(region.plate_offset(), 100.0);
        assert!(region.acceleration > 0.0);
        assert!(!region.contains(20.0));
        assert!(region.contains(220.0));
    }
}
