//! One-dimensional velocity estimation for release flings.
//!
//! Uses the impulse strategy: each pair of consecutive samples contributes the
//! kinetic energy it would impart to a unit mass, and the accumulated energy is
//! converted back into a velocity.

use std::collections::VecDeque;

const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest one, are ignored.
const HORIZON_MS: i64 = 100;

/// A gap this long between the newest sample and an older one means the
/// pointer stopped, so the older samples no longer describe the release.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Debug, Default)]
pub struct VelocityTracker1D {
    samples: VecDeque<(i64, f32)>,
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_SIZE),
        }
    }

    /// Record an absolute position at `time_ms`.
    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        if self.samples.len() == HISTORY_SIZE {
            self.samples.pop_front();
        }
        self.samples.push_back((time_ms, position));
    }

    /// Velocity in units per second, or 0.0 without two recent samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(&(newest_time, _)) = self.samples.back() else {
            return 0.0;
        };

        // (negative age in ms, position), newest first.
        let recent: Vec<(f32, f32)> = self
            .samples
            .iter()
            .rev()
            .map(|&(time, position)| (newest_time - time, position))
            .take_while(|&(age, _)| age <= HORIZON_MS && age <= ASSUME_STOPPED_MS)
            .map(|(age, position)| (-(age as f32), position))
            .collect();

        impulse_velocity(&recent) * 1000.0
    }

    /// Velocity in units per second, clamped to `±max_velocity`.
    pub fn calculate_velocity_with_max(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }

        let velocity = self.calculate_velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }

        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

/// `points` are `(time, position)` pairs ordered newest first; returns units/ms.
fn impulse_velocity(points: &[(f32, f32)]) -> f32 {
    if points.len() < 2 {
        return 0.0;
    }

    let oldest = points.len() - 1;
    let mut work = 0.0f32;
    for i in (1..=oldest).rev() {
        let (older_time, older_position) = points[i];
        let (newer_time, newer_position) = points[i - 1];
        if older_time == newer_time {
            continue;
        }

        let segment_velocity = (older_position - newer_position) / (older_time - newer_time);
        let previous_velocity = kinetic_energy_to_velocity(work);
        work += (segment_velocity - previous_velocity) * segment_velocity.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = ½mv² with m = 1, keeping the sign of the energy.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
