//! Release-velocity estimation for drag gestures.
//!
//! Impulse-strategy 1D tracker: velocity is derived from the kinetic
//! energy imparted by the most recent pointer samples, which is far more
//! robust against sample jitter than a two-point difference.

/// Ring buffer size for velocity samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute to the estimate.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Default)]
struct SampleAtTime {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute pointer positions.
#[derive(Clone)]
pub struct VelocityTracker1D {
    samples: [Option<SampleAtTime>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records the pointer position at the given time (milliseconds).
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(SampleAtTime { time_ms, position });
    }

    /// Calculates the velocity in units/second.
    ///
    /// Returns 0.0 if there aren't enough usable samples or the pointer
    /// had already stopped before release.
    pub fn calculate_velocity(&self) -> f32 {
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut sample_count = 0;

        let newest = match self.samples[self.index] {
            Some(sample) => sample,
            None => return 0.0,
        };

        let mut current_index = self.index;
        let mut previous = newest;

        while let Some(sample) = self.samples[current_index] {
            let age = (newest.time_ms - sample.time_ms) as f32;
            let gap = (sample.time_ms - previous.time_ms).abs() as f32;
            previous = sample;

            if age > HORIZON_MS as f32 || gap > ASSUME_STOPPED_MS as f32 {
                break;
            }

            positions[sample_count] = sample.position;
            times[sample_count] = -age;

            current_index = if current_index == 0 {
                HISTORY_SIZE - 1
            } else {
                current_index - 1
            };

            sample_count += 1;
            if sample_count >= HISTORY_SIZE {
                break;
            }
        }

        if sample_count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions, &times, sample_count) * 1000.0
    }

    /// Calculates the velocity in units/second, clamped to `max_velocity`
    /// in both directions.
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

    /// Clears all tracked samples.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// Impulse-strategy velocity over the collected samples (per millisecond).
fn impulse_velocity(
    positions: &[f32; HISTORY_SIZE],
    times: &[f32; HISTORY_SIZE],
    sample_count: usize,
) -> f32 {
    if sample_count < 2 {
        return 0.0;
    }

    let mut work = 0.0f32;
    let start = sample_count - 1;
    let mut next_time = times[start];

    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }

        let delta = positions[i] - positions[i - 1];
        let v_curr = delta / (current_time - next_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// Converts kinetic energy to velocity using E = 0.5 * m * v^2 (with m = 1).
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        let tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn single_sample_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_velocity_is_recovered() {
        let mut tracker = VelocityTracker1D::new();
        // Moving at 100 px per 10ms = 10000 px/s
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, 100.0);
        tracker.add_sample(20, 200.0);
        tracker.add_sample(30, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10000.0).abs() < 1000.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn reset_discards_history() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(10, 100.0);

        tracker.reset();

        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn backward_motion_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 300.0);
        tracker.add_sample(10, 200.0);
        tracker.add_sample(20, 100.0);

        let velocity = tracker.calculate_velocity();
        assert!(velocity < 0.0, "Expected negative velocity, got {}", velocity);
    }

    #[test]
    fn cap_clamps_in_both_directions() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(1, 10_000.0);

        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add_sample(0, 10_000.0);
        tracker.add_sample(1, 0.0);

        assert_eq!(tracker.calculate_velocity_with_max(8_000.0), -8_000.0);
    }

    #[test]
    fn samples_past_the_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        // Old sample, more than HORIZON_MS before the newest.
        tracker.add_sample(0, 0.0);
        // Recent samples.
        tracker.add_sample(150, 100.0);
        tracker.add_sample(160, 200.0);
        tracker.add_sample(170, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            velocity.abs() > 0.0,
            "Should calculate velocity from recent samples"
        );
    }

    #[test]
    fn gap_over_stopped_threshold_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_sample(0, 0.0);
        tracker.add_sample(ASSUME_STOPPED_MS + 1, 100.0);

        assert_eq!(tracker.calculate_velocity(), 0.0);
    }
}
