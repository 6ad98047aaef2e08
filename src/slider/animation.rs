//! Animation primitives driven by the UI loop's frame clock
//!
//! Neither primitive owns a timer. The shimmer derives its phase from the
//! instant it was created, and the spring is advanced by whatever frame
//! delta the caller measured.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Integration step for the spring, independent of the frame rate
const SPRING_STEP: Duration = Duration::from_millis(1);

/// Looping 0 -> 1 phase with a fixed period
#[derive(Debug, Clone)]
pub struct Shimmer {
    started: Instant,
    period: Duration,
}

impl Shimmer {
    pub fn new(started: Instant, period: Duration) -> Self {
        Self {
            started,
            period: period.max(Duration::from_millis(1)),
        }
    }

    /// Phase in `[0, 1)`; wraps back to 0 at the end of every period
    pub fn phase_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started).as_nanos();
        let period = self.period.as_nanos();
        ((elapsed % period) as f64 / period as f64) as f32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Fastest natural frequency (rad/s) the 1 ms integrator stays stable at
    pub const MAX_NATURAL_FREQUENCY: f32 = 1000.0;
    /// Below this damping ratio the spring takes too long to come to rest
    pub const MIN_DAMPING_RATIO: f32 = 0.1;

    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Settles in finite time without the integration blowing up
    pub fn is_valid(&self) -> bool {
        let finite = self.stiffness.is_finite() && self.damping.is_finite() && self.mass.is_finite();
        finite
            && self.stiffness > 0.0
            && self.mass > 0.0
            && self.damping > 0.0
            && self.natural_frequency() <= Self::MAX_NATURAL_FREQUENCY
            && self.damping / self.mass <= Self::MAX_NATURAL_FREQUENCY
            && self.damping_ratio() >= Self::MIN_DAMPING_RATIO
    }
}

impl Default for SpringConfig {
    /// Stock toolkit spring (tension 40, friction 7) in physical terms
    fn default() -> Self {
        Self {
            stiffness: 230.2,
            damping: 22.0,
            mass: 1.0,
        }
    }
}

/// Damped spring pulling a scalar toward `target`
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    carry: Duration,
}

impl Spring {
    pub const REST_DISPLACEMENT: f32 = 0.001;
    pub const REST_SPEED: f32 = 0.001;

    pub fn new(from: f32, target: f32, config: SpringConfig) -> Self {
        Self {
            config,
            value: from,
            velocity: 0.0,
            target,
            carry: Duration::ZERO,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.velocity.abs() <= Self::REST_SPEED
            && (self.value - self.target).abs() <= Self::REST_DISPLACEMENT
    }

    /// Advance by `dt`. Returns true once the spring has settled, at which
    /// point the value is snapped onto the target.
    pub fn step(&mut self, dt: Duration) -> bool {
        self.carry += dt;
        let h = SPRING_STEP.as_secs_f32();

        while self.carry >= SPRING_STEP {
            self.carry -= SPRING_STEP;

            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            self.value += self.velocity * h;

            if !self.value.is_finite() || !self.velocity.is_finite() {
                tracing::warn!(config = ?self.config, "Spring diverged, snapping to target");
                self.velocity = 0.0;
                self.value = self.target;
            }

            if self.is_at_rest() {
                break;
            }
        }

        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            self.carry = Duration::ZERO;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shimmer_phase_loops() {
        let start = Instant::now();
        let shimmer = Shimmer::new(start, Duration::from_millis(2000));

        assert_eq!(shimmer.phase_at(start), 0.0);
        assert!((shimmer.phase_at(start + Duration::from_millis(500)) - 0.25).abs() < 1e-6);
        assert!((shimmer.phase_at(start + Duration::from_millis(1999)) - 0.9995).abs() < 1e-4);
        assert_eq!(shimmer.phase_at(start + Duration::from_millis(2000)), 0.0);
        assert!((shimmer.phase_at(start + Duration::from_millis(20_500)) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_shimmer_phase_before_start_is_zero() {
        let now = Instant::now();
        let shimmer = Shimmer::new(now + Duration::from_secs(1), Duration::from_millis(2000));
        assert_eq!(shimmer.phase_at(now), 0.0);
    }

    #[test]
    fn test_zero_period_is_bumped() {
        let start = Instant::now();
        let shimmer = Shimmer::new(start, Duration::ZERO);
        assert_eq!(shimmer.phase_at(start + Duration::from_micros(500)), 0.5);
    }

    #[test]
    fn test_spring_settles_on_target() {
        let mut spring = Spring::new(-184.0, 0.0, SpringConfig::default());
        let frame = Duration::from_millis(16);

        let mut settled = false;
        for _ in 0..(5000 / 16) {
            if spring.step(frame) {
                settled = true;
                break;
            }
        }

        assert!(settled);
        assert_eq!(spring.value(), 0.0);
        assert!(spring.is_at_rest());
    }

    #[test]
    fn test_spring_moves_toward_target() {
        let mut spring = Spring::new(-100.0, 0.0, SpringConfig::default());
        assert!(!spring.step(Duration::from_millis(50)));
        assert!(spring.value() > -100.0);
    }

    #[test]
    fn test_default_spring_is_valid() {
        assert!(SpringConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_springs() {
        let base = SpringConfig::default();
        let stiff = SpringConfig { stiffness: 5_000_000.0, ..base };
        let undamped = SpringConfig { damping: 0.0, ..base };
        let barely_damped = SpringConfig { damping: 0.5, ..base };
        let heavy_drag = SpringConfig { damping: 5000.0, ..base };
        let nan = SpringConfig { mass: f32::NAN, ..base };

        for config in [stiff, undamped, barely_damped, heavy_drag, nan] {
            assert!(!config.is_valid(), "{:?}", config);
        }
    }

    #[test]
    fn test_diverging_spring_snaps_to_target() {
        let config = SpringConfig {
            stiffness: 5_000_000.0,
            ..SpringConfig::default()
        };
        let mut spring = Spring::new(-100.0, 0.0, config);

        let mut settled = false;
        for _ in 0..60 {
            if spring.step(Duration::from_millis(16)) {
                settled = true;
                break;
            }
            assert!(spring.value().is_finite());
        }

        assert!(settled);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn test_spring_already_at_target() {
        let mut spring = Spring::new(0.0, 0.0, SpringConfig::default());
        assert!(spring.step(Duration::ZERO));
    }
}
