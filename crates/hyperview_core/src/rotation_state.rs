//! Rotation angles and the rates that drive them
//!
//! Each plane has an angle accumulator and a rate in {-1, 0, +1}. Input sets
//! the rates; once per frame every accumulator advances by `rate * step`.

use serde::{Serialize, Deserialize};

use hyperview_math::{PlaneAngles, RotationPlane};

/// Angle added per frame for a rate of ±1, in radians
pub const DEFAULT_ANGLE_STEP: f64 = 0.01;

/// Direction of rotation in one plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationRate {
    Negative,
    #[default]
    Stopped,
    Positive,
}

impl RotationRate {
    /// Rate as a signed multiplier
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            RotationRate::Negative => -1.0,
            RotationRate::Stopped => 0.0,
            RotationRate::Positive => 1.0,
        }
    }

    /// Positive unless `reversed`
    #[inline]
    pub fn forward(reversed: bool) -> Self {
        if reversed {
            RotationRate::Negative
        } else {
            RotationRate::Positive
        }
    }
}

/// Per-plane angle accumulators and rate inputs
#[derive(Clone, Debug, PartialEq)]
pub struct RotationState {
    angles: PlaneAngles,
    rates: [RotationRate; 6],
    step: f64,
}

impl Default for RotationState {
    fn default() -> Self {
        Self::new()
    }
}

impl RotationState {
    pub fn new() -> Self {
        Self {
            angles: PlaneAngles::ZERO,
            rates: [RotationRate::Stopped; 6],
            step: DEFAULT_ANGLE_STEP,
        }
    }

    /// Builder: angle added per frame at full rate
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn angles(&self) -> &PlaneAngles {
        &self.angles
    }

    pub fn angle(&self, plane: RotationPlane) -> f64 {
        self.angles.get(plane)
    }

    /// Overwrite one accumulator
    pub fn set_angle(&mut self, plane: RotationPlane, angle: f64) {
        self.angles.set(plane, angle);
    }

    pub fn rate(&self, plane: RotationPlane) -> RotationRate {
        self.rates[plane.index()]
    }

    pub fn set_rate(&mut self, plane: RotationPlane, rate: RotationRate) {
        self.rates[plane.index()] = rate;
    }

    /// True if any plane has a non-zero rate
    pub fn is_rotating(&self) -> bool {
        self.rates.iter().any(|r| *r != RotationRate::Stopped)
    }

    /// Advance every accumulator by `rate * step`
    pub fn integrate(&mut self) {
        for plane in RotationPlane::ALL {
            let rate = self.rates[plane.index()].as_f64();
            self.angles.add(plane, rate * self.step);
        }
    }

    /// Zero all six accumulators. Rates are left as they are.
    pub fn reset(&mut self) {
        self.angles = PlaneAngles::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_new_is_at_rest() {
        let state = RotationState::new();
        assert_eq!(*state.angles(), PlaneAngles::ZERO);
        assert!(!state.is_rotating());
    }

    #[test]
    fn test_integration_is_linear() {
        let mut state = RotationState::new();
        state.set_rate(RotationPlane::XY, RotationRate::Positive);
        state.set_rate(RotationPlane::ZW, RotationRate::Negative);

        for _ in 0..250 {
            state.integrate();
        }

        assert!((state.angle(RotationPlane::XY) - 2.5).abs() < EPSILON);
        assert!((state.angle(RotationPlane::ZW) + 2.5).abs() < EPSILON);
        assert_eq!(state.angle(RotationPlane::XZ), 0.0);
    }

    #[test]
    fn test_reset_returns_exactly_zero() {
        let mut state = RotationState::new();
        for plane in RotationPlane::ALL {
            state.set_rate(plane, RotationRate::Positive);
        }
        for _ in 0..37 {
            state.integrate();
        }
        state.reset();

        for plane in RotationPlane::ALL {
            assert_eq!(state.angle(plane), 0.0);
        }
        // rates survive a reset
        assert!(state.is_rotating());
    }

    #[test]
    fn test_rate_values() {
        assert_eq!(RotationRate::Negative.as_f64(), -1.0);
        assert_eq!(RotationRate::Stopped.as_f64(), 0.0);
        assert_eq!(RotationRate::Positive.as_f64(), 1.0);
        assert_eq!(RotationRate::forward(true), RotationRate::Negative);
        assert_eq!(RotationRate::forward(false), RotationRate::Positive);
    }

    #[test]
    fn test_custom_step() {
        let mut state = RotationState::new().with_step(0.5);
        state.set_rate(RotationPlane::YW, RotationRate::Positive);
        state.integrate();
        state.integrate();
        assert!((state.angle(RotationPlane::YW) - 1.0).abs() < EPSILON);
    }
}
