/*
    Speed Controller Selection
        Both controllers share one contract: step(error) -> effort, reset().
        Each controller owns its error normalization and its output range:
        - Linear : error / ERROR_SCALING_FACTOR, effort in [0, 1]
        - Fuzzy  : raw RPM error, effort in the output universe [0, 60]
*/

use super::*;
use crate::resources::ERROR_SCALING_FACTOR;
use crate::resources::DEFAULT_LINEAR_PID_CONFIG;
use crate::resources::DEFAULT_FUZZY_PID_CONFIG;

/* --------------------------- Error Normalization -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ErrorNormalization {
    Scaled(f32),
    Raw,
}

impl ErrorNormalization {
    pub fn apply(&self, error_rpm: f32) -> f64 {
        match self {
            ErrorNormalization::Scaled(factor) => (error_rpm / factor) as f64,
            ErrorNormalization::Raw => error_rpm as f64,
        }
    }
}

/* --------------------------- Controller Trait -------------------------- */
pub trait Controller {
    fn step(&mut self, error: f64) -> f64;
    fn reset(&mut self);
    fn output_range(&self) -> (f64, f64);
}

impl Controller for LinearController {
    fn step(&mut self, error: f64) -> f64 {
        self.compute(error)
    }

    fn reset(&mut self) {
        LinearController::reset(self);
    }

    fn output_range(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

impl Controller for FuzzyController {
    fn step(&mut self, error: f64) -> f64 {
        self.compute(error)
    }

    fn reset(&mut self) {
        FuzzyController::reset(self);
    }

    fn output_range(&self) -> (f64, f64) {
        FuzzyController::output_range(self)
    }
}

/* --------------------------- Speed Controller -------------------------- */
pub enum SpeedController {
    Linear(LinearController),
    Fuzzy(FuzzyController),
}

impl SpeedController {
    pub fn new(kind: ControllerKind) -> Self {
        match kind {
            ControllerKind::Linear => SpeedController::Linear(LinearController::new(DEFAULT_LINEAR_PID_CONFIG)),
            ControllerKind::Fuzzy => SpeedController::Fuzzy(FuzzyController::new(DEFAULT_FUZZY_PID_CONFIG)),
        }
    }

    pub fn kind(&self) -> ControllerKind {
        match self {
            SpeedController::Linear(_) => ControllerKind::Linear,
            SpeedController::Fuzzy(_) => ControllerKind::Fuzzy,
        }
    }

    pub fn normalization(&self) -> ErrorNormalization {
        match self {
            SpeedController::Linear(_) => ErrorNormalization::Scaled(ERROR_SCALING_FACTOR),
            SpeedController::Fuzzy(_) => ErrorNormalization::Raw,
        }
    }

    pub fn normalize_error(&self, error_rpm: f32) -> f64 {
        self.normalization().apply(error_rpm)
    }

    pub fn output_range(&self) -> (f64, f64) {
        match self {
            SpeedController::Linear(pid) => Controller::output_range(pid),
            SpeedController::Fuzzy(fuzzy) => Controller::output_range(fuzzy),
        }
    }

    pub fn saturate(&self, sig: f64) -> f64 {
        let (lo, hi) = self.output_range();
        if sig.is_nan() {
            return lo;
        }
        return sig.clamp(lo, hi);
    }

    /// Runs one controller step on an already normalized error and returns the
    /// saturated effort. A non-finite error is replaced by 0 so the controller
    /// state never absorbs a NaN.
    pub fn step(&mut self, error: f64) -> f64 {
        let error = if error.is_finite() {
            error
        } else {
            log::warn!("{}: controller input replaced by 0", ControlError::NonFiniteInput);
            0.0
        };

        let sig = match self {
            SpeedController::Linear(pid) => pid.step(error),
            SpeedController::Fuzzy(fuzzy) => fuzzy.step(error),
        };

        self.saturate(sig)
    }

    pub fn reset(&mut self) {
        match self {
            SpeedController::Linear(pid) => Controller::reset(pid),
            SpeedController::Fuzzy(fuzzy) => Controller::reset(fuzzy),
        }
    }

    // Saturated effort -> [0, 1]
    pub fn effort_fraction(&self, effort: f64) -> f32 {
        let (lo, hi) = self.output_range();
        if hi <= lo {
            return 0.0;
        }
        return ((self.saturate(effort) - lo) / (hi - lo)) as f32;
    }
}
