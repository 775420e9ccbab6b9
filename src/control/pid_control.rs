/*
    Linear PID Control
        Discrete PID with a low-pass filtered derivative
        u = Kp * [ D_filtered + e + I ]
        Output is not saturated here, the caller owns saturation
*/

use super::*;

/* --------------------------- State -------------------------- */
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearState {
    pub derivative_filter: f64,
    pub integrator: f64,
}

/* --------------------------- Code -------------------------- */
pub struct LinearController {
    config: LinearPidConfig,
    state: LinearState,
}

impl LinearController {
    pub fn new(config: LinearPidConfig) -> Self {
        Self {
            config,
            state: LinearState::default(),
        }
    }

    pub fn reset(&mut self) {
        self.state = LinearState::default();
    }

    pub fn state(&self) -> LinearState {
        self.state
    }

    pub fn compute(&mut self, error: f64) -> f64 {
        let cfg = &self.config;

        // Derivative filter
        let derivative_filter = cfg.kd_num * error - cfg.kd_den * self.state.derivative_filter;

        // Integrator
        self.state.integrator += cfg.ki * error * cfg.sample_time_s;

        let derivative = (derivative_filter - self.state.derivative_filter) * (-cfg.kd_den) * cfg.kd_gain;
        let sig = cfg.kp * (derivative + (error + self.state.integrator));

        self.state.derivative_filter = derivative_filter;

        return sig;
    }
}

impl Default for LinearController {
    fn default() -> Self {
        Self::new(crate::resources::DEFAULT_LINEAR_PID_CONFIG)
    }
}
