/*
    Speed Estimation
        pulses -> cycles (/ decoding multiplier) -> revolutions (/ PPR)
        -> RPM (rev / dt_ms * 60000) -> EMA filter
*/

use super::*;

/* --------------------------- Speed Source -------------------------- */
pub trait SpeedSource {
    fn measure_rpm(&mut self, delta_time_ms: f32) -> Result<f32, ControlError>;

    // Effort fraction in [0, 1] applied after the last measurement
    fn observe_effort(&mut self, _effort_fraction: f32) {}

    fn last_rpm(&self) -> f32;

    fn reset(&mut self);
}

/* --------------------------- Encoder Speed Estimator -------------------------- */
pub struct SpeedEstimator<'a> {
    encoder: &'a QuadratureAccumulator,
    config: EncoderConfig,
    filter: ExponentialMovingAverage,
}

impl<'a> SpeedEstimator<'a> {
    pub fn new(config: EncoderConfig, encoder: &'a QuadratureAccumulator) -> Self {
        Self {
            encoder,
            config,
            filter: ExponentialMovingAverage::new(config.filter_alpha),
        }
    }

    pub fn raw_rpm(&self, pulses: i32, delta_time_ms: f32) -> f32 {
        let cycles = pulses as f32 / self.config.decoding_multiplier;
        let revolutions = cycles / self.config.ppr;
        return (revolutions / delta_time_ms) * CONVERSION_TO_RPM;
    }

    /// Swaps the pulse counter to zero and returns the filtered RPM over the
    /// elapsed interval. A non-positive interval leaves both the counter and
    /// the filter untouched so no pulse is lost.
    pub fn read_and_reset(&mut self, delta_time_ms: f32) -> Result<f32, ControlError> {
        if !(delta_time_ms > 0.0) {
            return Err(ControlError::InvalidInterval);
        }

        let pulses = self.encoder.take();
        let raw_rpm = self.raw_rpm(pulses, delta_time_ms);

        Ok(self.filter.update(raw_rpm))
    }

    pub fn filtered_rpm(&self) -> f32 {
        self.filter.value()
    }

    pub fn reset(&mut self) {
        // pending pulses belong to the discarded run
        let _ = self.encoder.take();
        self.filter.reset();
    }
}

impl SpeedSource for SpeedEstimator<'_> {
    fn measure_rpm(&mut self, delta_time_ms: f32) -> Result<f32, ControlError> {
        self.read_and_reset(delta_time_ms)
    }

    fn last_rpm(&self) -> f32 {
        self.filtered_rpm()
    }

    fn reset(&mut self) {
        SpeedEstimator::reset(self);
    }
}

/* --------------------------- Simulated Plant -------------------------- */
// First order motor model, used when running without an encoder
pub struct SimulatedPlant {
    rpm: f32,
    pole: f32,
    gain: f32,
}

impl SimulatedPlant {
    pub fn new(pole: f32, gain: f32) -> Self {
        Self {
            rpm: 0.0,
            pole,
            gain,
        }
    }
}

impl Default for SimulatedPlant {
    fn default() -> Self {
        Self::new(PLANT_POLE, PLANT_GAIN)
    }
}

impl SpeedSource for SimulatedPlant {
    fn measure_rpm(&mut self, delta_time_ms: f32) -> Result<f32, ControlError> {
        if !(delta_time_ms > 0.0) {
            return Err(ControlError::InvalidInterval);
        }
        Ok(self.rpm)
    }

    fn observe_effort(&mut self, effort_fraction: f32) {
        self.rpm = (self.pole * self.rpm) + (self.gain * effort_fraction);
    }

    fn last_rpm(&self) -> f32 {
        self.rpm
    }

    fn reset(&mut self) {
        self.rpm = 0.0;
    }
}
