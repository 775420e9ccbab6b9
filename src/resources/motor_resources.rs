/*
    DC Motor Resources
*/

use super::*;

/* --------------------------- Controller Selection -------------------------- */
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerKind {
    Linear,
    Fuzzy,
}

/* --------------------------- Actuator -------------------------- */
// Implemented by the PWM binding. Returns the duty cycle actually applied.
pub trait Actuator {
    fn set_duty_cycle(&mut self, percentage: f32) -> f32;
}

impl ActuatorConfig {
    pub fn clamp_duty(&self, percentage: f32) -> f32 {
        if percentage.is_nan() {
            return self.duty_min;
        }
        return percentage.clamp(self.duty_min, self.duty_max);
    }

    // effort_fraction in [0, 1] -> [duty_min, duty_max]
    pub fn duty_from_effort(&self, effort_fraction: f32) -> f32 {
        let duty = self.duty_min + effort_fraction * (self.duty_max - self.duty_min);
        return self.clamp_duty(duty);
    }

    pub fn compare_ticks(&self, percentage: f32) -> u16 {
        let duty = self.clamp_duty(percentage);
        let ticks = (duty / 100.0) * (self.pwm_top as f32 + 1.0);
        return (ticks as u32).min(self.pwm_top as u32 + 1) as u16;
    }
}
