/*
    DC Motor PWM Resources
        Channel B (CW) carries the duty cycle, channel A (CCW) is held off.
        Speed control only drives one direction.
*/

use super::*;

/* --------------------------- Code -------------------------- */
pub struct PwmActuator<'d> {
    pwm: Pwm<'d>,
    pwm_config: PwmConfig,
    config: ActuatorConfig,
}

impl<'d> PwmActuator<'d> {
    pub fn new(slice: peripherals::PWM_SLICE7, pin_ccw: peripherals::PIN_14, pin_cw: peripherals::PIN_15, config: ActuatorConfig) -> Self {
        let mut pwm_config = PwmConfig::default();
        pwm_config.top = config.pwm_top;
        pwm_config.compare_a = 0;
        pwm_config.compare_b = 0;

        let pwm = Pwm::new_output_ab(slice, pin_ccw, pin_cw, pwm_config.clone());

        Self {
            pwm,
            pwm_config,
            config,
        }
    }

    pub fn stop(&mut self) {
        self.pwm_config.compare_a = 0;
        self.pwm_config.compare_b = 0;
        self.pwm.set_config(&self.pwm_config);
    }
}

impl Actuator for PwmActuator<'_> {
    fn set_duty_cycle(&mut self, percentage: f32) -> f32 {
        let duty = self.config.clamp_duty(percentage);

        self.pwm_config.compare_a = 0;
        self.pwm_config.compare_b = self.config.compare_ticks(duty);
        self.pwm.set_config(&self.pwm_config);

        return duty;
    }
}
