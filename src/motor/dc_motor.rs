/*
* DC Motor Speed Control Loop
*  - One tick per sample period, fully synchronous
*  - reference (profile) - measured (speed source) -> active controller
*    -> saturation -> duty cycle -> actuator
*  - Reset is applied at the start of a tick, so no tick ever sees a partial reset
*  - Time base is an internal counter advanced by the sample period, a late
*    tick shifts every later reference sample
*/

use super::*;
use crate::resources::DEFAULT_ACTUATOR_CONFIG;
use crate::resources::TIME_SAMPLING_MS;
use crate::resources::RESET_COOLDOWN_TICKS;

/* --------------------------- Tick Report -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickReport {
    pub elapsed_ms: u32,
    pub sample: LogData,
    pub reset: Option<LogData>,
    pub duty_cycle: f32,
}

/* --------------------------- Code -------------------------- */
pub struct DCMotor<S: SpeedSource, A: Actuator> {
    sensor: S,
    actuator: A,
    profile: BezierProfile,
    controller: SpeedController,
    reset_button: ResetButton,
    stats: ErrorStats,
    actuator_config: ActuatorConfig,
    sample_time_ms: u32,
    time_counter_ms: u32,
}

impl<S: SpeedSource, A: Actuator> DCMotor<S, A> {
    pub fn new(sensor: S, actuator: A, kind: ControllerKind) -> Self {
        Self {
            sensor,
            actuator,
            profile: BezierProfile::default(),
            controller: SpeedController::new(kind),
            reset_button: ResetButton::new(RESET_COOLDOWN_TICKS),
            stats: ErrorStats::new(),
            actuator_config: DEFAULT_ACTUATOR_CONFIG,
            sample_time_ms: TIME_SAMPLING_MS,
            time_counter_ms: 0,
        }
    }

    pub fn with_profile(mut self, profile: BezierProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_actuator_config(mut self, config: ActuatorConfig) -> Self {
        self.actuator_config = config;
        self
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.time_counter_ms
    }

    pub fn controller_kind(&self) -> ControllerKind {
        self.controller.kind()
    }

    pub fn controller(&self) -> &SpeedController {
        &self.controller
    }

    pub fn sensor(&self) -> &S {
        &self.sensor
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn select_controller(&mut self, kind: ControllerKind) {
        if self.controller.kind() == kind {
            return;
        }
        log::info!("controller switched to {:?}", kind);
        self.controller = SpeedController::new(kind);
    }

    /// Zeroes the time base, the active controller, the speed source and the
    /// error statistics. Returns the summary of the run that just ended.
    pub fn reset(&mut self) -> LogData {
        let summary = LogData::Reset {
            mse: self.stats.mse(),
            samples: self.stats.samples(),
        };
        log::info!("--- RESET --- after {} ms", self.time_counter_ms);

        self.time_counter_ms = 0;
        self.controller.reset();
        self.sensor.reset();
        self.stats.clear();

        summary
    }

    pub fn tick(&mut self, reset_asserted: bool) -> TickReport {
        let reset = if self.reset_button.poll(reset_asserted) {
            Some(self.reset())
        } else {
            None
        };

        let elapsed_ms = self.time_counter_ms;
        let t_seconds = elapsed_ms as f32 / 1_000.0;
        let reference_rpm = self.profile.reference_rpm(t_seconds);

        let measured_rpm = match self.sensor.measure_rpm(self.sample_time_ms as f32) {
            Ok(rpm) => rpm,
            Err(e) => {
                log::warn!("{}: holding last speed", e);
                self.sensor.last_rpm()
            },
        };

        let error = reference_rpm - measured_rpm;
        self.stats.add(error);

        let effort = self.controller.step(self.controller.normalize_error(error));
        let effort_fraction = self.controller.effort_fraction(effort);
        let duty_cycle = self.actuator.set_duty_cycle(self.actuator_config.duty_from_effort(effort_fraction));
        self.sensor.observe_effort(effort_fraction);

        self.time_counter_ms = self.time_counter_ms.saturating_add(self.sample_time_ms);

        TickReport {
            elapsed_ms,
            sample: LogData::Sample {
                reference_rpm,
                measured_rpm,
                control_effort: effort as f32,
            },
            reset,
            duty_cycle,
        }
    }
}
