/*
*  Default Speed Control Config
*
*  DC Motor Properties
*  - Encoder PPR = 199 (at the output shaft)
*  - 2 channel quadrature, decoded on every edge of both channels
*  - Sample Time = 10 ms
*/

use super::*;

/* --------------------------- Config Struct -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncoderConfig {
    pub ppr: f32,
    pub decoding_multiplier: f32,
    pub filter_alpha: f32,
}

// Coefficients come from a discretized PID block with a filtered derivative.
// They are calibrated as a set, do not tune one in isolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearPidConfig {
    pub kp: f64,
    pub ki: f64,
    pub kd_num: f64,
    pub kd_den: f64,
    pub kd_gain: f64,
    pub sample_time_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FuzzyPidConfig {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
    pub integrator_gain: f64,
    pub error_universe: (f64, f64),
    pub derivative_universe: (f64, f64),
    pub output_universe: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryConfig {
    pub kf_rad_s: f32,
    pub base_markers_s: [f32; 6],
    pub base_duration_s: f32,
    pub target_duration_s: f32,
    pub rpm_scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActuatorConfig {
    pub duty_min: f32,
    pub duty_max: f32,
    pub pwm_top: u16,
}

/* --------------------------- Encoder Config -------------------------- */
pub const DEFAULT_ENCODER_CONFIG: EncoderConfig = EncoderConfig {
    ppr: 199.0,
    decoding_multiplier: 8.0,
    filter_alpha: 0.1,
};

pub const CONVERSION_TO_RPM: f32 = 60_000.0; // rev/ms -> rev/min

/* --------------------------- Controller Config -------------------------- */
pub const DEFAULT_LINEAR_PID_CONFIG: LinearPidConfig = LinearPidConfig {
    kp: 0.36931,
    ki: 32.962,
    kd_num: 0.11452,
    kd_den: -0.009931682274340237,
    kd_gain: 9968.7876673585,
    sample_time_s: 0.01,
};

pub const DEFAULT_FUZZY_PID_CONFIG: FuzzyPidConfig = FuzzyPidConfig {
    kp: 2.0,
    ki: 8.0,
    kd: 0.0,
    integrator_gain: 0.001,
    error_universe: (-1200.0, 1200.0),
    derivative_universe: (-10.0, 10.0),
    output_universe: (0.0, 60.0),
};

// Linear PID works on error / 400, Fuzzy PID on raw RPM error
pub const ERROR_SCALING_FACTOR: f32 = 400.0;
pub const DEFAULT_CONTROLLER: ControllerKind = ControllerKind::Linear;

/* --------------------------- Trajectory Config -------------------------- */
pub const DEFAULT_TRAJECTORY_CONFIG: TrajectoryConfig = TrajectoryConfig {
    kf_rad_s: 24.0,
    base_markers_s: [0.1, 0.5, 1.5, 2.2, 3.2, 3.3],
    base_duration_s: 3.3,
    target_duration_s: 40.0,
    rpm_scale: 1.7,
};

pub const RAD_S_TO_RPM: f32 = 9.549_296_585_5; // 60 / 2PI

/* --------------------------- Motor PWM and Control Config -------------------------- */
pub const DEFAULT_ACTUATOR_CONFIG: ActuatorConfig = ActuatorConfig {
    duty_min: 10.0,
    duty_max: 90.0,
    pwm_top: 1249, // 100kHz Period = (125_000_000 (Pico clock)/100_000(Frequency)) -1
};

pub const TIME_SAMPLING_MS: u32 = 10; // Control Loop Period
pub const RESET_COOLDOWN_MS: u32 = 200;
pub const RESET_COOLDOWN_TICKS: u32 = RESET_COOLDOWN_MS / TIME_SAMPLING_MS;

/* --------------------------- Simulated Plant -------------------------- */
pub const PLANT_POLE: f32 = 0.95;
pub const PLANT_GAIN: f32 = 19.5;

/* --------------------------- Telemetry -------------------------- */
pub const LOG_LINE_SIZE: usize = 64;
pub const LOG_BUFFER_SIZE: usize = 64;
