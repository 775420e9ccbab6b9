use dc_motor_control::control::BezierProfile;
use dc_motor_control::control::FuzzyController;
use dc_motor_control::control::LinearController;
use dc_motor_control::control::LinearState;
use dc_motor_control::motor::DCMotor;
use dc_motor_control::motor::SimulatedPlant;
use dc_motor_control::motor::SpeedEstimator;
use dc_motor_control::resources::Actuator;
use dc_motor_control::resources::ActuatorConfig;
use dc_motor_control::resources::ControllerKind;
use dc_motor_control::resources::LogData;
use dc_motor_control::resources::QuadratureAccumulator;
use dc_motor_control::resources::DEFAULT_ACTUATOR_CONFIG;
use dc_motor_control::resources::DEFAULT_ENCODER_CONFIG;
use dc_motor_control::resources::TIME_SAMPLING_MS;

const FORWARD: [(bool, bool); 4] = [(false, false), (true, false), (true, true), (false, true)];

// One full output shaft revolution in quarter steps
const REVOLUTION: usize = 199 * 8;

struct RecordingActuator {
    config: ActuatorConfig,
    applied: Vec<f32>,
}

impl RecordingActuator {
    fn new() -> Self {
        Self {
            config: DEFAULT_ACTUATOR_CONFIG,
            applied: Vec::new(),
        }
    }
}

impl Actuator for RecordingActuator {
    fn set_duty_cycle(&mut self, percentage: f32) -> f32 {
        let duty = self.config.clamp_duty(percentage);
        self.applied.push(duty);
        duty
    }
}

fn spin_forward(encoder: &QuadratureAccumulator, quarter_steps: usize) {
    for step in 1..=quarter_steps {
        let (a, b) = FORWARD[step % 4];
        encoder.on_edge(a, b);
    }
}

fn measured(sample: LogData) -> f32 {
    match sample {
        LogData::Sample { measured_rpm, .. } => measured_rpm,
        LogData::Reset { .. } => panic!("expected a sample record"),
    }
}

/* --------------------------- Reference Scenarios -------------------------- */
#[test]
fn idle_encoder_decays_filtered_speed() {
    let encoder = QuadratureAccumulator::new();
    encoder.prime(false, false);
    let mut estimator = SpeedEstimator::new(DEFAULT_ENCODER_CONFIG, &encoder);

    spin_forward(&encoder, REVOLUTION);
    let moving = estimator.read_and_reset(10.0).unwrap();
    assert!((moving - 600.0).abs() < 1e-2);

    let mut previous = moving;
    for _ in 0..10 {
        let rpm = estimator.read_and_reset(10.0).unwrap();
        assert!((rpm - previous * 0.9).abs() < 1e-2);
        previous = rpm;
    }
}

#[test]
fn profile_starts_at_rest() {
    assert_eq!(BezierProfile::default().reference_rpm(0.0), 0.0);
}

#[test]
fn linear_controller_holds_zero_for_zero_error() {
    let mut pid = LinearController::default();
    for _ in 0..100 {
        assert_eq!(pid.compute(0.0), 0.0);
    }
    assert_eq!(pid.state(), LinearState::default());
}

#[test]
fn fuzzy_step_saturates_and_integrates_monotonically() {
    let mut fuzzy = FuzzyController::default();
    assert_eq!(fuzzy.compute(-2000.0), 60.0);

    let mut fuzzy = FuzzyController::default();
    let mut integrator = fuzzy.state().integrator;
    for _ in 0..50 {
        fuzzy.compute(-2000.0);
        assert!(fuzzy.state().integrator < integrator);
        integrator = fuzzy.state().integrator;
    }
}

/* --------------------------- Closed Loop -------------------------- */
#[test]
fn simulated_run_keeps_duty_in_safe_range() {
    for kind in [ControllerKind::Linear, ControllerKind::Fuzzy] {
        let mut motor = DCMotor::new(SimulatedPlant::default(), RecordingActuator::new(), kind);

        let mut peak = 0.0f32;
        for _ in 0..4_200 {
            let report = motor.tick(false);
            let rpm = measured(report.sample);
            assert!(rpm.is_finite());
            assert!((-1e-3..=390.0 + 1e-2).contains(&rpm));
            peak = peak.max(rpm);
        }

        assert!(motor.actuator().applied.iter().all(|d| (10.0..=90.0).contains(d)));
        assert!(peak > 300.0, "{:?} never reached cruise, peak {}", kind, peak);
    }
}

#[test]
fn reset_replays_the_run_from_the_start() {
    let mut motor = DCMotor::new(SimulatedPlant::default(), RecordingActuator::new(), ControllerKind::Linear);

    let first: Vec<LogData> = (0..1_600).map(|_| motor.tick(false).sample).collect();

    let report = motor.tick(true);
    assert!(matches!(report.reset, Some(LogData::Reset { samples: 1_600, .. })));
    assert_eq!(report.elapsed_ms, 0);

    let mut second = vec![report.sample];
    second.extend((1..1_600).map(|_| motor.tick(false).sample));

    assert_eq!(first, second);
}

#[test]
fn encoder_driven_loop_reads_filtered_speed() {
    let encoder = QuadratureAccumulator::new();
    encoder.prime(false, false);
    let estimator = SpeedEstimator::new(DEFAULT_ENCODER_CONFIG, &encoder);
    let mut motor = DCMotor::new(estimator, RecordingActuator::new(), ControllerKind::Linear);

    spin_forward(&encoder, REVOLUTION);
    let first = measured(motor.tick(false).sample);
    assert!((first - 600.0).abs() < 1e-2);

    spin_forward(&encoder, REVOLUTION);
    let second = measured(motor.tick(false).sample);
    assert!((second - 1140.0).abs() < 1e-2);
    assert_eq!(encoder.pending(), 0);

    // pulses left over at reset belong to the discarded run
    spin_forward(&encoder, 12);
    let report = motor.tick(true);
    assert!(report.reset.is_some());
    assert_eq!(measured(report.sample), 0.0);
    assert_eq!(motor.elapsed_ms(), TIME_SAMPLING_MS);
}

#[test]
fn controller_can_be_swapped_between_ticks() {
    let mut motor = DCMotor::new(SimulatedPlant::default(), RecordingActuator::new(), ControllerKind::Linear);
    for _ in 0..800 {
        motor.tick(false);
    }

    motor.select_controller(ControllerKind::Fuzzy);
    assert_eq!(motor.controller_kind(), ControllerKind::Fuzzy);
    for _ in 0..800 {
        let report = motor.tick(false);
        assert!((10.0..=90.0).contains(&report.duty_cycle));
        match report.sample {
            LogData::Sample { control_effort, .. } => assert!((0.0..=60.0).contains(&control_effort)),
            LogData::Reset { .. } => unreachable!(),
        }
    }

    // same kind again is a no-op
    motor.select_controller(ControllerKind::Fuzzy);
    assert_eq!(motor.controller_kind(), ControllerKind::Fuzzy);
}
