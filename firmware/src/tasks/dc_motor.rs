/*
* DC Motor Task
*  - Encoder PPR = 199 at the output shaft, decoded on every edge (x8)
*  - Fixed rate loop, one DCMotor::tick per TIME_SAMPLING_MS
*  - Telemetry is handed to the logger task, dropped when the channel is full
*/

use super::*;

use dc_motor_control::motor::DCMotor;
use dc_motor_control::resources::DEFAULT_CONTROLLER;

#[cfg(not(feature = "simulate-encoder"))]
use dc_motor_control::motor::SpeedEstimator;
#[cfg(not(feature = "simulate-encoder"))]
use dc_motor_control::resources::DEFAULT_ENCODER_CONFIG;
#[cfg(feature = "simulate-encoder")]
use dc_motor_control::motor::SimulatedPlant;

#[cfg(not(feature = "simulate-encoder"))]
pub type MotorSensor = SpeedEstimator<'static>;
#[cfg(feature = "simulate-encoder")]
pub type MotorSensor = SimulatedPlant;

pub type Motor0 = DCMotor<MotorSensor, PwmActuator<'static>>;

/* --------------------------- Code -------------------------- */
pub fn build_motor(actuator: PwmActuator<'static>) -> Motor0 {
    #[cfg(not(feature = "simulate-encoder"))]
    let sensor = SpeedEstimator::new(DEFAULT_ENCODER_CONFIG, &ENCODER_0);
    #[cfg(feature = "simulate-encoder")]
    let sensor = SimulatedPlant::default();

    DCMotor::new(sensor, actuator, DEFAULT_CONTROLLER)
}

fn publish(data: LogData) {
    if LOG_CHANNEL.try_send(data).is_err() {
        defmt::trace!("Telemetry channel full");
    }
}

#[embassy_executor::task]
pub async fn motor_task(mut dc_motor: Motor0, r: ResetButtonResources) {
    let reset_button = Input::new(r.Reset_PIN, Pull::Up);
    let mut ticker = Ticker::every(Duration::from_millis(TIME_SAMPLING_MS as u64));

    log::info!("Motor Task Started: {:?} controller", dc_motor.controller_kind());

    loop {
        ticker.next().await;

        let report = dc_motor.tick(reset_button.is_low());

        if let Some(summary) = report.reset {
            publish(summary);
        }
        publish(report.sample);
    }
}
