#![no_std]
#![no_main]

// Mod
mod tasks;
mod resources;

// Resources
use crate::resources::Irqs;
use crate::resources::AssignedResources;
use crate::resources::Motor0Resources;
use crate::resources::Encoder0Resources;
use crate::resources::ResetButtonResources;
use crate::resources::UsbResources;
use crate::resources::PwmActuator;
use crate::resources::EXECUTOR_HIGH;

// Tasks
use crate::tasks::logger::usb_logger_task;
use crate::tasks::logger::firmware_logger_task;
use crate::tasks::dc_motor::build_motor;
use crate::tasks::dc_motor::motor_task;
use crate::tasks::encoder::encoder_task;

// Library
use defmt_rtt as _;
use panic_probe as _;

use dc_motor_control::resources::DEFAULT_ACTUATOR_CONFIG;

use embassy_rp::interrupt;
use embassy_rp::interrupt::InterruptExt;
use embassy_rp::interrupt::Priority;
use embassy_rp::usb::Driver;
use embassy_executor::Spawner;

#[interrupt]
unsafe fn SWI_IRQ_1() {
    unsafe { EXECUTOR_HIGH.on_interrupt() }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let ph = embassy_rp::init(Default::default());
    let p = split_resources!(ph);

    let usb_driver = Driver::new(p.usb.USB, Irqs);

    let mut actuator = PwmActuator::new(
                        p.motor_0.SLICE,
                        p.motor_0.Motor_PWM_CCW_PIN,
                        p.motor_0.Motor_PWM_CW_PIN,
                        DEFAULT_ACTUATOR_CONFIG,
                    );
    actuator.stop();
    let dc_motor = build_motor(actuator);

    // Edge handling preempts the control loop
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let spawner_high = EXECUTOR_HIGH.start(interrupt::SWI_IRQ_1);
    spawner_high.must_spawn(encoder_task(p.encoder_0));

    spawner.must_spawn(usb_logger_task(usb_driver));
    spawner.must_spawn(firmware_logger_task());
    spawner.must_spawn(motor_task(dc_motor, p.reset_button));
}
