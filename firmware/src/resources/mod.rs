/*
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use defmt_rtt as _;
use panic_probe as _;
use assign_resources::assign_resources;

use embassy_rp::bind_interrupts;
use embassy_rp::peripherals;
use embassy_rp::pwm::Pwm;
use embassy_rp::pwm::Config as PwmConfig;
use embassy_rp::usb::InterruptHandler as UsbInterruptHandler;
use embassy_sync::channel::Channel;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_executor::InterruptExecutor;

use dc_motor_control::resources::QuadratureAccumulator;
use dc_motor_control::resources::Actuator;
use dc_motor_control::resources::ActuatorConfig;
use dc_motor_control::resources::LogData;
use dc_motor_control::resources::LOG_BUFFER_SIZE;

/* --------------------------- Declare Modules -------------------------- */
pub mod gpio_list;
pub mod motor_resources;
pub mod config;

pub use gpio_list::*;
pub use motor_resources::*;
pub use config::*;
