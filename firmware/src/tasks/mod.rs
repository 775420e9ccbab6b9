/*
* Tasks Hub
*/

/* --------------------------- Library -------------------------- */
use defmt_rtt as _;
use panic_probe as _;

use embassy_rp::gpio::Input;
use embassy_rp::gpio::Pull;
use embassy_time::Ticker;
use embassy_time::Duration;
use embassy_futures::select::select;

use crate::resources::ENCODER_0;
use crate::resources::LOG_CHANNEL;
use crate::resources::PwmActuator;
use crate::resources::Encoder0Resources;
use crate::resources::ResetButtonResources;

use dc_motor_control::resources::LogData;
use dc_motor_control::resources::LOG_LINE_SIZE;
use dc_motor_control::resources::TIME_SAMPLING_MS;

/* --------------------------- Declare Modules -------------------------- */
pub mod encoder;
pub mod dc_motor;
pub mod logger;
