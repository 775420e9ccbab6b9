/*
* Motor Hub
*/

/* --------------------------- Library -------------------------- */
use crate::resources::ControlError;
use crate::resources::QuadratureAccumulator;
use crate::resources::EncoderConfig;
use crate::resources::ActuatorConfig;
use crate::resources::Actuator;
use crate::resources::ControllerKind;
use crate::resources::LogData;
use crate::resources::ErrorStats;
use crate::resources::CONVERSION_TO_RPM;
use crate::resources::PLANT_POLE;
use crate::resources::PLANT_GAIN;
use crate::control::ExponentialMovingAverage;
use crate::control::BezierProfile;
use crate::control::SpeedController;

/* --------------------------- Declare Modules -------------------------- */
pub mod encoder;
pub mod reset_button;
pub mod dc_motor;

pub use encoder::*;
pub use reset_button::*;
pub use dc_motor::*;
