/*
* Control Hub
*/

/* --------------------------- Library -------------------------- */
use crate::resources::ControlError;
use crate::resources::ControllerKind;
use crate::resources::LinearPidConfig;
use crate::resources::FuzzyPidConfig;
use crate::resources::TrajectoryConfig;
use crate::resources::RAD_S_TO_RPM;
use libm::fmin;
use libm::fmax;

/* --------------------------- Declare Modules -------------------------- */
pub mod pid_control;
pub mod motion_profile;
pub mod moving_average;
pub mod membership;
pub mod fuzzy_control;
pub mod controller;

pub use pid_control::*;
pub use motion_profile::*;
pub use moving_average::*;
pub use membership::*;
pub use fuzzy_control::*;
pub use controller::*;
