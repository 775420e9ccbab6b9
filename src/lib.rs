/*
* DC Motor Speed Control
*  - Quadrature encoder decoding and filtered RPM estimation
*  - Bezier speed profile generator
*  - Linear PID and Fuzzy PID speed controllers
*  - Fixed-rate control loop with reset handling
*/

#![cfg_attr(not(test), no_std)]

// Mod
pub mod control;
pub mod resources;
pub mod motor;

pub use resources::ControlError;
pub use resources::QuadratureAccumulator;
pub use control::SpeedController;
pub use motor::DCMotor;
