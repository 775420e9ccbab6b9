/* 
* Resources Hub
*/

/* --------------------------- Library -------------------------- */
use core::fmt;
use core::fmt::Write;
use portable_atomic::AtomicI32;
use portable_atomic::AtomicU8;
use portable_atomic::Ordering;
use heapless::String;

/* --------------------------- Declare Modules -------------------------- */
pub mod config;
pub mod error;
pub mod encoder_resources;
pub mod motor_resources;
pub mod logger_resources;

pub use config::*;
pub use error::*;
pub use encoder_resources::*;
pub use motor_resources::*;
pub use logger_resources::*;
