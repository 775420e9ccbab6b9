/*
*  Firmware Config
*
*  Control tunables live in dc_motor_control::resources::config,
*  this module only holds the firmware side statics.
*/

use super::*;

/* --------------------------- Shared State -------------------------- */
// Written by the edge task, swapped to 0 by the control loop
pub static ENCODER_0: QuadratureAccumulator = QuadratureAccumulator::new();

/* --------------------------- Communication Channels-------------------------- */
pub static LOG_CHANNEL: Channel<CriticalSectionRawMutex, LogData, LOG_BUFFER_SIZE> = Channel::new();

/* --------------------------- Executor -------------------------- */
pub static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();
