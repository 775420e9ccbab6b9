/*
    Telemetry Logger Resources
        Sample line : [REFERENCE_RPM],[MEASURED_RPM],[CONTROL_EFFORT]
        Reset line  : --- RESET --- mse=[MSE] samples=[N]
*/

use super::*;

/* --------------------------- Log Data -------------------------- */
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogData {
    Sample {
        reference_rpm: f32,
        measured_rpm: f32,
        control_effort: f32,
    },
    Reset {
        mse: f32,
        samples: u32,
    },
}

impl LogData {
    pub fn write_to_buffer(&self, buffer: &mut String<LOG_LINE_SIZE>) -> fmt::Result {
        buffer.clear();

        match self {
            LogData::Sample { reference_rpm, measured_rpm, control_effort } => {
                write!(buffer, "{:.2},{:.2},{:.2}", reference_rpm, measured_rpm, control_effort)
            },
            LogData::Reset { mse, samples } => {
                write!(buffer, "--- RESET --- mse={:.4} samples={}", mse, samples)
            },
        }
    }
}

/* --------------------------- Error Statistics -------------------------- */
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ErrorStats {
    sum_squared: f64,
    samples: u32,
}

impl ErrorStats {
    pub const fn new() -> Self {
        Self {
            sum_squared: 0.0,
            samples: 0,
        }
    }

    pub fn add(&mut self, error: f32) {
        if !error.is_finite() {
            return;
        }
        let e = error as f64;
        self.sum_squared += e * e;
        self.samples = self.samples.saturating_add(1);
    }

    pub fn mse(&self) -> f32 {
        if self.samples == 0 {
            return 0.0;
        }
        return (self.sum_squared / self.samples as f64) as f32;
    }

    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
