/*
    Control Error
*/

use super::*;

/* --------------------------- Error Code -------------------------- */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum ControlError {
    /// Elapsed interval was zero or negative, nothing was measured.
    InvalidInterval = 1,
    /// A NaN or infinite value reached the computation path.
    NonFiniteInput = 2,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlError::InvalidInterval => write!(f, "elapsed interval must be greater than zero"),
            ControlError::NonFiniteInput => write!(f, "non-finite value in control path"),
        }
    }
}
