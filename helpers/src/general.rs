use std::error::Error;
use std::fmt;

/// InputValueError is used if some simulation option or parameter does not fulfill the posed
/// requirements, e.g., by exceeding the allowed sampling step size range.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

/// InvalidParameterError is used if an input to the kinematic model violates its domain, e.g., a
/// non-positive mass or drag coefficient, or a negative speed.
#[derive(Debug, Clone)]
pub struct InvalidParameterError;

impl fmt::Display for InvalidParameterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid model parameter")
    }
}

impl Error for InvalidParameterError {}

/// max_f64 returns the maximum value in the array x (NEG_INFINITY for an empty array). NaN values
/// are skipped due to the f64::max semantics.
pub fn max_f64(x: &[f64]) -> f64 {
    x.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
