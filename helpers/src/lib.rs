pub mod general;

#[cfg(test)]
mod general_tests {
    use crate::general::{max_f64, InputValueError, InvalidParameterError};
    use approx::assert_ulps_eq;

    #[test]
    fn test_max_f64_1() {
        let x: Vec<f64> = vec![3.0, -1.0, 5.0, 8.0, -2.0];
        assert_ulps_eq!(max_f64(&x), 8.0);
    }
    #[test]
    fn test_max_f64_2() {
        let x: Vec<f64> = vec![-3.0, -1.0];
        assert_ulps_eq!(max_f64(&x), -1.0);
    }
    #[test]
    fn test_max_f64_empty() {
        let x: Vec<f64> = vec![];
        assert_eq!(max_f64(&x), f64::NEG_INFINITY);
    }
    #[test]
    fn test_max_f64_nan_skipped() {
        let x: Vec<f64> = vec![1.0, f64::NAN, 4.0];
        assert_ulps_eq!(max_f64(&x), 4.0);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", InputValueError), "Invalid input value");
        assert_eq!(
            format!("{}", InvalidParameterError),
            "Invalid model parameter"
        );
    }
}
