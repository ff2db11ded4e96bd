//! Tests for error display and construction helpers

#[cfg(test)]
mod tests {
    use polymood::io::error::{PatternError, computation_error, invalid_parameter};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests the invalid parameter display form
    // Verified against the helper constructor
    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("count", &0_usize, &"must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'count' = '0': must be at least 1"
        );
    }

    // Tests the computation error display form
    // Verified against the helper constructor
    #[test]
    fn test_computation_error_display() {
        let err = computation_error("triangulation", &"lattice point (9, 9) out of bounds");
        assert_eq!(
            err.to_string(),
            "Computation error in triangulation: lattice point (9, 9) out of bounds"
        );
    }

    // Tests file system error display and source chaining
    // The underlying io error must be reachable through source()
    #[test]
    fn test_file_system_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = PatternError::FileSystem {
            path: PathBuf::from("out/pattern.svg"),
            operation: "write svg",
            source: io_err,
        };

        assert!(err.to_string().contains("write svg"));
        assert!(err.to_string().contains("out/pattern.svg"));
        assert!(err.source().is_some());
    }

    // Tests the blanket conversion from io errors
    // Used by the ? operator in export paths
    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PatternError::from(io_err);

        match err {
            PatternError::FileSystem { .. } => {}
            other => panic!("expected FileSystem, got {other}"),
        }
    }

    // Tests that parameter errors have no source
    // They originate in validation, not in a wrapped failure
    #[test]
    fn test_parameter_error_has_no_source() {
        let err = invalid_parameter("width", &f64::NAN, &"must be finite");
        assert!(err.source().is_none());
    }
}
