#[cfg(test)]
mod tests {
    use crate::{DaemonError, Result};
    use std::error::Error;
    use std::io;
    use vantage_core::CoreError;

    #[test]
    fn test_daemon_error_display() {
        let err = DaemonError::ServerError("bind failed".to_string());
        assert_eq!(err.to_string(), "Server error: bind failed");

        let err = DaemonError::ConfigError(CoreError::ConfigurationError("no file".to_string()));
        assert!(err.to_string().contains("no file"));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = DaemonError::IoError(io_err);
        assert!(err.to_string().contains("access denied"));

        let serde_err = serde_json::from_str::<serde_json::Value>("{invalid}").unwrap_err();
        let err = DaemonError::SerializationError(serde_err);
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_daemon_error_from_core() {
        let core_err = CoreError::ValidationError("duplicate name".to_string());
        let daemon_err: DaemonError = core_err.into();

        if let DaemonError::ConfigError(_) = daemon_err {
            // Expected variant
        } else {
            panic!("Expected DaemonError::ConfigError variant");
        }
    }

    #[test]
    fn test_daemon_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let daemon_err: DaemonError = io_err.into();

        if let DaemonError::IoError(_) = daemon_err {
            // Expected variant
        } else {
            panic!("Expected DaemonError::IoError variant");
        }
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_ok() -> Result<u32> {
            Ok(42)
        }

        fn returns_err() -> Result<u32> {
            Err(DaemonError::ServerError("test failure".to_string()))
        }

        assert_eq!(returns_ok().unwrap(), 42);
        assert!(returns_err().is_err());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = DaemonError::ServerError("test".to_string());

        // Test that it implements std::error::Error
        let _: &dyn Error = &err;

        // Test source method
        assert!(err.source().is_none());
    }
}
