//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use pixelsprite::io::error::{Axis, invalid_parameter};
    use pixelsprite::{GenerationWarning, SpriteError};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = SpriteError::FileSystem {
            path: "/tmp/mask.txt".into(),
            operation: "read mask",
            source: io_error,
        };

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read mask"));
        assert!(message.contains("/tmp/mask.txt"));
    }

    // Tests InvalidMask reports dimensions and both lengths
    // Verified by omitting actual length from message
    #[test]
    fn test_invalid_mask_error() {
        let error = SpriteError::InvalidMask {
            width: 3,
            height: 2,
            expected: 6,
            actual: 5,
        };

        let message = error.to_string();
        assert!(message.contains("3x2"));
        assert!(message.contains('6'));
        assert!(message.contains('5'));
        assert!(error.source().is_none());
    }

    // Tests MaskParse error names the line
    // Verified by omitting line from message
    #[test]
    fn test_mask_parse_error() {
        let error = SpriteError::MaskParse {
            line: 4,
            reason: "'7' is not a structural code".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("line 4"));
        assert!(message.contains("'7'"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("scale", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("scale"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = SpriteError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests conversions from foreign errors keep the source
    // Verified by dropping the source during conversion
    #[test]
    fn test_from_conversions() {
        let from_io: SpriteError = std::io::Error::other("disk gone").into();
        assert!(matches!(from_io, SpriteError::FileSystem { .. }));
        assert!(from_io.source().is_some());

        let from_image: SpriteError =
            image::ImageError::IoError(std::io::Error::other("codec")).into();
        assert!(matches!(from_image, SpriteError::ImageExport { .. }));
    }

    // Tests EmptyBatch formatting
    // Verified by returning an empty message
    #[test]
    fn test_empty_batch_error() {
        assert_eq!(SpriteError::EmptyBatch.to_string(), "No sprites to export");
    }

    // Tests odd mirror warnings name axis and length
    // Verified by printing the axis in upper case
    #[test]
    fn test_odd_mirror_warning_display() {
        let warning = GenerationWarning::OddMirrorAxis {
            axis: Axis::Y,
            length: 5,
        };

        let message = warning.to_string();
        assert!(message.contains("along y"));
        assert!(message.contains("length 5"));
        assert_eq!(Axis::X.to_string(), "x");
    }
}
