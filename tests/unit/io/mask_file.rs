//! Tests for loading text masks from disk

#[cfg(test)]
mod tests {
    use pixelsprite::SpriteError;
    use pixelsprite::io::mask_file::load_mask;
    use pixelsprite::spatial::StructuralCode;
    use std::fs;

    // Tests a commented mask file loads with its mirror flags
    // Verified by ignoring the mirror arguments
    #[test]
    fn test_load_mask_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hull.txt");
        fs::write(&path, "# hull\n0 1 2\n\n-1 -1 0\n").unwrap();

        let mask = load_mask(&path, true, false).unwrap();

        assert_eq!((mask.width(), mask.height()), (3, 2));
        assert!(mask.mirror_x());
        assert!(!mask.mirror_y());
        assert_eq!(mask.data().first(), Some(&StructuralCode::Empty));
        assert_eq!(mask.data().last(), Some(&StructuralCode::Empty));
    }

    // Tests a missing file reports the read operation and path
    // Verified by mapping to a parse error
    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let result = load_mask(&path, false, false);

        let Err(SpriteError::FileSystem {
            path: failed,
            operation,
            ..
        }) = &result
        else {
            panic!("expected a file system error, got {result:?}");
        };
        assert_eq!(failed, &path);
        assert_eq!(*operation, "read mask");
    }

    // Tests parse failures pass through with their line number
    // Verified by reporting the first line for every failure
    #[test]
    fn test_load_invalid_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, "0 1\n0 5\n").unwrap();

        let result = load_mask(&path, false, false);

        assert!(matches!(result, Err(SpriteError::MaskParse { line: 2, .. })));
    }

    // Tests oversized masks are rejected
    // Verified by checking only the width
    #[test]
    fn test_load_oversized_mask() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tall.txt");
        fs::write(&path, "1\n".repeat(65)).unwrap();

        let result = load_mask(&path, false, false);

        assert!(matches!(
            result,
            Err(SpriteError::InvalidParameter {
                parameter: "mask",
                ..
            })
        ));
    }
}
