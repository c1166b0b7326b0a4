//! Tests for generation defaults and runtime limits

#[cfg(test)]
mod tests {
    use pixelsprite::io::configuration::{
        DEFAULT_BRIGHTNESS_NOISE, DEFAULT_COLOR_VARIATIONS, DEFAULT_COUNT,
        DEFAULT_EDGE_BRIGHTNESS, DEFAULT_OUTPUT_STEM, DEFAULT_SATURATION, DEFAULT_SCALE,
        DEFAULT_SHEET_COLUMNS, DEFAULT_SHEET_PADDING, DUMP_CELL_WIDTH, MAX_BATCH_COUNT,
        MAX_IMAGE_DIMENSION, MAX_MASK_DIMENSION, MAX_SCALE, MAX_SHEET_PADDING, OUTPUT_EXTENSION,
    };

    // Tests colorization defaults
    // Verified by changing constant values
    #[test]
    fn test_colorization_defaults() {
        assert!((DEFAULT_EDGE_BRIGHTNESS - 0.3).abs() < f64::EPSILON);
        assert!((DEFAULT_COLOR_VARIATIONS - 0.2).abs() < f64::EPSILON);
        assert!((DEFAULT_BRIGHTNESS_NOISE - 0.3).abs() < f64::EPSILON);
        assert!((DEFAULT_SATURATION - 0.5).abs() < f64::EPSILON);
    }

    // Tests dump column width fits the widest code
    // Verified by reducing width to 2
    #[test]
    fn test_dump_cell_width() {
        assert_eq!(DUMP_CELL_WIDTH, 3);
    }

    // Tests defaults sit inside their limits
    // Verified by raising the default scale above the maximum
    #[test]
    fn test_defaults_within_limits() {
        assert!((1..=MAX_SCALE).contains(&DEFAULT_SCALE));
        assert!((1..=MAX_BATCH_COUNT).contains(&DEFAULT_COUNT));
        assert!(DEFAULT_SHEET_COLUMNS >= 1);
        assert!(MAX_MASK_DIMENSION >= 12);
        assert!(DEFAULT_SHEET_PADDING <= MAX_SHEET_PADDING);
    }

    // Tests the largest single sprite fits the image size limit
    // Verified by lowering the image limit below mask times scale
    #[test]
    fn test_largest_sprite_fits_image_limit() {
        let largest = u32::try_from(MAX_MASK_DIMENSION).unwrap() * MAX_SCALE;

        assert!(largest <= MAX_IMAGE_DIMENSION);
        assert!(MAX_SHEET_PADDING < MAX_IMAGE_DIMENSION);
    }

    // Tests output naming constants
    // Verified by changing output extension
    #[test]
    fn test_output_naming() {
        assert_eq!(DEFAULT_OUTPUT_STEM, "sprite");
        assert_eq!(OUTPUT_EXTENSION, "png");
    }
}
