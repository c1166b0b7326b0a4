//! Tests for option defaults and tint handling

#[cfg(test)]
mod tests {
    use pixelsprite::algorithm::options::{Options, Tint};
    use pixelsprite::algorithm::sampling::SampleCallback;
    use pixelsprite::math::color::Rgb;

    // Tests every field of the default table
    // Verified by changing a default constant
    #[test]
    fn test_default_table() {
        let options = Options::default();

        assert!(!options.colored);
        assert!((options.edge_brightness - 0.3).abs() < f64::EPSILON);
        assert!((options.color_variations - 0.2).abs() < f64::EPSILON);
        assert!((options.brightness_noise - 0.3).abs() < f64::EPSILON);
        assert!((options.saturation - 0.5).abs() < f64::EPSILON);
        assert_eq!(options.seed, None);
        assert_eq!(options.tint, None);
        assert!(matches!(options.sampler, SampleCallback::Default));
    }

    // Tests overriding one field keeps the other defaults
    // Verified by resetting unspecified fields to zero
    #[test]
    fn test_field_by_field_override() {
        let options = Options {
            saturation: 0.9,
            ..Options::default()
        };

        assert!((options.saturation - 0.9).abs() < f64::EPSILON);
        assert!((options.edge_brightness - 0.3).abs() < f64::EPSILON);
        assert!(!options.colored);
    }

    // Tests the tint mask is identity without a tint
    // Verified by defaulting the mask to black
    #[test]
    fn test_tint_mask_identity() {
        assert_eq!(Options::default().tint_mask(), Rgb::WHITE);
    }

    // Tests a supplied tint is used whole
    // Verified by merging missing channels with 1.0
    #[test]
    fn test_tint_replaces_whole() {
        let options = Options {
            tint: Some(Tint::new(0.2, 0.0, 0.7)),
            ..Options::default()
        };

        assert_eq!(options.tint_mask(), Rgb::new(0.2, 0.0, 0.7));
    }

    // Tests out-of-range values are accepted unchanged
    // Verified by clamping during construction
    #[test]
    fn test_out_of_range_values_accepted() {
        let options = Options {
            edge_brightness: 4.0,
            saturation: -1.0,
            ..Options::default()
        };

        assert!((options.edge_brightness - 4.0).abs() < f64::EPSILON);
        assert!((options.saturation + 1.0).abs() < f64::EPSILON);
    }
}
