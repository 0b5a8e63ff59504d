mod tests {
    use strip_animator::color::{Hsl, Rgb, hsl_to_rgb, hue_to_rgb, quantize, rgb_from_u32};

    fn assert_channels(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < 1e-3, "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn test_achromatic_ignores_hue() {
        for h in [0.0, 0.25, 0.5, 0.9] {
            for l in [0.0, 0.3, 0.5, 1.0] {
                assert_eq!(hsl_to_rgb(h, 0.0, l), [l * 255.0, l * 255.0, l * 255.0]);
            }
        }
    }

    #[test]
    fn test_cyan() {
        assert_channels(hsl_to_rgb(0.5, 1.0, 0.5), [0.0, 255.0, 255.0]);
        assert_eq!(Hsl::new(0.5, 1.0, 0.5).to_rgb(), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_primaries() {
        assert_channels(hsl_to_rgb(0.0, 1.0, 0.5), [255.0, 0.0, 0.0]);
        assert_channels(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 255.0, 0.0]);
        assert_channels(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 255.0]);
    }

    #[test]
    fn test_light_cyan() {
        // l >= 0.5 branch: q = l + s - l*s = 1.0, p = 0.8
        assert_channels(hsl_to_rgb(0.5, 1.0, 0.9), [204.0, 255.0, 255.0]);
    }

    #[test]
    fn test_hue_to_rgb_wraps() {
        assert!((hue_to_rgb(0.0, 1.0, -0.75) - hue_to_rgb(0.0, 1.0, 0.25)).abs() < 1e-6);
        assert!((hue_to_rgb(0.0, 1.0, 1.25) - hue_to_rgb(0.0, 1.0, 0.25)).abs() < 1e-6);
        assert_eq!(hue_to_rgb(0.2, 0.8, 0.3), 0.8);
        assert_eq!(hue_to_rgb(0.2, 0.8, 0.9), 0.2);
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize([0.4, 127.5, 254.6]), Rgb::new(0, 128, 255));
        assert_eq!(quantize([-3.0, 300.0, 10.49]), Rgb::new(0, 255, 10));
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0xC8C8C8), Rgb::new(200, 200, 200));
        assert_eq!(rgb_from_u32(0x00FF7F), Rgb::new(0, 255, 127));
    }
}
