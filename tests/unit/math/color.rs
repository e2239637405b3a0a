//! Tests for normalized colors and color distance

#[cfg(test)]
mod tests {
    use imagescatter::math::Color;

    // Tests 8-bit channels normalize to [0, 1]
    // Verified by dividing by 256 instead of 255
    #[test]
    fn test_from_rgb8_normalizes() {
        let color = Color::from_rgb8([255, 0, 51]);
        assert!((color.r - 1.0).abs() < f32::EPSILON);
        assert!(color.g.abs() < f32::EPSILON);
        assert!((color.b - 0.2).abs() < 1e-6);
    }

    // Tests conversion back to bytes is lossless for 8-bit input
    // Verified by truncating instead of rounding
    #[test]
    fn test_rgba8_round_trip() {
        for rgb in [[12, 200, 255], [0, 0, 0], [1, 128, 254]] {
            let [r, g, b] = rgb;
            assert_eq!(Color::from_rgb8(rgb).to_rgba8(), [r, g, b, 255]);
        }
    }

    // Tests out-of-range channels saturate
    // Verified by removing the clamp
    #[test]
    fn test_to_rgba8_saturates() {
        assert_eq!(Color::new(2.0, -1.0, 0.5).to_rgba8(), [255, 0, 128, 255]);
    }

    // Tests squared distance sums all three channels
    // Verified by dropping the blue term
    #[test]
    fn test_distance_squared() {
        let red = Color::new(1.0, 0.0, 0.0);
        let green = Color::new(0.0, 1.0, 0.0);
        let white = Color::new(1.0, 1.0, 1.0);
        let black = Color::default();

        assert!((red.distance_squared(green) - 2.0).abs() < f32::EPSILON);
        assert!((white.distance_squared(black) - 3.0).abs() < f32::EPSILON);
        assert!(red.distance_squared(red).abs() < f32::EPSILON);
    }
}
