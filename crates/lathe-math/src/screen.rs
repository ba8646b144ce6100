//! Screen-to-NDC coordinate conversion.

use glam::DVec2;

/// Convert a screen-space x coordinate to normalized device coordinates.
pub fn ndc_x(x: f64, width: f64) -> f64 {
    2.0 * x / width - 1.0
}

/// Convert a screen-space y coordinate to normalized device coordinates.
/// Screen y grows downward, NDC y grows upward.
pub fn ndc_y(y: f64, height: f64) -> f64 {
    1.0 - 2.0 * y / height
}

/// Convert a screen-space pointer position to NDC.
pub fn screen_to_ndc(x: f64, y: f64, width: f64, height: f64) -> DVec2 {
    DVec2::new(ndc_x(x, width), ndc_y(y, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        let (w, h) = (512.0, 512.0);
        assert_eq!(screen_to_ndc(0.0, 0.0, w, h), DVec2::new(-1.0, 1.0));
        assert_eq!(screen_to_ndc(w, h, w, h), DVec2::new(1.0, -1.0));
    }

    #[test]
    fn test_center() {
        let p = screen_to_ndc(256.0, 256.0, 512.0, 512.0);
        assert!(p.length() < 1e-12);
    }

    #[test]
    fn test_non_square_viewport() {
        let p = screen_to_ndc(400.0, 150.0, 800.0, 600.0);
        assert!((p.x - 0.0).abs() < 1e-12);
        assert!((p.y - 0.5).abs() < 1e-12);
    }
}
