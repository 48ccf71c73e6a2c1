//! Geometric feature primitives for gesture classification
//!
//! Distances and joint angles computed from normalized landmark
//! coordinates. The classifier thresholds are tuned against the exact unit
//! conventions here, so the scale factor and degenerate-case fallback must
//! not change.

use crate::capture::types::Landmark;

/// Multiplier applied to raw coordinate distances.
///
/// Normalized [0, 1] coordinates map to a [0, 100] working range; all
/// distance thresholds downstream assume this scale.
pub const DISTANCE_SCALE: f64 = 100.0;

/// Scaled Euclidean distance between two landmarks.
///
/// NaN coordinates propagate into the result rather than being coerced.
pub fn get_distance(p1: Landmark, p2: Landmark) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    (dx * dx + dy * dy).sqrt() * DISTANCE_SCALE
}

/// Angle in degrees at vertex `b` between rays `b→a` and `b→c`.
///
/// Computed as the difference of the atan2 headings of the two rays,
/// folded into [0, 180] so the result is unsigned. A zero-length ray
/// (`a == b` or `c == b`) has no defined heading; the fallback is 0.0 so
/// callers always receive a numeric value.
pub fn get_angle(a: Landmark, b: Landmark, c: Landmark) -> f64 {
    if a == b || c == b {
        return 0.0;
    }

    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Landmark::new(0.37, 0.81);
        assert_eq!(get_distance(p, p), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let p1 = Landmark::new(0.1, 0.2);
        let p2 = Landmark::new(0.7, 0.5);
        assert_eq!(get_distance(p1, p2), get_distance(p2, p1));
    }

    #[test]
    fn test_distance_scale() {
        // 0.3-0.4-0.5 right triangle: raw distance 0.5 scales to 50
        let p1 = Landmark::new(0.0, 0.0);
        let p2 = Landmark::new(0.3, 0.4);
        assert!((get_distance(p1, p2) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_propagates_nan() {
        let p1 = Landmark::new(f64::NAN, 0.0);
        let p2 = Landmark::new(0.5, 0.5);
        assert!(get_distance(p1, p2).is_nan());
    }

    #[test]
    fn test_angle_straight_line() {
        let a = Landmark::new(0.0, 0.0);
        let b = Landmark::new(0.5, 0.0);
        let c = Landmark::new(1.0, 0.0);
        assert!((get_angle(a, b, c) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_right_angle() {
        let a = Landmark::new(0.0, 1.0);
        let b = Landmark::new(0.0, 0.0);
        let c = Landmark::new(1.0, 0.0);
        assert!((get_angle(a, b, c) - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_is_symmetric_about_vertex() {
        let a = Landmark::new(0.2, 0.9);
        let b = Landmark::new(0.5, 0.5);
        let c = Landmark::new(0.8, 0.3);
        assert!((get_angle(a, b, c) - get_angle(c, b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_angle_reflex_folds_below_180() {
        // Ray headings of -170° and +170°: the raw heading difference is
        // 340°, which must fold to the true 20° separation
        let b = Landmark::new(0.0, 0.0);
        let a = Landmark::new((-170.0f64).to_radians().cos(), (-170.0f64).to_radians().sin());
        let c = Landmark::new(170.0f64.to_radians().cos(), 170.0f64.to_radians().sin());
        let angle = get_angle(a, b, c);
        assert!((angle - 20.0).abs() < 1e-9, "expected 20°, got {}", angle);
    }

    #[test]
    fn test_angle_stays_in_range() {
        let vertex = Landmark::new(0.5, 0.5);
        for i in 0..12 {
            for j in 0..12 {
                let t1 = f64::from(i) * std::f64::consts::TAU / 12.0;
                let t2 = f64::from(j) * std::f64::consts::TAU / 12.0;
                let a = Landmark::new(vertex.x + t1.cos(), vertex.y + t1.sin());
                let c = Landmark::new(vertex.x + t2.cos(), vertex.y + t2.sin());
                let angle = get_angle(a, vertex, c);
                assert!(
                    (0.0..=180.0).contains(&angle),
                    "angle {} out of [0, 180] for rays {} and {}",
                    angle,
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn test_angle_degenerate_ray_falls_back_to_zero() {
        let b = Landmark::new(0.5, 0.5);
        let c = Landmark::new(0.9, 0.9);
        assert_eq!(get_angle(b, b, c), 0.0);
        assert_eq!(get_angle(c, b, b), 0.0);
    }
}
