//! Ring placement math for the orbiting technology display.
//!
//! Screen coordinates: x grows right, y grows down, so positive angles run
//! clockwise. 0° points right.

/// Offset of the `index`-th of `total` items on a ring of `radius` pixels,
/// relative to the ring's center, after rotating the whole ring by
/// `rotation_deg` degrees.
pub fn orbit_offset(index: usize, total: usize, radius: f64, rotation_deg: f64) -> (f64, f64) {
    let base = 360.0 * index as f64 / total as f64;
    let angle = (base + rotation_deg).to_radians();
    (radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn offset_is_periodic_in_index() {
        for total in 1..=9 {
            for index in 0..total {
                let (x0, y0) = orbit_offset(index, total, 175.0, 23.0);
                let (x1, y1) = orbit_offset(index + total, total, 175.0, 23.0);
                assert!((x0 - x1).abs() < 1e-6, "x differs at {index}/{total}");
                assert!((y0 - y1).abs() < 1e-6, "y differs at {index}/{total}");
            }
        }
    }

    #[test]
    fn offsets_lie_on_the_ring() {
        for total in 1..=10 {
            for index in 0..total {
                for rotation in [0.0, 12.5, 119.0, 359.9] {
                    let (x, y) = orbit_offset(index, total, 240.0, rotation);
                    let dist = (x * x + y * y).sqrt();
                    assert!((dist - 240.0).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn three_items_at_rest() {
        let (x, y) = orbit_offset(0, 3, 110.0, 0.0);
        assert!((x - 110.0).abs() < EPS);
        assert!(y.abs() < EPS);

        let (x, y) = orbit_offset(1, 3, 110.0, 0.0);
        assert!((x - 110.0 * 120f64.to_radians().cos()).abs() < EPS);
        assert!((y - 110.0 * 120f64.to_radians().sin()).abs() < EPS);
    }

    #[test]
    fn rotation_shifts_every_item_equally() {
        let (x, y) = orbit_offset(0, 4, 100.0, 90.0);
        let (x1, y1) = orbit_offset(1, 4, 100.0, 0.0);
        assert!((x - x1).abs() < EPS);
        assert!((y - y1).abs() < EPS);
    }
}
