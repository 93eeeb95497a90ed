use crate::orbit::catalog::OrbitRing;

struct RingState {
    rotation_deg: f64,
    period_secs: f64,
}

/// Advances one rotation angle per ring. The caller feeds it measured frame
/// deltas, so the apparent speed is the same at any refresh rate. While paused
/// the angles hold exactly where they were.
pub struct OrbitAnimator {
    rings: [RingState; 3],
    paused: bool,
}

impl OrbitAnimator {
    pub fn new() -> Self {
        OrbitAnimator {
            rings: OrbitRing::ALL.map(|ring| RingState {
                rotation_deg: 0.0,
                period_secs: ring.period_secs(),
            }),
            paused: false,
        }
    }

    /// Advance every ring by `(360 / period) * dt` degrees, wrapping at 360.
    /// Returns whether anything moved, so callers can skip redundant renders.
    pub fn tick(&mut self, dt_secs: f64) -> bool {
        if self.paused || dt_secs == 0.0 {
            return false;
        }
        for ring in &mut self.rings {
            let step = 360.0 / ring.period_secs * dt_secs;
            ring.rotation_deg = (ring.rotation_deg + step).rem_euclid(360.0);
        }
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn rotation(&self, ring: OrbitRing) -> f64 {
        self.rings[ring.index()].rotation_deg
    }

    pub fn rotations(&self) -> [f64; 3] {
        [
            self.rings[0].rotation_deg,
            self.rings[1].rotation_deg,
            self.rings[2].rotation_deg,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn tick_advances_by_360_over_period() {
        let mut animator = OrbitAnimator::new();
        assert!(animator.tick(1.0));
        // Inner ring turns in 30 s, middle in 40 s.
        assert!((animator.rotation(OrbitRing::Inner) - 12.0).abs() < EPS);
        assert!((animator.rotation(OrbitRing::Middle) - 9.0).abs() < EPS);
        assert!((animator.rotation(OrbitRing::Outer) - 7.2).abs() < EPS);
    }

    #[test]
    fn rotation_wraps_at_360() {
        let mut animator = OrbitAnimator::new();
        animator.tick(31.0);
        let angle = animator.rotation(OrbitRing::Inner);
        assert!((0.0..360.0).contains(&angle));
        assert!((angle - 12.0).abs() < 1e-6);
    }

    #[test]
    fn paused_tick_is_a_no_op() {
        let mut animator = OrbitAnimator::new();
        animator.tick(2.5);
        let frozen = animator.rotations();

        animator.set_paused(true);
        assert!(!animator.tick(10.0));
        assert_eq!(animator.rotations(), frozen);

        // Resuming continues from the frozen angles.
        animator.set_paused(false);
        animator.tick(1.0);
        assert!((animator.rotation(OrbitRing::Inner) - (frozen[0] + 12.0)).abs() < EPS);
    }

    #[test]
    fn rings_advance_independently() {
        let mut animator = OrbitAnimator::new();
        animator.tick(5.0);
        let [inner, middle, outer] = animator.rotations();
        assert!(inner > middle && middle > outer);
    }

    #[test]
    fn zero_delta_reports_no_movement() {
        let mut animator = OrbitAnimator::new();
        assert!(!animator.tick(0.0));
        assert_eq!(animator.rotations(), [0.0, 0.0, 0.0]);
    }
}
