//! Edge-aware placement for the technology popover.
//!
//! Given where the hovered icon sits inside the widget container, pick one of
//! four sides for the popover so that it stays inside the container and, when
//! the container leaves room for it, clear of the center logo.

pub const POPOVER_WIDTH: f64 = 320.0;
pub const POPOVER_HEIGHT: f64 = 280.0;
/// Spacing between the icon and the popover edge facing it.
pub const POPOVER_GAP: f64 = 12.0;
/// Minimum distance kept between the popover and the container edge.
pub const EDGE_MARGIN: f64 = 10.0;
/// Side length of the square around the container center the popover should
/// stay out of (the logo block plus breathing room).
pub const LOGO_CLEARANCE: f64 = 120.0;

const FIT_EPS: f64 = 1e-6;

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    Left,
    Right,
    Top,
    Bottom,
}

impl Placement {
    /// CSS modifier used by the popover card for its arrow and slide-in.
    pub fn as_class(self) -> &'static str {
        match self {
            Placement::Left => "left",
            Placement::Right => "right",
            Placement::Top => "top",
            Placement::Bottom => "bottom",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PopoverLayout {
    pub x: f64,
    pub y: f64,
    pub placement: Placement,
}

// Lower bound wins when the container is too small for both bounds to hold.
fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    lo.max(value.min(hi))
}

/// Angle from the container center to the icon center, degrees in `[0, 360)`,
/// 0° pointing right and increasing clockwise (screen y grows down). `None`
/// when the icon sits exactly on the center.
fn icon_angle(icon: &Rect, container_width: f64, container_height: f64) -> Option<f64> {
    let dx = icon.center_x() - container_width / 2.0;
    let dy = icon.center_y() - container_height / 2.0;
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    Some(dy.atan2(dx).to_degrees().rem_euclid(360.0))
}

fn quadrant(angle: f64) -> Placement {
    if !(45.0..315.0).contains(&angle) {
        Placement::Right
    } else if angle < 135.0 {
        Placement::Bottom
    } else if angle < 225.0 {
        Placement::Left
    } else {
        Placement::Top
    }
}

/// Candidate order: the quadrant's own side first, then the perpendicular
/// nearer the icon, then the farther one, then the opposite side. An icon dead
/// on the center has no angle and defaults to starting at `Right`.
fn candidate_order(icon: &Rect, container_width: f64, container_height: f64) -> [Placement; 4] {
    let Some(angle) = icon_angle(icon, container_width, container_height) else {
        return [
            Placement::Right,
            Placement::Left,
            Placement::Top,
            Placement::Bottom,
        ];
    };

    let dx = icon.center_x() - container_width / 2.0;
    let dy = icon.center_y() - container_height / 2.0;

    match quadrant(angle) {
        primary @ (Placement::Right | Placement::Left) => {
            let (near, far) = if dy > 0.0 {
                (Placement::Bottom, Placement::Top)
            } else {
                (Placement::Top, Placement::Bottom)
            };
            let opposite = if primary == Placement::Right {
                Placement::Left
            } else {
                Placement::Right
            };
            [primary, near, far, opposite]
        }
        primary => {
            let (near, far) = if dx > 0.0 {
                (Placement::Right, Placement::Left)
            } else {
                (Placement::Left, Placement::Right)
            };
            let opposite = if primary == Placement::Bottom {
                Placement::Top
            } else {
                Placement::Bottom
            };
            [primary, near, far, opposite]
        }
    }
}

/// Top-left corner for one candidate placement: offset from the icon by the
/// gap along the primary axis, centered on the icon and clamped into the
/// margin frame along the other axis.
fn candidate_origin(
    placement: Placement,
    icon: &Rect,
    container_width: f64,
    container_height: f64,
) -> (f64, f64) {
    let centered_y = clamp(
        icon.center_y() - POPOVER_HEIGHT / 2.0,
        EDGE_MARGIN,
        container_height - POPOVER_HEIGHT - EDGE_MARGIN,
    );
    let centered_x = clamp(
        icon.center_x() - POPOVER_WIDTH / 2.0,
        EDGE_MARGIN,
        container_width - POPOVER_WIDTH - EDGE_MARGIN,
    );
    match placement {
        Placement::Right => (icon.right() + POPOVER_GAP, centered_y),
        Placement::Left => (icon.x - POPOVER_GAP - POPOVER_WIDTH, centered_y),
        Placement::Top => (centered_x, icon.y - POPOVER_GAP - POPOVER_HEIGHT),
        Placement::Bottom => (centered_x, icon.bottom() + POPOVER_GAP),
    }
}

fn fits_frame(rect: &Rect, container_width: f64, container_height: f64) -> bool {
    rect.x >= EDGE_MARGIN - FIT_EPS
        && rect.y >= EDGE_MARGIN - FIT_EPS
        && rect.right() <= container_width - EDGE_MARGIN + FIT_EPS
        && rect.bottom() <= container_height - EDGE_MARGIN + FIT_EPS
}

/// Pick where the popover for `icon` goes inside a `container_width` ×
/// `container_height` container. Coordinates in the result are container-local.
///
/// Acceptance runs in two passes over the candidate order: first side that fits
/// the margin frame and clears the logo square, else the first side that fits
/// the frame at all, else a right placement clamped into the frame. The last
/// case only happens when the container cannot hold the popover anywhere and is
/// a graceful degradation, not an error.
pub fn place_popover(icon: &Rect, container_width: f64, container_height: f64) -> PopoverLayout {
    let logo_zone = Rect::new(
        (container_width - LOGO_CLEARANCE) / 2.0,
        (container_height - LOGO_CLEARANCE) / 2.0,
        LOGO_CLEARANCE,
        LOGO_CLEARANCE,
    );

    let mut first_fitting = None;
    for placement in candidate_order(icon, container_width, container_height) {
        let (x, y) = candidate_origin(placement, icon, container_width, container_height);
        let rect = Rect::new(x, y, POPOVER_WIDTH, POPOVER_HEIGHT);
        if !fits_frame(&rect, container_width, container_height) {
            continue;
        }
        if !rect.intersects(&logo_zone) {
            return PopoverLayout { x, y, placement };
        }
        if first_fitting.is_none() {
            first_fitting = Some(PopoverLayout { x, y, placement });
        }
    }

    if let Some(layout) = first_fitting {
        return layout;
    }

    let (x, y) = candidate_origin(Placement::Right, icon, container_width, container_height);
    PopoverLayout {
        x: clamp(x, EDGE_MARGIN, container_width - POPOVER_WIDTH - EDGE_MARGIN),
        y: clamp(y, EDGE_MARGIN, container_height - POPOVER_HEIGHT - EDGE_MARGIN),
        placement: Placement::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ICON: f64 = 56.0;

    fn icon_with_center(cx: f64, cy: f64) -> Rect {
        Rect::new(cx - ICON / 2.0, cy - ICON / 2.0, ICON, ICON)
    }

    fn assert_in_frame(layout: &PopoverLayout, cw: f64, ch: f64) {
        assert!(layout.x >= EDGE_MARGIN - FIT_EPS, "x {} below margin", layout.x);
        assert!(layout.y >= EDGE_MARGIN - FIT_EPS, "y {} below margin", layout.y);
        assert!(
            layout.x + POPOVER_WIDTH <= cw - EDGE_MARGIN + FIT_EPS,
            "right edge {} past {}",
            layout.x + POPOVER_WIDTH,
            cw - EDGE_MARGIN
        );
        assert!(
            layout.y + POPOVER_HEIGHT <= ch - EDGE_MARGIN + FIT_EPS,
            "bottom edge {} past {}",
            layout.y + POPOVER_HEIGHT,
            ch - EDGE_MARGIN
        );
    }

    #[test]
    fn same_inputs_same_layout() {
        let icon = Rect::new(137.0, 247.0, ICON, ICON);
        let a = place_popover(&icon, 550.0, 550.0);
        let b = place_popover(&icon, 550.0, 550.0);
        assert_eq!(a, b);
    }

    #[test]
    fn icon_right_of_center_gets_right_placement() {
        // Wide enough that the preferred side both fits and clears the logo.
        let icon = Rect::new(450.0, 322.0, ICON, ICON);
        let layout = place_popover(&icon, 900.0, 700.0);
        assert_eq!(layout.placement, Placement::Right);
        assert_eq!(layout.x, icon.right() + POPOVER_GAP);
        assert_eq!(layout.y, icon.center_y() - POPOVER_HEIGHT / 2.0);
        assert_in_frame(&layout, 900.0, 700.0);
    }

    #[test]
    fn lower_left_icon_in_default_container_drops_below() {
        // Outer-ring icon at 200°. Left and top run off the container, so the
        // order falls through to bottom.
        let angle = 200f64.to_radians();
        let icon = icon_with_center(275.0 + 240.0 * angle.cos(), 275.0 + 240.0 * angle.sin());
        let layout = place_popover(&icon, 550.0, 550.0);
        assert_eq!(layout.placement, Placement::Bottom);
        assert_in_frame(&layout, 550.0, 550.0);
    }

    #[test]
    fn right_side_icon_in_default_container_flips_left() {
        // Inner-ring icon at 0°: no room to the right of it, the popover takes
        // the free space on the other side of the container.
        let icon = icon_with_center(275.0 + 110.0, 275.0);
        let layout = place_popover(&icon, 550.0, 550.0);
        assert_eq!(layout.placement, Placement::Left);
        assert_in_frame(&layout, 550.0, 550.0);
    }

    #[test]
    fn boundary_45_degrees_is_bottom() {
        let icon = icon_with_center(700.0, 700.0);
        let layout = place_popover(&icon, 1200.0, 1200.0);
        assert_eq!(layout.placement, Placement::Bottom);
    }

    #[test]
    fn boundary_315_degrees_is_right() {
        let icon = icon_with_center(700.0, 500.0);
        let layout = place_popover(&icon, 1200.0, 1200.0);
        assert_eq!(layout.placement, Placement::Right);
    }

    #[test]
    fn icon_straight_up_prefers_top() {
        let icon = icon_with_center(600.0, 600.0 - 240.0);
        let layout = place_popover(&icon, 1200.0, 1200.0);
        assert_eq!(layout.placement, Placement::Top);
    }

    #[test]
    fn icon_dead_center_defaults_right() {
        let icon = icon_with_center(600.0, 600.0);
        let layout = place_popover(&icon, 1200.0, 1200.0);
        assert_eq!(layout.placement, Placement::Right);
        assert_eq!(layout.x, icon.right() + POPOVER_GAP);
    }

    #[test]
    fn preferred_side_clears_the_logo_when_there_is_room() {
        let icon = icon_with_center(600.0, 600.0 + 240.0);
        let layout = place_popover(&icon, 1200.0, 1200.0);
        let rect = Rect::new(layout.x, layout.y, POPOVER_WIDTH, POPOVER_HEIGHT);
        let logo = Rect::new(540.0, 540.0, LOGO_CLEARANCE, LOGO_CLEARANCE);
        assert!(!rect.intersects(&logo));
        assert_in_frame(&layout, 1200.0, 1200.0);
    }

    #[test]
    fn placement_stays_inside_margin_frame() {
        // Any icon inside a container that can hold the popover at all yields
        // a layout fully inside the margin frame. The smallest case is exactly
        // popover + 2 * margin.
        let containers = [
            (340.0, 300.0),
            (550.0, 550.0),
            (660.0, 660.0),
            (900.0, 700.0),
            (1400.0, 420.0),
        ];
        for (cw, ch) in containers {
            for xi in 0..=6 {
                for yi in 0..=6 {
                    let x = (cw - ICON) * xi as f64 / 6.0;
                    let y = (ch - ICON) * yi as f64 / 6.0;
                    let icon = Rect::new(x, y, ICON, ICON);
                    let layout = place_popover(&icon, cw, ch);
                    assert_in_frame(&layout, cw, ch);
                }
            }
        }
    }

    #[test]
    fn degenerate_container_clamps_a_right_placement() {
        let icon = Rect::new(40.0, 30.0, ICON, ICON);
        let layout = place_popover(&icon, 200.0, 150.0);
        assert_eq!(layout.placement, Placement::Right);
        // Nothing fits; the clamp pins the popover to the top-left margin.
        assert_eq!((layout.x, layout.y), (EDGE_MARGIN, EDGE_MARGIN));
    }

    #[test]
    fn corner_icons_stay_in_frame() {
        let corners = [
            (0.0, 0.0),
            (550.0 - ICON, 0.0),
            (0.0, 550.0 - ICON),
            (550.0 - ICON, 550.0 - ICON),
        ];
        for (x, y) in corners {
            let icon = Rect::new(x, y, ICON, ICON);
            let layout = place_popover(&icon, 550.0, 550.0);
            assert_in_frame(&layout, 550.0, 550.0);
        }
    }
}
