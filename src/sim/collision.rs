//! Contact detection for the ball against blocks and the paddle
//!
//! Every test here is pure: it only reports which axes of travel must be
//! mirrored. Block damage and heading changes are applied by the caller.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Side, side_of_line};

/// Axes of travel that must be mirrored this tick
///
/// Flags only ever go from `false` to `true`, so combining contacts from any
/// number of sources is order independent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reflection {
    pub x_reversed: bool,
    pub y_reversed: bool,
}

impl Reflection {
    pub const NONE: Self = Self {
        x_reversed: false,
        y_reversed: false,
    };

    pub fn any(&self) -> bool {
        self.x_reversed || self.y_reversed
    }

    /// Fold a block contact into the per-axis flags
    pub fn absorb(&mut self, contact: BlockContact) {
        self.x_reversed |= contact.hit_horizontal;
        self.y_reversed |= contact.hit_vertical;
    }
}

impl std::ops::BitOr for Reflection {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            x_reversed: self.x_reversed || rhs.x_reversed,
            y_reversed: self.y_reversed || rhs.y_reversed,
        }
    }
}

impl std::ops::BitOrAssign for Reflection {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

/// Result of testing the ball against one block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContact {
    /// Ball struck a left/right side: mirror X
    pub hit_horizontal: bool,
    /// Ball struck the top/bottom: mirror Y
    pub hit_vertical: bool,
}

impl BlockContact {
    pub const NONE: Self = Self {
        hit_horizontal: false,
        hit_vertical: false,
    };
    pub const SIDE: Self = Self {
        hit_horizontal: true,
        hit_vertical: false,
    };
    pub const FACE: Self = Self {
        hit_horizontal: false,
        hit_vertical: true,
    };
    pub const CORNER: Self = Self {
        hit_horizontal: true,
        hit_vertical: true,
    };

    #[inline]
    pub fn is_hit(&self) -> bool {
        self.hit_horizontal || self.hit_vertical
    }
}

/// Classify a ball moving `prev -> next` against a block rectangle.
///
/// The block is grown by `radius` on every side; a contact exists when `next`
/// lands strictly inside the grown rectangle. The approach direction is then
/// read from `prev` against the unexpanded block:
/// - `prev.x` within the horizontal span: came from above/below
/// - `prev.y` within the vertical span: came from a side
/// - otherwise (or exactly on a span boundary): corner
pub fn classify_block_contact(block: &Rect, prev: DVec2, next: DVec2, radius: f64) -> BlockContact {
    if !block.expand(radius).contains(next) {
        return BlockContact::NONE;
    }

    if block.on_vertical_edge(prev.x) || block.on_horizontal_edge(prev.y) {
        return BlockContact::CORNER;
    }

    if block.spans_x(prev.x) {
        BlockContact::FACE
    } else if block.spans_y(prev.y) {
        BlockContact::SIDE
    } else {
        BlockContact::CORNER
    }
}

/// One edge of an axis-aligned block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    /// Directed segment running clockwise on screen, so the block interior is
    /// always on the [`Side::Left`] of it
    fn segment(self, rect: &Rect) -> (DVec2, DVec2) {
        match self {
            Edge::Top => (rect.top_left(), rect.top_right()),
            Edge::Right => (rect.top_right(), rect.bottom_right()),
            Edge::Bottom => (rect.bottom_right(), rect.bottom_left()),
            Edge::Left => (rect.bottom_left(), rect.top_left()),
        }
    }

    /// Unit normal pointing into the block
    fn inward_normal(self) -> DVec2 {
        match self {
            Edge::Top => DVec2::Y,
            Edge::Right => DVec2::NEG_X,
            Edge::Bottom => DVec2::NEG_Y,
            Edge::Left => DVec2::X,
        }
    }
}

/// Set of touched block edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSet {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl EdgeSet {
    pub fn insert(&mut self, edge: Edge) {
        match edge {
            Edge::Left => self.left = true,
            Edge::Top => self.top = true,
            Edge::Right => self.right = true,
            Edge::Bottom => self.bottom = true,
        }
    }

    pub fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.left || self.top || self.right || self.bottom)
    }

    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        Edge::ALL.into_iter().filter(|e| self.contains(*e))
    }
}

/// Edges whose interior half-plane the ball has crossed into.
///
/// For each edge the probe point is the ball centre pushed `radius` along
/// that edge's inward normal (the part of the ball leading into the block).
pub fn border_touch_sides(block: &Rect, point: DVec2, radius: f64) -> EdgeSet {
    let mut touched = EdgeSet::default();
    for edge in Edge::ALL {
        let (a, b) = edge.segment(block);
        let probe = point + edge.inward_normal() * radius;
        if side_of_line(a, b, probe) == Side::Left {
            touched.insert(edge);
        }
    }
    touched
}

/// Paddle contact: the ball's next position dips below the paddle line while
/// horizontally inside the paddle's extent around `pointer_x`.
pub fn paddle_contact(
    next: DVec2,
    radius: f64,
    paddle_y: f64,
    paddle_width: f64,
    pointer_x: f64,
) -> bool {
    let half = paddle_width / 2.0;
    next.y + radius > paddle_y && (pointer_x - half..=pointer_x + half).contains(&next.x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Rect {
        // 50x50 block at (140, 160)
        Rect::new(DVec2::new(140.0, 160.0), 50.0, 50.0)
    }

    #[test]
    fn test_contact_from_above() {
        let contact = classify_block_contact(
            &block(),
            DVec2::new(160.0, 152.0),
            DVec2::new(160.0, 158.0),
            3.0,
        );
        assert_eq!(contact, BlockContact::FACE);
    }

    #[test]
    fn test_contact_from_side() {
        let contact = classify_block_contact(
            &block(),
            DVec2::new(133.0, 180.0),
            DVec2::new(138.0, 180.0),
            3.0,
        );
        assert_eq!(contact, BlockContact::SIDE);
    }

    #[test]
    fn test_contact_at_corner() {
        // Neither prev.x nor prev.y within the block spans
        let contact = classify_block_contact(
            &block(),
            DVec2::new(134.0, 154.0),
            DVec2::new(138.0, 158.0),
            3.0,
        );
        assert_eq!(contact, BlockContact::CORNER);
    }

    #[test]
    fn test_no_contact_outside_expanded_rect() {
        let contact = classify_block_contact(
            &block(),
            DVec2::new(160.0, 150.0),
            DVec2::new(160.0, 156.0),
            3.0,
        );
        assert!(!contact.is_hit());
    }

    #[test]
    fn test_touching_expanded_rect_is_not_contact() {
        // next.y + radius == block top exactly
        let contact = classify_block_contact(
            &block(),
            DVec2::new(160.0, 150.0),
            DVec2::new(160.0, 157.0),
            3.0,
        );
        assert!(!contact.is_hit());
    }

    #[test]
    fn test_prev_on_span_boundary_counts_as_corner() {
        // prev.x exactly on the left edge, prev.y within the vertical span
        let contact = classify_block_contact(
            &block(),
            DVec2::new(140.0, 180.0),
            DVec2::new(141.0, 180.0),
            3.0,
        );
        assert_eq!(contact, BlockContact::CORNER);

        // prev.y exactly on the top edge, prev.x within the horizontal span
        let contact = classify_block_contact(
            &block(),
            DVec2::new(160.0, 160.0),
            DVec2::new(160.0, 161.0),
            3.0,
        );
        assert_eq!(contact, BlockContact::CORNER);
    }

    #[test]
    fn test_prev_inside_block_prefers_vertical() {
        let contact = classify_block_contact(
            &block(),
            DVec2::new(160.0, 180.0),
            DVec2::new(161.0, 181.0),
            3.0,
        );
        assert_eq!(contact, BlockContact::FACE);
    }

    #[test]
    fn test_border_touch_sides_above_block() {
        // Centre above the block and horizontally inside: left/right/bottom
        // half-planes already contain the probe, top does not yet
        let sides = border_touch_sides(&block(), DVec2::new(160.0, 150.0), 3.0);
        assert!(!sides.contains(Edge::Top));
        assert!(sides.contains(Edge::Left));
        assert!(sides.contains(Edge::Right));
        assert!(sides.contains(Edge::Bottom));

        // Ball overlapping the top edge: now all four
        let sides = border_touch_sides(&block(), DVec2::new(160.0, 158.0), 3.0);
        assert_eq!(sides.iter().count(), 4);
    }

    #[test]
    fn test_border_touch_sides_probe_on_edge_is_not_touch() {
        // Probe lands exactly on the left edge line
        let sides = border_touch_sides(&block(), DVec2::new(137.0, 180.0), 3.0);
        assert!(!sides.contains(Edge::Left));
        assert!(sides.contains(Edge::Top));
    }

    #[test]
    fn test_border_touch_sides_far_right() {
        let sides = border_touch_sides(&block(), DVec2::new(230.0, 180.0), 3.0);
        assert!(!sides.contains(Edge::Right));
        assert!(sides.contains(Edge::Left));
        assert!(!sides.is_empty());
    }

    #[test]
    fn test_paddle_contact() {
        // Pointer at 120, width 40, ball just below the paddle line
        assert!(paddle_contact(DVec2::new(125.0, 321.0), 2.0, 320.0, 40.0, 120.0));
        // Outside horizontal extent
        assert!(!paddle_contact(DVec2::new(141.0, 321.0), 2.0, 320.0, 40.0, 120.0));
        // Extent edges are inclusive
        assert!(paddle_contact(DVec2::new(100.0, 321.0), 2.0, 320.0, 40.0, 120.0));
        // Still above the paddle line
        assert!(!paddle_contact(DVec2::new(125.0, 310.0), 2.0, 320.0, 40.0, 120.0));
    }

    #[test]
    fn test_reflection_combines_by_or() {
        let mut r = Reflection {
            x_reversed: true,
            y_reversed: false,
        };
        r.absorb(BlockContact::FACE);
        assert_eq!(
            r,
            Reflection {
                x_reversed: true,
                y_reversed: true
            }
        );
        r |= Reflection::NONE;
        assert!(r.x_reversed && r.y_reversed);
    }
}
