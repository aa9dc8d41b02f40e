//! Trail segments left behind the bike and the glyph each one is drawn with.

use crate::game::{Cell, Direction};

/// A piece of trail on a former head cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TrailSegment {
    pub cell: Cell,
    /// Heading of the bike when this piece was laid.
    pub direction: Direction,
    /// Set when the piece was laid on a turn: `(from, to)`.
    pub corner: Option<(Direction, Direction)>,
}

impl TrailSegment {
    pub fn straight(cell: Cell, direction: Direction) -> Self {
        TrailSegment {
            cell,
            direction,
            corner: None,
        }
    }

    pub fn corner(cell: Cell, from: Direction, to: Direction) -> Self {
        TrailSegment {
            cell,
            direction: to,
            corner: Some((from, to)),
        }
    }

    pub fn is_corner(&self) -> bool {
        self.corner.is_some()
    }

    pub fn glyph(&self) -> TrailGlyph {
        match self.corner {
            Some((from, to)) => TrailGlyph::Corner(CornerShape::joining(from, to)),
            None if self.direction.is_horizontal() => TrailGlyph::Horizontal,
            None => TrailGlyph::Vertical,
        }
    }
}

/// How a trail segment should be drawn.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TrailGlyph {
    Horizontal,
    Vertical,
    Corner(CornerShape),
}

/// A turn piece, named by the two cell edges it connects.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CornerShape {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl CornerShape {
    /// The piece entered through the edge opposite `from` and leaves through `to`.
    pub fn joining(from: Direction, to: Direction) -> CornerShape {
        let edges = [from.opposite(), to];
        let top = edges.contains(&Direction::Up);
        let left = edges.contains(&Direction::Left);
        match (top, left) {
            (true, true) => CornerShape::TopLeft,
            (true, false) => CornerShape::TopRight,
            (false, true) => CornerShape::BottomLeft,
            (false, false) => CornerShape::BottomRight,
        }
    }

    /// Edges of the cell this piece touches, in grid directions.
    pub fn edges(&self) -> [Direction; 2] {
        match self {
            CornerShape::TopLeft => [Direction::Up, Direction::Left],
            CornerShape::TopRight => [Direction::Up, Direction::Right],
            CornerShape::BottomLeft => [Direction::Down, Direction::Left],
            CornerShape::BottomRight => [Direction::Down, Direction::Right],
        }
    }
}
