/// Layout axis. Sizes, requests and extents are read along one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    Horizontal,
    #[default]
    Vertical,
}

impl Axis {
    pub const fn cross(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}

/// Stacking direction of a container's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

impl Direction {
    /// The axis children are stacked along.
    pub const fn main_axis(self) -> Axis {
        match self {
            Direction::Row => Axis::Horizontal,
            Direction::Column => Axis::Vertical,
        }
    }

    pub const fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Direction::Row,
            Axis::Vertical => Direction::Column,
        }
    }
}
