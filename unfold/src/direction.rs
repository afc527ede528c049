use serde::{Deserialize, Serialize};
use unfold_dom::Axis;

/// Which way the content unfolds relative to the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandDirection {
    #[default]
    TopToBottom,
    BottomToTop,
    LeftToRight,
    RightToLeft,
}

impl ExpandDirection {
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::TopToBottom | Self::BottomToTop)
    }

    /// Header precedes content in layout order.
    pub const fn is_regular_order(self) -> bool {
        matches!(self, Self::TopToBottom | Self::LeftToRight)
    }

    /// The axis along which the content's extent animates.
    pub const fn axis(self) -> Axis {
        if self.is_vertical() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }
}

/// Observable phase of an expander.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpandState {
    #[default]
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

impl ExpandState {
    /// Whether a transition is underway.
    pub const fn is_transitioning(self) -> bool {
        matches!(self, Self::Expanding | Self::Collapsing)
    }

    pub(crate) const fn starting(expanding: bool) -> Self {
        if expanding {
            Self::Expanding
        } else {
            Self::Collapsing
        }
    }

    pub(crate) const fn resting(expanded: bool) -> Self {
        if expanded {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}
