//! Element tree, stack layout and tween scheduling used by `unfold` widgets.

pub mod animation;
pub mod element;
pub mod error;
pub mod hit;
pub mod layout;
pub mod text;
pub mod transitions;
pub mod tree;
pub mod types;

pub use animation::{AnimationFrame, AnimationId, Animator, FrameStatus, Tween};
pub use element::{Content, Element};
pub use error::TreeError;
pub use hit::hit_test;
pub use layout::{arrange, measure};
pub use transitions::{Easing, TransitionConfig};
pub use tree::{NodeId, SizeInvalidatable, Tree, TriggerId};
pub use types::*;
