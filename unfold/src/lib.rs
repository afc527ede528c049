//! Collapsible expander widget on top of `unfold-dom`.

pub mod command;
pub mod config;
pub mod context;
pub mod direction;
pub mod error;
pub mod events;
pub mod expander;
pub mod property;
pub mod surface;
pub mod template;

pub use command::{Command, CommandParameter, ForceUpdateSizeCommand};
pub use config::{
    DEFAULT_ANIMATION_LENGTH, DEFAULT_FRAME_INTERVAL, ExpanderConfig, MAX_ANIMATION_LENGTH,
};
pub use context::Context;
pub use direction::{ExpandDirection, ExpandState};
pub use error::ConfigError;
pub use events::{ExpanderEvent, ExpanderId};
pub use expander::{EXPAND_ANIMATION, Expander, Transition, invalidate_ancestors};
pub use property::Observable;
pub use surface::Surface;
pub use template::{BindingContext, ContentTemplate, DataTemplate, TemplateSelector};

pub mod prelude {
    pub use crate::command::{Command, ForceUpdateSizeCommand};
    pub use crate::config::ExpanderConfig;
    pub use crate::direction::{ExpandDirection, ExpandState};
    pub use crate::events::{ExpanderEvent, ExpanderId};
    pub use crate::expander::Expander;
    pub use crate::surface::Surface;
    pub use crate::template::{ContentTemplate, DataTemplate};
}
