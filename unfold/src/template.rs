//! Content templates.
//!
//! A [`DataTemplate`] builds a fresh content element; a [`TemplateSelector`]
//! picks a template from the binding context. Templates compare by identity:
//! two clones of the same template are equal, two templates built from equal
//! closures are not.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use unfold_dom::Element;

use crate::events::ExpanderId;

/// Data the content is built against.
pub type BindingContext = Rc<dyn Any>;

type Factory = dyn Fn(Option<&BindingContext>) -> Element;

#[derive(Clone)]
pub struct DataTemplate {
    factory: Rc<Factory>,
}

impl DataTemplate {
    pub fn new(factory: impl Fn(Option<&BindingContext>) -> Element + 'static) -> Self {
        Self {
            factory: Rc::new(factory),
        }
    }

    pub fn create_content(&self, context: Option<&BindingContext>) -> Element {
        (self.factory)(context)
    }

    /// Identity comparison.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.factory, &other.factory)
    }
}

impl PartialEq for DataTemplate {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl fmt::Debug for DataTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataTemplate({:p})", Rc::as_ptr(&self.factory).cast::<()>())
    }
}

/// Chooses a template for a given binding context.
pub trait TemplateSelector {
    fn select_template(
        &self,
        context: Option<&BindingContext>,
        container: ExpanderId,
    ) -> Option<ContentTemplate>;
}

impl<F> TemplateSelector for F
where
    F: Fn(Option<&BindingContext>, ExpanderId) -> Option<ContentTemplate>,
{
    fn select_template(
        &self,
        context: Option<&BindingContext>,
        container: ExpanderId,
    ) -> Option<ContentTemplate> {
        self(context, container)
    }
}

#[derive(Clone)]
pub enum ContentTemplate {
    Data(DataTemplate),
    Selector(Rc<dyn TemplateSelector>),
}

impl ContentTemplate {
    pub fn selector(selector: impl TemplateSelector + 'static) -> Self {
        Self::Selector(Rc::new(selector))
    }
}

impl From<DataTemplate> for ContentTemplate {
    fn from(template: DataTemplate) -> Self {
        Self::Data(template)
    }
}

impl fmt::Debug for ContentTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(template) => template.fmt(f),
            Self::Selector(_) => f.write_str("Selector(..)"),
        }
    }
}

/// Longest selector chain followed before giving up.
const MAX_SELECTOR_DEPTH: usize = 16;

/// Follow selector indirection down to a concrete template.
pub(crate) fn resolve_template(
    template: Option<&ContentTemplate>,
    context: Option<&BindingContext>,
    container: ExpanderId,
) -> Option<DataTemplate> {
    let mut current = template.cloned();
    for _ in 0..MAX_SELECTOR_DEPTH {
        match current? {
            ContentTemplate::Data(data) => return Some(data),
            ContentTemplate::Selector(selector) => {
                current = selector.select_template(context, container);
            }
        }
    }
    log::warn!("[{}] template selector chain too deep, leaving content unset", container);
    None
}
