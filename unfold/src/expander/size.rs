//! Extent queries along the expander's axis.

use unfold_dom::{Axis, Size, Tree, measure};

use super::Expander;

impl Expander {
    pub(crate) fn axis(&self) -> Axis {
        self.config.direction.axis()
    }

    /// Arranged extent of the whole expander, `None` before its first layout.
    pub(crate) fn own_extent(&self, tree: &Tree) -> Option<f64> {
        tree.bounds(self.root).map(|rect| rect.extent(self.axis()))
    }

    /// Current arranged extent of the content holder (0 when not laid out).
    pub(crate) fn content_extent(&self, tree: &Tree) -> f64 {
        self.holder
            .and_then(|holder| tree.bounds(holder))
            .map_or(0.0, |rect| rect.extent(self.axis()))
    }

    /// Size the content explicitly asks for on the axis, padding included
    /// for containers.
    pub(crate) fn content_size_request(&self, tree: &Tree) -> Option<f64> {
        let axis = self.axis();
        let element = tree.element(self.content?)?;
        let request = element.request(axis)?;
        if element.is_container() {
            Some(request + element.padding.total(axis))
        } else {
            Some(request)
        }
    }

    /// Natural extent of the holder's content, measured unconstrained on the
    /// axis and against the expander's current cross extent.
    pub(crate) fn measured_content_extent(&self, tree: &Tree) -> f64 {
        let Some(holder) = self.holder else {
            return 0.0;
        };
        let axis = self.axis();
        let cross = tree
            .bounds(self.root)
            .map_or(f64::INFINITY, |rect| rect.extent(axis.cross()));
        let proposal = Size::from_axes(axis, f64::INFINITY, cross);
        let measured = measure(tree, holder, proposal.width, proposal.height).extent(axis);
        log::trace!("[{}] measured content extent {}", self.id, measured);
        measured
    }

    /// The holder's size override on the axis. `None` means it sizes itself.
    pub fn content_size_override(&self, tree: &Tree) -> Option<f64> {
        self.holder.and_then(|holder| tree.request(holder, self.axis()))
    }

    pub(crate) fn set_content_size_override(&self, tree: &mut Tree, value: Option<f64>) {
        if let Some(holder) = self.holder {
            tree.set_request(holder, self.axis(), value);
        }
    }
}
