//! Observable widget properties.

use std::fmt;

type Watcher<T> = Box<dyn FnMut(&T)>;

/// A value that notifies watchers synchronously whenever it changes.
///
/// Writing the current value again is not a change and notifies nobody.
pub struct Observable<T> {
    value: T,
    watchers: Vec<Watcher<T>>,
}

impl<T: Clone + PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            watchers: Vec::new(),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T {
        self.value.clone()
    }

    /// Set a new value. Returns whether it changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for watcher in &mut self.watchers {
            watcher(&self.value);
        }
        true
    }

    /// Register a handler run after every change.
    pub fn watch(&mut self, watcher: impl FnMut(&T) + 'static) {
        self.watchers.push(Box::new(watcher));
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("watchers", &self.watchers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn watchers_see_changes_only() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut value = Observable::new(1);
        let sink = Rc::clone(&seen);
        value.watch(move |v| sink.borrow_mut().push(*v));

        assert!(value.set(2));
        assert!(!value.set(2));
        assert!(value.set(3));

        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert_eq!(value.get(), 3);
    }
}
