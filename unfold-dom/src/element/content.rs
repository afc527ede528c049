#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Nested children. Only present on builder values; inserting an element
    /// into a [`Tree`](crate::Tree) moves these into the arena.
    Children(Vec<super::Element>),
}
