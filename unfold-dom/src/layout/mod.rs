mod stack;

pub use stack::{arrange, measure};
