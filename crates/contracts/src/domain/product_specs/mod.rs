pub mod catalog;
pub mod record;
pub mod selection;

pub use catalog::{Catalog, CategoryContext};
pub use record::ProductRecord;
pub use selection::{SelectionState, SelectorSlot};
