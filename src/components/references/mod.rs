//! References section: cards, contact-details modal, and their data types.

mod component;
mod types;

pub use component::{ContactModal, ReferenceGrid};
pub use types::Reference;
