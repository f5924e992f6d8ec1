mod check;
pub use check::*;
mod customers;
pub use customers::*;
mod depots;
pub use depots::*;
mod document;
pub use document::*;
mod error;
pub use error::*;
mod gifts;
pub use gifts::*;
mod locations;
pub use locations::*;
mod sequence;
pub use sequence::*;
mod vehicles;
pub use vehicles::*;

use sleigh_structs::layout::{CLASS_ATTR, IDENTIFIER_ATTR, REFERENCE_ATTR};
use sleigh_utils::Element;

/// New node element that takes the next identifier from `sequence`.
pub(crate) fn node(tag: &str, sequence: &mut Sequence) -> Element {
    Element::new(tag).with_attr(IDENTIFIER_ATTR, sequence.next())
}

/// Reference element pointing at the node with `identifier`, tagged with its element type.
pub(crate) fn reference(field: &str, identifier: u64, target_tag: &str) -> Element {
    Element::new(field)
        .with_attr(REFERENCE_ATTR, identifier.to_string())
        .with_attr(CLASS_ATTR, target_tag)
}
