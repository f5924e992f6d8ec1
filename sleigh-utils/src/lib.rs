pub mod xml;
pub use xml::Element;
