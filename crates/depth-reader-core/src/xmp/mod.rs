//! XMP metadata tree handling.
//!
//! - `element` - the namespace-aware element capability used by extraction
//! - `tree` - block parsing, `rdf:Description` lookup and the namespace table
//! - `read` - attribute-or-child field reads with lenient coercion

mod element;
mod read;
mod tree;

pub use element::XmpElement;
pub use read::{
    attr_value, child_value, element_value, find_child, parse_bool, parse_number, read_bool,
    read_f64, read_str,
};
pub use tree::{
    description_element, last_description, parse_block, NamespaceTable, XDM_DOMAIN,
};
