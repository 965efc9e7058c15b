//! XMP document parsing, description lookup and namespace resolution.

use roxmltree::{Document, Node};

use super::element::XmpElement;
use crate::error::{MetadataBlock, ParseError};

const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// Namespace URI families whose prefixes are recorded.
const VENDOR_NS_PREFIXES: [&str; 2] = ["http://ns.xdm.org/", "http://ns.google.com/"];

/// Marker of the XDM vendor domain inside a namespace URI.
pub const XDM_DOMAIN: &str = "xdm.org";

/// Parse one XMP text block.
///
/// Blank blocks yield `Ok(None)`: a file without extended XMP is normal.
///
/// # Errors
///
/// Returns `ParseError::MetadataParse` if a non-empty block is not
/// well-formed XML.
pub fn parse_block(text: &str, block: MetadataBlock) -> Result<Option<Document<'_>>, ParseError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    // Producers pad the packet with NULs and whitespace after the trailer
    let text = text.trim_end_matches(|c: char| c == '\0' || c.is_whitespace());
    Document::parse(text)
        .map(Some)
        .map_err(|e| ParseError::MetadataParse {
            block,
            message: e.to_string(),
        })
}

/// The authoritative `rdf:Description` of a document.
///
/// Walks `x:xmpmeta` -> first child element (`rdf:RDF`) -> its last
/// `rdf:Description` child. When `rdf:RDF` has no description the
/// container itself is returned.
pub fn description_element<'a, 'input>(doc: &'a Document<'input>) -> Option<Node<'a, 'input>> {
    let container = doc.root_element().element_children().into_iter().next()?;
    Some(last_description(container))
}

/// The last `rdf:Description` child of `parent`, or `parent` itself.
///
/// XDM writers sometimes emit several descriptions where only the final
/// one is populated.
pub fn last_description<E: XmpElement>(parent: E) -> E {
    parent
        .element_children()
        .into_iter()
        .rev()
        .find(|child| child.local_name() == "Description" && child.namespace_uri() == Some(RDF_NS))
        .unwrap_or(parent)
}

/// Vendor namespace URIs declared by one file, keyed by prefix.
///
/// Scoped to a single extraction; URIs are stored lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    entries: Vec<(String, String)>,
}

impl NamespaceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `uri` belongs to one of the recognised vendor families.
    pub fn is_vendor_uri(uri: &str) -> bool {
        VENDOR_NS_PREFIXES.iter().any(|prefix| {
            uri.get(..prefix.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
        })
    }

    /// Record a prefix mapping if its URI is a vendor namespace.
    ///
    /// Re-declaring a prefix replaces the earlier URI in place.
    pub fn insert(&mut self, prefix: &str, uri: &str) {
        if !Self::is_vendor_uri(uri) {
            return;
        }
        let uri = uri.to_ascii_lowercase();
        match self.entries.iter_mut().find(|(p, _)| p == prefix) {
            Some(entry) => entry.1 = uri,
            None => self.entries.push((prefix.to_string(), uri)),
        }
    }

    /// Record every vendor namespace declared in `element`'s subtree.
    pub fn collect<E: XmpElement>(&mut self, element: E) {
        for (prefix, uri) in element.namespace_declarations() {
            self.insert(&prefix, &uri);
        }
    }

    /// URI of the namespace whose path ends in `/<role>/`, or `""`.
    ///
    /// The most recently declared prefix wins when several match.
    pub fn lookup(&self, role: &str) -> &str {
        let suffix = format!("/{}/", role.to_ascii_lowercase());
        self.entries
            .iter()
            .rev()
            .find(|(_, uri)| uri.ends_with(&suffix))
            .map(|(_, uri)| uri.as_str())
            .unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(prefix, uri)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, u)| (p.as_str(), u.as_str()))
    }
}
