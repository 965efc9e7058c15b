//! Namespace-aware element access over the parsed XMP tree.
//!
//! Field extraction only needs three things from an XML element: a
//! namespaced attribute, the n-th namespaced descendant element, and the
//! element's text content. [`XmpElement`] captures exactly that so the
//! extractors do not depend on a particular XML library.

use roxmltree::Node;

/// Read-only element access used by the field extractors.
pub trait XmpElement: Copy {
    /// Value of the attribute `name` in namespace `ns`.
    fn attribute_ns(&self, ns: &str, name: &str) -> Option<String>;

    /// The `index`-th descendant element (document order) named `name` in
    /// namespace `ns`. The element itself is not a candidate.
    fn descendant_ns(&self, ns: &str, name: &str, index: usize) -> Option<Self>;

    /// Concatenated text of every descendant text node.
    fn text_content(&self) -> String;

    /// Local name of the element.
    fn local_name(&self) -> &str;

    /// Namespace URI of the element, if any.
    fn namespace_uri(&self) -> Option<&str>;

    /// Direct element children, in document order.
    fn element_children(&self) -> Vec<Self>;

    /// Every `(prefix, uri)` mapping in scope at this element and its
    /// descendants, in document order.
    fn namespace_declarations(&self) -> Vec<(String, String)>;
}

/// Namespace URIs compare ASCII case-insensitively; the namespace table
/// stores them lower-cased while documents keep their original spelling.
#[inline]
fn same_namespace(candidate: Option<&str>, ns: &str) -> bool {
    candidate.is_some_and(|uri| uri.eq_ignore_ascii_case(ns))
}

impl<'a, 'input: 'a> XmpElement for Node<'a, 'input> {
    fn attribute_ns(&self, ns: &str, name: &str) -> Option<String> {
        if ns.is_empty() {
            return None;
        }
        self.attributes()
            .find(|attr| attr.name() == name && same_namespace(attr.namespace(), ns))
            .map(|attr| attr.value().to_string())
    }

    fn descendant_ns(&self, ns: &str, name: &str, index: usize) -> Option<Self> {
        if ns.is_empty() {
            return None;
        }
        self.descendants()
            .skip(1)
            .filter(|node| {
                node.is_element()
                    && node.tag_name().name() == name
                    && same_namespace(node.tag_name().namespace(), ns)
            })
            .nth(index)
    }

    fn text_content(&self) -> String {
        self.descendants()
            .filter(|node| node.is_text())
            .filter_map(|node| node.text())
            .collect()
    }

    fn local_name(&self) -> &str {
        self.tag_name().name()
    }

    fn namespace_uri(&self) -> Option<&str> {
        self.tag_name().namespace()
    }

    fn element_children(&self) -> Vec<Self> {
        self.children().filter(|node| node.is_element()).collect()
    }

    fn namespace_declarations(&self) -> Vec<(String, String)> {
        self.descendants()
            .filter(|node| node.is_element())
            .flat_map(|node| {
                node.namespaces()
                    .filter_map(|ns| Some((ns.name()?.to_string(), ns.uri().to_string())))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    const XML: &str = r#"<root xmlns:a="http://ns.example.com/A/" xmlns:b="http://ns.example.com/b/"
        a:attr="value" attr="plain">
      <a:item>first</a:item>
      <b:item>other</b:item>
      <wrap><a:item>sec<x>o</x>nd</a:item></wrap>
    </root>"#;

    #[test]
    fn test_attribute_ns() {
        let doc = Document::parse(XML).unwrap();
        let root = doc.root_element();
        assert_eq!(
            root.attribute_ns("http://ns.example.com/A/", "attr").as_deref(),
            Some("value")
        );
        // Namespace comparison ignores ASCII case
        assert_eq!(
            root.attribute_ns("http://ns.example.com/a/", "attr").as_deref(),
            Some("value")
        );
        assert_eq!(root.attribute_ns("http://ns.example.com/b/", "attr"), None);
        // An unresolved namespace never matches un-prefixed attributes
        assert_eq!(root.attribute_ns("", "attr"), None);
    }

    #[test]
    fn test_descendant_ns_indexes_in_document_order() {
        let doc = Document::parse(XML).unwrap();
        let root = doc.root_element();
        let ns = "http://ns.example.com/A/";

        let first = root.descendant_ns(ns, "item", 0).unwrap();
        assert_eq!(first.text_content(), "first");

        let second = root.descendant_ns(ns, "item", 1).unwrap();
        assert_eq!(second.text_content(), "second");

        assert!(root.descendant_ns(ns, "item", 2).is_none());
        assert!(root.descendant_ns("", "item", 0).is_none());
    }

    #[test]
    fn test_descendant_ns_excludes_self() {
        let doc = Document::parse(XML).unwrap();
        let item = doc
            .root_element()
            .descendant_ns("http://ns.example.com/A/", "item", 0)
            .unwrap();
        assert!(item.descendant_ns("http://ns.example.com/A/", "item", 0).is_none());
    }

    #[test]
    fn test_namespace_declarations() {
        let doc = Document::parse(XML).unwrap();
        let declarations = doc.root_element().namespace_declarations();
        assert!(declarations.contains(&("a".to_string(), "http://ns.example.com/A/".to_string())));
        assert!(declarations.contains(&("b".to_string(), "http://ns.example.com/b/".to_string())));
    }
}
