use scraper::{ElementRef, Html};

/// Read-only view over a parsed results page.
///
/// Only the lookups the extractor needs are exposed: nodes by class label
/// (document order), node by id, and attribute/text reads on a node.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Document {
        Document {
            html: Html::parse_document(markup),
        }
    }

    fn root(&self) -> Node<'_> {
        Node {
            element: self.html.root_element(),
        }
    }

    /// Every node carrying `class`, in document order.
    pub fn nodes_by_class(&self, class: &str) -> Vec<Node<'_>> {
        self.root().nodes_by_class(class)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.root().elements().any(|el| carries_class(el, class))
    }

    pub fn first_by_class(&self, class: &str) -> Option<Node<'_>> {
        self.root()
            .elements()
            .find(|el| carries_class(*el, class))
            .map(|element| Node { element })
    }

    /// First node whose `id` attribute equals `id`.
    pub fn node_by_id(&self, id: &str) -> Option<Node<'_>> {
        self.root()
            .elements()
            .find(|el| el.value().id() == Some(id))
            .map(|element| Node { element })
    }
}

#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    /// The node itself and all of its descendant elements.
    fn elements(&self) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        self.element.descendants().filter_map(ElementRef::wrap)
    }

    /// Nodes under (and including) this one that carry `class`.
    pub fn nodes_by_class(&self, class: &str) -> Vec<Node<'a>> {
        self.elements()
            .filter(|el| carries_class(*el, class))
            .map(|element| Node { element })
            .collect()
    }

    pub fn first_by_class(&self, class: &str) -> Option<Node<'a>> {
        self.elements()
            .find(|el| carries_class(*el, class))
            .map(|element| Node { element })
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Text of the node and its descendants, whitespace collapsed and trimmed.
    pub fn text(&self) -> String {
        let raw = self.element.text().collect::<String>();
        raw.split_whitespace().collect::<Vec<&str>>().join(" ")
    }
}

fn carries_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

#[test]
fn test_document_lookups() {
    let doc = Document::parse(
        r#"<html><body>
            <div class="gridBox a" id="one"><span class="price">  $1
                .00 </span></div>
            <div class="gridBox" id="two" title="Second"><b>x</b> <i>y</i></div>
        </body></html>"#,
    );

    assert_eq!(doc.nodes_by_class("gridBox").len(), 2);
    assert!(doc.has_class("a"));
    assert!(!doc.has_class("gridbox"));

    let one = doc.node_by_id("one").unwrap();
    assert_eq!(one.nodes_by_class("price")[0].text(), "$1 .00");
    assert!(one.first_by_class("gridBox").is_some());

    let two = doc.node_by_id("two").unwrap();
    assert_eq!(two.attr("title"), Some("Second"));
    assert_eq!(two.text(), "x y");
    assert!(doc.node_by_id("three").is_none());
}
