//! kuchiki-backed [`DocumentTree`] for raw HTML

use kuchiki::traits::TendrilSink;
use kuchiki::{ElementData, NodeDataRef, NodeRef};

use super::{DocumentElement, DocumentError, DocumentTree};

/// HTML document parsed into a mutable kuchiki tree
#[derive(Clone)]
pub struct HtmlDocument {
    root: NodeRef,
}

impl HtmlDocument {
    /// Parse a full HTML document
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            root: kuchiki::parse_html().one(html),
        }
    }
}

impl DocumentTree for HtmlDocument {
    type Element = HtmlElement;

    fn select(&self, selector: &str) -> Result<Vec<HtmlElement>, DocumentError> {
        select_from(&self.root, selector)
    }

    fn serialize(&self) -> Result<String, DocumentError> {
        let mut html_output = Vec::new();
        self.root.serialize(&mut html_output)?;
        Ok(String::from_utf8(html_output)?)
    }
}

/// Element handle inside an [`HtmlDocument`]
#[derive(Clone)]
pub struct HtmlElement(NodeDataRef<ElementData>);

impl DocumentElement for HtmlElement {
    fn attr(&self, name: &str) -> Option<String> {
        self.0
            .attributes
            .borrow()
            .get(name)
            .map(std::string::ToString::to_string)
    }

    fn set_attr(&self, name: &str, value: &str) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name, value.to_string());
    }

    fn select(&self, selector: &str) -> Result<Vec<HtmlElement>, DocumentError> {
        select_from(self.0.as_node(), selector)
    }
}

fn select_from(node: &NodeRef, selector: &str) -> Result<Vec<HtmlElement>, DocumentError> {
    // Collected up front so attribute writes never overlap a live iterator.
    let matches = node
        .select(selector)
        .map_err(|()| DocumentError::InvalidSelector(selector.to_string()))?
        .map(HtmlElement)
        .collect();
    Ok(matches)
}
