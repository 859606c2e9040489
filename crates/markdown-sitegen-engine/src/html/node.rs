use crate::error::{Error, Result};

/// Element attributes in insertion order. Rendering preserves this order.
pub type Attributes = Vec<(String, String)>;

/// A node of the HTML output tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A node without children. A `None` (or empty) tag renders the content as
    /// raw text with no wrapping element.
    Leaf {
        tag: Option<String>,
        content: String,
        attributes: Attributes,
    },
    /// An element wrapping one or more child nodes.
    Branch {
        tag: String,
        children: Vec<Node>,
        attributes: Attributes,
    },
}

impl Node {
    /// Raw text with no wrapping element.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Leaf {
            tag: None,
            content: content.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, content: impl Into<String>) -> Self {
        Node::Leaf {
            tag: Some(tag.into()),
            content: content.into(),
            attributes: Attributes::new(),
        }
    }

    pub fn branch(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Branch {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        }
    }

    /// Appends an attribute, keeping earlier ones first.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        match &mut self {
            Node::Leaf { attributes, .. } | Node::Branch { attributes, .. } => {
                attributes.push((name.into(), value.into()));
            }
        }
        self
    }

    /// The element name, or `None` for raw text.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref().filter(|t| !t.is_empty()),
            Node::Branch { tag, .. } => Some(tag.as_str()),
        }
    }

    pub fn attributes(&self) -> &Attributes {
        match self {
            Node::Leaf { attributes, .. } | Node::Branch { attributes, .. } => attributes,
        }
    }

    /// Child nodes; always empty for a leaf.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Branch { children, .. } => children,
        }
    }

    /// Serializes this node and its descendants to HTML.
    ///
    /// Fails with [`Error::Structural`] when a raw-text leaf carries attributes,
    /// or a branch has an empty tag or no children.
    pub fn render(&self) -> Result<String> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    fn render_into(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Leaf {
                content,
                attributes,
                ..
            } => match self.tag() {
                None => {
                    if !attributes.is_empty() {
                        return Err(Error::Structural(format!(
                            "raw text leaf cannot have attributes: {content}"
                        )));
                    }
                    out.push_str(content);
                }
                Some(tag) => {
                    open_tag(out, tag, attributes);
                    out.push_str(content);
                    close_tag(out, tag);
                }
            },
            Node::Branch {
                tag,
                children,
                attributes,
            } => {
                if tag.is_empty() {
                    return Err(Error::Structural("branch node must have a tag".into()));
                }
                if children.is_empty() {
                    return Err(Error::Structural(format!(
                        "branch node <{tag}> must have children"
                    )));
                }
                open_tag(out, tag, attributes);
                for child in children {
                    child.render_into(out)?;
                }
                close_tag(out, tag);
            }
        }
        Ok(())
    }
}

fn open_tag(out: &mut String, tag: &str, attributes: &Attributes) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attributes {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
    out.push('>');
}

fn close_tag(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn raw_text_leaf_renders_content() {
        assert_eq!(Node::text("World").render().unwrap(), "World");
    }

    #[test]
    fn empty_tag_renders_as_raw_text() {
        let node = Node::leaf("", "Hello");
        assert_eq!(node.render().unwrap(), "Hello");
    }

    #[test]
    fn tagged_leaf_renders_element() {
        assert_eq!(Node::leaf("p", "Hello").render().unwrap(), "<p>Hello</p>");
    }

    #[test]
    fn leaf_attributes_render_in_insertion_order() {
        let node = Node::leaf("a", "Click")
            .with_attribute("href", "http://example.com")
            .with_attribute("target", "_blank");
        assert_eq!(
            node.render().unwrap(),
            r#"<a href="http://example.com" target="_blank">Click</a>"#
        );
    }

    #[test]
    fn empty_content_is_allowed() {
        let node = Node::leaf("img", "")
            .with_attribute("src", "x.png")
            .with_attribute("alt", "x");
        assert_eq!(
            node.render().unwrap(),
            r#"<img src="x.png" alt="x"></img>"#
        );
    }

    #[test]
    fn raw_text_with_attributes_is_structural_error() {
        let node = Node::text("Hello").with_attribute("id", "x");
        assert!(matches!(node.render(), Err(Error::Structural(_))));

        let node = Node::leaf("", "Hello").with_attribute("class", "c");
        assert!(matches!(node.render(), Err(Error::Structural(_))));
    }

    #[test]
    fn branch_renders_children_in_order() {
        let node = Node::branch(
            "p",
            vec![
                Node::leaf("b", "Bold Text"),
                Node::text("Normal Text"),
                Node::leaf("i", "Italic Text").with_attribute("class", "italic"),
                Node::text(" More Normal Text"),
            ],
        );
        assert_eq!(
            node.render().unwrap(),
            r#"<p><b>Bold Text</b>Normal Text<i class="italic">Italic Text</i> More Normal Text</p>"#
        );
    }

    #[test]
    fn nested_branches_render_recursively() {
        let node = Node::branch(
            "div",
            vec![Node::branch("span", vec![Node::leaf("b", "grandchild")])],
        )
        .with_attribute("class", "outer");
        assert_eq!(
            node.render().unwrap(),
            r#"<div class="outer"><span><b>grandchild</b></span></div>"#
        );
    }

    #[test]
    fn branch_without_children_is_structural_error() {
        let node = Node::branch("ul", vec![]);
        assert!(matches!(node.render(), Err(Error::Structural(_))));
    }

    #[test]
    fn branch_without_tag_is_structural_error() {
        let node = Node::branch("", vec![Node::text("x")]);
        assert!(matches!(node.render(), Err(Error::Structural(_))));
    }

    #[test]
    fn invalid_descendant_fails_whole_render() {
        let node = Node::branch("div", vec![Node::branch("p", vec![])]);
        assert!(matches!(node.render(), Err(Error::Structural(_))));
    }

    #[test]
    fn leaf_and_branch_are_never_equal() {
        let leaf = Node::leaf("p", "");
        let branch = Node::branch("p", vec![]);
        assert_ne!(leaf, branch);
    }

    #[test]
    fn accessors_expose_structure() {
        let node = Node::branch("p", vec![Node::text("a")]).with_attribute("id", "x");
        assert_eq!(node.tag(), Some("p"));
        assert_eq!(node.children(), &[Node::text("a")]);
        assert_eq!(node.attributes(), &vec![("id".to_string(), "x".to_string())]);
        assert_eq!(Node::text("a").tag(), None);
        assert!(Node::text("a").children().is_empty());
    }
}
