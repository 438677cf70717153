//! Presentation tree: a layout-neutral description of what to draw.
//!
//! The tree carries no styling values (colours, fonts, sizes). Those belong to
//! whatever renders it; a node only says what it is and how children are arranged.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TemplateId {
    /// Single column, every section stacked.
    #[default]
    Modern,
    /// Header and experience full width, remaining sections in parallel columns.
    Minimal,
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateId::Modern => f.write_str("modern"),
            TemplateId::Minimal => f.write_str("minimal"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Layout {
    Stack,
    Columns,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TextStyle {
    Title,
    Subtitle,
    Body,
    Muted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum Node {
    Container {
        role: &'static str,
        layout: Layout,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
    },
    Text {
        style: TextStyle,
        text: String,
    },
    BulletList {
        items: Vec<String>,
    },
    TagList {
        tags: Vec<String>,
    },
    Link {
        label: String,
        href: String,
    },
    Image {
        src: String,
        alt: String,
    },
}

impl Node {
    pub fn stack(role: &'static str, children: Vec<Node>) -> Node {
        Node::Container {
            role,
            layout: Layout::Stack,
            children,
        }
    }

    pub fn columns(role: &'static str, children: Vec<Node>) -> Node {
        Node::Container {
            role,
            layout: Layout::Columns,
            children,
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Node {
        Node::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn text(style: TextStyle, text: impl Into<String>) -> Node {
        Node::Text {
            style,
            text: text.into(),
        }
    }

    /// Roles of every container in the subtree, depth first.
    pub fn roles(&self) -> Vec<&'static str> {
        let mut roles = Vec::new();
        self.collect_roles(&mut roles);
        roles
    }

    fn collect_roles(&self, out: &mut Vec<&'static str>) {
        if let Node::Container { role, children, .. } = self {
            out.push(*role);
            for child in children {
                child.collect_roles(out);
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresentationTree {
    pub template: TemplateId,
    pub root: Node,
}
