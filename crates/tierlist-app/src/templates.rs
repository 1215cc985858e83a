// Rust guideline compliant 2026-10-14

//! Template lookup replies.
//!
//! There is no template catalogue yet. The query only echoes back what
//! would be fetched.

use serde::{Deserialize, Serialize};

/// Template lookup filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateQuery {
    /// Match templates by name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Match templates carrying these tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Reply to a template query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateReply {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Answers a template query.
///
/// An empty name counts as no name. A present tag list is echoed even when
/// it is empty.
pub fn query(input: Option<&TemplateQuery>) -> TemplateReply {
    let Some(input) = input else {
        return TemplateReply {
            message: "Not even an object :(".to_string(),
            content: None,
        };
    };

    let mut content = match input.name.as_deref() {
        Some(name) if !name.is_empty() => format!("Templates matching name {}", name),
        _ => "All Templates".to_string(),
    };
    if let Some(tags) = &input.tags {
        content.push_str(" with tags ");
        content.push_str(&tags.join(","));
    }
    content.push('.');

    TemplateReply {
        message: "I should get the following.".to_string(),
        content: Some(content),
    }
}
