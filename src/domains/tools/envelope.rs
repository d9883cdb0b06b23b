//! Result envelope returned by every successful tool call.
//!
//! Wire form: `{"content": [{"type": "text", "text": "..."}], "isError": false}`.
//! A text item may carry a `paymentLink` next to its text without changing its
//! tag.

use serde::{Deserialize, Serialize};

use super::error::ToolError;

/// One content item of a result envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// Plain text, with optional checkout metadata.
    Text {
        text: String,
        #[serde(
            rename = "paymentLink",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        payment_link: Option<String>,
    },
}

impl ContentItem {
    /// Create a text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            payment_link: None,
        }
    }

    /// Attach a payment link to this item.
    pub fn with_payment_link(self, link: Option<String>) -> Self {
        match self {
            Self::Text { text, .. } => Self::Text {
                text,
                payment_link: link,
            },
        }
    }

    /// The item's text.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text, .. } => text,
        }
    }

    /// The item's payment link, if any.
    pub fn payment_link(&self) -> Option<&str> {
        match self {
            Self::Text { payment_link, .. } => payment_link.as_deref(),
        }
    }
}

/// Ordered, non-empty list of content items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultEnvelope {
    content: Vec<ContentItem>,
    #[serde(default)]
    is_error: bool,
}

impl ResultEnvelope {
    /// Envelope holding a single text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self::single(ContentItem::text(text))
    }

    /// Envelope holding a single item.
    pub fn single(item: ContentItem) -> Self {
        Self {
            content: vec![item],
            is_error: false,
        }
    }

    /// Envelope holding `items`, which must not be empty.
    pub fn from_items(items: Vec<ContentItem>) -> Result<Self, ToolError> {
        if items.is_empty() {
            return Err(ToolError::internal("result envelope has no content items"));
        }
        Ok(Self {
            content: items,
            is_error: false,
        })
    }

    /// Content items, in order.
    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }

    /// Whether the tool flagged this result as an error.
    pub fn is_error(&self) -> bool {
        self.is_error
    }

    /// Text of each item, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.content.iter().map(ContentItem::as_text).collect()
    }

    /// Serialize to the wire form.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "content": self.content,
            "isError": self.is_error,
        })
    }
}
