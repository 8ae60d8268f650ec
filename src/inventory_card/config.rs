use crate::error::{CardError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const DEFAULT_CARD_TYPE: &str = "custom:inventory-card";

/// Host service call to perform when an item row is activated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemClickAction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Card configuration as supplied by the host's config form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub entity: String,

    #[serde(rename = "type", default = "default_card_type")]
    pub card_type: String,

    /// Overrides the stored per-entity sort method when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_method: Option<String>,

    #[serde(default)]
    pub minimal: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_click_action: Option<ItemClickAction>,
}

fn default_card_type() -> String {
    DEFAULT_CARD_TYPE.to_string()
}

impl CardConfig {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            card_type: default_card_type(),
            sort_method: None,
            minimal: false,
            item_click_action: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.entity.trim().is_empty() {
            return Err(CardError::Config(
                "card configuration requires an entity id".to_string(),
            ));
        }
        Ok(())
    }
}
