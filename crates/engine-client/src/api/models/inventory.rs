use std::collections::BTreeMap;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Behavior attached to an item schema, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ItemComponent {
    Consumable {
        uses: u32,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cooldown_ms: Option<u64>,
        #[serde(default)]
        effects: Vec<String>,
    },
    Equippable {
        slot: String,
        #[serde(default)]
        stats: BTreeMap<String, f64>,
    },
    Currency {
        currency_code: String,
        value: u64,
    },
    Cosmetic {
        rarity: Rarity,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        preview_url: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemSchema {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stackable: bool,
    #[serde(default)]
    pub max_stack: Option<u32>,
    #[serde(default)]
    pub components: Vec<ItemComponent>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl InventoryItemSchema {
    pub fn is_consumable(&self) -> bool {
        self.components
            .iter()
            .any(|c| matches!(c, ItemComponent::Consumable { .. }))
    }

    /// Equipment slot, if the item has an equippable component.
    pub fn equip_slot(&self) -> Option<&str> {
        self.components.iter().find_map(|c| match c {
            ItemComponent::Equippable { slot, .. } => Some(slot.as_str()),
            _ => None,
        })
    }
}
