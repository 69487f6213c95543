//! Equipment and inventory items.
//!
//! Placeholder carriers for character gear; no economy or combat math is
//! attached to them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// A worn or wielded item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    /// weapon, armor, accessory
    pub kind: String,
    /// mainhand, offhand, chest, ...
    pub slot: String,
    pub stats: BTreeMap<String, i32>,
    pub metadata: BTreeMap<String, Value>,
}

impl EquipmentItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        slot: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();
        let kind = kind.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("Equipment ID cannot be blank"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("Equipment name cannot be blank"));
        }
        if kind.trim().is_empty() {
            return Err(DomainError::validation("Equipment kind cannot be blank"));
        }
        Ok(Self {
            id,
            name,
            kind,
            slot: slot.into(),
            stats: BTreeMap::new(),
            metadata: BTreeMap::new(),
        })
    }
}

/// A carried item with a quantity and value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub quantity: u32,
    pub value: u32,
    pub metadata: BTreeMap<String, Value>,
}

impl InventoryItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        quantity: u32,
        value: u32,
    ) -> Result<Self, DomainError> {
        let id = id.into();
        let name = name.into();
        if id.trim().is_empty() {
            return Err(DomainError::validation("Inventory item ID cannot be blank"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation(
                "Inventory item name cannot be blank",
            ));
        }
        Ok(Self {
            id,
            name,
            kind: kind.into(),
            quantity,
            value,
            metadata: BTreeMap::new(),
        })
    }
}
