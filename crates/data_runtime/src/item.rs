//! Item catalog: weapons and other carriables granted by world pickups.
//!
//! The catalog is keyed by item id and loaded from `data/items/catalog.json`.
//! A built-in fallback covers the starter sword so the sim runs without a
//! data directory (headless tests, stripped installs).

use crate::ids::ItemId;
use crate::loader;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemDef {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    /// Added to melee damage while equipped (weapons only).
    #[serde(default)]
    pub damage: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub heal: i32,
}

#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    items: HashMap<String, ItemDef>,
}

impl ItemCatalog {
    #[must_use]
    pub fn from_defs(defs: Vec<ItemDef>) -> Self {
        let mut items = HashMap::with_capacity(defs.len());
        for d in defs {
            if let Some(prev) = items.insert(d.id.clone(), d) {
                log::warn!("duplicate item id in catalog: {}", prev.id);
            }
        }
        Self { items }
    }

    /// Catalog carrying only the starter sword. Used when no data dir exists.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_defs(vec![ItemDef {
            id: "sword".into(),
            name: "Iron Sword".into(),
            kind: ItemKind::Weapon,
            damage: 5,
            defense: 0,
            heal: 0,
        }])
    }

    /// Load `data/items/catalog.json`, falling back to the built-in set when
    /// the file is absent.
    pub fn load_default() -> Result<Self> {
        let path = loader::data_root().join("items/catalog.json");
        if !path.is_file() {
            log::debug!("no item catalog at {}; using builtin", path.display());
            return Ok(Self::builtin());
        }
        let txt = loader::read_data("items/catalog.json")?;
        let defs: Vec<ItemDef> = serde_json::from_str(&txt).context("parse item catalog json")?;
        Ok(Self::from_defs(defs))
    }

    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&ItemDef> {
        self.items.get(id.as_str())
    }

    /// Melee damage bonus for an equipped item; 0 for non-weapons or unknown ids.
    #[must_use]
    pub fn weapon_damage(&self, id: &ItemId) -> i32 {
        match self.get(id) {
            Some(def) if def.kind == ItemKind::Weapon => def.damage,
            _ => 0,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_sword() {
        let cat = ItemCatalog::builtin();
        let sword = ItemId::from("sword");
        assert_eq!(cat.weapon_damage(&sword), 5);
        assert_eq!(cat.get(&sword).map(|d| d.kind), Some(ItemKind::Weapon));
    }

    #[test]
    fn non_weapon_gives_no_damage_bonus() {
        let cat = ItemCatalog::from_defs(vec![ItemDef {
            id: "bandage".into(),
            name: "Bandage".into(),
            kind: ItemKind::Consumable,
            damage: 3,
            defense: 0,
            heal: 10,
        }]);
        assert_eq!(cat.weapon_damage(&ItemId::from("bandage")), 0);
        assert_eq!(cat.weapon_damage(&ItemId::from("missing")), 0);
    }
}
