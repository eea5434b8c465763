//! Material definitions.

use serde::{Deserialize, Serialize};

/// The kind of an item.
///
/// A hand-curated subset of the vanilla registry; enough to cover GUI
/// work (buttons, fillers, currency items, tools with durability).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Material {
    Air,
    Stone,
    Dirt,
    Cobblestone,
    OakPlanks,
    Glass,
    GrayStainedGlassPane,
    BlackStainedGlassPane,
    Chest,
    Barrier,
    Emerald,
    Diamond,
    GoldIngot,
    IronIngot,
    Paper,
    Book,
    NameTag,
    Arrow,
    EnderPearl,
    Snowball,
    Egg,
    Bread,
    GoldenApple,
    IronSword,
    DiamondSword,
    DiamondPickaxe,
    Bow,
    Shield,
    PlayerHead,
}

impl Material {
    /// Returns true for materials that cannot form a real item stack.
    #[must_use]
    pub fn is_air(self) -> bool {
        self == Self::Air
    }

    /// Returns the maximum stack size for this material.
    #[must_use]
    pub fn max_stack_size(self) -> i32 {
        match self {
            Self::Air => 0,
            Self::IronSword
            | Self::DiamondSword
            | Self::DiamondPickaxe
            | Self::Bow
            | Self::Shield => 1,
            Self::EnderPearl | Self::Snowball | Self::Egg => 16,
            _ => 64,
        }
    }

    /// Returns the namespaced registry key for this material.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Air => "minecraft:air",
            Self::Stone => "minecraft:stone",
            Self::Dirt => "minecraft:dirt",
            Self::Cobblestone => "minecraft:cobblestone",
            Self::OakPlanks => "minecraft:oak_planks",
            Self::Glass => "minecraft:glass",
            Self::GrayStainedGlassPane => "minecraft:gray_stained_glass_pane",
            Self::BlackStainedGlassPane => "minecraft:black_stained_glass_pane",
            Self::Chest => "minecraft:chest",
            Self::Barrier => "minecraft:barrier",
            Self::Emerald => "minecraft:emerald",
            Self::Diamond => "minecraft:diamond",
            Self::GoldIngot => "minecraft:gold_ingot",
            Self::IronIngot => "minecraft:iron_ingot",
            Self::Paper => "minecraft:paper",
            Self::Book => "minecraft:book",
            Self::NameTag => "minecraft:name_tag",
            Self::Arrow => "minecraft:arrow",
            Self::EnderPearl => "minecraft:ender_pearl",
            Self::Snowball => "minecraft:snowball",
            Self::Egg => "minecraft:egg",
            Self::Bread => "minecraft:bread",
            Self::GoldenApple => "minecraft:golden_apple",
            Self::IronSword => "minecraft:iron_sword",
            Self::DiamondSword => "minecraft:diamond_sword",
            Self::DiamondPickaxe => "minecraft:diamond_pickaxe",
            Self::Bow => "minecraft:bow",
            Self::Shield => "minecraft:shield",
            Self::PlayerHead => "minecraft:player_head",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_sizes() {
        assert_eq!(Material::Stone.max_stack_size(), 64);
        assert_eq!(Material::EnderPearl.max_stack_size(), 16);
        assert_eq!(Material::DiamondSword.max_stack_size(), 1);
        assert_eq!(Material::Air.max_stack_size(), 0);
    }

    #[test]
    fn keys_are_namespaced() {
        assert_eq!(Material::GoldenApple.key(), "minecraft:golden_apple");
        assert!(Material::PlayerHead.key().starts_with("minecraft:"));
    }
}
