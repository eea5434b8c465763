//! Enchantment definitions.

use serde::{Deserialize, Serialize};

/// An enchantment that can be applied to an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Enchantment {
    Sharpness,
    Smite,
    BaneOfArthropods,
    Knockback,
    FireAspect,
    Looting,
    Efficiency,
    SilkTouch,
    Unbreaking,
    Fortune,
    Power,
    Punch,
    Flame,
    Infinity,
    Mending,
    Protection,
    Thorns,
}

impl Enchantment {
    /// Returns the maximum level obtainable in survival play.
    ///
    /// Levels above this are still legal when the caller opts out of
    /// level restrictions.
    #[must_use]
    pub fn max_level(self) -> u32 {
        match self {
            Self::Sharpness | Self::Smite | Self::BaneOfArthropods | Self::Efficiency
            | Self::Power => 5,
            Self::Knockback | Self::FireAspect | Self::Punch => 2,
            Self::Looting | Self::Unbreaking | Self::Fortune | Self::Thorns => 3,
            Self::SilkTouch | Self::Flame | Self::Infinity | Self::Mending => 1,
            Self::Protection => 4,
        }
    }

    /// Returns the namespaced registry key for this enchantment.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Sharpness => "minecraft:sharpness",
            Self::Smite => "minecraft:smite",
            Self::BaneOfArthropods => "minecraft:bane_of_arthropods",
            Self::Knockback => "minecraft:knockback",
            Self::FireAspect => "minecraft:fire_aspect",
            Self::Looting => "minecraft:looting",
            Self::Efficiency => "minecraft:efficiency",
            Self::SilkTouch => "minecraft:silk_touch",
            Self::Unbreaking => "minecraft:unbreaking",
            Self::Fortune => "minecraft:fortune",
            Self::Power => "minecraft:power",
            Self::Punch => "minecraft:punch",
            Self::Flame => "minecraft:flame",
            Self::Infinity => "minecraft:infinity",
            Self::Mending => "minecraft:mending",
            Self::Protection => "minecraft:protection",
            Self::Thorns => "minecraft:thorns",
        }
    }
}
