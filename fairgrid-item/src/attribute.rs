//! Attribute modifiers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entity attribute an item can modify while held or worn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Attribute {
    MaxHealth,
    AttackDamage,
    AttackSpeed,
    MovementSpeed,
    Armor,
    ArmorToughness,
    KnockbackResistance,
    Luck,
}

/// How a modifier combines with the attribute's base value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeOperation {
    /// Adds the amount to the base value.
    AddNumber,
    /// Adds `base * amount` to the base value.
    AddScalar,
    /// Multiplies the final value by `1 + amount`.
    MultiplyScalar,
}

/// A single modification applied to an [`Attribute`].
///
/// Modifiers are identified by uuid; removing a modifier removes the
/// entry with the same uuid regardless of amount or operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeModifier {
    /// Unique identity of this modifier.
    pub id: Uuid,
    /// The amount fed into the operation.
    pub amount: f64,
    /// How the amount combines with the base value.
    pub operation: AttributeOperation,
}

impl AttributeModifier {
    /// Creates a modifier with a fresh random identity.
    #[must_use]
    pub fn new(amount: f64, operation: AttributeOperation) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            operation,
        }
    }
}
