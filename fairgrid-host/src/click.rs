//! Click, drag and close classification for container interactions.

/// The mouse or keyboard gesture behind a container click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickType {
    /// Left mouse button.
    Left,
    /// Left mouse button with shift held.
    ShiftLeft,
    /// Right mouse button.
    Right,
    /// Right mouse button with shift held.
    ShiftRight,
    /// Middle mouse button.
    Middle,
    /// A number key (1-9) swapping with the hotbar.
    NumberKey,
    /// Double left click collecting matching items.
    DoubleClick,
    /// Drop key (Q).
    Drop,
    /// Drop key with control held (drops the full stack).
    ControlDrop,
    /// Offhand swap key (F).
    SwapOffhand,
    /// A click the host could not classify.
    Unknown,
}

impl ClickType {
    /// Returns true for left clicks, shifted or not.
    #[must_use]
    pub fn is_left_click(self) -> bool {
        matches!(self, Self::Left | Self::ShiftLeft | Self::DoubleClick)
    }

    /// Returns true for right clicks, shifted or not.
    #[must_use]
    pub fn is_right_click(self) -> bool {
        matches!(self, Self::Right | Self::ShiftRight)
    }

    /// Returns true when shift was held.
    #[must_use]
    pub fn is_shift_click(self) -> bool {
        matches!(self, Self::ShiftLeft | Self::ShiftRight)
    }

    /// Returns true for keyboard-driven clicks.
    #[must_use]
    pub fn is_keyboard_click(self) -> bool {
        matches!(
            self,
            Self::NumberKey | Self::Drop | Self::ControlDrop | Self::SwapOffhand
        )
    }
}

/// What the host will do with the clicked items if nothing cancels it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InventoryAction {
    /// No items change.
    Nothing,
    /// The whole slot stack moves to the cursor.
    PickupAll,
    /// Half the slot stack moves to the cursor.
    PickupHalf,
    /// One item of the slot stack moves to the cursor.
    PickupOne,
    /// The whole cursor stack is placed into the slot.
    PlaceAll,
    /// Part of the cursor stack is placed into the slot.
    PlaceSome,
    /// One item of the cursor stack is placed into the slot.
    PlaceOne,
    /// Cursor and slot stacks swap.
    SwapWithCursor,
    /// The whole cursor stack is dropped into the world.
    DropAllCursor,
    /// One item of the cursor stack is dropped into the world.
    DropOneCursor,
    /// The whole slot stack is dropped into the world.
    DropAllSlot,
    /// One item of the slot stack is dropped into the world.
    DropOneSlot,
    /// The slot stack moves to the other sub-window (shift-click).
    MoveToOtherInventory,
    /// The slot stack swaps with a hotbar slot.
    HotbarSwap,
    /// A full copy of the slot stack lands on the cursor (creative).
    CloneStack,
    /// All matching items collect onto the cursor (double click).
    CollectToCursor,
    /// The host could not classify the action.
    Unknown,
}

/// How a drag distributes the cursor stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragType {
    /// The dragged stack is split evenly across the slots.
    Even,
    /// One item is placed in each dragged slot.
    Single,
}

/// Why a container closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The viewer closed the window.
    Player,
    /// Another container was opened over this one.
    OpenNew,
    /// Plugin code closed the window.
    Plugin,
    /// The viewer disconnected.
    Disconnect,
    /// The viewer teleported away.
    Teleport,
    /// The viewer died.
    Death,
    /// The host did not say.
    Unknown,
}
