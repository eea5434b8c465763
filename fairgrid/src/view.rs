//! Managed containers.

use std::sync::{Arc, Weak};

use arc_swap::ArcSwap;
use fairgrid_host::{
    ClickEvent, ClickType, CloseEvent, DragEvent, Inventory, InventoryAction, InventoryHolder,
    OpenEvent, Player,
};
use fairgrid_item::ItemStack;
use parking_lot::Mutex;
use text_components::TextComponent;

use crate::{InventorySize, ItemHandle, options, registry};

type OpenFn = dyn Fn(&OpenEvent) + Send + Sync;
type CloseFn = dyn Fn(&CloseEvent) + Send + Sync;
type ActionFn = dyn Fn(InventoryAction, &ClickEvent) + Send + Sync;
type ClickTypeFn = dyn Fn(ClickType, &ClickEvent) + Send + Sync;
type DragFn = dyn Fn(&DragEvent, &Arc<Player>) + Send + Sync;
type ClosePredicate = dyn Fn(&CloseEvent) -> bool + Send + Sync;
type ClickPredicate = dyn Fn(&ClickEvent) -> bool + Send + Sync;

/// A handler cell: each setter replaces the prior value, and handlers
/// are cloned out before invocation so callbacks may reconfigure the
/// view they were called from.
type Cell<T> = Mutex<Option<T>>;

/// A managed container: a host inventory plus per-slot item handles,
/// container-scope handlers and gating predicates.
///
/// The view is the inventory's holder, which is how the dispatcher
/// recognizes events belonging to it. The host handle is replaced
/// wholesale on title or size changes; the view's identity survives.
pub struct FairView {
    inventory: ArcSwap<Inventory>,
    items: scc::HashMap<usize, Arc<ItemHandle>>,
    open_action: Cell<Arc<OpenFn>>,
    close_action: Cell<Arc<CloseFn>>,
    action_handler: Cell<Arc<ActionFn>>,
    click_type_handler: Cell<Arc<ClickTypeFn>>,
    drag_handler: Cell<Arc<DragFn>>,
    prevent_close: Cell<Arc<ClosePredicate>>,
    cancel_clicks: Cell<Arc<ClickPredicate>>,
    item_click_gate: Cell<Arc<ClickPredicate>>,
}

impl FairView {
    /// Creates a managed container with a plain-text title.
    #[must_use]
    pub fn create(title: &str, size: InventorySize) -> Arc<Self> {
        Self::create_rich(TextComponent::from(title.to_string()), size)
    }

    /// Creates a managed container with a rich title.
    #[must_use]
    pub fn create_rich(title: TextComponent, size: InventorySize) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<Self>| {
            let holder: Weak<dyn InventoryHolder> = weak.clone();
            let inventory = Inventory::with_holder(title, size.get() as usize, holder);
            Self::around(inventory)
        })
    }

    /// Adopts an existing host inventory, taking over as its holder.
    #[must_use]
    pub fn adopt(inventory: Arc<Inventory>) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<Self>| {
            let holder: Weak<dyn InventoryHolder> = weak.clone();
            inventory.set_holder(holder);
            Self::around(inventory)
        })
    }

    fn around(inventory: Arc<Inventory>) -> Self {
        Self {
            inventory: ArcSwap::from(inventory),
            items: scc::HashMap::new(),
            open_action: Mutex::new(None),
            close_action: Mutex::new(None),
            action_handler: Mutex::new(None),
            click_type_handler: Mutex::new(None),
            drag_handler: Mutex::new(None),
            prevent_close: Mutex::new(None),
            cancel_clicks: Mutex::new(None),
            item_click_gate: Mutex::new(None),
        }
    }

    /// Returns the current host inventory handle.
    ///
    /// The handle is replaced on [`Self::change`]; holding on to the
    /// returned `Arc` across a title change observes the old handle.
    #[must_use]
    pub fn inventory(&self) -> Arc<Inventory> {
        self.inventory.load_full()
    }

    fn record(&self, slot: usize, item: &Arc<ItemHandle>) {
        let replacement = item.clone();
        if self
            .items
            .update_sync(&slot, |_, entry| *entry = replacement.clone())
            .is_none()
        {
            let _ = self.items.insert_sync(slot, item.clone());
        }
    }

    // --- content operations ---

    /// Adds the handle's item, recording the handle at the slot the
    /// host reports the item landed in.
    pub fn add(&self, item: &Arc<ItemHandle>) -> &Self {
        let inventory = self.inventory();
        let stack = item.get();
        inventory.add_item(stack.clone());
        if let Some(slot) = inventory.first(&stack) {
            self.record(slot, item);
        } else {
            log::trace!("added item not found in container; no slot handle recorded");
        }
        self
    }

    /// Adds a raw item value; the slot map is untouched.
    pub fn add_stack(&self, stack: ItemStack) -> &Self {
        self.inventory().add_item(stack);
        self
    }

    /// Places the handle's item at a 1-based slot and records it.
    pub fn set(&self, slot: usize, item: &Arc<ItemHandle>) -> &Self {
        assert!(slot >= 1, "set takes 1-based slots");
        self.set_at(slot - 1, item)
    }

    /// Places the handle's item at a 0-based slot and records it.
    pub fn set_at(&self, slot: usize, item: &Arc<ItemHandle>) -> &Self {
        self.inventory().set_item(slot, item.get());
        self.record(slot, item);
        self
    }

    /// Places a raw item value at a 1-based slot; the slot map is
    /// untouched.
    pub fn set_stack(&self, slot: usize, stack: ItemStack) -> &Self {
        assert!(slot >= 1, "set_stack takes 1-based slots");
        self.set_stack_at(slot - 1, stack)
    }

    /// Places a raw item value at a 0-based slot; the slot map is
    /// untouched.
    pub fn set_stack_at(&self, slot: usize, stack: ItemStack) -> &Self {
        self.inventory().set_item(slot, stack);
        self
    }

    /// Returns the item at a 0-based slot.
    #[must_use]
    pub fn get(&self, slot: usize) -> ItemStack {
        self.inventory().get_item(slot)
    }

    /// Returns the first slot holding an item similar to `item`.
    #[must_use]
    pub fn first(&self, item: &ItemStack) -> Option<usize> {
        self.inventory().first(item)
    }

    /// Returns the first empty slot.
    #[must_use]
    pub fn first_empty(&self) -> Option<usize> {
        self.inventory().first_empty()
    }

    /// Returns true if any slot holds exactly `item`.
    #[must_use]
    pub fn contains(&self, item: &ItemStack) -> bool {
        self.inventory().contains(item)
    }

    /// Returns true if the container holds at least `amount` items
    /// similar to `item`.
    #[must_use]
    pub fn contains_at_least(&self, item: &ItemStack, amount: i32) -> bool {
        self.inventory().contains_at_least(item, amount)
    }

    /// Returns a copy of the full contents array.
    #[must_use]
    pub fn contents(&self) -> Vec<ItemStack> {
        self.inventory().contents()
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.inventory().size()
    }

    /// Returns the number of rows, rounding partial rows up.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.size().div_ceil(9)
    }

    /// Empties every slot.
    pub fn clear(&self) {
        self.inventory().clear();
    }

    /// Empties a 0-based slot.
    pub fn clear_slot(&self, slot: usize) {
        self.inventory().clear_slot(slot);
    }

    /// Removes up to `item.count()` matching items.
    pub fn remove(&self, item: &ItemStack) {
        self.inventory().remove_item(item);
    }

    /// Removes matching items from any slot.
    pub fn remove_any_slot(&self, item: &ItemStack) {
        self.inventory().remove_item_any_slot(item);
    }

    // --- event configuration ---

    /// Sets the open handler.
    pub fn open<F: Fn(&OpenEvent) + Send + Sync + 'static>(&self, action: F) -> &Self {
        *self.open_action.lock() = Some(Arc::new(action));
        self
    }

    /// Sets the close handler.
    pub fn close<F: Fn(&CloseEvent) + Send + Sync + 'static>(&self, action: F) -> &Self {
        *self.close_action.lock() = Some(Arc::new(action));
        self
    }

    /// Sets the handler receiving `(action, click event)`.
    pub fn action<F: Fn(InventoryAction, &ClickEvent) + Send + Sync + 'static>(
        &self,
        handler: F,
    ) -> &Self {
        *self.action_handler.lock() = Some(Arc::new(handler));
        self
    }

    /// Sets the handler receiving `(click type, click event)`.
    pub fn click_type<F: Fn(ClickType, &ClickEvent) + Send + Sync + 'static>(
        &self,
        handler: F,
    ) -> &Self {
        *self.click_type_handler.lock() = Some(Arc::new(handler));
        self
    }

    /// Sets the drag handler, which also receives the dragging viewer.
    pub fn drag<F: Fn(&DragEvent, &Arc<Player>) + Send + Sync + 'static>(
        &self,
        handler: F,
    ) -> &Self {
        *self.drag_handler.lock() = Some(Arc::new(handler));
        self
    }

    /// Prevents (or allows) closing unconditionally.
    pub fn prevent_close(&self, prevent: bool) -> &Self {
        self.prevent_close_if(move |_| prevent)
    }

    /// Prevents closing whenever the predicate holds for the event.
    pub fn prevent_close_if<F: Fn(&CloseEvent) -> bool + Send + Sync + 'static>(
        &self,
        condition: F,
    ) -> &Self {
        *self.prevent_close.lock() = Some(Arc::new(condition));
        self
    }

    /// Cancels (or allows) item movement on every click.
    pub fn prevent_clicks(&self, prevent: bool) -> &Self {
        self.prevent_clicks_if(move |_| prevent)
    }

    /// Cancels item movement whenever the predicate holds for the
    /// click.
    pub fn prevent_clicks_if<F: Fn(&ClickEvent) -> bool + Send + Sync + 'static>(
        &self,
        condition: F,
    ) -> &Self {
        *self.cancel_clicks.lock() = Some(Arc::new(condition));
        self
    }

    /// Gates all click dispatch: when the predicate rejects a click,
    /// neither the per-slot handler nor the container-scope handlers
    /// run.
    pub fn item_click_condition<F: Fn(&ClickEvent) -> bool + Send + Sync + 'static>(
        &self,
        condition: F,
    ) -> &Self {
        *self.item_click_gate.lock() = Some(Arc::new(condition));
        self
    }

    // --- title and size changes ---

    /// Retitles the container, keeping its size.
    ///
    /// The host cannot retitle in place: a new inventory is created,
    /// the contents array is copied across and the stored handle is
    /// replaced. External references to the old handle go stale.
    pub fn change(self: &Arc<Self>, title: &str) -> &Self {
        self.change_rich(TextComponent::from(title.to_string()))
    }

    /// Retitles the container with a rich title, keeping its size.
    pub fn change_rich(self: &Arc<Self>, title: TextComponent) -> &Self {
        let size = self.size();
        self.rebuild(title, size);
        self
    }

    /// Retitles and resizes the container.
    ///
    /// Slot-map entries beyond a shrunk size are kept: they are
    /// unreachable until the container grows back over them.
    pub fn change_sized(self: &Arc<Self>, title: &str, size: InventorySize) -> &Self {
        self.change_sized_rich(TextComponent::from(title.to_string()), size)
    }

    /// Retitles and resizes the container with a rich title.
    pub fn change_sized_rich(self: &Arc<Self>, title: TextComponent, size: InventorySize) -> &Self {
        self.rebuild(title, size.get() as usize);
        self
    }

    fn rebuild(self: &Arc<Self>, title: TextComponent, size: usize) {
        let holder: Weak<Self> = Arc::downgrade(self);
        let holder: Weak<dyn InventoryHolder> = holder;
        let old = self.inventory();
        let replacement = Inventory::with_holder(title, size, holder);
        replacement.set_contents(old.contents());
        self.inventory.store(replacement);
        log::trace!("container {} rebuilt as {}", old.id(), self.inventory().id());
    }

    /// Opens this container for a viewer.
    ///
    /// The open is marshalled onto the host main thread via the
    /// scheduler, so this is safe to call from any thread. Requires
    /// [`crate::init`].
    pub fn show(self: &Arc<Self>, player: &Arc<Player>) {
        let view = self.clone();
        let player = player.clone();
        registry::host().scheduler().run_task(Box::new(move || {
            player.open_inventory(view.inventory());
        }));
    }

    // --- event entry points, called by the dispatcher ---

    /// Handles a container open.
    pub fn handle_open(&self, event: &OpenEvent) {
        let action = self.open_action.lock().clone();
        if let Some(action) = action {
            action(event);
        }
    }

    /// Handles a container close.
    ///
    /// When the prevent-close predicate holds, the close handler is
    /// skipped and the container is reopened for the viewer one tick
    /// later; the host delivers the close before the viewer has fully
    /// detached, so a synchronous reopen would be lost.
    pub fn handle_close(self: &Arc<Self>, event: &CloseEvent) {
        let prevent = self.prevent_close.lock().clone();
        if let Some(condition) = prevent {
            if condition(event) {
                let view = self.clone();
                let player = event.player().clone();
                registry::host()
                    .scheduler()
                    .run_task_later(1, Box::new(move || {
                        player.open_inventory(view.inventory());
                    }));
                return;
            }
        }
        let action = self.close_action.lock().clone();
        if let Some(action) = action {
            action(event);
        }
    }

    /// Handles a container click.
    ///
    /// Order is fixed: cancel-clicks predicate, item-click gate,
    /// per-slot handler, action handler, click-type handler. The
    /// per-slot step is skipped for clicks outside the container's own
    /// grid unless the process-wide option says otherwise.
    pub fn handle_click(&self, event: &ClickEvent) {
        let cancel = self.cancel_clicks.lock().clone();
        if let Some(condition) = cancel {
            if condition(event) {
                event.set_cancelled(true);
            }
        }

        let gate = self.item_click_gate.lock().clone();
        if let Some(condition) = gate {
            if !condition(event) {
                return;
            }
        }

        let slot_dispatch = event.in_view() || !options::trigger_click_on_main_inventory();
        if slot_dispatch && event.slot() >= 0 {
            let handle = self
                .items
                .read_sync(&(event.slot() as usize), |_, item| item.clone());
            if let Some(handle) = handle {
                handle.handle_click(event);
            }
        }

        let action = self.action_handler.lock().clone();
        if let Some(handler) = action {
            handler(event.action(), event);
        }

        let click_type = self.click_type_handler.lock().clone();
        if let Some(handler) = click_type {
            handler(event.click_type(), event);
        }
    }

    /// Handles a container drag.
    pub fn handle_drag(&self, event: &DragEvent) {
        let handler = self.drag_handler.lock().clone();
        if let Some(handler) = handler {
            handler(event, event.player());
        }
    }
}

impl InventoryHolder for FairView {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_arc(self: Arc<Self>) -> Arc<dyn std::any::Any + Send + Sync> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use fairgrid_host::EventBus;
    use fairgrid_item::Material;

    fn viewer() -> Arc<Player> {
        Player::new("viewer", Arc::new(EventBus::new()))
    }

    fn click_at(view: &Arc<FairView>, raw_slot: i32) -> ClickEvent {
        ClickEvent::new(
            viewer(),
            view.inventory(),
            raw_slot,
            ClickType::Left,
            InventoryAction::PickupAll,
        )
    }

    #[test]
    fn holder_identity_survives_rebuild() {
        let view = FairView::create("menu", InventorySize::rows(3));
        let holder = view.inventory().holder().expect("holder set");
        assert!(holder.as_any().downcast_ref::<FairView>().is_some());

        view.change("renamed");
        let holder = view.inventory().holder().expect("holder survives change");
        let recovered = holder
            .as_any_arc()
            .downcast::<FairView>()
            .expect("holder is the view");
        assert!(Arc::ptr_eq(&recovered, &view));
    }

    #[test]
    fn set_is_one_based_and_set_at_is_not() {
        let view = FairView::create("menu", InventorySize::rows(1));
        let button = ItemHandle::of(Material::Emerald);

        view.set(5, &button);
        assert_eq!(view.get(4).material(), Material::Emerald);

        let other = ItemHandle::of(Material::Diamond);
        view.set_at(7, &other);
        assert_eq!(view.get(7).material(), Material::Diamond);
    }

    #[test]
    fn click_pipeline_order() {
        let view = FairView::create("menu", InventorySize::rows(1));
        let order = Arc::new(Mutex::new(Vec::new()));

        let log = order.clone();
        let button = ItemHandle::of(Material::Emerald);
        button.click(move |_| log.lock().push("slot"));
        view.set_at(0, &button);

        let log = order.clone();
        view.action(move |_, _| log.lock().push("action"));
        let log = order.clone();
        view.click_type(move |_, _| log.lock().push("click_type"));
        view.prevent_clicks(true);

        let event = click_at(&view, 0);
        view.handle_click(&event);

        assert!(event.is_cancelled());
        assert_eq!(*order.lock(), vec!["slot", "action", "click_type"]);
    }

    #[test]
    fn gate_blocks_all_click_dispatch() {
        let view = FairView::create("menu", InventorySize::rows(1));
        let calls = Arc::new(AtomicUsize::new(0));

        let count = calls.clone();
        let button = ItemHandle::of(Material::Emerald);
        button.click(move |_| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        view.set_at(0, &button);

        let count = calls.clone();
        view.action(move |_, _| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        view.item_click_condition(|_| false);

        view.handle_click(&click_at(&view, 0));
        assert_eq!(calls.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn lower_window_clicks_skip_slot_handlers() {
        let view = FairView::create("menu", InventorySize::rows(1));
        let slot_calls = Arc::new(AtomicUsize::new(0));
        let scope_calls = Arc::new(AtomicUsize::new(0));

        let count = slot_calls.clone();
        let button = ItemHandle::of(Material::Emerald);
        button.click(move |_| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        view.set_at(3, &button);

        let count = scope_calls.clone();
        view.click_type(move |_, event| {
            assert!(!event.in_view());
            count.fetch_add(1, Ordering::Relaxed);
        });

        // Raw slot 12 of a 9-slot view is slot 3 of the viewer's own
        // inventory: same index the handle sits at, different window.
        view.handle_click(&click_at(&view, 12));
        assert_eq!(slot_calls.load(Ordering::Relaxed), 0);
        assert_eq!(scope_calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn handler_can_reconfigure_its_own_view() {
        let view = FairView::create("menu", InventorySize::rows(1));
        let inner = view.clone();
        view.action(move |_, _| {
            inner.prevent_clicks(true);
        });
        view.handle_click(&click_at(&view, 0));

        let event = click_at(&view, 0);
        view.handle_click(&event);
        assert!(event.is_cancelled());
    }

    #[test]
    fn rebuild_copies_contents_and_keeps_slot_map() {
        let view = FairView::create("menu", InventorySize::rows(2));
        let button = ItemHandle::of(Material::Diamond);
        view.set_at(10, &button);
        view.set_stack_at(2, ItemStack::with_count(Material::Stone, 7));

        let old = view.inventory();
        view.change("renamed");
        let new = view.inventory();

        assert!(!Arc::ptr_eq(&old, &new));
        for slot in 0..view.size() {
            assert!(old.get_item(slot).matches(&new.get_item(slot)));
        }

        // Slot handle still dispatches after the swap.
        let calls = Arc::new(AtomicUsize::new(0));
        let count = calls.clone();
        button.click(move |_| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        view.handle_click(&click_at(&view, 10));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn shrinking_keeps_stale_slot_entries_dormant() {
        let view = FairView::create("menu", InventorySize::rows(2));
        let calls = Arc::new(AtomicUsize::new(0));
        let count = calls.clone();
        let button = ItemHandle::of(Material::Emerald);
        button.click(move |_| {
            count.fetch_add(1, Ordering::Relaxed);
        });
        view.set_at(12, &button);

        view.change_sized("small", InventorySize::rows(1));
        assert_eq!(view.size(), 9);

        // Raw slot 12 now lands in the viewer's inventory; the dormant
        // entry does not fire.
        view.handle_click(&click_at(&view, 12));
        assert_eq!(calls.load(Ordering::Relaxed), 0);

        // Growing back restores it.
        view.change_sized("big", InventorySize::rows(2));
        view.handle_click(&click_at(&view, 12));
        assert_eq!(calls.load(Ordering::Relaxed), 1);
    }
}
