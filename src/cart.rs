use std::sync::Arc;

use dashmap::DashMap;
use indexmap::IndexMap;
use tokio::sync::Mutex;

/// A single cart line. Entries with quantity 0 are never stored; removal
/// deletes the key instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    pub quantity: u32,
    pub unit_price: i64,
}

/// Per-user order cart. Lives for the whole process; `items` is cleared on
/// order confirmation while `last_order_id` survives so the receipt can be
/// looked up again.
#[derive(Debug, Default)]
pub struct Cart {
    pub items: IndexMap<String, CartEntry>,
    pub last_order_id: Option<String>,
}

impl Cart {
    /// Adds one unit of `item_id`, inserting the entry at the given unit
    /// price on first add. The price of an existing entry is not updated.
    pub fn add_item(&mut self, item_id: &str, unit_price: i64) {
        let entry = self
            .items
            .entry(item_id.to_string())
            .or_insert(CartEntry {
                quantity: 0,
                unit_price,
            });
        entry.quantity += 1;
    }

    /// Removes one unit of `item_id`; deletes the entry when the quantity
    /// reaches 0. A no-op when the item is not in the cart.
    pub fn remove_item(&mut self, item_id: &str) {
        if let Some(entry) = self.items.get_mut(item_id) {
            entry.quantity -= 1;
            if entry.quantity == 0 {
                self.items.shift_remove(item_id);
            }
        }
    }

    /// Grand total, recomputed on every call.
    pub fn total(&self) -> i64 {
        self.items
            .values()
            .map(|entry| entry.unit_price * entry.quantity as i64)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Itemized order text in insertion order, one line per entry plus the
    /// grand total.
    pub fn summary(&self, name_of: impl Fn(&str) -> String) -> String {
        let lines = self
            .items
            .iter()
            .map(|(item_id, entry)| {
                format!(
                    "- {} x{} = ฿{}",
                    name_of(item_id),
                    entry.quantity,
                    entry.unit_price * entry.quantity as i64
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!("รายการ:\n{}\n\nรวม: ฿{}", lines, self.total())
    }
}

/// Cart storage keyed by platform user id. Implementations must hand out a
/// per-user handle whose mutex serializes concurrent mutation of the same
/// cart; no cross-user locking is required.
pub trait CartStore: Send + Sync {
    /// Returns the user's cart handle, creating an empty cart on first
    /// access.
    fn entry(&self, user_id: &str) -> Arc<Mutex<Cart>>;
}

/// Process-lifetime in-memory store. Carts are never evicted; this is a
/// known limitation of the single-process deployment, not a feature.
#[derive(Default)]
pub struct MemoryCartStore {
    carts: DashMap<String, Arc<Mutex<Cart>>>,
}

impl CartStore for MemoryCartStore {
    fn entry(&self, user_id: &str) -> Arc<Mutex<Cart>> {
        self.carts
            .entry(user_id.to_string())
            .or_default()
            .value()
            .clone()
    }
}
