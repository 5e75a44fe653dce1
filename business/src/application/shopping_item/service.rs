use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::logger::Logger;
use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;
use crate::domain::shopping_item::service::{
    AddShoppingItemParams, ShoppingListService, UpdateShoppingItemParams,
};
use crate::domain::shopping_item::value_objects::ItemId;

/// In-memory shopping list.
///
/// Every operation holds the lock for its whole duration, so readers never
/// see a half-applied update or reorder.
pub struct ShoppingListServiceImpl {
    items: RwLock<Vec<ShoppingItem>>,
    logger: Arc<dyn Logger>,
}

impl ShoppingListServiceImpl {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self::with_items(Vec::new(), logger)
    }

    /// Starts the list with `items`, in the given order.
    pub fn with_items(items: Vec<ShoppingItem>, logger: Arc<dyn Logger>) -> Self {
        Self {
            items: RwLock::new(items),
            logger,
        }
    }
}

fn position_of(items: &[ShoppingItem], id: &ItemId) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

impl ShoppingListService for ShoppingListServiceImpl {
    fn get_all(&self) -> Vec<ShoppingItem> {
        let items = self.items.read().clone();
        self.logger
            .debug(&format!("Retrieved {} shopping items", items.len()));
        items
    }

    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn get_by_id(&self, id: &ItemId) -> Option<ShoppingItem> {
        let items = self.items.read();
        let found = items.iter().find(|item| item.id() == id).cloned();
        if found.is_none() {
            self.logger
                .warn(&format!("Shopping item not found: {}", id));
        }
        found
    }

    fn add(&self, params: AddShoppingItemParams) -> Result<ShoppingItem, ShoppingItemError> {
        self.logger
            .info(&format!("Adding shopping item: {}", params.name));

        let item = ShoppingItem::with_details(&params.name, params.quantity, params.notes)?;
        self.items.write().push(item.clone());

        self.logger
            .info(&format!("Shopping item added: {}", item.id()));
        Ok(item)
    }

    fn update(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<Option<ShoppingItem>, ShoppingItemError> {
        self.logger
            .info(&format!("Updating shopping item: {}", params.id));

        let mut items = self.items.write();
        let Some(index) = position_of(&items, &params.id) else {
            self.logger
                .warn(&format!("Shopping item not found: {}", params.id));
            return Ok(None);
        };

        // Apply to a copy so a rejected name leaves the stored item intact.
        let mut updated = items[index].clone();
        updated.set_name(&params.name)?;
        updated.set_quantity(params.quantity);
        updated.set_notes(params.notes);
        items[index] = updated.clone();

        self.logger
            .info(&format!("Shopping item updated: {}", updated.id()));
        Ok(Some(updated))
    }

    fn delete(&self, id: &ItemId) -> bool {
        self.logger.info(&format!("Deleting shopping item: {}", id));

        let mut items = self.items.write();
        match position_of(&items, id) {
            Some(index) => {
                items.remove(index);
                self.logger
                    .info(&format!("Shopping item deleted: {}", id));
                true
            }
            None => {
                self.logger
                    .warn(&format!("Shopping item not found: {}", id));
                false
            }
        }
    }

    fn search(&self, query: &str) -> Vec<ShoppingItem> {
        let needle = query.to_lowercase();
        let matches: Vec<ShoppingItem> = self
            .items
            .read()
            .iter()
            .filter(|item| item.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();

        self.logger.debug(&format!(
            "Search '{}' matched {} shopping items",
            query,
            matches.len()
        ));
        matches
    }

    fn clear_purchased(&self) -> usize {
        self.logger.info("Clearing purchased shopping items");

        let mut items = self.items.write();
        let before = items.len();
        items.retain(|item| !item.is_purchased());
        let count = before - items.len();

        self.logger
            .info(&format!("Cleared {} purchased shopping items", count));
        count
    }

    fn toggle_purchased(&self, id: &ItemId) -> bool {
        let mut items = self.items.write();
        match items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.toggle_purchased();
                self.logger.info(&format!(
                    "Shopping item {} marked as {}",
                    id,
                    if item.is_purchased() {
                        "purchased"
                    } else {
                        "pending"
                    }
                ));
                true
            }
            None => {
                self.logger
                    .warn(&format!("Shopping item not found: {}", id));
                false
            }
        }
    }

    fn reorder(&self, ordered_ids: &[ItemId]) -> bool {
        self.logger.info(&format!(
            "Reordering shopping list with {} ids",
            ordered_ids.len()
        ));

        let mut items = self.items.write();
        let positions: HashMap<&ItemId, usize> = ordered_ids
            .iter()
            .enumerate()
            .map(|(position, id)| (id, position))
            .collect();

        // Same size, no duplicates, and every current id present means the
        // request is an exact permutation of the list.
        let is_permutation = positions.len() == ordered_ids.len()
            && ordered_ids.len() == items.len()
            && items.iter().all(|item| positions.contains_key(item.id()));

        if !is_permutation {
            self.logger
                .warn("Rejected reorder: ids do not match the current shopping list");
            return false;
        }

        items.sort_by_key(|item| {
            positions
                .get(item.id())
                .copied()
                .unwrap_or(usize::MAX)
        });

        self.logger.info("Shopping list reordered");
        true
    }
}
