use super::errors::ShoppingItemError;
use super::model::ShoppingItem;
use super::value_objects::ItemId;

pub struct AddShoppingItemParams {
    pub name: String,
    pub quantity: i32,
    pub notes: Option<String>,
}

pub struct UpdateShoppingItemParams {
    pub id: ItemId,
    pub name: String,
    pub quantity: i32,
    pub notes: Option<String>,
}

/// Service port for managing the shopping list.
///
/// Items keep the order in which they were added until `reorder` is called.
/// An unknown id is an ordinary outcome, reported as `None` or `false`;
/// only field validation produces an error.
pub trait ShoppingListService: Send + Sync {
    /// Snapshot of every item, in list order.
    fn get_all(&self) -> Vec<ShoppingItem>;

    /// Number of items in the list, without copying them.
    fn count(&self) -> usize;

    fn get_by_id(&self, id: &ItemId) -> Option<ShoppingItem>;

    /// Validates the fields and appends the new item to the end of the list.
    fn add(&self, params: AddShoppingItemParams) -> Result<ShoppingItem, ShoppingItemError>;

    /// Replaces the fields of an existing item, keeping its id and position.
    /// Returns `Ok(None)` when no item has the given id.
    fn update(
        &self,
        params: UpdateShoppingItemParams,
    ) -> Result<Option<ShoppingItem>, ShoppingItemError>;

    fn delete(&self, id: &ItemId) -> bool;

    /// Items whose name contains `query`, ignoring case. An empty query
    /// matches everything.
    fn search(&self, query: &str) -> Vec<ShoppingItem>;

    /// Removes every purchased item and returns how many were removed.
    fn clear_purchased(&self) -> usize;

    fn toggle_purchased(&self, id: &ItemId) -> bool;

    /// Rearranges the list to follow `ordered_ids`, which must be a
    /// permutation of the current ids. Anything else is rejected and the
    /// list is left as it was.
    fn reorder(&self, ordered_ids: &[ItemId]) -> bool;
}
