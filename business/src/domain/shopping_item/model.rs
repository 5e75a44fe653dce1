use super::errors::ShoppingItemError;
use super::value_objects::ItemId;

/// One entry of the shopping list.
///
/// Fields are private so every assignment goes through a setter that
/// enforces the item's invariants:
/// - `name` is trimmed and never empty.
/// - `quantity` is always at least 1.
/// - `id` never changes once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingItem {
    id: ItemId,
    name: String,
    quantity: i32,
    notes: Option<String>,
    is_purchased: bool,
}

impl Default for ShoppingItem {
    fn default() -> Self {
        Self::new()
    }
}

impl ShoppingItem {
    /// Creates an item with a fresh id and default field values.
    pub fn new() -> Self {
        Self {
            id: ItemId::generate(),
            name: String::new(),
            quantity: 1,
            notes: None,
            is_purchased: false,
        }
    }

    /// Creates an item and assigns its fields through the validating setters.
    pub fn with_details(
        name: &str,
        quantity: i32,
        notes: Option<String>,
    ) -> Result<Self, ShoppingItemError> {
        let mut item = Self::new();
        item.set_name(name)?;
        item.set_quantity(quantity);
        item.set_notes(notes);
        Ok(item)
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_purchased(&self) -> bool {
        self.is_purchased
    }

    /// Stores the trimmed name. Rejects empty or whitespace-only input and
    /// leaves the current name untouched in that case.
    pub fn set_name(&mut self, name: &str) -> Result<(), ShoppingItemError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ShoppingItemError::NameEmpty);
        }
        self.name = trimmed.to_string();
        Ok(())
    }

    /// Non-positive quantities are stored as 1.
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = if quantity <= 0 { 1 } else { quantity };
    }

    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes;
    }

    pub fn set_purchased(&mut self, is_purchased: bool) {
        self.is_purchased = is_purchased;
    }

    pub fn toggle_purchased(&mut self) {
        self.is_purchased = !self.is_purchased;
    }
}
