use crate::domain::shopping_item::errors::ShoppingItemError;
use crate::domain::shopping_item::model::ShoppingItem;

/// Sample entries used to populate an empty list for UI demonstration.
pub fn demo_items() -> Result<Vec<ShoppingItem>, ShoppingItemError> {
    let milk = ShoppingItem::with_details("Milk", 2, Some("Semi-skimmed".to_string()))?;
    let bread = ShoppingItem::with_details("Bread", 1, Some("Whole grain".to_string()))?;
    let eggs = ShoppingItem::with_details("Eggs", 12, None)?;
    let mut apples = ShoppingItem::with_details("Apples", 6, Some("Pink Lady".to_string()))?;
    apples.set_purchased(true);

    Ok(vec![milk, bread, eggs, apples])
}
