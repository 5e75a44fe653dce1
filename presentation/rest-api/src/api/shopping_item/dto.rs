use poem_openapi::Object;

use business::domain::shopping_item::model::ShoppingItem;

#[derive(Debug, Clone, Object)]
pub struct CreateShoppingItemRequest {
    /// Item name (cannot be empty, surrounding whitespace is trimmed)
    pub name: String,
    /// How many to buy; values below 1 are stored as 1 (default: 1)
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
    /// Free-form notes, stored as given
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateShoppingItemRequest {
    /// New item name
    pub name: String,
    /// New quantity; values below 1 are stored as 1
    pub quantity: i32,
    /// New notes; omitting them clears the existing notes
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ReorderShoppingItemsRequest {
    /// Every item id, in the desired order
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Object)]
pub struct ShoppingItemResponse {
    /// Shopping item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Quantity to buy
    pub quantity: i32,
    /// Free-form notes
    #[oai(skip_serializing_if_is_none)]
    pub notes: Option<String>,
    /// Whether the item has been purchased
    pub is_purchased: bool,
}

impl From<ShoppingItem> for ShoppingItemResponse {
    fn from(item: ShoppingItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.name().to_string(),
            quantity: item.quantity(),
            notes: item.notes().map(str::to_string),
            is_purchased: item.is_purchased(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ClearPurchasedResponse {
    /// Number of items cleared
    pub count: u64,
}
