/// Validation errors raised when a shopping item field rejects a value.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShoppingItemError {
    /// Name was empty or only whitespace.
    #[error("shopping_item.name_empty")]
    NameEmpty,
}

impl ShoppingItemError {
    /// Name of the parameter that was rejected.
    pub fn param(&self) -> &'static str {
        match self {
            ShoppingItemError::NameEmpty => "name",
        }
    }
}
