pub mod error;
pub mod health;
pub mod shopping_item;
pub mod tags;
