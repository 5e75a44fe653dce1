use std::env;

/// Settings for the in-memory shopping list.
#[derive(Debug, Clone, Default)]
pub struct ShoppingListConfig {
    pub seed_demo_items: bool,
}

impl ShoppingListConfig {
    /// Environment variables:
    /// - SEED_DEMO_ITEMS: "true", "1" or "yes" starts the list with demo items
    ///   (default: empty list)
    pub fn from_env() -> Self {
        let seed_demo_items = env::var("SEED_DEMO_ITEMS")
            .map(|raw| is_enabled(&raw))
            .unwrap_or(false);

        Self { seed_demo_items }
    }
}

fn is_enabled(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
