use std::sync::Arc;

use logger::TracingLogger;

use business::application::shopping_item::demo::demo_items;
use business::application::shopping_item::service::ShoppingListServiceImpl;

use crate::config::shopping_list_config::ShoppingListConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub shopping_item_api: crate::api::shopping_item::routes::ShoppingItemApi,
}

impl DependencyContainer {
    pub fn new(config: &ShoppingListConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let initial_items = if config.seed_demo_items {
            let items = demo_items()?;
            tracing::info!("Seeding shopping list with {} demo items", items.len());
            items
        } else {
            Vec::new()
        };

        let shopping_list_service =
            Arc::new(ShoppingListServiceImpl::with_items(initial_items, logger));

        let health_api = crate::api::health::routes::Api::new(shopping_list_service.clone());
        let shopping_item_api =
            crate::api::shopping_item::routes::ShoppingItemApi::new(shopping_list_service);

        Ok(Self {
            health_api,
            shopping_item_api,
        })
    }
}
