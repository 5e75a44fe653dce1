use super::{
    cors_config, server_config::ServerConfig, shopping_list_config::ShoppingListConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub shopping_list: ShoppingListConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            shopping_list: ShoppingListConfig::from_env(),
        }
    }
}
