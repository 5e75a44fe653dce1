pub mod application {
    pub mod shopping_item {
        pub mod demo;
        pub mod service;
    }
}

pub mod domain {
    pub mod logger;
    pub mod shopping_item {
        pub mod errors;
        pub mod model;
        pub mod service;
        pub mod value_objects;
    }
}
