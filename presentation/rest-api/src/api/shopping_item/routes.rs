use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shopping_item::model::ShoppingItem;
use business::domain::shopping_item::service::{
    AddShoppingItemParams, ShoppingListService, UpdateShoppingItemParams,
};
use business::domain::shopping_item::value_objects::ItemId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::shopping_item::dto::{
    ClearPurchasedResponse, CreateShoppingItemRequest, ReorderShoppingItemsRequest,
    ShoppingItemResponse, UpdateShoppingItemRequest,
};
use crate::api::shopping_item::error_mapper::{invalid_order, not_found};
use crate::api::tags::ApiTags;

pub struct ShoppingItemApi {
    service: Arc<dyn ShoppingListService>,
}

impl ShoppingItemApi {
    pub fn new(service: Arc<dyn ShoppingListService>) -> Self {
        Self { service }
    }
}

fn to_responses(items: Vec<ShoppingItem>) -> Vec<ShoppingItemResponse> {
    items.into_iter().map(|i| i.into()).collect()
}

/// Shopping list management API
///
/// Endpoints for managing shopping list items.
#[OpenApi]
impl ShoppingItemApi {
    /// List all shopping items
    ///
    /// Returns every item in list order.
    #[oai(
        path = "/shopping-items",
        method = "get",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn get_all(&self) -> Json<Vec<ShoppingItemResponse>> {
        Json(to_responses(self.service.get_all()))
    }

    /// Search shopping items
    ///
    /// Returns the items whose name contains `query`, ignoring case.
    /// An empty or missing query returns every item.
    #[oai(
        path = "/shopping-items/search",
        method = "get",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn search(&self, query: Query<Option<String>>) -> Json<Vec<ShoppingItemResponse>> {
        let query = query.0.unwrap_or_default();
        Json(to_responses(self.service.search(&query)))
    }

    /// Get a shopping item
    #[oai(
        path = "/shopping-items/:id",
        method = "get",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn get_by_id(&self, id: Path<String>) -> GetShoppingItemResponse {
        match self.service.get_by_id(&ItemId::from(id.0)) {
            Some(item) => GetShoppingItemResponse::Ok(Json(item.into())),
            None => GetShoppingItemResponse::NotFound(not_found()),
        }
    }

    /// Create a shopping item
    ///
    /// Appends a new item to the end of the shopping list.
    #[oai(
        path = "/shopping-items",
        method = "post",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn create(&self, body: Json<CreateShoppingItemRequest>) -> CreateShoppingItemResponse {
        let params = AddShoppingItemParams {
            name: body.0.name,
            quantity: body.0.quantity.unwrap_or(1),
            notes: body.0.notes,
        };

        match self.service.add(params) {
            Ok(item) => CreateShoppingItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                CreateShoppingItemResponse::BadRequest(json)
            }
        }
    }

    /// Update a shopping item
    ///
    /// Replaces name, quantity and notes. The item keeps its id, position
    /// and purchased status.
    #[oai(
        path = "/shopping-items/:id",
        method = "put",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<UpdateShoppingItemRequest>,
    ) -> UpdateShoppingItemResponse {
        let params = UpdateShoppingItemParams {
            id: ItemId::from(id.0),
            name: body.0.name,
            quantity: body.0.quantity,
            notes: body.0.notes,
        };

        match self.service.update(params) {
            Ok(Some(item)) => UpdateShoppingItemResponse::Ok(Json(item.into())),
            Ok(None) => UpdateShoppingItemResponse::NotFound(not_found()),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                UpdateShoppingItemResponse::BadRequest(json)
            }
        }
    }

    /// Delete a shopping item
    ///
    /// Permanently removes a shopping item from the list.
    #[oai(
        path = "/shopping-items/:id",
        method = "delete",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn delete(&self, id: Path<String>) -> NoContentOrNotFound {
        if self.service.delete(&ItemId::from(id.0)) {
            NoContentOrNotFound::NoContent
        } else {
            NoContentOrNotFound::NotFound(not_found())
        }
    }

    /// Toggle purchased status
    ///
    /// Flips a shopping item between pending and purchased.
    #[oai(
        path = "/shopping-items/:id/toggle",
        method = "post",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn toggle_purchased(&self, id: Path<String>) -> NoContentOrNotFound {
        if self.service.toggle_purchased(&ItemId::from(id.0)) {
            NoContentOrNotFound::NoContent
        } else {
            NoContentOrNotFound::NotFound(not_found())
        }
    }

    /// Clear purchased items
    ///
    /// Removes all shopping items that have been marked as purchased.
    #[oai(
        path = "/shopping-items/purchased",
        method = "delete",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn clear_purchased(&self) -> Json<ClearPurchasedResponse> {
        let count = self.service.clear_purchased();
        Json(ClearPurchasedResponse {
            count: count as u64,
        })
    }

    /// Reorder the shopping list
    ///
    /// `ids` must contain every current item id exactly once. Otherwise the
    /// request is rejected and the order is left unchanged.
    #[oai(
        path = "/shopping-items/order",
        method = "put",
        tag = "ApiTags::ShoppingItems"
    )]
    async fn reorder(
        &self,
        body: Json<ReorderShoppingItemsRequest>,
    ) -> ReorderShoppingItemsResponse {
        let ids: Vec<ItemId> = body.0.ids.into_iter().map(ItemId::from).collect();

        if self.service.reorder(&ids) {
            ReorderShoppingItemsResponse::NoContent
        } else {
            ReorderShoppingItemsResponse::BadRequest(invalid_order())
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShoppingItemResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShoppingItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum NoContentOrNotFound {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ReorderShoppingItemsResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::shopping_item::service::ShoppingListServiceImpl;
    use logger::TracingLogger;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    fn test_client() -> (TestClient<Route>, Arc<ShoppingListServiceImpl>) {
        let service = Arc::new(ShoppingListServiceImpl::new(Arc::new(TracingLogger)));
        let api = OpenApiService::new(ShoppingItemApi::new(service.clone()), "test", "0.0.0");
        (TestClient::new(Route::new().nest("/", api)), service)
    }

    fn seed(service: &ShoppingListServiceImpl, name: &str) -> String {
        service
            .add(AddShoppingItemParams {
                name: name.to_string(),
                quantity: 1,
                notes: None,
            })
            .unwrap()
            .id()
            .to_string()
    }

    #[tokio::test]
    async fn should_create_item_with_default_quantity() {
        let (cli, service) = test_client();

        let resp = cli
            .post("/shopping-items")
            .body_json(&json!({ "name": "  Milk  ", "notes": "2%" }))
            .send()
            .await;

        resp.assert_status(StatusCode::CREATED);
        let json = resp.json().await;
        let body = json.value().object();
        body.get("name").assert_string("Milk");
        body.get("quantity").assert_i64(1);
        body.get("notes").assert_string("2%");
        body.get("is_purchased").assert_bool(false);
        assert_eq!(service.get_all().len(), 1);
    }

    #[tokio::test]
    async fn should_reject_create_when_name_blank() {
        let (cli, service) = test_client();

        let resp = cli
            .post("/shopping-items")
            .body_json(&json!({ "name": "   " }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("shopping_item.name_empty");
        assert!(service.get_all().is_empty());
    }

    #[tokio::test]
    async fn should_list_items_in_order() {
        let (cli, service) = test_client();
        seed(&service, "Milk");
        seed(&service, "Bread");

        let resp = cli.get("/shopping-items").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let items = json.value().array();
        items.assert_len(2);
        items.get(0).object().get("name").assert_string("Milk");
        items.get(1).object().get("name").assert_string("Bread");
    }

    #[tokio::test]
    async fn should_search_items_by_name() {
        let (cli, service) = test_client();
        seed(&service, "Milk");
        seed(&service, "Bread");

        let resp = cli
            .get("/shopping-items/search")
            .query("query", &"MILK")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let items = json.value().array();
        items.assert_len(1);
        items.get(0).object().get("name").assert_string("Milk");
    }

    #[tokio::test]
    async fn should_return_all_items_when_search_query_missing() {
        let (cli, service) = test_client();
        seed(&service, "Milk");
        seed(&service, "Bread");

        let resp = cli.get("/shopping-items/search").send().await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let items = json.value().array();
        items.assert_len(2);
        items.get(0).object().get("name").assert_string("Milk");
        items.get(1).object().get("name").assert_string("Bread");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_item() {
        let (cli, _service) = test_client();

        let resp = cli.get("/shopping-items/does-not-exist").send().await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_update_existing_item() {
        let (cli, service) = test_client();
        let id = seed(&service, "Milk");

        let resp = cli
            .put(format!("/shopping-items/{id}"))
            .body_json(&json!({ "name": "Oat Milk", "quantity": 3 }))
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let body = json.value().object();
        body.get("id").assert_string(&id);
        body.get("name").assert_string("Oat Milk");
        body.get("quantity").assert_i64(3);
    }

    #[tokio::test]
    async fn should_reject_update_when_name_blank() {
        let (cli, service) = test_client();
        let id = seed(&service, "Milk");

        let resp = cli
            .put(format!("/shopping-items/{id}"))
            .body_json(&json!({ "name": "  ", "quantity": 4 }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("shopping_item.name_empty");
        let stored = service.get_by_id(&ItemId::from(id)).unwrap();
        assert_eq!(stored.name(), "Milk");
        assert_eq!(stored.quantity(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_unknown_item() {
        let (cli, _service) = test_client();

        let resp = cli
            .put("/shopping-items/missing")
            .body_json(&json!({ "name": "Bread", "quantity": 1 }))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_delete_item_once() {
        let (cli, service) = test_client();
        let id = seed(&service, "Milk");

        cli.delete(format!("/shopping-items/{id}"))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);
        cli.delete(format!("/shopping-items/{id}"))
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_toggle_and_clear_purchased_items() {
        let (cli, service) = test_client();
        let milk = seed(&service, "Milk");
        seed(&service, "Bread");

        cli.post(format!("/shopping-items/{milk}/toggle"))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let resp = cli.delete("/shopping-items/purchased").send().await;

        resp.assert_status_is_ok();
        resp.json().await.value().object().get("count").assert_i64(1);
        assert_eq!(service.get_all().len(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_when_toggling_unknown_item() {
        let (cli, _service) = test_client();

        cli.post("/shopping-items/missing/toggle")
            .send()
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reorder_items() {
        let (cli, service) = test_client();
        let milk = seed(&service, "Milk");
        let bread = seed(&service, "Bread");

        cli.put("/shopping-items/order")
            .body_json(&json!({ "ids": [bread, milk] }))
            .send()
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let names: Vec<String> = service
            .get_all()
            .iter()
            .map(|item| item.name().to_string())
            .collect();
        assert_eq!(names, vec!["Bread", "Milk"]);
    }

    #[tokio::test]
    async fn should_reject_partial_reorder() {
        let (cli, service) = test_client();
        let milk = seed(&service, "Milk");
        seed(&service, "Bread");

        let resp = cli
            .put("/shopping-items/order")
            .body_json(&json!({ "ids": [milk] }))
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("shopping_item.invalid_order");
    }
}
