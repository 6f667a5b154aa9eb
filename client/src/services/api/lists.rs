//! # List Endpoints
//!
//! Shopping list membership and item calls (bearer auth required).
//!
//! The client core does not own list/item lifecycles; these wrappers exist
//! for the screens that do, and for the invite/join resolver.

use shared::dto::auth::MessageResponse;
use shared::dto::list::{
    AddItemRequest, CreateListRequest, InviteMemberRequest, ItemResponse, JoinListResponse,
    ListItem, ListResponse, ListsResponse, ShoppingList, UpdateItemRequest,
};

use super::client::ApiClient;
use super::{decode, ApiError, ApiResult};

/// Redeem an invite code for membership in its list.
///
/// Consuming an already-used code is a server-side error; the resolver
/// surfaces the message rather than deduplicating client-side.
#[tracing::instrument(skip(client, invite_code), fields(invite_code = %invite_code))]
pub async fn join_list(client: &ApiClient, invite_code: &str) -> ApiResult<JoinListResponse> {
    tracing::info!("Joining list by invite code");

    let response = client
        .authorize(
            client
                .http
                .post(client.url(&format!("/lists/join/{}", invite_code))),
        )
        .await
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Join network error");
            ApiError::Network(e.to_string())
        })?;

    decode(response).await
}

/// Create a list owned by the authenticated user.
pub async fn create_list(client: &ApiClient, name: &str) -> ApiResult<ShoppingList> {
    let request = CreateListRequest {
        name: name.to_string(),
    };

    let response = client
        .authorize(client.http.post(client.url("/lists")))
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode::<ListResponse>(response).await.map(|body| body.list)
}

/// All lists the user owns or is a member of.
pub async fn lists(client: &ApiClient) -> ApiResult<Vec<ShoppingList>> {
    let response = client
        .authorize(client.http.get(client.url("/lists")))
        .await
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode::<ListsResponse>(response)
        .await
        .map(|body| body.lists)
}

/// A single list with members and items.
pub async fn list_details(client: &ApiClient, list_id: &str) -> ApiResult<ShoppingList> {
    let response = client
        .authorize(client.http.get(client.url(&format!("/lists/{}", list_id))))
        .await
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode::<ListResponse>(response).await.map(|body| body.list)
}

/// Invite a user to a list by email.
pub async fn invite_member(
    client: &ApiClient,
    list_id: &str,
    email: &str,
) -> ApiResult<MessageResponse> {
    let request = InviteMemberRequest {
        email: email.to_string(),
    };

    let response = client
        .authorize(
            client
                .http
                .post(client.url(&format!("/lists/{}/invite", list_id))),
        )
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Remove a member from a list.
pub async fn remove_member(
    client: &ApiClient,
    list_id: &str,
    member_id: &str,
) -> ApiResult<MessageResponse> {
    let response = client
        .authorize(
            client
                .http
                .delete(client.url(&format!("/lists/{}/members/{}", list_id, member_id))),
        )
        .await
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode(response).await
}

/// Add an item to a list.
pub async fn add_item(
    client: &ApiClient,
    list_id: &str,
    name: &str,
    quantity: u32,
) -> ApiResult<ListItem> {
    let request = AddItemRequest {
        name: name.to_string(),
        quantity,
    };

    let response = client
        .authorize(
            client
                .http
                .post(client.url(&format!("/lists/{}/items", list_id))),
        )
        .await
        .json(&request)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode::<ItemResponse>(response).await.map(|body| body.item)
}

/// Rename an item or change its quantity.
pub async fn update_item(
    client: &ApiClient,
    list_id: &str,
    item_id: &str,
    update: UpdateItemRequest,
) -> ApiResult<ListItem> {
    let response = client
        .authorize(
            client
                .http
                .patch(client.url(&format!("/lists/{}/items/{}", list_id, item_id))),
        )
        .await
        .json(&update)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode::<ItemResponse>(response).await.map(|body| body.item)
}

/// Mark an item purchased or unpurchased.
pub async fn set_item_purchased(
    client: &ApiClient,
    list_id: &str,
    item_id: &str,
    purchased: bool,
) -> ApiResult<ListItem> {
    let action = if purchased { "purchase" } else { "unpurchase" };

    let response = client
        .authorize(
            client
                .http
                .patch(client.url(&format!("/lists/{}/items/{}/{}", list_id, item_id, action))),
        )
        .await
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    decode::<ItemResponse>(response).await.map(|body| body.item)
}

/// Delete an item from a list.
pub async fn remove_item(client: &ApiClient, list_id: &str, item_id: &str) -> ApiResult<()> {
    let response = client
        .authorize(
            client
                .http
                .delete(client.url(&format!("/lists/{}/items/{}", list_id, item_id))),
        )
        .await
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    // Delete returns no payload worth keeping; only the status matters.
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        decode::<MessageResponse>(response).await.map(|_| ())
    }
}
