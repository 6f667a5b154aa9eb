use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shopping list the user owns or is a member of.
///
/// The client core only routes list identifiers; list lifecycle is owned by
/// the backend and the list screens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingList {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    /// Opaque short code bound server-side to exactly this list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<ListMember>,
}

/// Membership entry inside a list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListMember {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A single item on a shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub is_purchased: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchased_at: Option<DateTime<Utc>>,
}

/// Response envelope for `GET /lists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListsResponse {
    #[serde(default)]
    pub lists: Vec<ShoppingList>,
}

/// Response envelope for `GET /lists/:id` and `POST /lists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub list: ShoppingList,
}

/// Response envelope for item mutations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub item: ListItem,
}

/// Response for `POST /lists/join/:inviteCode`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JoinListResponse {
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_name: Option<String>,
}

/// Request body for `POST /lists`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
    pub name: String,
}

/// Request body for `POST /lists/:id/invite`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InviteMemberRequest {
    pub email: String,
}

/// Request body for `POST /lists/:id/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    pub name: String,
    pub quantity: u32,
}

/// Request body for `PATCH /lists/:id/items/:itemId`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}
