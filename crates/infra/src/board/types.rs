//! Wire shapes of the board GraphQL API.
//!
//! The item queries come in three shapes: a cursor-paged first page, a
//! cursor continuation, and a flat legacy shape kept as a fallback for
//! boards that reject the paged form.

use claimboard_domain::{BoardGroup, BoardItem, RemoteUser};
use serde::Deserialize;

/// Envelope of every GraphQL response body.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphqlError>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

/// `{ me }` payload.
#[derive(Debug, Deserialize)]
pub(crate) struct MeData {
    pub me: Option<RemoteUser>,
}

/// `{ boards }` payload; the board shape varies per query.
#[derive(Debug, Deserialize)]
pub(crate) struct BoardsData<B> {
    #[serde(default)]
    pub boards: Vec<B>,
}

/// Board carrying only its groups' ids and titles.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct GroupsBoard {
    #[serde(default)]
    pub groups: Vec<BoardGroup>,
}

/// Board whose groups answer the cursor-paged item query.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ItemsPageBoard {
    #[serde(default)]
    pub groups: Vec<ItemsPageGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsPageGroup {
    pub items_page: ItemsPage,
}

/// One page of items plus the cursor leading to the next one.
#[derive(Debug, Deserialize)]
pub(crate) struct ItemsPage {
    pub cursor: Option<String>,
    #[serde(default)]
    pub items: Vec<BoardItem>,
}

/// `{ next_items_page }` continuation payload.
#[derive(Debug, Deserialize)]
pub(crate) struct NextItemsPageData {
    pub next_items_page: ItemsPage,
}

/// Board whose groups answer the flat (non-paged) item query.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct FlatItemsBoard {
    #[serde(default)]
    pub groups: Vec<FlatItemsGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlatItemsGroup {
    #[serde(default)]
    pub items: Vec<BoardItem>,
}

/// Item reference returned by the mutations.
#[derive(Debug, Deserialize)]
pub(crate) struct MutatedItem {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateItemData {
    pub create_item: Option<MutatedItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateItemData {
    pub change_multiple_column_values: Option<MutatedItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteItemData {
    pub delete_item: Option<MutatedItem>,
}
