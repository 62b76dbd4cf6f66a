//! Gateway port implementation for the work-tracking board.
//!
//! Translates the claim workflow's gateway calls into the board's GraphQL
//! documents. Item loading is cursor-paged with a hard page ceiling and a
//! flat legacy query shape as fallback; mutations are single round trips
//! tagged with a correlation id for log stitching.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, Local};
use claimboard_core::claims::ports::{BoardGateway, CredentialStore};
use claimboard_domain::constants::{INTER_PAGE_DELAY_MS, ITEMS_PAGE_SIZE, MAX_ITEM_PAGES};
use claimboard_domain::{
    BoardGroup, BoardItem, ClaimDraft, ClaimboardError, ColumnMap, RemoteUser, Result,
};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::client::BoardClient;
use super::types::{
    BoardsData, CreateItemData, DeleteItemData, FlatItemsBoard, GroupsBoard, ItemsPage,
    ItemsPageBoard, MeData, NextItemsPageData, UpdateItemData,
};

/// Board gateway speaking the monday.com GraphQL dialect.
pub struct MondayGateway {
    client: BoardClient,
    credentials: Arc<dyn CredentialStore>,
    columns: ColumnMap,
}

impl MondayGateway {
    /// Create a gateway over `client`, resolving the token per call.
    pub fn new(
        client: BoardClient,
        credentials: Arc<dyn CredentialStore>,
        columns: ColumnMap,
    ) -> Self {
        Self { client, credentials, columns }
    }

    /// The configured API token, or an auth error when none is stored.
    async fn token(&self) -> Result<String> {
        self.credentials
            .token()
            .await?
            .ok_or_else(|| ClaimboardError::Auth("no API token configured".to_string()))
    }

    /// Fetch items through the cursor-paged query shape.
    ///
    /// Follows cursors until a page comes back without one or shorter than
    /// the requested size. The page ceiling guards against a remote that
    /// keeps handing out cursors; hitting it returns what was collected.
    async fn fetch_items_paged(
        &self,
        token: &str,
        board_id: &str,
        group_id: &str,
    ) -> Result<Vec<BoardItem>> {
        let mut items = Vec::new();
        let mut cursor: Option<String> = None;

        for page in 0..MAX_ITEM_PAGES {
            let items_page = match cursor.take() {
                None => self.fetch_first_page(token, board_id, group_id).await?,
                Some(c) => self.fetch_next_page(token, &c).await?,
            };

            let received = items_page.items.len();
            debug!(page = page + 1, received, "fetched item page");
            items.extend(items_page.items);

            match items_page.cursor {
                Some(next) if received >= ITEMS_PAGE_SIZE as usize => {
                    cursor = Some(next);
                    tokio::time::sleep(Duration::from_millis(INTER_PAGE_DELAY_MS)).await;
                }
                _ => return Ok(items),
            }
        }

        warn!(
            pages = MAX_ITEM_PAGES,
            collected = items.len(),
            "item pagination stopped at the page ceiling; results may be incomplete"
        );
        Ok(items)
    }

    async fn fetch_first_page(
        &self,
        token: &str,
        board_id: &str,
        group_id: &str,
    ) -> Result<ItemsPage> {
        let query = r#"
            query ClaimItemsPage($board: [ID!], $group: [String!], $limit: Int!) {
                boards(ids: $board) {
                    groups(ids: $group) {
                        items_page(limit: $limit) {
                            cursor
                            items {
                                id
                                name
                                column_values {
                                    id
                                    value
                                    text
                                }
                            }
                        }
                    }
                }
            }
        "#;

        let variables = serde_json::json!({
            "board": [board_id],
            "group": [group_id],
            "limit": ITEMS_PAGE_SIZE,
        });

        let data: BoardsData<ItemsPageBoard> =
            self.client.execute(token, query, Some(variables)).await?;

        data.boards
            .into_iter()
            .next()
            .and_then(|board| board.groups.into_iter().next())
            .map(|group| group.items_page)
            .ok_or_else(|| {
                ClaimboardError::NotFound(format!(
                    "group {} not found on board {}",
                    group_id, board_id
                ))
            })
    }

    async fn fetch_next_page(&self, token: &str, cursor: &str) -> Result<ItemsPage> {
        let query = r#"
            query ClaimItemsNextPage($cursor: String!, $limit: Int!) {
                next_items_page(cursor: $cursor, limit: $limit) {
                    cursor
                    items {
                        id
                        name
                        column_values {
                            id
                            value
                            text
                        }
                    }
                }
            }
        "#;

        let variables = serde_json::json!({
            "cursor": cursor,
            "limit": ITEMS_PAGE_SIZE,
        });

        let data: NextItemsPageData = self.client.execute(token, query, Some(variables)).await?;
        Ok(data.next_items_page)
    }

    /// Fetch items through the flat legacy query shape.
    async fn fetch_items_flat(
        &self,
        token: &str,
        board_id: &str,
        group_id: &str,
    ) -> Result<Vec<BoardItem>> {
        let query = r#"
            query ClaimItemsFlat($board: [ID!], $group: [String!]) {
                boards(ids: $board) {
                    groups(ids: $group) {
                        items {
                            id
                            name
                            column_values {
                                id
                                value
                                text
                            }
                        }
                    }
                }
            }
        "#;

        let variables = serde_json::json!({
            "board": [board_id],
            "group": [group_id],
        });

        let data: BoardsData<FlatItemsBoard> =
            self.client.execute(token, query, Some(variables)).await?;

        data.boards
            .into_iter()
            .next()
            .and_then(|board| board.groups.into_iter().next())
            .map(|group| group.items)
            .ok_or_else(|| {
                ClaimboardError::NotFound(format!(
                    "group {} not found on board {}",
                    group_id, board_id
                ))
            })
    }

    /// Encode the draft's columns as the API's stringified JSON scalar.
    fn encoded_columns(&self, draft: &ClaimDraft) -> Result<String> {
        let mut columns = serde_json::Map::new();
        columns.insert(
            self.columns.date.clone(),
            serde_json::json!({ "date": draft.date.format("%Y-%m-%d").to_string() }),
        );
        columns.insert(
            self.columns.status.clone(),
            serde_json::json!({ "index": draft.activity.code() }),
        );
        columns.insert(self.columns.customer.clone(), Value::String(draft.customer.clone()));
        columns.insert(self.columns.work_item.clone(), Value::String(draft.work_item.clone()));
        columns.insert(self.columns.comment.clone(), Value::String(draft.comment.clone()));
        columns.insert(self.columns.hours.clone(), Value::String(draft.hours.clone()));

        serde_json::to_string(&Value::Object(columns)).map_err(|e| {
            ClaimboardError::Internal(format!("Failed to encode column values: {}", e))
        })
    }
}

#[async_trait]
impl BoardGateway for MondayGateway {
    async fn fetch_user(&self) -> Result<RemoteUser> {
        let token = self.token().await?;

        let query = r#"
            query Viewer {
                me {
                    id
                    name
                    email
                }
            }
        "#;

        let data: MeData = self.client.execute(&token, query, None).await?;
        data.me
            .ok_or_else(|| ClaimboardError::Remote("API returned no user for the token".into()))
    }

    async fn fetch_group(&self, board_id: &str, year: i32) -> Result<BoardGroup> {
        let token = self.token().await?;

        let query = r#"
            query YearGroups($board: [ID!]) {
                boards(ids: $board) {
                    groups {
                        id
                        title
                    }
                }
            }
        "#;

        let variables = serde_json::json!({ "board": [board_id] });
        let data: BoardsData<GroupsBoard> =
            self.client.execute(&token, query, Some(variables)).await?;

        let groups: Vec<BoardGroup> =
            data.boards.into_iter().next().map(|board| board.groups).unwrap_or_default();

        let wanted = year.to_string();
        let current = Local::now().year().to_string();

        let group = groups
            .iter()
            .find(|g| g.title == wanted)
            .or_else(|| groups.iter().find(|g| g.title == current))
            .or_else(|| groups.iter().find(|g| g.title.contains(&wanted)))
            .or_else(|| groups.first())
            .cloned()
            .ok_or_else(|| {
                ClaimboardError::NotFound(format!("board {} has no groups", board_id))
            })?;

        debug!(board_id, year, group_id = %group.id, title = %group.title, "resolved year group");
        Ok(group)
    }

    async fn fetch_all_items(
        &self,
        board_id: &str,
        group_id: &str,
    ) -> Result<Vec<BoardItem>> {
        let token = self.token().await?;

        match self.fetch_items_paged(&token, board_id, group_id).await {
            Ok(items) if !items.is_empty() => Ok(items),
            Ok(_) => {
                debug!(board_id, group_id, "paged item query found nothing; trying the flat shape");
                self.fetch_items_flat(&token, board_id, group_id).await
            }
            Err(err) => {
                warn!(
                    board_id,
                    group_id,
                    error = %err,
                    "paged item query failed; trying the flat shape"
                );
                self.fetch_items_flat(&token, board_id, group_id).await
            }
        }
    }

    async fn create_item(
        &self,
        board_id: &str,
        group_id: &str,
        item_name: &str,
        draft: &ClaimDraft,
    ) -> Result<String> {
        let token = self.token().await?;
        let correlation_id = uuid::Uuid::new_v4().to_string();
        let values = self.encoded_columns(draft)?;

        let query = r#"
            mutation CreateClaimItem($board: ID!, $group: String!, $name: String!, $values: JSON!) {
                create_item(board_id: $board, group_id: $group, item_name: $name, column_values: $values) {
                    id
                }
            }
        "#;

        let variables = serde_json::json!({
            "board": board_id,
            "group": group_id,
            "name": item_name,
            "values": values,
        });

        let data: CreateItemData = self.client.execute(&token, query, Some(variables)).await?;
        let item = data
            .create_item
            .ok_or_else(|| ClaimboardError::Remote("create_item returned no item".to_string()))?;

        info!(
            correlation_id = %correlation_id,
            board_id,
            group_id,
            item_id = %item.id,
            date = %draft.date,
            "claim item created"
        );
        Ok(item.id)
    }

    async fn update_item(&self, board_id: &str, item_id: &str, draft: &ClaimDraft) -> Result<()> {
        let token = self.token().await?;
        let correlation_id = uuid::Uuid::new_v4().to_string();
        let values = self.encoded_columns(draft)?;

        let query = r#"
            mutation UpdateClaimColumns($board: ID!, $item: ID!, $values: JSON!) {
                change_multiple_column_values(board_id: $board, item_id: $item, column_values: $values) {
                    id
                }
            }
        "#;

        let variables = serde_json::json!({
            "board": board_id,
            "item": item_id,
            "values": values,
        });

        let data: UpdateItemData = self.client.execute(&token, query, Some(variables)).await?;
        let touched = data.change_multiple_column_values.map(|item| item.id);

        info!(
            correlation_id = %correlation_id,
            board_id,
            item_id = touched.as_deref().unwrap_or(item_id),
            "claim item updated"
        );
        Ok(())
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        let token = self.token().await?;
        let correlation_id = uuid::Uuid::new_v4().to_string();

        let query = r#"
            mutation DeleteClaimItem($item: ID!) {
                delete_item(item_id: $item) {
                    id
                }
            }
        "#;

        let variables = serde_json::json!({ "item": item_id });
        let data: DeleteItemData = self.client.execute(&token, query, Some(variables)).await?;
        let removed = data.delete_item.map(|item| item.id);

        info!(
            correlation_id = %correlation_id,
            item_id = removed.as_deref().unwrap_or(item_id),
            "claim item deleted"
        );
        Ok(())
    }
}
