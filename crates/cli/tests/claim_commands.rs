//! Integration tests for the claim commands
//!
//! Drives the handlers end to end against a mock board API and a scratch
//! state store; the token comes from the environment override.

use chrono::NaiveDate;
use claimboard_cli::cli::{
    ActivityArg, AddArgs, AddWeekArgs, AuthCommand, Command, DeleteArgs, EntryFields,
    UpdateArgs, WeekArgs, WeekSelection,
};
use claimboard_cli::commands::{self, auth, claims, week};
use claimboard_cli::AppContext;
use claimboard_domain::ClaimboardError;
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;
use support::setup;

fn graphql_ok(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

fn viewer_body() -> Value {
    json!({"me": {"id": "77", "name": "Jane Dev", "email": "jane@example.com"}})
}

fn groups_body(year: &str) -> Value {
    json!({"boards": [{"groups": [{"id": format!("grp_{year}"), "title": year}]}]})
}

fn claim_item_json(id: &str, on: &str) -> Value {
    json!({
        "id": id,
        "name": "Jane Dev",
        "column_values": [
            {"id": "date4", "value": null, "text": on},
            {"id": "status", "value": "{\"index\":1}", "text": "Billable"},
            {"id": "text", "value": null, "text": "Acme"},
            {"id": "text1", "value": null, "text": "Rollout"},
            {"id": "text2", "value": null, "text": "sprint work"},
            {"id": "numbers", "value": "\"7.5\"", "text": "7.5"}
        ]
    })
}

fn entry_fields() -> EntryFields {
    EntryFields {
        customer: "Acme".to_string(),
        work_item: "Rollout".to_string(),
        activity: ActivityArg::Billable,
        hours: "7.5".to_string(),
        comment: "sprint work".to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn mount_op(server: &MockServer, op: &str, data: Value, expected: u64) {
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains(op))
        .respond_with(graphql_ok(data))
        .expect(expected)
        .mount(server)
        .await;
}

#[tokio::test]
async fn add_creates_one_item_on_the_year_group() {
    let harness = setup().await;
    mount_op(&harness.server, "Viewer", viewer_body(), 1).await;
    mount_op(&harness.server, "YearGroups", groups_body("2024"), 1).await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("CreateClaimItem"))
        .and(header("Authorization", "integration-token"))
        .and(header("API-Version", "2023-10"))
        .respond_with(graphql_ok(json!({"create_item": {"id": "9001"}})))
        .expect(1)
        .mount(&harness.server)
        .await;

    let args = AddArgs { date: Some(date(2024, 3, 12)), fields: entry_fields() };
    claims::add(&harness.ctx, &args).await.unwrap();

    // saving also teaches the memory
    assert_eq!(harness.ctx.memory.suggestions("Acme"), ["Rollout"]);
}

#[tokio::test]
async fn add_rejects_bad_hours_before_any_request() {
    let harness = setup().await;
    let mut fields = entry_fields();
    fields.hours = "lots".to_string();

    let error = claims::add(&harness.ctx, &AddArgs { date: None, fields })
        .await
        .unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ClaimboardError>(),
        Some(ClaimboardError::InvalidInput(_))
    ));
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn claim_commands_require_a_configured_board() {
    let harness = setup().await;
    let mut config = harness.ctx.config.clone();
    config.board_id.clear();
    let ctx = AppContext::with_config(config).await.unwrap();

    let args = WeekArgs { week: WeekSelection { date: Some(date(2024, 3, 12)), offset: 0 } };
    let error = week::run(&ctx, &args).await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ClaimboardError>(),
        Some(ClaimboardError::Config(_))
    ));
    assert!(harness.server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn week_loads_and_renders_the_selected_week() {
    let harness = setup().await;
    mount_op(&harness.server, "Viewer", viewer_body(), 1).await;
    mount_op(&harness.server, "YearGroups", groups_body("2024"), 1).await;
    mount_op(
        &harness.server,
        "ClaimItemsPage",
        json!({
            "boards": [{"groups": [{"items_page": {
                "cursor": null,
                "items": [claim_item_json("1", "2024-03-12")]
            }}]}]
        }),
        1,
    )
    .await;

    let args = WeekArgs { week: WeekSelection { date: Some(date(2024, 3, 14)), offset: 0 } };
    week::run(&harness.ctx, &args).await.unwrap();
}

#[tokio::test]
async fn update_rewrites_the_columns_in_one_mutation() {
    let harness = setup().await;
    mount_op(
        &harness.server,
        "UpdateClaimColumns",
        json!({"change_multiple_column_values": {"id": "9001"}}),
        1,
    )
    .await;

    let args = UpdateArgs {
        item_id: "9001".to_string(),
        date: Some(date(2024, 3, 12)),
        fields: entry_fields(),
    };
    claims::update(&harness.ctx, &args).await.unwrap();

    assert_eq!(harness.ctx.memory.suggestions("Acme"), ["Rollout"]);
    assert_eq!(harness.server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_dispatches_to_one_mutation() {
    let harness = setup().await;
    mount_op(&harness.server, "DeleteClaimItem", json!({"delete_item": {"id": "9001"}}), 1)
        .await;

    let command = Command::Delete(DeleteArgs { item_id: "9001".to_string() });
    commands::dispatch(&harness.ctx, command).await.unwrap();
    assert_eq!(harness.server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn add_week_creates_a_claim_for_every_day() {
    let harness = setup().await;
    mount_op(&harness.server, "Viewer", viewer_body(), 1).await;
    mount_op(&harness.server, "YearGroups", groups_body("2024"), 7).await;
    mount_op(&harness.server, "CreateClaimItem", json!({"create_item": {"id": "9001"}}), 7)
        .await;

    let args = AddWeekArgs {
        week: WeekSelection { date: Some(date(2024, 3, 12)), offset: 0 },
        fields: entry_fields(),
    };
    claims::add_week(&harness.ctx, &args).await.unwrap();
    assert_eq!(harness.server.received_requests().await.unwrap().len(), 15);
}

#[tokio::test]
async fn add_week_stops_at_the_first_failure() {
    let harness = setup().await;
    mount_op(&harness.server, "Viewer", viewer_body(), 1).await;
    mount_op(&harness.server, "YearGroups", groups_body("2024"), 3).await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("CreateClaimItem"))
        .respond_with(graphql_ok(json!({"create_item": {"id": "ok"}})))
        .up_to_n_times(2)
        .expect(2)
        .mount(&harness.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_string_contains("CreateClaimItem"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"errors": [{"message": "Budget exhausted"}]})),
        )
        .expect(1)
        .mount(&harness.server)
        .await;

    let args = AddWeekArgs {
        week: WeekSelection { date: Some(date(2024, 3, 12)), offset: 0 },
        fields: entry_fields(),
    };
    let error = claims::add_week(&harness.ctx, &args).await.unwrap_err();
    assert!(error.to_string().contains("Budget exhausted"));

    let creates = harness
        .server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|request| {
            String::from_utf8_lossy(&request.body).contains("CreateClaimItem")
        })
        .count();
    assert_eq!(creates, 3);
}

#[tokio::test]
async fn whoami_reports_the_token_owner() {
    let harness = setup().await;
    mount_op(&harness.server, "Viewer", viewer_body(), 1).await;
    auth::run(&harness.ctx, AuthCommand::Whoami).await.unwrap();
}
