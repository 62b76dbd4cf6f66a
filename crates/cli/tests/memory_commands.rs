//! Integration tests for the memory commands
//!
//! Exercises the handlers against the real sqlite-backed state store in a
//! scratch directory.

use claimboard_cli::cli::MemoryCommand;
use claimboard_cli::commands::memory;
use claimboard_cli::AppContext;
use claimboard_domain::ClaimboardError;
use claimboard_infra::config::state_db_path;

mod support;
use support::setup;

#[tokio::test]
async fn the_state_store_lands_in_the_configured_directory() {
    let harness = setup().await;
    let db_path = state_db_path(&harness.ctx.config).unwrap();
    assert!(db_path.exists());
}

#[tokio::test]
async fn expire_and_restore_flip_a_pair() {
    let harness = setup().await;
    harness.ctx.memory.learn("Acme", "Rollout").await.unwrap();

    let expire = MemoryCommand::Expire {
        customer: "Acme".to_string(),
        work_item: "Rollout".to_string(),
    };
    memory::run(&harness.ctx, expire).await.unwrap();
    assert!(harness.ctx.memory.suggestions("Acme").is_empty());
    assert!(harness.ctx.memory.snapshot().is_expired("Acme", "Rollout"));

    let restore = MemoryCommand::Restore {
        customer: "Acme".to_string(),
        work_item: "Rollout".to_string(),
    };
    memory::run(&harness.ctx, restore).await.unwrap();
    assert_eq!(harness.ctx.memory.suggestions("Acme"), ["Rollout"]);

    memory::run(&harness.ctx, MemoryCommand::List).await.unwrap();
}

#[tokio::test]
async fn memory_survives_a_new_context_on_the_same_store() {
    let harness = setup().await;
    harness.ctx.memory.learn("Acme", "Rollout").await.unwrap();

    let reopened = AppContext::with_config(harness.ctx.config.clone()).await.unwrap();
    assert_eq!(reopened.memory.suggestions("Acme"), ["Rollout"]);
}

#[tokio::test]
async fn export_writes_a_document_import_loads_one() {
    let harness = setup().await;
    harness.ctx.memory.learn("Acme", "Rollout").await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memory.json");
    let export = MemoryCommand::Export { output: Some(path.clone()) };
    memory::run(&harness.ctx, export).await.unwrap();

    let exported = std::fs::read_to_string(&path).unwrap();
    assert!(exported.contains("\"workItem\": \"Rollout\""));

    let fresh = setup().await;
    memory::run(&fresh.ctx, MemoryCommand::Import { path }).await.unwrap();
    assert_eq!(fresh.ctx.memory.suggestions("Acme"), ["Rollout"]);
}

#[tokio::test]
async fn import_rejects_a_malformed_document() {
    let harness = setup().await;
    harness.ctx.memory.learn("Keep", "Me").await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("memory.json");
    std::fs::write(&path, "not a document").unwrap();

    let error = memory::run(&harness.ctx, MemoryCommand::Import { path })
        .await
        .unwrap_err();
    assert!(matches!(
        error.downcast_ref::<ClaimboardError>(),
        Some(ClaimboardError::InvalidInput(_))
    ));
    assert_eq!(harness.ctx.memory.suggestions("Keep"), ["Me"]);
}
