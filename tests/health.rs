mod common;

use axum::extract::State;
use catalog_api::routes::health::health_check;

#[tokio::test]
async fn health_check_returns_ok() -> anyhow::Result<()> {
    let state = common::setup_state().await?;

    let response = health_check(State(state)).await?;
    assert!(response.success);
    assert_eq!(response.message.as_deref(), Some("Health check"));
    assert_eq!(response.body.data.status, "ok");
    Ok(())
}
