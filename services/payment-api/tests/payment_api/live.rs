use std::env;

use anyhow::Result;
use log::warn;
use paymenthighway_core::{Context, OsEnv};
use paymenthighway_http_send_reqwest::ReqwestHttpSend;
use paymenthighway_payment_api::{Config, PaymentApi};

/// Build an api against the service configured in `PAYMENT_HIGHWAY_*` envs.
///
/// Returns `None` unless `PAYMENT_HIGHWAY_TEST` is `on`.
fn init_live_api() -> Option<Result<PaymentApi>> {
    let _ = env_logger::builder().is_test(true).try_init();

    if env::var("PAYMENT_HIGHWAY_TEST").unwrap_or_default() != "on" {
        return None;
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let config = Config::new().from_env(&ctx);
    Some(PaymentApi::new(ctx, config).map_err(Into::into))
}

#[tokio::test]
async fn test_live_init_transaction() -> Result<()> {
    let Some(api) = init_live_api() else {
        warn!("PAYMENT_HIGHWAY_TEST is not set, skipped");
        return Ok(());
    };
    let api = api?.with_check_response_status(true);

    let init = api.init_transaction().await?;
    assert!(init.id.is_some());
    Ok(())
}

