use anyhow::Result;
use paymenthighway_core::{Context, OsEnv};
use paymenthighway_http_send_reqwest::ReqwestHttpSend;
use paymenthighway_payment_api::{Config, PaymentApi};

#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // Reads PAYMENT_HIGHWAY_SERVICE_URL, PAYMENT_HIGHWAY_SIGNATURE_KEY_ID,
    // PAYMENT_HIGHWAY_SIGNATURE_SECRET, PAYMENT_HIGHWAY_ACCOUNT and
    // PAYMENT_HIGHWAY_MERCHANT.
    let config = Config::new().from_env(&ctx);
    let api = PaymentApi::new(ctx, config)?.with_check_response_status(true);

    let resp = api.init_transaction().await?;
    match resp.id {
        Some(id) => println!("initialized transaction {id}"),
        None => println!("service returned no transaction id"),
    }
    Ok(())
}
