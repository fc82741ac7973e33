mod live;
mod report;
mod transaction;

use paymenthighway_core::{Context, Signer};
use paymenthighway_payment_api::{Config, PaymentApi};

use mock::MockPaymentHighway;

pub const SERVICE_URL: &str = "https://v1-hub-staging.sph-test-solinor.com";

fn init_mock_api() -> (MockPaymentHighway, PaymentApi) {
    let _ = env_logger::builder().is_test(true).try_init();

    let mock = MockPaymentHighway::new(Signer::new("testKey", "testSecret"));
    let ctx = Context::new().with_http_send(mock.clone());
    let config = Config::new()
        .with_service_url(SERVICE_URL)
        .with_signature_key_id("testKey")
        .with_signature_secret("testSecret")
        .with_account("test")
        .with_merchant("test_merchantId");

    let api = PaymentApi::new(ctx, config).expect("config must be valid");
    (mock, api)
}
