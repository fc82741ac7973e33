use paymenthighway_core::{ParameterSet, Result, Signer};

fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let signer = Signer::new("testKey", "testSecret");

    // The payment form signs its redirect as a GET with empty uri and body.
    let params = ParameterSet::new()
        .with("sph-account", "test")
        .with("sph-merchant", "test_merchantId")
        .with("sph-order", "1000123A")
        .with("sph-request-id", "f47ac10b-58cc-4372-a567-0e02b2c3d479")
        .with("sph-success", "OK")
        .with("sph-timestamp", "2026-10-19T10:00:00Z");
    let signature = signer.sign("GET", "", &params, "");

    let mut query = form_urlencoded::Serializer::new(String::new());
    for (k, v) in params.iter() {
        query.append_pair(k, v);
    }
    query.append_pair("signature", &signature);
    let query = query.finish();
    println!("redirect query: ?{query}");

    let redirect = ParameterSet::from_query(&query);
    println!(
        "signature valid: {}",
        signer.validate_form_redirect(&redirect)
    );

    let tampered = ParameterSet::from_query(&query.replace("OK", "FAILURE"));
    println!(
        "tampered signature valid: {}",
        signer.validate_form_redirect(&tampered)
    );
    Ok(())
}
