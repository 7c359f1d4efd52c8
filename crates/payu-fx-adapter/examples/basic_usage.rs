/*
[INPUT]:  PAYU_FX_MERCHANT_CODE, PAYU_FX_SECRET_KEY, optional PAYU_FX_PLATFORM
[OUTPUT]: FX rates for EUR printed to stdout
[POS]:    Examples - basic rates query
[UPDATE]: When the client construction API changes
*/

use payu_fx_adapter::*;
use tracing_subscriber::EnvFilter;

/// Example: fetch every FX rate for EUR
///
/// Run with `RUST_LOG=payu_fx_adapter=debug` to see request logging.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let credentials = match MerchantCredentials::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load credentials: {}", e);
            return;
        }
    };

    let platform = std::env::var("PAYU_FX_PLATFORM")
        .ok()
        .and_then(|value| value.parse::<Platform>().ok())
        .unwrap_or(Platform::Ro);

    let client = match FxClient::new(credentials, platform) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    match client.get_all_fx_rates("EUR").await {
        Ok(rates) => {
            for rate in rates {
                println!(
                    "EUR -> {}: {} (expires {})",
                    rate.currency(),
                    rate.rate_value(),
                    rate.expires_at()
                );
            }
        }
        Err(e) => println!("Something went wrong: {}", e),
    }
}
