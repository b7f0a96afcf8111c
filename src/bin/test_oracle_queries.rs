/// Live check of the oracle, upgrade and authz queries against a node
/// Run with: cargo run --bin test_oracle_queries [grpc_endpoint] [rest_endpoint]

use anyhow::Result;
use sei_proto::{ClientConfig, QueryClient, RestClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    println!("=== Sei Oracle Query Test ===\n");

    let mut args = std::env::args().skip(1);
    let defaults = ClientConfig::default();
    let config = ClientConfig {
        grpc_endpoint: args.next().unwrap_or(defaults.grpc_endpoint.clone()),
        rest_endpoint: args.next().unwrap_or(defaults.rest_endpoint.clone()),
        ..defaults
    };
    println!("gRPC endpoint: {}", config.grpc_endpoint);
    println!("REST endpoint: {}\n", config.rest_endpoint);

    // REST first, it needs no connection setup
    println!("=== REST ===");
    let rest = RestClient::new(&config)?;
    match rest.actives().await {
        Ok(r) => println!("✅ actives: {:?}", r.actives),
        Err(e) => println!("❌ actives failed: {}", e),
    }
    match rest.oracle_params().await {
        Ok(r) => println!("✅ params: {}", serde_json::to_string(&r)?),
        Err(e) => println!("❌ params failed: {}", e),
    }
    // only chains still on the prevote flow answer this one
    match rest.aggregate_prevotes().await {
        Ok(r) => println!("✅ {} pending prevotes", r.aggregate_prevotes.len()),
        Err(e) => println!("❌ aggregate prevotes failed: {}", e),
    }
    match rest.current_plan().await {
        Ok(r) => println!("✅ current plan: {:?}", r.plan.map(|p| p.name)),
        Err(e) => println!("❌ current plan failed: {}", e),
    }
    println!();

    println!("=== gRPC ===");
    let mut client = QueryClient::new(config);
    println!("Connecting...");
    client.connect().await?;
    println!("Connected!\n");

    match client.exchange_rates().await {
        Ok(r) => {
            println!("✅ {} exchange rates", r.denom_oracle_exchange_rate_pairs.len());
            for pair in r.denom_oracle_exchange_rate_pairs.iter().take(5) {
                let rate = pair
                    .oracle_exchange_rate
                    .as_ref()
                    .map(|r| r.exchange_rate.as_str())
                    .unwrap_or("-");
                println!("  {}: {}", pair.denom, rate);
            }
        }
        Err(e) => println!("❌ exchange rates failed: {}", e),
    }
    match client.twaps(3600).await {
        Ok(r) => println!("✅ {} one-hour twaps", r.oracle_twaps.len()),
        Err(e) => println!("❌ twaps failed: {}", e),
    }
    match client.slash_window().await {
        Ok(r) => println!("✅ slash window progress: {}", r.window_progress),
        Err(e) => println!("❌ slash window failed: {}", e),
    }
    match client.module_versions(Some("oracle")).await {
        Ok(r) => println!("✅ module versions: {:?}", r.module_versions),
        Err(e) => println!("❌ module versions failed: {}", e),
    }

    println!("\n=== Done ===");
    Ok(())
}
