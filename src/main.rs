use dotenv::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rrs_connector::registry::{dispatch, ACTIONS};
use rrs_connector::{ActionReport, Asset, Environment};

/// Host glue: run a single action by identifier with JSON parameters from
/// argv, e.g. `rrs-connector enrich_storage '{"agent_id":"a","system_id":"s"}'`.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let identifier = match args.next() {
        Some(identifier) => identifier,
        None => {
            eprintln!("usage: rrs-connector <action> [params-json]");
            eprintln!("actions:");
            for action in ACTIONS {
                eprintln!("  {:<20} {}", action.identifier, action.description);
            }
            std::process::exit(2);
        }
    };
    let params = match args.next() {
        Some(raw) => serde_json::from_str(&raw)?,
        None => serde_json::Value::Null,
    };

    let asset = Asset::from_env()?;
    let env = Environment::init();
    let mut report = ActionReport::default();

    match dispatch(&identifier, params, &mut report, &asset, &env).await {
        Ok(output) => {
            if let Some(message) = &report.message {
                println!("{}", message);
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(failure) => {
            eprintln!("{}", failure.message());
            std::process::exit(1);
        }
    }
}
