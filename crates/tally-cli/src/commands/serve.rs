//! Server command implementation

use anyhow::Result;

/// Environment variable holding extra comma-separated CORS origins
pub const ALLOWED_ORIGINS_ENV: &str = "TALLY_ALLOWED_ORIGINS";

pub async fn cmd_serve(
    host: &str,
    port: u16,
    service_name: String,
    allowed_origins: Vec<String>,
) -> Result<()> {
    let env_origins = std::env::var(ALLOWED_ORIGINS_ENV).unwrap_or_default();
    let allowed_origins = merge_origins(allowed_origins, &env_origins);

    println!("🚀 Starting Tally web server...");
    println!("   Service: {}", service_name);
    println!("   Listening: http://{}:{}", host, port);
    if allowed_origins.is_empty() {
        println!("   🌐 CORS: any origin");
    } else {
        println!("   🌐 CORS: {}", allowed_origins.join(", "));
    }
    println!();
    println!("   Press Ctrl+C to stop");

    let config = tally_server::ServerConfig {
        service_name,
        allowed_origins,
    };

    tally_server::serve_with_config(host, port, config).await?;

    Ok(())
}

/// Combine origins from flags with a comma-separated list from the environment
///
/// Blank entries and duplicates are dropped; flag order comes first.
pub fn merge_origins(from_flags: Vec<String>, from_env: &str) -> Vec<String> {
    let mut origins: Vec<String> = Vec::new();
    for origin in from_flags
        .into_iter()
        .chain(from_env.split(',').map(str::to_string))
    {
        let origin = origin.trim().to_string();
        if !origin.is_empty() && !origins.contains(&origin) {
            origins.push(origin);
        }
    }
    origins
}
