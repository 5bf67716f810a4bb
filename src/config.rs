use std::env;
use anyhow::{Context, Result};

/// DynamoDB table holding every item.
pub const TABLE_NAME: &str = "Items";

/// AWS region the table lives in.
pub const REGION: &str = "us-east-1";

#[derive(Debug, Clone)]
pub struct Config {
    pub dynamodb_endpoint: Option<String>,
    pub table_name: String,
    pub region: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let dynamodb_endpoint = env::var("DYNAMODB_ENDPOINT").ok();

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            dynamodb_endpoint,
            table_name: TABLE_NAME.to_string(),
            region: REGION.to_string(),
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  DynamoDB endpoint: {}",
            self.dynamodb_endpoint.as_deref().unwrap_or("default (AWS regional endpoint)"));
        tracing::info!("  DynamoDB region: {}", self.region);
        tracing::info!("  DynamoDB table: {}", self.table_name);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
