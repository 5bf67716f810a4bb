use std::collections::HashMap;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, AttributeValue, BillingMode, KeySchemaElement, KeyType,
    ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;

use super::{ItemStore, StoreError};
use crate::config::Config;
use crate::models::Item;

const ID_ATTR: &str = "id";
const NAME_ATTR: &str = "name";

/// DynamoDB-backed item store
///
/// Cloning is cheap; the SDK client shares its connection pool.
#[derive(Clone)]
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl DynamoDbStore {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Create a store from configuration
    ///
    /// Credentials come from the AWS default provider chain. When
    /// `dynamodb_endpoint` is set the client talks to that endpoint (DynamoDB
    /// Local) and the table is created if it does not exist yet. Against AWS
    /// the table is expected to be provisioned already.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()));

        match &config.dynamodb_endpoint {
            Some(endpoint) => {
                tracing::info!("Connecting to local DynamoDB at: {}", endpoint);
                loader = loader.endpoint_url(endpoint);
            }
            None => tracing::info!("Connecting to AWS DynamoDB in {}", config.region),
        }

        let sdk_config = loader.load().await;
        let store = Self::new(Client::new(&sdk_config), &config.table_name);

        if config.dynamodb_endpoint.is_some() {
            store.ensure_table_exists().await?;
        }

        Ok(store)
    }

    /// Create the table with `id` as hash key unless it already exists.
    async fn ensure_table_exists(&self) -> Result<()> {
        match self
            .client
            .describe_table()
            .table_name(&self.table_name)
            .send()
            .await
        {
            Ok(_) => {
                tracing::info!("Table already exists: {}", self.table_name);
                Ok(())
            }
            Err(err) => match err.into_service_error() {
                DescribeTableError::ResourceNotFoundException(_) => {
                    tracing::info!("Table not found, creating: {}", self.table_name);
                    self.create_table().await
                }
                err => Err(anyhow::anyhow!(
                    "Failed to check table existence: {}",
                    DisplayErrorContext(&err)
                )),
            },
        }
    }

    async fn create_table(&self) -> Result<()> {
        let key_schema = KeySchemaElement::builder()
            .attribute_name(ID_ATTR)
            .key_type(KeyType::Hash)
            .build()
            .context("Failed to build key schema")?;

        let attribute_definition = AttributeDefinition::builder()
            .attribute_name(ID_ATTR)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .context("Failed to build attribute definition")?;

        self.client
            .create_table()
            .table_name(&self.table_name)
            .key_schema(key_schema)
            .attribute_definitions(attribute_definition)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to create table: {}", DisplayErrorContext(&e)))?;

        tracing::info!("Table created successfully: {}", self.table_name);
        Ok(())
    }
}

#[async_trait]
impl ItemStore for DynamoDbStore {
    async fn put(&self, item: &Item) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_to_attributes(item)))
            .send()
            .await
            .map_err(|e| StoreError::Write {
                id: item.id.clone(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        tracing::debug!("Stored item with id: {}", item.id);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Item>, StoreError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTR, AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| StoreError::Read {
                id: id.to_string(),
                message: DisplayErrorContext(&e).to_string(),
            })?;

        match result.item {
            Some(attributes) => {
                let item = attributes_to_item(&attributes).map_err(|message| StoreError::Read {
                    id: id.to_string(),
                    message,
                })?;
                tracing::debug!("Read item with id: {}", id);
                Ok(Some(item))
            }
            None => {
                tracing::debug!("Item not found with id: {}", id);
                Ok(None)
            }
        }
    }
}

/// Convert an item to its DynamoDB attribute map.
pub fn item_to_attributes(item: &Item) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (ID_ATTR.to_string(), AttributeValue::S(item.id.clone())),
        (NAME_ATTR.to_string(), AttributeValue::S(item.name.clone())),
    ])
}

/// Convert a DynamoDB attribute map back to an item.
pub fn attributes_to_item(attributes: &HashMap<String, AttributeValue>) -> Result<Item, String> {
    Ok(Item {
        id: get_string(attributes, ID_ATTR)?,
        name: get_string(attributes, NAME_ATTR)?,
    })
}

fn get_string(attributes: &HashMap<String, AttributeValue>, key: &str) -> Result<String, String> {
    match attributes.get(key) {
        Some(AttributeValue::S(value)) => Ok(value.clone()),
        Some(_) => Err(format!("attribute '{}' is not a string", key)),
        None => Err(format!("missing attribute '{}'", key)),
    }
}
