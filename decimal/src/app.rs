//! Command-line application

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;

use crate::attribute::{AttrValue, Attribute, AttributeRegistry, FieldOverrides};
use crate::core::cli::{Cli, Commands};
use crate::core::config::AppConfig;
use crate::core::logging::init_logging;
use crate::data::{self, DataError, QueryExecutor, RowId};

pub struct App;

impl App {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        init_logging();

        tracing::debug!("Application starting");

        let cli = Cli::parse();
        tracing::trace!(command = ?cli.command, "Parsed command");

        let config = AppConfig::load(&cli.config())?;
        let registry = AttributeRegistry::with_defaults();
        let attribute = resolve_attribute(&config, &registry, cli.command.attribute())?;

        if let Commands::Describe { .. } = cli.command {
            let description = describe(attribute.as_ref());
            println!("{}", serde_json::to_string_pretty(&description)?);
            return Ok(());
        }

        let db = data::connect(&config.database)
            .await
            .with_context(|| format!("Failed to connect to {} database", config.database.backend))?;
        tracing::debug!(backend = %db.backend(), "Database connected");

        let ids = execute(attribute.as_ref(), db.as_ref(), &cli.command).await?;
        tracing::info!(
            attribute = attribute.descriptor().name(),
            matches = ids.len(),
            "Query finished"
        );
        for id in ids {
            println!("{}", id);
        }
        Ok(())
    }
}

/// Build the configured attribute called `name`
pub fn resolve_attribute(
    config: &AppConfig,
    registry: &AttributeRegistry,
    name: &str,
) -> Result<Box<dyn Attribute>> {
    let settings = config
        .attribute(name)
        .cloned()
        .with_context(|| format!("Attribute not configured: {}", name))?;
    registry.create(settings).with_context(|| {
        format!(
            "Invalid attribute settings: {} (known types: {})",
            name,
            registry.type_names().join(", ")
        )
    })
}

/// Metadata of an attribute as JSON
pub fn describe(attribute: &dyn Attribute) -> serde_json::Value {
    let descriptor = attribute.descriptor();
    let settings: serde_json::Map<String, serde_json::Value> = attribute
        .attribute_setting_names()
        .into_iter()
        .filter_map(|key| descriptor.get(key).map(|value| (key.to_string(), value)))
        .collect();

    json!({
        "type": attribute.type_name(),
        "name": descriptor.name(),
        "table": descriptor.table_name(),
        "colname": descriptor.column_name(),
        "sql_data_type": attribute.sql_data_type(),
        "setting_names": attribute.attribute_setting_names(),
        "settings": settings,
        "field_definition": attribute.field_definition(&FieldOverrides::default()),
    })
}

/// Run a filter or search command against the attribute
pub async fn execute(
    attribute: &dyn Attribute,
    db: &dyn QueryExecutor,
    command: &Commands,
) -> Result<Vec<RowId>, DataError> {
    match command {
        Commands::Gt {
            value, inclusive, ..
        } => {
            attribute
                .filter_greater_than(db, &AttrValue::from(value.as_str()), *inclusive)
                .await
        }
        Commands::Lt {
            value, inclusive, ..
        } => {
            attribute
                .filter_less_than(db, &AttrValue::from(value.as_str()), *inclusive)
                .await
        }
        Commands::Ne { value, .. } => {
            attribute
                .filter_not_equal(db, &AttrValue::from(value.as_str()))
                .await
        }
        Commands::Search { pattern, .. } => attribute.search_for(db, pattern).await,
        Commands::Describe { .. } => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::AttributeSettings;
    use crate::core::config::DatabaseConfig;
    use sqlx::SqlitePool;
    use sqlx::sqlite::SqlitePoolOptions;

    fn price_attribute() -> Box<dyn Attribute> {
        AttributeRegistry::with_defaults()
            .create(AttributeSettings {
                type_name: "decimal".to_string(),
                table: "mm_product".to_string(),
                colname: "price".to_string(),
                name: Some("Price".to_string()),
                ..AttributeSettings::default()
            })
            .unwrap()
    }

    async fn setup_test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::query("CREATE TABLE mm_product (id INTEGER PRIMARY KEY, price double NULL default NULL)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("INSERT INTO mm_product (id, price) VALUES (1, 4.5), (2, 10), (3, 25.75), (4, NULL)")
            .execute(&pool)
            .await
            .unwrap();

        pool
    }

    async fn run(pool: &SqlitePool, command: Commands) -> Vec<RowId> {
        let attribute = price_attribute();
        let mut ids = execute(attribute.as_ref(), pool, &command).await.unwrap();
        ids.sort();
        ids
    }

    #[tokio::test]
    async fn test_execute_gt() {
        let pool = setup_test_pool().await;
        let ids = run(
            &pool,
            Commands::Gt {
                attribute: "Price".to_string(),
                value: "10".to_string(),
                inclusive: false,
            },
        )
        .await;
        assert_eq!(ids, vec!["3"]);
    }

    #[tokio::test]
    async fn test_execute_lt_inclusive() {
        let pool = setup_test_pool().await;
        let ids = run(
            &pool,
            Commands::Lt {
                attribute: "Price".to_string(),
                value: "10".to_string(),
                inclusive: true,
            },
        )
        .await;
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test]
    async fn test_execute_ne_skips_null() {
        let pool = setup_test_pool().await;
        let ids = run(
            &pool,
            Commands::Ne {
                attribute: "Price".to_string(),
                value: "10".to_string(),
            },
        )
        .await;
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_execute_search() {
        let pool = setup_test_pool().await;
        let ids = run(
            &pool,
            Commands::Search {
                attribute: "Price".to_string(),
                pattern: "25.75".to_string(),
            },
        )
        .await;
        assert_eq!(ids, vec!["3"]);
    }

    #[tokio::test]
    async fn test_execute_describe_issues_no_query() {
        let attribute = price_attribute();
        let db = crate::test_utils::RecordingExecutor::new(&["1"]);
        let ids = execute(
            attribute.as_ref(),
            &db,
            &Commands::Describe {
                attribute: "Price".to_string(),
            },
        )
        .await
        .unwrap();

        assert!(ids.is_empty());
        assert!(db.calls().is_empty());
    }

    #[test]
    fn test_describe() {
        let attribute = price_attribute();
        let description = describe(attribute.as_ref());

        assert_eq!(description["type"], "decimal");
        assert_eq!(description["name"], "Price");
        assert_eq!(description["sql_data_type"], "double NULL default NULL");
        assert_eq!(description["field_definition"]["inputType"], "text");
        assert_eq!(description["field_definition"]["eval"]["rgxp"], "digit");

        let names = description["setting_names"].as_array().unwrap();
        assert!(names.iter().any(|n| n == "filterable"));
        assert!(names.iter().any(|n| n == "colname"));

        assert_eq!(description["settings"]["colname"], "price");
        assert_eq!(description["settings"]["name"], "Price");
        assert_eq!(description["settings"]["filterable"], false);
        assert!(description["settings"].get("pid").is_none());
    }

    fn config_with(attributes: Vec<AttributeSettings>) -> AppConfig {
        AppConfig {
            database: DatabaseConfig::default(),
            attributes,
        }
    }

    #[test]
    fn test_resolve_attribute_by_name() {
        let config = config_with(vec![AttributeSettings {
            type_name: "decimal".to_string(),
            table: "mm_product".to_string(),
            colname: "price".to_string(),
            name: Some("Price".to_string()),
            ..AttributeSettings::default()
        }]);
        let registry = AttributeRegistry::with_defaults();

        let attribute = resolve_attribute(&config, &registry, "Price").unwrap();
        assert_eq!(attribute.descriptor().column_name(), "price");

        let err = resolve_attribute(&config, &registry, "Weight").err().unwrap();
        assert!(err.to_string().contains("Attribute not configured: Weight"));
    }

    #[test]
    fn test_resolve_attribute_unknown_type_lists_known_types() {
        let config = config_with(vec![AttributeSettings {
            type_name: "geo".to_string(),
            table: "mm_product".to_string(),
            colname: "location".to_string(),
            ..AttributeSettings::default()
        }]);
        let registry = AttributeRegistry::with_defaults();

        let err = resolve_attribute(&config, &registry, "location").err().unwrap();
        let message = err.to_string();
        assert!(message.contains("Invalid attribute settings: location"));
        assert!(message.contains("known types: decimal"));
    }
}
