//! The assistant pipeline: Prompt Builder → Completion Client → Response Validator → Enricher.
//!
//! Each endpoint is one `Task` (template, expected schema, enrichment rule);
//! the pipeline itself is implemented once in `execute`.

pub mod catalog;
pub mod enrich;
pub mod prompt;
pub mod schema;

use std::time::{Duration, Instant};

use anyhow::anyhow;
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::system_message;
use crate::llm_client::{CompletionClient, CompletionError};
use enrich::{enrich_connections, enrich_job_matches, EnrichmentRule, EnrichmentSource};
use prompt::{render, PromptFields};
use schema::Schema;

/// Configuration of one assistant endpoint.
#[derive(Debug)]
pub struct Task {
    /// Route segment, also used in logs.
    pub name: &'static str,
    pub system: &'static str,
    pub template: &'static str,
    pub schema: &'static Schema,
    pub enrichment: EnrichmentRule,
    /// When set, the validated (array) result is returned as `{ key: result }`.
    pub response_key: Option<&'static str>,
}

/// Runs one request through the pipeline. No partial results: any failure fails the call.
pub async fn execute(
    completion: &dyn CompletionClient,
    timeout: Duration,
    task: &Task,
    fields: &PromptFields,
    source: EnrichmentSource<'_>,
) -> Result<Value, AppError> {
    let prompt = render(task.template, fields)?;
    let system = system_message(task.system);

    let started = Instant::now();
    let raw = tokio::time::timeout(timeout, completion.complete(&system, &prompt))
        .await
        .map_err(|_| CompletionError::Timeout)??;
    info!(
        "{} completion received in {}ms",
        task.name,
        started.elapsed().as_millis()
    );

    let parsed = schema::parse(&raw, task.schema).inspect_err(|e| {
        warn!("{} reply failed validation: {e}", task.name);
    })?;

    let enriched = enrich(task.enrichment, source, parsed)?;

    Ok(match task.response_key {
        Some(key) => {
            let mut wrapped = Map::new();
            wrapped.insert(key.to_string(), enriched);
            Value::Object(wrapped)
        }
        None => enriched,
    })
}

fn enrich(
    rule: EnrichmentRule,
    source: EnrichmentSource<'_>,
    parsed: Value,
) -> Result<Value, AppError> {
    match (rule, source, parsed) {
        (EnrichmentRule::None, _, parsed) => Ok(parsed),
        (EnrichmentRule::ConnectionsByName, EnrichmentSource::Candidates(users), Value::Array(items)) => {
            Ok(Value::Array(enrich_connections(items, users)))
        }
        (EnrichmentRule::JobsByTitleAndCompany, EnrichmentSource::Catalog(catalog), Value::Array(items)) => {
            Ok(Value::Array(enrich_job_matches(items, catalog)))
        }
        (rule, _, _) => Err(AppError::Internal(anyhow!(
            "enrichment rule {rule:?} invoked without its source or on a non-array result"
        ))),
    }
}
