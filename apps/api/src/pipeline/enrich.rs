//! Enricher: attaches locally authoritative fields to model output.
//!
//! Matching is exact, case-sensitive field equality. Items without a match are
//! dropped, so no item reaches a client without a resolvable local target.
//! Enrichment is idempotent: enriched items still carry their match keys.

use serde_json::{Map, Value};
use tracing::debug;

use crate::models::profile::UserProfile;
use crate::pipeline::catalog::JobCatalog;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnrichmentRule {
    None,
    /// `name` ↔ stored user name; attaches `userId`, `skills`, `interests`, `education`.
    ConnectionsByName,
    /// `jobTitle` + `company` ↔ catalog listing; merges the listing's fields over the match.
    JobsByTitleAndCompany,
}

/// Local records an enrichment rule joins against.
#[derive(Clone, Copy)]
pub enum EnrichmentSource<'a> {
    Nothing,
    Candidates(&'a [UserProfile]),
    Catalog(&'a JobCatalog),
}

pub fn enrich_connections(items: Vec<Value>, candidates: &[UserProfile]) -> Vec<Value> {
    let before = items.len();
    let enriched: Vec<Value> = items
        .into_iter()
        .filter_map(|item| {
            let Value::Object(mut map) = item else {
                return None;
            };
            let name = map.get("name")?.as_str()?;
            let user = candidates.iter().find(|u| u.name == name)?;

            map.insert("userId".to_string(), Value::String(user.id.to_string()));
            map.insert("skills".to_string(), string_array(&user.skills));
            map.insert("interests".to_string(), string_array(&user.interests));
            map.insert(
                "education".to_string(),
                serde_json::to_value(&user.education).unwrap_or(Value::Array(vec![])),
            );
            Some(Value::Object(map))
        })
        .collect();

    if enriched.len() < before {
        debug!(
            "Dropped {} connection suggestions with no matching user",
            before - enriched.len()
        );
    }
    enriched
}

pub fn enrich_job_matches(items: Vec<Value>, catalog: &JobCatalog) -> Vec<Value> {
    let before = items.len();
    let enriched: Vec<Value> = items
        .into_iter()
        .filter_map(|item| {
            let Value::Object(mut map) = item else {
                return None;
            };
            let title = map.get("jobTitle")?.as_str()?;
            let company = map.get("company")?.as_str()?;
            let job = catalog.find(title, company)?;

            let listing: Map<String, Value> = match serde_json::to_value(job) {
                Ok(Value::Object(listing)) => listing,
                _ => return None,
            };
            map.extend(listing);
            Some(Value::Object(map))
        })
        .collect();

    if enriched.len() < before {
        debug!(
            "Dropped {} job matches with no catalog listing",
            before - enriched.len()
        );
    }
    enriched
}

fn string_array(items: &[String]) -> Value {
    Value::Array(items.iter().cloned().map(Value::String).collect())
}
