//! Wire types for the Elasticsearch `_search` API.
//!
//! Only the parts the results page touches are modelled. Document sources
//! stay as raw [`serde_json::Value`]s; nothing downstream assumes a schema.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::config::RESULT_LIMIT;

/// Request body sent to `_search`.
///
/// Always built fresh via [`SearchRequest::match_all`]; there is no way to
/// change the limit or predicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    size: usize,
    query: Query,
}

impl SearchRequest {
    /// Newest [`RESULT_LIMIT`] documents, unfiltered.
    pub fn match_all() -> Self {
        Self {
            size: RESULT_LIMIT,
            query: Query::MatchAll(MatchAll::default()),
        }
    }

    /// Serializes to the JSON body sent on the wire.
    pub fn to_body(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }
}

/// Query predicate. Serializes as `{"match_all": {}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Query {
    MatchAll(MatchAll),
}

/// Body of a `match_all` query: an empty object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchAll {}

/// Top-level `_search` response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub hits: HitsEnvelope,
}

impl SearchResponse {
    /// Decodes a response body. A body without `hits.hits` is an error.
    pub fn from_slice(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Consumes the response, yielding hits in backend order.
    pub fn into_hits(self) -> Vec<Hit> {
        self.hits.hits
    }
}

/// The `hits` object wrapping the matched documents.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HitsEnvelope {
    pub hits: Vec<Hit>,
}

/// One matched document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hit {
    #[serde(rename = "_index", default)]
    pub index: Option<String>,
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    /// `None` only when `_source` is absent; an explicit `null` is kept.
    #[serde(rename = "_source", default, deserialize_with = "present")]
    pub source: Option<Value>,
}

/// Keeps a present field as `Some`, even when its value is `null`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Hit {
    /// Hit with only a source payload, no metadata.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn from_source(source: Value) -> Self {
        Self {
            index: None,
            id: None,
            score: None,
            source: Some(source),
        }
    }

    /// Compact JSON text of the source, keys in the order received.
    ///
    /// Whole-number floats print without a fraction (`1.0` as `1`), matching
    /// how browsers stringify JSON. A missing source yields an empty string;
    /// an explicit `null` yields `null`.
    pub fn source_text(&self) -> String {
        match &self.source {
            None => String::new(),
            Some(value) => integral_floats(value).to_string(),
        }
    }
}

/// Copy of `value` with every whole-number float rewritten as an integer.
fn integral_floats(value: &Value) -> Value {
    match value {
        Value::Number(number) => Value::Number(integral_number(number)),
        Value::Array(items) => Value::Array(items.iter().map(integral_floats).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), integral_floats(field)))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

fn integral_number(number: &Number) -> Number {
    match number.as_f64() {
        Some(f) if number.is_f64() && f.fract() == 0.0 => {
            if f >= i64::MIN as f64 && f < i64::MAX as f64 {
                Number::from(f as i64)
            } else if f >= 0.0 && f < u64::MAX as f64 {
                Number::from(f as u64)
            } else {
                number.clone()
            }
        }
        _ => number.clone(),
    }
}
