//! Free-text query request and the heterogeneous result it resolves to

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// A resolved query: a sentence for the user plus whatever rows backed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub answer: String,
    #[serde(default)]
    pub data: Vec<ResultRecord>,
    pub query_type: String,
}

impl QueryResult {
    /// Query type used for both backend-reported and client-side failures
    pub const ERROR_TYPE: &'static str = "error";

    /// A result that carries only an explanation and no rows
    pub fn error(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            data: Vec::new(),
            query_type: Self::ERROR_TYPE.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.query_type == Self::ERROR_TYPE
    }
}

/// One row of a query result.
///
/// Rows come from different tables depending on the query (work orders,
/// leases, per-property cost rollups), so no field is guaranteed. Decoding is
/// total: any JSON value produces a record, and a known field holding a value
/// of the wrong shape is treated as absent. Unrecognised keys are kept in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ResultRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResultRecord {
    pub fn is_empty(&self) -> bool {
        self.address.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.cost.is_none()
            && self.total_cost.is_none()
            && self.extra.is_empty()
    }
}

impl From<Value> for ResultRecord {
    fn from(value: Value) -> Self {
        let Value::Object(mut map) = value else {
            return Self::default();
        };

        Self {
            address: map.remove("address").and_then(text_field),
            description: map.remove("description").and_then(text_field),
            date: map.remove("date").and_then(text_field),
            cost: map.remove("cost").and_then(amount_field),
            total_cost: map.remove("total_cost").and_then(amount_field),
            extra: map,
        }
    }
}

fn text_field(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn amount_field(value: Value) -> Option<f64> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    amount.filter(|v| v.is_finite())
}
