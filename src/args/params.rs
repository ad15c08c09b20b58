//! Query-parameter sources for workers.
//!
//! A run either shares one literal payload between every worker or gives each
//! worker its own random `ref` value.
use std::collections::BTreeMap;

use rand::Rng;
use rand::distributions::{Alphanumeric, Distribution};
use serde_json::{Map, Value};

use crate::error::ValidationError;

pub type QueryParams = BTreeMap<String, String>;

/// Name of the generated query parameter in random mode.
pub const REF_PARAM: &str = "ref";
/// Length of a generated `ref` value.
pub const REF_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterSource {
    /// The same payload for every worker.
    Literal(QueryParams),
    /// A fresh `{"ref": <random>}` per worker.
    RandomRef,
}

impl ParameterSource {
    /// Produces the query parameters for the next worker.
    pub fn params_for_worker<R>(&self, rng: &mut R) -> QueryParams
    where
        R: Rng + ?Sized,
    {
        match self {
            ParameterSource::Literal(params) => params.clone(),
            ParameterSource::RandomRef => {
                let mut params = QueryParams::new();
                params.insert(REF_PARAM.to_owned(), random_ref(rng));
                params
            }
        }
    }
}

/// Draws [`REF_LEN`] characters from `A-Z`, `a-z` and `0-9`.
pub fn random_ref<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    Alphanumeric
        .sample_iter(rng)
        .take(REF_LEN)
        .map(char::from)
        .collect()
}

/// Parses a literal `--params` payload.
///
/// Accepts a JSON object (`{"foo": "bar"}`), a Python-style dict with single
/// quotes, one or more `(key, value)` tuples, or a plain query string
/// (`foo=bar&baz=qux`).
///
/// # Errors
///
/// Returns an error when the payload looks like an object or tuple but cannot
/// be read as one.
pub fn parse_params(raw: &str) -> Result<QueryParams, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(QueryParams::new());
    }
    if trimmed.starts_with('{') {
        return parse_object(raw, trimmed);
    }
    if trimmed.starts_with('(') || trimmed.starts_with('[') {
        return parse_tuples(raw, trimmed);
    }
    Ok(url::form_urlencoded::parse(trimmed.trim_start_matches('?').as_bytes())
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect())
}

fn parse_object(raw: &str, trimmed: &str) -> Result<QueryParams, ValidationError> {
    let object = serde_json::from_str::<Map<String, Value>>(trimmed)
        .or_else(|_json_err| serde_json::from_str::<Map<String, Value>>(&trimmed.replace('\'', "\"")))
        .map_err(|_json_err| invalid(raw, "expected a JSON object"))?;

    Ok(object
        .into_iter()
        .filter_map(|(key, value)| match value {
            Value::Null => None,
            Value::String(text) => Some((key, text)),
            Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
                Some((key, value.to_string()))
            }
        })
        .collect())
}

fn parse_tuples(raw: &str, trimmed: &str) -> Result<QueryParams, ValidationError> {
    let mut rest = strip_outer(trimmed);
    let mut params = QueryParams::new();
    loop {
        rest = rest.trim_start().trim_start_matches(',').trim_start();
        if rest.is_empty() {
            break;
        }
        let Some(open) = rest.strip_prefix('(') else {
            return Err(invalid(raw, "expected '(' to start a tuple"));
        };
        let Some((inner, tail)) = open.split_once(')') else {
            return Err(invalid(raw, "unclosed tuple"));
        };
        let Some((key, value)) = inner.split_once(',') else {
            return Err(invalid(raw, "tuple needs a key and a value"));
        };
        let key = unquote(key);
        if key.is_empty() {
            return Err(invalid(raw, "tuple key must not be empty"));
        }
        params.insert(key.to_owned(), unquote(value).to_owned());
        rest = tail;
    }
    Ok(params)
}

/// Removes a wrapping `[...]` or `(...)` around a list of tuples.
fn strip_outer(value: &str) -> &str {
    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        return inner;
    }
    if value.starts_with("((") {
        if let Some(inner) = value.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
            return inner;
        }
    }
    value
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn invalid(raw: &str, reason: &'static str) -> ValidationError {
    ValidationError::InvalidParams {
        value: raw.to_owned(),
        reason,
    }
}
