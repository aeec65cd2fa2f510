use chrono::NaiveDate;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::ipc::error::err;
use crate::ipc::types::{AppState, Request};
use crate::model::{ViolationStatus, ViolationType};
use crate::students::StudentFilters;
use crate::validate::parse_date;
use crate::violations::ViolationFilters;

pub fn db_conn<'a>(state: &'a AppState, req: &Request) -> Result<&'a Connection, serde_json::Value> {
    state
        .db
        .as_ref()
        .ok_or_else(|| err(&req.id, "no_workspace", "select a workspace first", None))
}

/// Row ids arrive as numbers from most callers and as strings from form posts.
pub fn required_id(req: &Request, key: &str) -> Result<i64, serde_json::Value> {
    let parsed = match req.params.get(key) {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| err(&req.id, "bad_params", format!("missing {}", key), None))
}

/// Trimmed string param; blank counts as absent.
pub fn optional_str(req: &Request, key: &str) -> Option<String> {
    req.params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

/// Anything that is not a positive integer means the first page. Pages past
/// the end are clamped later, once the total is known.
pub fn page(req: &Request) -> u32 {
    let raw = match req.params.get("page") {
        Some(serde_json::Value::Number(n)) => n.as_i64(),
        Some(serde_json::Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    raw.map(|n| n.clamp(1, i64::from(u32::MAX)) as u32)
        .unwrap_or(1)
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn input<T: DeserializeOwned>(req: &Request) -> Result<T, serde_json::Value> {
    serde_json::from_value(req.params.clone()).map_err(|e| {
        err(
            &req.id,
            "bad_params",
            format!("invalid params: {e}"),
            None,
        )
    })
}

pub fn student_filters(req: &Request) -> StudentFilters {
    StudentFilters {
        search: optional_str(req, "search"),
        class: optional_str(req, "class"),
    }
    .normalized()
}

pub fn violation_filters(req: &Request) -> Result<ViolationFilters, serde_json::Value> {
    let violation_type = match optional_str(req, "violationType") {
        None => None,
        Some(raw) => Some(ViolationType::parse(&raw).ok_or_else(|| {
            err(
                &req.id,
                "bad_params",
                "unknown violationType",
                Some(json!({ "violationType": raw })),
            )
        })?),
    };
    let status = match optional_str(req, "status") {
        None => None,
        Some(raw) => Some(ViolationStatus::parse(&raw).ok_or_else(|| {
            err(
                &req.id,
                "bad_params",
                "unknown status",
                Some(json!({ "status": raw })),
            )
        })?),
    };
    let date = |key: &str| -> Result<Option<NaiveDate>, serde_json::Value> {
        match optional_str(req, key) {
            None => Ok(None),
            Some(raw) => parse_date(&raw).map(Some).ok_or_else(|| {
                err(
                    &req.id,
                    "bad_params",
                    format!("{key} must be a YYYY-MM-DD date"),
                    Some(json!({ key: raw })),
                )
            }),
        }
    };

    Ok(ViolationFilters {
        search: optional_str(req, "search"),
        violation_type,
        status,
        class: optional_str(req, "class"),
        date_from: date("dateFrom")?,
        date_to: date("dateTo")?,
    })
}

/// The applied filters, echoed back so the UI can refill its form.
pub fn violation_filters_json(f: &ViolationFilters) -> serde_json::Value {
    json!({
        "search": f.search,
        "violationType": f.violation_type.map(|t| t.as_str()),
        "status": f.status.map(|s| s.as_str()),
        "class": f.class,
        "dateFrom": f.date_from.map(|d| d.format("%Y-%m-%d").to_string()),
        "dateTo": f.date_to.map(|d| d.format("%Y-%m-%d").to_string()),
    })
}
