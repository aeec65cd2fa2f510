use crate::dashboard;
use crate::ipc::error::{ok, service_err};
use crate::ipc::helpers::{self, db_conn};
use crate::ipc::labels;
use crate::ipc::types::{AppState, Request};
use serde_json::json;

fn handle_dashboard_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let d = match dashboard::compute(conn, helpers::today()) {
        Ok(v) => v,
        Err(e) => return service_err(&req.id, e),
    };

    let recent: Vec<serde_json::Value> = d
        .recent_violations
        .iter()
        .map(labels::violation_with_student)
        .collect();
    ok(
        &req.id,
        json!({
            "stats": d.stats,
            "violationsByType": labels::violations_by_type(&d.violations_by_type),
            "recentViolations": recent,
            "topViolationClasses": d.top_violation_classes
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.get" => Some(handle_dashboard_get(state, req)),
        _ => None,
    }
}
