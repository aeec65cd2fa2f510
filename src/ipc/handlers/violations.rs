use crate::ipc::error::{ok, service_err};
use crate::ipc::helpers::{self, db_conn};
use crate::ipc::labels;
use crate::ipc::types::{AppState, Request};
use crate::students;
use crate::violations::{self, ViolationInput};
use serde_json::json;

fn handle_violations_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let filters = match helpers::violation_filters(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let page = match violations::list(conn, &filters, helpers::page(req)) {
        Ok(v) => v,
        Err(e) => return service_err(&req.id, e),
    };
    let classes = match students::distinct_classes(conn) {
        Ok(v) => v,
        Err(e) => return service_err(&req.id, e),
    };

    let page = page.map(|row| labels::violation_with_student(&row));
    ok(
        &req.id,
        json!({
            "violations": page,
            "classes": classes,
            "violationTypes": labels::violation_types(),
            "statuses": labels::statuses(),
            "filters": helpers::violation_filters_json(&filters)
        }),
    )
}

fn handle_violations_options(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    match students::options(conn) {
        Ok(list) => ok(
            &req.id,
            json!({
                "students": list,
                "violationTypes": labels::violation_types(),
                "statuses": labels::statuses()
            }),
        ),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_violations_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let id = match helpers::required_id(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    match violations::show(conn, id) {
        Ok(v) => ok(
            &req.id,
            json!({ "violation": labels::violation_with_student(&v) }),
        ),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_violations_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let input: ViolationInput = match helpers::input(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    match violations::create(conn, &input, helpers::today()) {
        Ok(v) => ok(
            &req.id,
            json!({ "violation": labels::violation_with_student(&v) }),
        ),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_violations_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let id = match helpers::required_id(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let input: ViolationInput = match helpers::input(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    match violations::update(conn, id, &input, helpers::today()) {
        Ok(v) => ok(
            &req.id,
            json!({ "violation": labels::violation_with_student(&v) }),
        ),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_violations_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let id = match helpers::required_id(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    match violations::delete(conn, id) {
        Ok(()) => ok(&req.id, json!({ "deleted": true })),
        Err(e) => service_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "violations.list" => Some(handle_violations_list(state, req)),
        "violations.options" => Some(handle_violations_options(state, req)),
        "violations.get" => Some(handle_violations_get(state, req)),
        "violations.create" => Some(handle_violations_create(state, req)),
        "violations.update" => Some(handle_violations_update(state, req)),
        "violations.delete" => Some(handle_violations_delete(state, req)),
        _ => None,
    }
}
