use crate::ipc::error::{ok, service_err};
use crate::ipc::helpers::{self, db_conn};
use crate::ipc::labels;
use crate::ipc::types::{AppState, Request};
use crate::students::{self, StudentInput};
use serde_json::json;

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let filters = helpers::student_filters(req);
    let page = match students::list(conn, &filters, helpers::page(req)) {
        Ok(v) => v,
        Err(e) => return service_err(&req.id, e),
    };
    let classes = match students::distinct_classes(conn) {
        Ok(v) => v,
        Err(e) => return service_err(&req.id, e),
    };

    let page = page.map(|row| labels::student_with_violations(&row));
    ok(
        &req.id,
        json!({
            "students": page,
            "classes": classes,
            "filters": filters
        }),
    )
}

fn handle_students_classes(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    match students::distinct_classes(conn) {
        Ok(classes) => ok(&req.id, json!({ "classes": classes })),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_students_options(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    match students::options(conn) {
        Ok(list) => ok(&req.id, json!({ "students": list })),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_students_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let id = match helpers::required_id(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    match students::show(conn, id) {
        Ok(detail) => ok(
            &req.id,
            json!({ "student": labels::student_with_violations(&detail) }),
        ),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_students_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let input: StudentInput = match helpers::input(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    match students::create(conn, &input) {
        Ok(student) => ok(&req.id, json!({ "student": student })),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_students_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let id = match helpers::required_id(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    let input: StudentInput = match helpers::input(req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    match students::update(conn, id, &input) {
        Ok(student) => ok(&req.id, json!({ "student": student })),
        Err(e) => service_err(&req.id, e),
    }
}

fn handle_students_delete(state: &mut AppState, req: &Request) -> serde_json::Value {
    let conn = match db_conn(state, req) {
        Ok(v) => v,
        Err(e) => return e,
    };
    let id = match helpers::required_id(req, "id") {
        Ok(v) => v,
        Err(e) => return e,
    };
    match students::delete(conn, id) {
        Ok(removed) => ok(
            &req.id,
            json!({ "deleted": true, "violationsDeleted": removed }),
        ),
        Err(e) => service_err(&req.id, e),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.classes" => Some(handle_students_classes(state, req)),
        "students.options" => Some(handle_students_options(state, req)),
        "students.get" => Some(handle_students_get(state, req)),
        "students.create" => Some(handle_students_create(state, req)),
        "students.update" => Some(handle_students_update(state, req)),
        "students.delete" => Some(handle_students_delete(state, req)),
        _ => None,
    }
}
