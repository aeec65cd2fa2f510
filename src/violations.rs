use chrono::NaiveDate;
use rusqlite::{params_from_iter, Connection, OptionalExtension};
use serde::Deserialize;

use crate::error::{ServiceError, ServiceResult};
use crate::model::{
    Violation, ViolationStatus, ViolationType, ViolationWithStudent, STUDENT_COLUMNS,
    VIOLATION_COLUMNS,
};
use crate::query::{resolve_page, Page, Predicate, PER_PAGE};
use crate::validate::{self, Field, FieldErrors, TextRule};

const STUDENT_NAME: TextRule = TextRule {
    field: "studentName",
    max_chars: 255,
    required: "Nama siswa wajib diisi.",
    too_long: "Nama siswa maksimal 255 karakter.",
};
const STUDENT_CLASS: TextRule = TextRule {
    field: "studentClass",
    max_chars: 50,
    required: "Kelas siswa wajib diisi.",
    too_long: "Kelas siswa maksimal 50 karakter.",
};
const DESCRIPTION: TextRule = TextRule {
    field: "description",
    max_chars: 1000,
    required: "Deskripsi pelanggaran wajib diisi.",
    too_long: "Deskripsi pelanggaran maksimal 1000 karakter.",
};
const DISCIPLINARY_ACTION: TextRule = TextRule {
    field: "disciplinaryAction",
    max_chars: 500,
    required: "Tindakan disiplin wajib diisi.",
    too_long: "Tindakan disiplin maksimal 500 karakter.",
};
const REPORTING_STAFF: TextRule = TextRule {
    field: "reportingStaff",
    max_chars: 255,
    required: "Nama pelapor wajib diisi.",
    too_long: "Nama pelapor maksimal 255 karakter.",
};

const ORDER_BY_DATE: &str = "ORDER BY v.violation_date DESC, v.id ASC";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationFilters {
    pub search: Option<String>,
    pub violation_type: Option<ViolationType>,
    pub status: Option<ViolationStatus>,
    pub class: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ViolationFilters {
    fn predicate(&self) -> Predicate {
        let mut p = Predicate::new();
        if let Some(search) = &self.search {
            p.contains_any(
                &[
                    "v.student_name",
                    "v.student_class",
                    "v.description",
                    "v.reporting_staff",
                ],
                search,
            );
        }
        if let Some(t) = self.violation_type {
            p.eq("v.violation_type", t.as_str().to_string());
        }
        if let Some(s) = self.status {
            p.eq("v.status", s.as_str().to_string());
        }
        if let Some(class) = &self.class {
            p.eq("v.student_class", class.clone());
        }
        if let Some(from) = self.date_from {
            p.date_on_or_after("v.violation_date", from);
        }
        if let Some(to) = self.date_to {
            p.date_on_or_before("v.violation_date", to);
        }
        p
    }
}

/// Raw form fields as submitted. Everything is checked by `validated`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationInput {
    pub student_id: Option<serde_json::Value>,
    pub student_name: Option<serde_json::Value>,
    pub student_class: Option<serde_json::Value>,
    pub violation_date: Option<serde_json::Value>,
    pub violation_type: Option<serde_json::Value>,
    pub description: Option<serde_json::Value>,
    pub disciplinary_action: Option<serde_json::Value>,
    pub reporting_staff: Option<serde_json::Value>,
    pub status: Option<serde_json::Value>,
}

#[derive(Debug)]
struct ValidViolation {
    student_id: i64,
    student_name: String,
    student_class: String,
    violation_date: NaiveDate,
    violation_type: ViolationType,
    description: String,
    disciplinary_action: String,
    reporting_staff: String,
    status: ViolationStatus,
}

fn select_joined() -> String {
    format!(
        "SELECT {VIOLATION_COLUMNS}, {STUDENT_COLUMNS}
         FROM violations v
         LEFT JOIN students s ON s.id = v.student_id"
    )
}

pub fn list(
    conn: &Connection,
    filters: &ViolationFilters,
    page: u32,
) -> ServiceResult<Page<ViolationWithStudent>> {
    let predicate = filters.predicate();
    let where_clause = predicate.where_clause();

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM violations v{where_clause}"),
        params_from_iter(predicate.params()),
        |r| r.get(0),
    )?;
    let window = resolve_page(page, total.max(0) as u64, PER_PAGE);

    let mut stmt = conn.prepare(&format!(
        "{}{where_clause} {ORDER_BY_DATE} LIMIT ? OFFSET ?",
        select_joined()
    ))?;
    let rows = stmt
        .query_map(
            params_from_iter(predicate.params_with_window(&window)),
            ViolationWithStudent::from_joined_row,
        )?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Page::new(rows, &window))
}

/// The `limit` most recently dated violations with their students.
pub fn latest(conn: &Connection, limit: u32) -> ServiceResult<Vec<ViolationWithStudent>> {
    let mut stmt = conn.prepare(&format!("{} {ORDER_BY_DATE} LIMIT ?", select_joined()))?;
    let rows = stmt
        .query_map([i64::from(limit)], ViolationWithStudent::from_joined_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn find(conn: &Connection, id: i64) -> ServiceResult<Option<Violation>> {
    let violation = conn
        .query_row(
            &format!("SELECT {VIOLATION_COLUMNS} FROM violations v WHERE v.id = ?"),
            [id],
            Violation::from_row,
        )
        .optional()?;
    Ok(violation)
}

pub fn show(conn: &Connection, id: i64) -> ServiceResult<ViolationWithStudent> {
    conn.query_row(
        &format!("{} WHERE v.id = ?", select_joined()),
        [id],
        ViolationWithStudent::from_joined_row,
    )
    .optional()?
    .ok_or(ServiceError::NotFound("violation"))
}

fn student_ref(raw: Option<&serde_json::Value>) -> Option<i64> {
    match raw? {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_blank(raw: Option<&serde_json::Value>) -> bool {
    match raw {
        None | Some(serde_json::Value::Null) => true,
        Some(serde_json::Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

/// Checks every field and reports all failures together. `current_status`
/// is what an omitted `status` falls back to.
fn validated(
    conn: &Connection,
    input: &ViolationInput,
    today: NaiveDate,
    current_status: ViolationStatus,
) -> ServiceResult<ValidViolation> {
    let mut errors = FieldErrors::default();

    let student_id = if is_blank(input.student_id.as_ref()) {
        errors.add("studentId", "Siswa wajib dipilih.");
        None
    } else {
        let exists = match student_ref(input.student_id.as_ref()) {
            Some(id) => conn
                .query_row("SELECT id FROM students WHERE id = ?", [id], |r| {
                    r.get::<_, i64>(0)
                })
                .optional()?,
            None => None,
        };
        if exists.is_none() {
            errors.add("studentId", "Siswa tidak ditemukan.");
        }
        exists
    };

    let student_name = validate::text(&mut errors, input.student_name.as_ref(), &STUDENT_NAME);
    let student_class =
        validate::text(&mut errors, input.student_class.as_ref(), &STUDENT_CLASS);

    let violation_date = match validate::field(input.violation_date.as_ref()) {
        Field::Missing => {
            errors.add("violationDate", "Tanggal pelanggaran wajib diisi.");
            None
        }
        Field::NotText => {
            errors.add("violationDate", validate::NOT_TEXT);
            None
        }
        Field::Text(raw) => match validate::parse_date(raw) {
            None => {
                errors.add("violationDate", "Format tanggal pelanggaran tidak valid.");
                None
            }
            Some(d) if d > today => {
                errors.add(
                    "violationDate",
                    "Tanggal pelanggaran tidak boleh lebih dari hari ini.",
                );
                None
            }
            Some(d) => Some(d),
        },
    };

    let violation_type = match validate::field(input.violation_type.as_ref()) {
        Field::Missing => {
            errors.add("violationType", "Jenis pelanggaran wajib dipilih.");
            None
        }
        Field::NotText => {
            errors.add("violationType", validate::NOT_TEXT);
            None
        }
        Field::Text(raw) => {
            let parsed = ViolationType::parse(raw);
            if parsed.is_none() {
                errors.add("violationType", "Jenis pelanggaran tidak valid.");
            }
            parsed
        }
    };

    let description = validate::text(&mut errors, input.description.as_ref(), &DESCRIPTION);
    let disciplinary_action = validate::text(
        &mut errors,
        input.disciplinary_action.as_ref(),
        &DISCIPLINARY_ACTION,
    );
    let reporting_staff =
        validate::text(&mut errors, input.reporting_staff.as_ref(), &REPORTING_STAFF);

    let status = match validate::field(input.status.as_ref()) {
        Field::Missing => Some(current_status),
        Field::NotText => {
            errors.add("status", validate::NOT_TEXT);
            None
        }
        Field::Text(raw) => {
            let parsed = ViolationStatus::parse(raw);
            if parsed.is_none() {
                errors.add("status", "Status tidak valid.");
            }
            parsed
        }
    };

    match (
        student_id,
        student_name,
        student_class,
        violation_date,
        violation_type,
        description,
        disciplinary_action,
        reporting_staff,
        status,
    ) {
        (
            Some(student_id),
            Some(student_name),
            Some(student_class),
            Some(violation_date),
            Some(violation_type),
            Some(description),
            Some(disciplinary_action),
            Some(reporting_staff),
            Some(status),
        ) if errors.is_empty() => Ok(ValidViolation {
            student_id,
            student_name,
            student_class,
            violation_date,
            violation_type,
            description,
            disciplinary_action,
            reporting_staff,
            status,
        }),
        _ => Err(ServiceError::Validation(errors)),
    }
}

pub fn create(
    conn: &Connection,
    input: &ViolationInput,
    today: NaiveDate,
) -> ServiceResult<ViolationWithStudent> {
    let v = validated(conn, input, today, ViolationStatus::default())?;
    conn.execute(
        "INSERT INTO violations(
           student_id, student_name, student_class, violation_date, violation_type,
           description, disciplinary_action, reporting_staff, status, created_at, updated_at
         ) VALUES(?, ?, ?, ?, ?, ?, ?, ?, ?,
           strftime('%Y-%m-%dT%H:%M:%SZ','now'), strftime('%Y-%m-%dT%H:%M:%SZ','now'))",
        rusqlite::params![
            v.student_id,
            v.student_name,
            v.student_class,
            v.violation_date,
            v.violation_type,
            v.description,
            v.disciplinary_action,
            v.reporting_staff,
            v.status,
        ],
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(
        id,
        student = v.student_id,
        violation_type = v.violation_type.as_str(),
        "violation filed"
    );
    show(conn, id)
}

/// Full overwrite of the report. Status moves freely between any two values.
pub fn update(
    conn: &Connection,
    id: i64,
    input: &ViolationInput,
    today: NaiveDate,
) -> ServiceResult<ViolationWithStudent> {
    let current = find(conn, id)?.ok_or(ServiceError::NotFound("violation"))?;
    let v = validated(conn, input, today, current.status)?;
    conn.execute(
        "UPDATE violations
         SET student_id = ?, student_name = ?, student_class = ?, violation_date = ?,
             violation_type = ?, description = ?, disciplinary_action = ?,
             reporting_staff = ?, status = ?,
             updated_at = strftime('%Y-%m-%dT%H:%M:%SZ','now')
         WHERE id = ?",
        rusqlite::params![
            v.student_id,
            v.student_name,
            v.student_class,
            v.violation_date,
            v.violation_type,
            v.description,
            v.disciplinary_action,
            v.reporting_staff,
            v.status,
            id,
        ],
    )?;
    if current.status != v.status {
        tracing::info!(
            id,
            from = current.status.as_str(),
            to = v.status.as_str(),
            "violation status changed"
        );
    }
    show(conn, id)
}

pub fn delete(conn: &Connection, id: i64) -> ServiceResult<()> {
    let n = conn.execute("DELETE FROM violations WHERE id = ?", [id])?;
    if n == 0 {
        return Err(ServiceError::NotFound("violation"));
    }
    tracing::info!(id, "violation deleted");
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::db::open_memory;
    use crate::students::{self, StudentInput};

    pub(crate) fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    pub(crate) fn add_student(conn: &Connection, name: &str, sid: &str, class: &str) -> i64 {
        students::create(
            conn,
            &StudentInput {
                name: Some(name.into()),
                student_id: Some(sid.into()),
                class: Some(class.into()),
            },
        )
        .expect("create student")
        .id
    }

    pub(crate) fn report(student_id: i64, name: &str, class: &str, date: &str) -> ViolationInput {
        ViolationInput {
            student_id: Some(serde_json::json!(student_id)),
            student_name: Some(name.into()),
            student_class: Some(class.into()),
            violation_date: Some(date.into()),
            violation_type: Some("lateness".into()),
            description: Some("Terlambat 15 menit".into()),
            disciplinary_action: Some("Teguran lisan".into()),
            reporting_staff: Some("Pak Guru".into()),
            status: None,
        }
    }

    fn field_names(e: ServiceError) -> Vec<String> {
        match e {
            ServiceError::Validation(f) => f.field_names().into_iter().map(String::from).collect(),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn create_defaults_status_to_pending_and_attaches_student() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X RPL 1");
        let created = create(&conn, &report(sid, "Andi", "X RPL 1", "2024-03-01"), day(2024, 3, 1))
            .expect("create");
        assert_eq!(created.violation.status, ViolationStatus::Pending);
        assert_eq!(created.violation.violation_date, day(2024, 3, 1));
        assert_eq!(created.student.expect("student").id, sid);
    }

    #[test]
    fn future_date_is_rejected_on_violation_date() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let e = create(&conn, &report(sid, "Andi", "X", "2024-03-02"), day(2024, 3, 1))
            .expect_err("future");
        assert_eq!(field_names(e), vec!["violationDate"]);
    }

    #[test]
    fn unknown_type_is_rejected_on_violation_type() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let mut input = report(sid, "Andi", "X", "2024-03-01");
        input.violation_type = Some("x".into());
        let e = create(&conn, &input, day(2024, 3, 1)).expect_err("bad type");
        assert_eq!(field_names(e), vec!["violationType"]);
    }

    #[test]
    fn numeric_date_and_type_are_field_errors() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let mut input = report(sid, "Andi", "X", "2024-03-01");
        input.violation_date = Some(serde_json::json!(20240101));
        input.violation_type = Some(serde_json::json!(1));
        input.description = Some("".into());
        let e = create(&conn, &input, day(2024, 3, 1)).expect_err("not text");
        match e {
            ServiceError::Validation(f) => {
                let v = serde_json::to_value(&f).expect("ser");
                assert_eq!(v["violationDate"], serde_json::json!([validate::NOT_TEXT]));
                assert_eq!(v["violationType"], serde_json::json!([validate::NOT_TEXT]));
                assert_eq!(
                    f.field_names(),
                    vec!["description", "violationDate", "violationType"]
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn every_failing_field_is_reported_at_once() {
        let conn = open_memory();
        let input = ViolationInput {
            student_id: Some(serde_json::json!(42)),
            violation_date: Some("2099-01-01".into()),
            violation_type: Some("x".into()),
            status: Some("closed".into()),
            ..Default::default()
        };
        let e = create(&conn, &input, day(2024, 3, 1)).expect_err("invalid");
        assert_eq!(
            field_names(e),
            vec![
                "description",
                "disciplinaryAction",
                "reportingStaff",
                "status",
                "studentClass",
                "studentId",
                "studentName",
                "violationDate",
                "violationType",
            ]
        );
        let n: i64 = conn
            .query_row("SELECT COUNT(*) FROM violations", [], |r| r.get(0))
            .expect("count");
        assert_eq!(n, 0);
    }

    #[test]
    fn student_reference_accepts_numeric_strings() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let mut input = report(sid, "Andi", "X", "2024-03-01");
        input.student_id = Some(serde_json::json!(sid.to_string()));
        create(&conn, &input, day(2024, 3, 1)).expect("create");
        input.student_id = Some(serde_json::json!("abc"));
        let e = create(&conn, &input, day(2024, 3, 1)).expect_err("bad ref");
        assert_eq!(field_names(e), vec!["studentId"]);
    }

    #[test]
    fn status_transitions_are_unguarded() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let today = day(2024, 3, 1);
        let mut input = report(sid, "Andi", "X", "2024-03-01");
        let id = create(&conn, &input, today).expect("create").violation.id;

        input.status = Some("resolved".into());
        let v = update(&conn, id, &input, today).expect("resolve");
        assert_eq!(v.violation.status, ViolationStatus::Resolved);

        input.status = None;
        let v = update(&conn, id, &input, today).expect("keep");
        assert_eq!(v.violation.status, ViolationStatus::Resolved);

        input.status = Some("pending".into());
        let v = update(&conn, id, &input, today).expect("reopen");
        assert_eq!(v.violation.status, ViolationStatus::Pending);
    }

    #[test]
    fn update_and_delete_missing_are_not_found() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let input = report(sid, "Andi", "X", "2024-03-01");
        assert!(matches!(
            update(&conn, 7, &input, day(2024, 3, 1)),
            Err(ServiceError::NotFound("violation"))
        ));
        assert!(matches!(delete(&conn, 7), Err(ServiceError::NotFound("violation"))));
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let today = day(2024, 3, 1);
        for d in ["2023-12-31", "2024-01-01", "2024-01-15", "2024-01-31", "2024-02-01"] {
            create(&conn, &report(sid, "Andi", "X", d), today).expect("create");
        }
        let filters = ViolationFilters {
            date_from: Some(day(2024, 1, 1)),
            date_to: Some(day(2024, 1, 31)),
            ..Default::default()
        };
        let page = list(&conn, &filters, 1).expect("list");
        let dates: Vec<_> = page.data.iter().map(|r| r.violation.violation_date).collect();
        assert_eq!(dates, vec![day(2024, 1, 31), day(2024, 1, 15), day(2024, 1, 1)]);

        let open_ended = ViolationFilters {
            date_from: Some(day(2024, 1, 31)),
            ..Default::default()
        };
        assert_eq!(list(&conn, &open_ended, 1).expect("list").meta.total, 2);
    }

    #[test]
    fn search_spans_snapshot_description_and_staff() {
        let conn = open_memory();
        let a = add_student(&conn, "Andi", "1001", "X RPL 1");
        let b = add_student(&conn, "Budi", "1002", "XI TKJ 2");
        let today = day(2024, 3, 1);
        create(&conn, &report(a, "Andi", "X RPL 1", "2024-02-01"), today).expect("a");
        let mut other = report(b, "Budi", "XI TKJ 2", "2024-02-02");
        other.description = Some("Membawa HP ke ujian".into());
        other.reporting_staff = Some("Bu Sari".into());
        other.violation_type = Some("academic_dishonesty".into());
        create(&conn, &other, today).expect("b");

        let count = |f: ViolationFilters| list(&conn, &f, 1).expect("list").meta.total;
        let search = |t: &str| ViolationFilters {
            search: Some(t.into()),
            ..Default::default()
        };
        assert_eq!(count(search("andi")), 1);
        assert_eq!(count(search("tkj")), 1);
        assert_eq!(count(search("ujian")), 1);
        assert_eq!(count(search("SARI")), 1);
        assert_eq!(count(search("nobody")), 0);
        assert_eq!(
            count(ViolationFilters {
                search: Some("a".into()),
                violation_type: Some(ViolationType::AcademicDishonesty),
                ..Default::default()
            }),
            1
        );
        assert_eq!(
            count(ViolationFilters {
                class: Some("X RPL".into()),
                ..Default::default()
            }),
            0
        );
        assert_eq!(
            count(ViolationFilters {
                status: Some(ViolationStatus::Pending),
                class: Some("X RPL 1".into()),
                ..Default::default()
            }),
            1
        );
    }

    #[test]
    fn twenty_matches_split_fifteen_and_five() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let today = day(2024, 3, 1);
        for i in 1..=20 {
            create(&conn, &report(sid, "Andi", "X", &format!("2024-02-{i:02}")), today)
                .expect("create");
        }
        let p1 = list(&conn, &ViolationFilters::default(), 1).expect("p1");
        assert_eq!((p1.data.len(), p1.meta.total), (15, 20));
        assert_eq!(p1.data[0].violation.violation_date, day(2024, 2, 20));
        let p2 = list(&conn, &ViolationFilters::default(), 2).expect("p2");
        assert_eq!((p2.data.len(), p2.meta.total), (5, 20));
        assert_eq!(p2.data[4].violation.violation_date, day(2024, 2, 1));
    }

    #[test]
    fn renaming_a_student_leaves_snapshots_alone() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X RPL 1");
        let id = create(&conn, &report(sid, "Andi", "X RPL 1", "2024-02-01"), day(2024, 3, 1))
            .expect("create")
            .violation
            .id;
        students::update(
            &conn,
            sid,
            &StudentInput {
                name: Some("Andi Wijaya".into()),
                student_id: Some("1001".into()),
                class: Some("XI RPL 1".into()),
            },
        )
        .expect("rename");
        let v = show(&conn, id).expect("show");
        assert_eq!(v.violation.student_name, "Andi");
        assert_eq!(v.violation.student_class, "X RPL 1");
        assert_eq!(v.student.expect("student").name, "Andi Wijaya");
    }

    #[test]
    fn deleting_a_student_cascades_to_violations() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let keep = add_student(&conn, "Budi", "1002", "X");
        let today = day(2024, 3, 1);
        for _ in 0..3 {
            create(&conn, &report(sid, "Andi", "X", "2024-02-01"), today).expect("create");
        }
        create(&conn, &report(keep, "Budi", "X", "2024-02-01"), today).expect("create");

        assert_eq!(students::delete(&conn, sid).expect("delete"), 3);
        let filters = ViolationFilters {
            search: Some("Andi".into()),
            ..Default::default()
        };
        assert_eq!(list(&conn, &filters, 1).expect("list").meta.total, 0);
        assert_eq!(list(&conn, &ViolationFilters::default(), 1).expect("list").meta.total, 1);
    }

    #[test]
    fn student_listing_carries_three_newest_violations() {
        let conn = open_memory();
        let sid = add_student(&conn, "Andi", "1001", "X");
        let today = day(2024, 3, 1);
        let mut ids = Vec::new();
        for d in ["2024-02-05", "2024-01-01", "2024-02-20", "2024-01-10"] {
            ids.push(create(&conn, &report(sid, "Andi", "X", d), today).expect("c").violation.id);
        }
        let page = students::list(&conn, &Default::default(), 1).expect("list");
        let recent: Vec<i64> = page.data[0].violations.iter().map(|v| v.id).collect();
        // Creation order, not violation date.
        assert_eq!(recent, vec![ids[3], ids[2], ids[1]]);

        let detail = students::show(&conn, sid).expect("show");
        assert_eq!(detail.violations.len(), 4);
    }
}
