use rusqlite::{params_from_iter, Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ServiceError, ServiceResult};
use crate::model::{Student, StudentWithViolations, Violation, STUDENT_COLUMNS, VIOLATION_COLUMNS};
use crate::query::{resolve_page, Page, Predicate, PER_PAGE};
use crate::validate::{self, FieldErrors, TextRule};

/// Violations attached to each row of the student listing.
pub const RECENT_VIOLATIONS_PER_STUDENT: i64 = 3;

const NAME: TextRule = TextRule {
    field: "name",
    max_chars: 255,
    required: "Nama siswa wajib diisi.",
    too_long: "Nama siswa maksimal 255 karakter.",
};
const STUDENT_ID: TextRule = TextRule {
    field: "studentId",
    max_chars: 20,
    required: "NIS siswa wajib diisi.",
    too_long: "NIS siswa maksimal 20 karakter.",
};
const CLASS: TextRule = TextRule {
    field: "class",
    max_chars: 50,
    required: "Kelas siswa wajib diisi.",
    too_long: "Kelas siswa maksimal 50 karakter.",
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFilters {
    pub search: Option<String>,
    pub class: Option<String>,
}

impl StudentFilters {
    /// Blank values behave as if they were not sent.
    pub fn normalized(self) -> Self {
        Self {
            search: non_blank(self.search),
            class: non_blank(self.class),
        }
    }

    fn predicate(&self) -> Predicate {
        let mut p = Predicate::new();
        if let Some(search) = &self.search {
            p.contains_any(&["s.name", "s.student_id", "s.class"], search);
        }
        if let Some(class) = &self.class {
            p.eq("s.class", class.clone());
        }
        p
    }
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.and_then(|s| {
        let t = s.trim();
        if t.is_empty() {
            None
        } else {
            Some(t.to_string())
        }
    })
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInput {
    pub name: Option<serde_json::Value>,
    pub student_id: Option<serde_json::Value>,
    pub class: Option<serde_json::Value>,
}

struct ValidStudent {
    name: String,
    student_id: String,
    class: String,
}

pub fn list(
    conn: &Connection,
    filters: &StudentFilters,
    page: u32,
) -> ServiceResult<Page<StudentWithViolations>> {
    let predicate = filters.predicate();
    let where_clause = predicate.where_clause();

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM students s{where_clause}"),
        params_from_iter(predicate.params()),
        |r| r.get(0),
    )?;
    let window = resolve_page(page, total.max(0) as u64, PER_PAGE);

    let mut stmt = conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS}
         FROM students s{where_clause}
         ORDER BY s.created_at DESC, s.id DESC
         LIMIT ? OFFSET ?"
    ))?;
    let students = stmt
        .query_map(params_from_iter(predicate.params_with_window(&window)), |row| {
            Student::from_row_at(row, 0)
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
    let mut recent = recent_violations_by_student(conn, &ids)?;
    let rows = students
        .into_iter()
        .map(|student| {
            let violations = recent.remove(&student.id).unwrap_or_default();
            StudentWithViolations {
                student,
                violations,
            }
        })
        .collect();

    Ok(Page::new(rows, &window))
}

/// Up to `RECENT_VIOLATIONS_PER_STUDENT` violations per student, newest
/// created first, fetched in one query for the whole page.
fn recent_violations_by_student(
    conn: &Connection,
    student_ids: &[i64],
) -> ServiceResult<HashMap<i64, Vec<Violation>>> {
    let mut out: HashMap<i64, Vec<Violation>> = HashMap::new();
    if student_ids.is_empty() {
        return Ok(out);
    }

    let placeholders = vec!["?"; student_ids.len()].join(", ");
    let sql = format!(
        "SELECT {VIOLATION_COLUMNS}
         FROM (
           SELECT x.*,
                  ROW_NUMBER() OVER (
                    PARTITION BY x.student_id ORDER BY x.created_at DESC, x.id DESC
                  ) AS rn
           FROM violations x
           WHERE x.student_id IN ({placeholders})
         ) v
         WHERE v.rn <= ?
         ORDER BY v.student_id, v.rn"
    );
    let mut bind: Vec<rusqlite::types::Value> = student_ids
        .iter()
        .map(|id| rusqlite::types::Value::Integer(*id))
        .collect();
    bind.push(rusqlite::types::Value::Integer(RECENT_VIOLATIONS_PER_STUDENT));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(params_from_iter(bind), Violation::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    for v in rows {
        out.entry(v.student_id).or_default().push(v);
    }
    Ok(out)
}

pub fn distinct_classes(conn: &Connection) -> ServiceResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT DISTINCT class FROM students ORDER BY class")?;
    let classes = stmt
        .query_map([], |r| r.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(classes)
}

/// Every student by name, for pickers.
pub fn options(conn: &Connection) -> ServiceResult<Vec<Student>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {STUDENT_COLUMNS} FROM students s ORDER BY s.name, s.id"
    ))?;
    let students = stmt
        .query_map([], |row| Student::from_row_at(row, 0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(students)
}

pub fn find(conn: &Connection, id: i64) -> ServiceResult<Option<Student>> {
    let student = conn
        .query_row(
            &format!("SELECT {STUDENT_COLUMNS} FROM students s WHERE s.id = ?"),
            [id],
            |row| Student::from_row_at(row, 0),
        )
        .optional()?;
    Ok(student)
}

pub fn get(conn: &Connection, id: i64) -> ServiceResult<Student> {
    find(conn, id)?.ok_or(ServiceError::NotFound("student"))
}

pub fn show(conn: &Connection, id: i64) -> ServiceResult<StudentWithViolations> {
    let student = get(conn, id)?;
    let mut stmt = conn.prepare(&format!(
        "SELECT {VIOLATION_COLUMNS}
         FROM violations v
         WHERE v.student_id = ?
         ORDER BY v.created_at DESC, v.id DESC"
    ))?;
    let violations = stmt
        .query_map([id], Violation::from_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StudentWithViolations {
        student,
        violations,
    })
}

fn validated(
    conn: &Connection,
    input: &StudentInput,
    existing_id: Option<i64>,
) -> ServiceResult<ValidStudent> {
    let mut errors = FieldErrors::default();
    let name = validate::text(&mut errors, input.name.as_ref(), &NAME);
    let student_id = validate::text(&mut errors, input.student_id.as_ref(), &STUDENT_ID);
    let class = validate::text(&mut errors, input.class.as_ref(), &CLASS);

    if let Some(sid) = &student_id {
        let taken: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM students WHERE student_id = ? AND id != ?",
                (sid, existing_id.unwrap_or(-1)),
                |r| r.get(0),
            )
            .optional()?;
        if taken.is_some() {
            errors.add(STUDENT_ID.field, "NIS sudah terdaftar.");
        }
    }

    match (name, student_id, class) {
        (Some(name), Some(student_id), Some(class)) if errors.is_empty() => Ok(ValidStudent {
            name,
            student_id,
            class,
        }),
        _ => Err(ServiceError::Validation(errors)),
    }
}

pub fn create(conn: &Connection, input: &StudentInput) -> ServiceResult<Student> {
    let v = validated(conn, input, None)?;
    conn.execute(
        "INSERT INTO students(name, student_id, class, created_at, updated_at)
         VALUES(?, ?, ?, strftime('%Y-%m-%dT%H:%M:%SZ','now'), strftime('%Y-%m-%dT%H:%M:%SZ','now'))",
        (&v.name, &v.student_id, &v.class),
    )?;
    let id = conn.last_insert_rowid();
    tracing::info!(id, student_id = %v.student_id, "student created");
    get(conn, id)
}

/// Rewrites the student row only. Snapshots on existing violations keep the
/// name and class they were filed with.
pub fn update(conn: &Connection, id: i64, input: &StudentInput) -> ServiceResult<Student> {
    get(conn, id)?;
    let v = validated(conn, input, Some(id))?;
    conn.execute(
        "UPDATE students
         SET name = ?, student_id = ?, class = ?, updated_at = strftime('%Y-%m-%dT%H:%M:%SZ','now')
         WHERE id = ?",
        (&v.name, &v.student_id, &v.class, id),
    )?;
    tracing::info!(id, "student updated");
    get(conn, id)
}

/// Hard delete. Returns how many violations went with the student.
pub fn delete(conn: &Connection, id: i64) -> ServiceResult<usize> {
    let tx = conn.unchecked_transaction()?;
    let exists: Option<i64> = tx
        .query_row("SELECT 1 FROM students WHERE id = ?", [id], |r| r.get(0))
        .optional()?;
    if exists.is_none() {
        return Err(ServiceError::NotFound("student"));
    }
    let owned: i64 = tx.query_row(
        "SELECT COUNT(*) FROM violations WHERE student_id = ?",
        [id],
        |r| r.get(0),
    )?;
    tx.execute("DELETE FROM students WHERE id = ?", [id])?;
    tx.commit()?;
    tracing::info!(id, violations = owned, "student deleted");
    Ok(owned.max(0) as usize)
}
