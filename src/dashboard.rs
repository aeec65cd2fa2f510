//! Dashboard aggregates, recomputed from the live tables on every call.

use chrono::NaiveDate;
use rusqlite::Connection;
use serde::Serialize;

use crate::error::ServiceResult;
use crate::model::{ViolationStatus, ViolationWithStudent};
use crate::query::date_value;
use crate::violations;

pub const RECENT_VIOLATIONS: u32 = 10;
pub const TOP_CLASSES: u32 = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: i64,
    pub total_violations: i64,
    pub pending_violations: i64,
    pub today_violations: i64,
}

/// Count for one stored `violation_type` key. The key stays raw here so that
/// label translation happens at the presentation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub violation_type: String,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCount {
    pub student_class: String,
    pub total: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: DashboardStats,
    pub violations_by_type: Vec<TypeCount>,
    pub recent_violations: Vec<ViolationWithStudent>,
    pub top_violation_classes: Vec<ClassCount>,
}

pub fn compute(conn: &Connection, today: NaiveDate) -> ServiceResult<Dashboard> {
    let count = |sql: &str, params: &[&dyn rusqlite::ToSql]| -> rusqlite::Result<i64> {
        conn.query_row(sql, params, |r| r.get(0))
    };

    let stats = DashboardStats {
        total_students: count("SELECT COUNT(*) FROM students", &[])?,
        total_violations: count("SELECT COUNT(*) FROM violations", &[])?,
        pending_violations: count(
            "SELECT COUNT(*) FROM violations WHERE status = ?",
            &[&ViolationStatus::Pending],
        )?,
        today_violations: count(
            "SELECT COUNT(*) FROM violations WHERE violation_date = ?",
            &[&date_value(today)],
        )?,
    };

    let mut stmt = conn.prepare(
        "SELECT violation_type, COUNT(*) AS total
         FROM violations
         GROUP BY violation_type
         ORDER BY violation_type",
    )?;
    let violations_by_type = stmt
        .query_map([], |r| {
            Ok(TypeCount {
                violation_type: r.get(0)?,
                total: r.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut stmt = conn.prepare(
        "SELECT student_class, COUNT(*) AS total
         FROM violations
         GROUP BY student_class
         ORDER BY total DESC
         LIMIT ?",
    )?;
    let top_violation_classes = stmt
        .query_map([i64::from(TOP_CLASSES)], |r| {
            Ok(ClassCount {
                student_class: r.get(0)?,
                total: r.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let recent_violations = violations::latest(conn, RECENT_VIOLATIONS)?;

    tracing::debug!(
        students = stats.total_students,
        violations = stats.total_violations,
        "dashboard computed"
    );

    Ok(Dashboard {
        stats,
        violations_by_type,
        recent_violations,
        top_violation_classes,
    })
}
