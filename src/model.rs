use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationType {
    Lateness,
    UniformViolations,
    AcademicDishonesty,
    DisruptiveBehavior,
}

impl ViolationType {
    pub const ALL: [ViolationType; 4] = [
        ViolationType::Lateness,
        ViolationType::UniformViolations,
        ViolationType::AcademicDishonesty,
        ViolationType::DisruptiveBehavior,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViolationType::Lateness => "lateness",
            ViolationType::UniformViolations => "uniform_violations",
            ViolationType::AcademicDishonesty => "academic_dishonesty",
            ViolationType::DisruptiveBehavior => "disruptive_behavior",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationStatus {
    #[default]
    Pending,
    Resolved,
    Escalated,
}

impl ViolationStatus {
    pub const ALL: [ViolationStatus; 3] = [
        ViolationStatus::Pending,
        ViolationStatus::Resolved,
        ViolationStatus::Escalated,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ViolationStatus::Pending => "pending",
            ViolationStatus::Resolved => "resolved",
            ViolationStatus::Escalated => "escalated",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

macro_rules! text_enum_sql {
    ($ty:ty) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                let raw = value.as_str()?;
                <$ty>::parse(raw).ok_or_else(|| {
                    FromSqlError::Other(format!("unknown {} value: {raw}", stringify!($ty)).into())
                })
            }
        }
    };
}

text_enum_sql!(ViolationType);
text_enum_sql!(ViolationStatus);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub student_id: String,
    pub class: String,
    pub created_at: String,
    pub updated_at: String,
}

pub const STUDENT_COLUMNS: &str = "s.id, s.name, s.student_id, s.class, s.created_at, s.updated_at";

impl Student {
    /// Reads the six `STUDENT_COLUMNS` starting at column `offset`.
    pub fn from_row_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(offset)?,
            name: row.get(offset + 1)?,
            student_id: row.get(offset + 2)?,
            class: row.get(offset + 3)?,
            created_at: row.get(offset + 4)?,
            updated_at: row.get(offset + 5)?,
        })
    }
}

/// A filed report. `student_name` and `student_class` are copies taken when
/// the report was written and are never re-read from the student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_class: String,
    pub violation_date: NaiveDate,
    pub violation_type: ViolationType,
    pub description: String,
    pub disciplinary_action: String,
    pub reporting_staff: String,
    pub status: ViolationStatus,
    pub created_at: String,
    pub updated_at: String,
}

pub const VIOLATION_COLUMNS: &str = "v.id, v.student_id, v.student_name, v.student_class, \
     v.violation_date, v.violation_type, v.description, v.disciplinary_action, \
     v.reporting_staff, v.status, v.created_at, v.updated_at";

pub const VIOLATION_COLUMN_COUNT: usize = 12;

impl Violation {
    pub fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            student_id: row.get(1)?,
            student_name: row.get(2)?,
            student_class: row.get(3)?,
            violation_date: row.get(4)?,
            violation_type: row.get(5)?,
            description: row.get(6)?,
            disciplinary_action: row.get(7)?,
            reporting_staff: row.get(8)?,
            status: row.get(9)?,
            created_at: row.get(10)?,
            updated_at: row.get(11)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentWithViolations {
    #[serde(flatten)]
    pub student: Student,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViolationWithStudent {
    #[serde(flatten)]
    pub violation: Violation,
    pub student: Option<Student>,
}

impl ViolationWithStudent {
    /// Expects `VIOLATION_COLUMNS` followed by `STUDENT_COLUMNS` from a LEFT JOIN.
    pub fn from_joined_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let violation = Violation::from_row(row)?;
        let student_row_id: Option<i64> = row.get(VIOLATION_COLUMN_COUNT)?;
        let student = match student_row_id {
            Some(_) => Some(Student::from_row_at(row, VIOLATION_COLUMN_COUNT)?),
            None => None,
        };
        Ok(Self { violation, student })
    }
}
