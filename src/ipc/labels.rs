//! Indonesian display labels for the stored enumeration keys. The core keeps
//! the raw keys; these tables are only applied when building responses.

use serde_json::json;

use crate::dashboard::TypeCount;
use crate::model::{
    StudentWithViolations, Violation, ViolationStatus, ViolationType, ViolationWithStudent,
};

pub fn violation_type_label(key: &str) -> &str {
    match key {
        "lateness" => "Keterlambatan",
        "uniform_violations" => "Pelanggaran Seragam",
        "academic_dishonesty" => "Ketidakjujuran Akademik",
        "disruptive_behavior" => "Perilaku Mengganggu",
        other => other,
    }
}

pub fn status_label(key: &str) -> &str {
    match key {
        "pending" => "Pending",
        "resolved" => "Selesai",
        "escalated" => "Diescalasi",
        other => other,
    }
}

/// key -> label for every violation type, for select inputs.
pub fn violation_types() -> serde_json::Value {
    let mut out = serde_json::Map::new();
    for t in ViolationType::ALL {
        out.insert(t.as_str().into(), json!(violation_type_label(t.as_str())));
    }
    serde_json::Value::Object(out)
}

pub fn statuses() -> serde_json::Value {
    let mut out = serde_json::Map::new();
    for s in ViolationStatus::ALL {
        out.insert(s.as_str().into(), json!(status_label(s.as_str())));
    }
    serde_json::Value::Object(out)
}

pub fn violation(v: &Violation) -> serde_json::Value {
    let mut out = json!(v);
    out["violationTypeLabel"] = json!(violation_type_label(v.violation_type.as_str()));
    out["statusLabel"] = json!(status_label(v.status.as_str()));
    out
}

pub fn violation_with_student(v: &ViolationWithStudent) -> serde_json::Value {
    let mut out = violation(&v.violation);
    out["student"] = json!(v.student);
    out
}

pub fn student_with_violations(s: &StudentWithViolations) -> serde_json::Value {
    let mut out = json!(s.student);
    out["violations"] = serde_json::Value::Array(s.violations.iter().map(violation).collect());
    out
}

/// label -> count. Keys without a label keep their raw form.
pub fn violations_by_type(counts: &[TypeCount]) -> serde_json::Value {
    let mut out = serde_json::Map::new();
    for c in counts {
        let label = violation_type_label(&c.violation_type).to_string();
        let prev = out.get(&label).and_then(|v| v.as_i64()).unwrap_or(0);
        out.insert(label, json!(prev + c.total));
    }
    serde_json::Value::Object(out)
}
