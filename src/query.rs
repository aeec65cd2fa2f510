use chrono::NaiveDate;
use rusqlite::types::Value;
use serde::Serialize;

pub const PER_PAGE: u32 = 15;

/// Pages shown on each side of the current page in pager links.
const LINKS_ON_EACH_SIDE: u32 = 3;

/// AND-combined `WHERE` fragments with their positional bind values.
#[derive(Debug, Default, Clone)]
pub struct Predicate {
    parts: Vec<String>,
    params: Vec<Value>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(&mut self, column: &str, value: impl Into<Value>) {
        self.parts.push(format!("{column} = ?"));
        self.params.push(value.into());
    }

    /// Case-insensitive substring match on any of `columns`, grouped so it
    /// ANDs with the rest of the predicate. SQLite `LIKE` folds ASCII letters
    /// only, so "ä" does not match "Ä".
    pub fn contains_any(&mut self, columns: &[&str], needle: &str) {
        if columns.is_empty() {
            return;
        }
        let pattern = format!("%{}%", escape_like(needle));
        let group = columns
            .iter()
            .map(|c| format!("{c} LIKE ? ESCAPE '!'"))
            .collect::<Vec<_>>()
            .join(" OR ");
        self.parts.push(format!("({group})"));
        for _ in columns {
            self.params.push(Value::Text(pattern.clone()));
        }
    }

    pub fn date_on_or_after(&mut self, column: &str, date: NaiveDate) {
        self.parts.push(format!("{column} >= ?"));
        self.params.push(date_value(date));
    }

    pub fn date_on_or_before(&mut self, column: &str, date: NaiveDate) {
        self.parts.push(format!("{column} <= ?"));
        self.params.push(date_value(date));
    }

    /// `""` when empty, otherwise `" WHERE a AND b"`.
    pub fn where_clause(&self) -> String {
        if self.parts.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", self.parts.join(" AND "))
        }
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    /// Bind values followed by `LIMIT ? OFFSET ?` for `window`.
    pub fn params_with_window(&self, window: &PageWindow) -> Vec<Value> {
        let mut out = self.params.clone();
        out.push(Value::Integer(i64::from(window.per_page)));
        out.push(Value::Integer(window.offset as i64));
        out
    }
}

pub fn date_value(date: NaiveDate) -> Value {
    Value::Text(date.format("%Y-%m-%d").to_string())
}

/// Escapes LIKE wildcards with `!` so user input only ever matches literally.
pub fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '!' | '%' | '_' => {
                out.push('!');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub offset: u64,
    pub total: u64,
}

/// Clamps `requested` into `[1, last_page]`. An empty result still has one page.
pub fn resolve_page(requested: u32, total: u64, per_page: u32) -> PageWindow {
    let per_page = per_page.max(1);
    let last_page = total.div_ceil(u64::from(per_page)).max(1);
    let last_page = u32::try_from(last_page).unwrap_or(u32::MAX);
    let page = requested.clamp(1, last_page);
    PageWindow {
        page,
        last_page,
        per_page,
        offset: u64::from(page - 1) * u64::from(per_page),
        total,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: Option<u32>,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
    pub links: Vec<PageLink>,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, window: &PageWindow) -> Self {
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (
                Some(window.offset + 1),
                Some(window.offset + data.len() as u64),
            )
        };
        Self {
            data,
            meta: PageMeta {
                current_page: window.page,
                last_page: window.last_page,
                per_page: window.per_page,
                total: window.total,
                from,
                to,
            },
            links: page_links(window.page, window.last_page),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            meta: self.meta,
            links: self.links,
        }
    }
}

/// Previous, numbered pages and next. Long ranges collapse into a sliding
/// window around `current` with the first and last two pages pinned.
pub fn page_links(current: u32, last: u32) -> Vec<PageLink> {
    let mut links = vec![PageLink {
        page: (current > 1).then(|| current - 1),
        label: "&laquo; Previous".to_string(),
        active: false,
    }];

    let number = |p: u32| PageLink {
        page: Some(p),
        label: p.to_string(),
        active: p == current,
    };
    let dots = || PageLink {
        page: None,
        label: "...".to_string(),
        active: false,
    };

    let each = LINKS_ON_EACH_SIDE;
    let window = each + 4;
    if last < each * 2 + 8 {
        links.extend((1..=last).map(number));
    } else if current <= window {
        links.extend((1..=window + each).map(number));
        links.push(dots());
        links.extend((last - 1..=last).map(number));
    } else if current > last - window {
        links.extend((1..=2).map(number));
        links.push(dots());
        links.extend((last - (window + each - 1)..=last).map(number));
    } else {
        links.extend((1..=2).map(number));
        links.push(dots());
        links.extend((current - each..=current + each).map(number));
        links.push(dots());
        links.extend((last - 1..=last).map(number));
    }

    links.push(PageLink {
        page: (current < last).then(|| current + 1),
        label: "Next &raquo;".to_string(),
        active: false,
    });
    links
}
