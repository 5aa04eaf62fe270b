//! Length-aware page

use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};

/// One page of a result set whose total size is known.
#[derive(Debug, Clone, PartialEq)]
pub struct LengthAwarePage {
    items: Vec<Value>,
    total: u64,
    per_page: u64,
    current_page: u64,
    path: String,
}

impl LengthAwarePage {
    /// `per_page` and `current_page` are clamped to at least 1.
    pub fn new(
        items: Vec<Value>,
        total: u64,
        per_page: u64,
        current_page: u64,
        path: impl Into<String>,
    ) -> Self {
        Self {
            items,
            total,
            per_page: per_page.max(1),
            current_page: current_page.max(1),
            path: path.into(),
        }
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Value> {
        self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    pub fn current_page(&self) -> u64 {
        self.current_page
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn last_page(&self) -> u64 {
        self.total.div_ceil(self.per_page).max(1)
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page <= 1
    }

    /// 1-based position of the first item on this page. `None` for an empty
    /// page or a position past `u64::MAX`.
    pub fn first_item(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        (self.current_page - 1)
            .checked_mul(self.per_page)?
            .checked_add(1)
    }

    /// 1-based position of the last item on this page.
    pub fn last_item(&self) -> Option<u64> {
        let extra = self.items.len() as u64 - 1;
        self.first_item()?.checked_add(extra)
    }

    /// Link to `page`, clamped to at least 1.
    pub fn url(&self, page: u64) -> String {
        let sep = if self.path.contains('?') { '&' } else { '?' };
        format!("{}{}page={}", self.path, sep, page.max(1))
    }

    pub fn next_page_url(&self) -> Option<String> {
        self.has_more_pages()
            .then(|| self.url(self.current_page + 1))
    }

    pub fn previous_page_url(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.url(self.current_page - 1))
    }

    /// Conventional paginator JSON body.
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        out.insert("current_page".into(), json!(self.current_page));
        out.insert("data".into(), Value::Array(self.items.clone()));
        out.insert("first_page_url".into(), json!(self.url(1)));
        out.insert("from".into(), json!(self.first_item()));
        out.insert("last_page".into(), json!(self.last_page()));
        out.insert("last_page_url".into(), json!(self.url(self.last_page())));
        out.insert("next_page_url".into(), json!(self.next_page_url()));
        out.insert("path".into(), json!(self.path));
        out.insert("per_page".into(), json!(self.per_page));
        out.insert("prev_page_url".into(), json!(self.previous_page_url()));
        out.insert("to".into(), json!(self.last_item()));
        out.insert("total".into(), json!(self.total));
        Value::Object(out)
    }
}

impl Serialize for LengthAwarePage {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
