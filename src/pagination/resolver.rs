//! Current page and base path resolution

/// Supplies the request-dependent parts of a page.
pub trait PageResolver {
    /// Current page number, at least 1.
    fn current_page(&self) -> u64;

    /// Base path used to build page links.
    fn current_path(&self) -> String;
}

/// Resolver returning fixed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPageResolver {
    page: u64,
    path: String,
}

impl StaticPageResolver {
    pub fn new(page: u64, path: impl Into<String>) -> Self {
        Self {
            page: page.max(1),
            path: path.into(),
        }
    }
}

impl Default for StaticPageResolver {
    fn default() -> Self {
        Self::new(1, "/")
    }
}

impl PageResolver for StaticPageResolver {
    fn current_page(&self) -> u64 {
        self.page
    }

    fn current_path(&self) -> String {
        self.path.clone()
    }
}

/// Resolver reading the page number from a request URI's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestPageResolver {
    uri: String,
    page_name: String,
}

impl RequestPageResolver {
    pub const DEFAULT_PAGE_NAME: &'static str = "page";

    pub fn from_uri(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            page_name: Self::DEFAULT_PAGE_NAME.to_string(),
        }
    }

    /// Use a different query parameter for the page number.
    pub fn with_page_name(mut self, page_name: impl Into<String>) -> Self {
        self.page_name = page_name.into();
        self
    }

    fn query(&self) -> Option<&str> {
        let without_fragment = self.uri.split('#').next().unwrap_or_default();
        without_fragment.split_once('?').map(|(_, q)| q)
    }
}

impl PageResolver for RequestPageResolver {
    fn current_page(&self) -> u64 {
        let Some(query) = self.query() else {
            return 1;
        };
        query
            .split('&')
            .filter_map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                let key = urlencoding::decode(key).ok()?;
                if key != self.page_name {
                    return None;
                }
                let value = urlencoding::decode(value).ok()?;
                value.trim().parse::<u64>().ok().filter(|p| *p >= 1)
            })
            .next()
            .unwrap_or(1)
    }

    fn current_path(&self) -> String {
        self.uri
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string()
    }
}
