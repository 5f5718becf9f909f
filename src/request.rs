//! The caller facing query which is passed to all search, trending and random endpoints.

use crate::{enum_values, Language};
use std::time::Duration;

enum_values! {
    /// Content rating of a gif / sticker.
    pub enum Rating {
        General = "g"
        Youth = "y"
        PG = "pg"
        PG13 = "pg-13"
        R = "r"
    }
}

enum_values! {
    /// Output format of the api response.
    pub enum Format {
        Json = "json"
        Html = "html"
    }
}

enum_values! {
    /// Order in which search results are returned.
    pub enum SortOrder {
        Recent = "recent"
        Relevant = "relevant"
    }
}

/// How long to wait between two page fetches of the same [`crate::common::Pagination`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Throttle {
    /// Use [`Throttle::DEFAULT_DURATION`].
    #[default]
    Default,
    /// Wait exactly this long.
    Custom(Duration),
    /// Fetch the next page immediately.
    Disabled,
}

impl Throttle {
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(150);

    /// The effective delay between two page fetches.
    pub fn duration(&self) -> Duration {
        match self {
            Throttle::Default => Self::DEFAULT_DURATION,
            Throttle::Custom(duration) => *duration,
            Throttle::Disabled => Duration::ZERO,
        }
    }
}

impl From<Duration> for Throttle {
    fn from(duration: Duration) -> Self {
        Throttle::Custom(duration)
    }
}

/// A logical query. Every field is optional, `Request::default()` queries with the server side
/// defaults. Nothing is validated here, giphy rejects invalid combinations itself.
#[derive(Clone, Debug, Default)]
pub struct Request {
    /// Free text search query. Only used by the search endpoints.
    pub query: String,
    /// Tag filter. Only used by the random endpoints.
    pub tag: String,
    pub rating: Option<Rating>,
    pub format: Option<Format>,
    pub language: Option<Language>,
    pub sort: Option<SortOrder>,

    /// Maximum number of pages to fetch. `0` means unbounded.
    pub max_page_number: u64,
    /// Items per page. `0` lets the server decide.
    pub limit_per_page: u64,
    pub throttle: Throttle,
}

impl Request {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query<S: AsRef<str>>(mut self, query: S) -> Self {
        self.query = query.as_ref().to_string();
        self
    }

    pub fn tag<S: AsRef<str>>(mut self, tag: S) -> Self {
        self.tag = tag.as_ref().to_string();
        self
    }

    pub fn rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn max_page_number(mut self, max_page_number: u64) -> Self {
        self.max_page_number = max_page_number;
        self
    }

    pub fn limit_per_page(mut self, limit_per_page: u64) -> Self {
        self.limit_per_page = limit_per_page;
        self
    }

    pub fn throttle<T: Into<Throttle>>(mut self, throttle: T) -> Self {
        self.throttle = throttle.into();
        self
    }

    /// If `page_number` pages were emitted, is the configured maximum reached?
    pub(crate) fn page_limit_reached(&self, page_number: u64) -> bool {
        self.max_page_number > 0 && page_number >= self.max_page_number
    }

    /// Query parameters for the page starting at `offset`.
    pub(crate) fn page_params(&self, offset: u64) -> WireParams {
        WireParams {
            query: non_empty(&self.query),
            tag: non_empty(&self.tag),
            rating: self.rating.clone(),
            format: self.format.clone(),
            language: self.language.clone(),
            sort: self.sort.clone(),
            limit: (self.limit_per_page > 0).then_some(self.limit_per_page),
            offset: Some(offset),
        }
    }

    /// Query parameters for the random endpoints, which only understand a subset of filters.
    pub(crate) fn single_params(&self) -> WireParams {
        WireParams {
            tag: non_empty(&self.tag),
            rating: self.rating.clone(),
            format: self.format.clone(),
            ..Default::default()
        }
    }
}

// empty filters are left out, everything else is sent as given
fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// The query parameters of a single http request, without the api key which is applied by the
/// executor right before the request is sent.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct WireParams {
    pub(crate) query: Option<String>,
    pub(crate) tag: Option<String>,
    pub(crate) rating: Option<Rating>,
    pub(crate) format: Option<Format>,
    pub(crate) language: Option<Language>,
    pub(crate) sort: Option<SortOrder>,
    pub(crate) limit: Option<u64>,
    pub(crate) offset: Option<u64>,
}

impl WireParams {
    pub(crate) fn into_query(self) -> Vec<(&'static str, String)> {
        let mut query = vec![];

        if let Some(q) = self.query {
            query.push(("q", q))
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()))
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()))
        }
        if let Some(rating) = self.rating {
            query.push(("rating", rating.to_string()))
        }
        if let Some(format) = self.format {
            query.push(("fmt", format.to_string()))
        }
        if let Some(language) = self.language {
            query.push(("lang", language.to_string()))
        }
        if let Some(sort) = self.sort {
            query.push(("sort", sort.to_string()))
        }
        if let Some(tag) = self.tag {
            query.push(("tag", tag))
        }

        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_wire_values() {
        assert_eq!(Rating::from("pg-13"), Rating::PG13);
        assert_eq!(Rating::from("nc-17"), Rating::Custom("nc-17".to_string()));
        assert_eq!(Rating::Custom("nc-17".to_string()).to_string(), "nc-17");
        for rating in Rating::all() {
            assert_eq!(Rating::from(rating.to_string()), rating);
        }
    }

    #[test]
    fn enums_with_serde() {
        let ratings: Vec<Rating> = serde_json::from_str(r#"["y", "pg-13", "x"]"#).unwrap();
        assert_eq!(
            ratings,
            vec![Rating::Youth, Rating::PG13, Rating::Custom("x".to_string())]
        );
        assert_eq!(serde_json::to_string(&ratings).unwrap(), r#"["y","pg-13","x"]"#);

        let language: Language = serde_json::from_str(r#""iw""#).unwrap();
        assert_eq!(language, Language::Hebrew);
        assert_eq!(serde_json::to_string(&SortOrder::Relevant).unwrap(), r#""relevant""#);
    }

    #[test]
    fn throttle_resolution() {
        assert_eq!(Throttle::default().duration(), Duration::from_millis(150));
        assert_eq!(
            Throttle::Custom(Duration::from_secs(2)).duration(),
            Duration::from_secs(2)
        );
        assert_eq!(Throttle::Disabled.duration(), Duration::ZERO);
    }

    #[test]
    fn default_request_only_sends_offset() {
        let query = Request::default().page_params(0).into_query();

        assert_eq!(query, vec![("offset", "0".to_string())]);
    }

    #[test]
    fn page_params_carry_filters() {
        let request = Request::new()
            .query("Milly Rock")
            .rating(Rating::PG13)
            .language(Language::ChineseTraditional)
            .sort(SortOrder::Recent)
            .limit_per_page(20);

        let query = request.page_params(40).into_query();

        assert_eq!(
            query,
            vec![
                ("q", "Milly Rock".to_string()),
                ("limit", "20".to_string()),
                ("offset", "40".to_string()),
                ("rating", "pg-13".to_string()),
                ("lang", "zh-TW".to_string()),
                ("sort", "recent".to_string()),
            ]
        );
    }

    #[test]
    fn single_params_ignore_paging() {
        let request = Request::new()
            .query("ignored")
            .tag("netflix")
            .rating(Rating::PG)
            .limit_per_page(10);

        let query = request.single_params().into_query();

        assert_eq!(
            query,
            vec![("rating", "pg".to_string()), ("tag", "netflix".to_string())]
        );
    }

    #[test]
    fn query_is_sent_as_given() {
        let query = Request::new()
            .query(" Milly Rock ")
            .page_params(0)
            .into_query();
        assert_eq!(query[0], ("q", " Milly Rock ".to_string()));

        let query = Request::new().query("").tag("").page_params(0).into_query();
        assert_eq!(query, vec![("offset", "0".to_string())]);
    }

    #[test]
    fn page_limit() {
        let unbounded = Request::default();
        assert!(!unbounded.page_limit_reached(1_000));

        let bounded = Request::new().max_page_number(2);
        assert!(!bounded.page_limit_reached(1));
        assert!(bounded.page_limit_reached(2));
    }
}
