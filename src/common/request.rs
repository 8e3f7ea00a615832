use crate::common::header::HeaderMap;
use crate::common::method::Method;
use crate::common::query::{parse_query, QueryMap};

/// An HTTP request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    /// The URI.
    pub uri: String,
    /// The method.
    pub method: Method,
    /// The headers.
    pub headers: HeaderMap,
    /// The body.
    pub body: Vec<u8>,
}

impl Request {
    /// The path component of the URI, without the query string.
    pub fn path(&self) -> &str {
        match self.uri.split_once('?') {
            Some((path, _)) => path,
            None => &self.uri
        }
    }

    /// Parses the query string of the URI into a map. A URI without a query
    /// string gives an empty map.
    pub fn query(&self) -> QueryMap {
        match self.uri.split_once('?') {
            Some((_, raw)) => parse_query(raw),
            None => QueryMap::new()
        }
    }
}
