use crate::common::header::Header;
use crate::common::query::QueryMap;
use crate::common::request::Request;

/// Extension impls for actix-web request types.
#[cfg(feature = "actix")]
mod actix;

/// Name of the marker, sent as a query parameter or a header, that identifies an AJAX request.
pub const REQUESTED_WITH: &str = "X-Requested-With";
/// Marker value that identifies an AJAX request.
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// An error from calling an extension function with a bad argument.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument that must not be empty was empty.
    #[error("argument `{0}` must not be empty")]
    InvalidArgument(&'static str),
}

/// Gets the value of the given parameter from a query map. A parameter with
/// multiple values is collapsed into a single comma separated string. Returns
/// None if the query has no such parameter, and an error if the name is empty.
pub fn query_value(query: &QueryMap, key: &str) -> Result<Option<String>, Error> {
    if key.is_empty() {
        return Err(Error::InvalidArgument("key"));
    }
    Ok(query.get(key).map(|values| values.join(", ")))
}

/// A request whose query parameters and headers can be inspected.
pub trait RequestLike {
    /// The decoded query parameters of the request.
    fn query(&self) -> QueryMap;

    /// The values of the given header, or None if the request has no such
    /// header. Header names are case insensitive.
    fn header_values(&self, name: &str) -> Option<Vec<String>>;

    /// The value of the given header, only if the header has exactly one value.
    fn single_header_value(&self, name: &str) -> Option<String> {
        match self.header_values(name)?.as_slice() {
            [single] => Some(single.clone()),
            _ => None
        }
    }
}

impl RequestLike for Request {
    fn query(&self) -> QueryMap {
        Request::query(self)
    }

    fn header_values(&self, name: &str) -> Option<Vec<String>> {
        self.headers.get(&Header::from(name)).cloned()
    }
}

/// Determines whether the given request is an AJAX request: true when the
/// query or the headers carry "X-Requested-With: XMLHttpRequest". The query is
/// consulted first. A header holding more than one value never matches, while
/// a repeated query parameter is compared in its joined form.
pub fn is_ajax_request(request: &impl RequestLike) -> bool {
    let query_marker = query_value(&request.query(), REQUESTED_WITH)
        .map(|value| value.as_deref() == Some(XML_HTTP_REQUEST))
        .unwrap_or(false);
    if query_marker {
        return true;
    }
    request.single_header_value(REQUESTED_WITH)
        .map_or(false, |value| value == XML_HTTP_REQUEST)
}
