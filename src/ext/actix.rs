use actix_web::HttpRequest;

use crate::common::query::{parse_query, QueryMap};
use crate::ext::RequestLike;

impl RequestLike for HttpRequest {
    fn query(&self) -> QueryMap {
        parse_query(self.query_string())
    }

    fn header_values(&self, name: &str) -> Option<Vec<String>> {
        let values: Vec<String> = self.headers()
            .get_all(name)
            .filter_map(|value| value.to_str().ok())
            .map(str::to_string)
            .collect();
        if values.is_empty() {
            return None;
        }
        Some(values)
    }
}
