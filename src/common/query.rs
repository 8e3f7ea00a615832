use std::collections::HashMap;

use form_urlencoded::parse as parse_pairs;
use form_urlencoded::Serializer;

/// Creates a map of query parameters.
/// ```
/// use request_ext::common::query::QueryMapOps;
/// use request_ext::query_map;
///
/// let query = query_map![
///    ("tab", "all"),
///    ("tag", "dinner"),
///    ("tag", "quick")
/// ];
///
/// assert!(query.contains_param_value("tab", "all"));
/// assert!(query.contains_param_value("tag", "dinner"));
/// assert!(query.contains_param_value("tag", "quick"));
/// assert_eq!(query.get_first_param_value("tag"), Some(&"dinner".to_string()));
/// ```
#[macro_export]
macro_rules! query_map {
    () => { $crate::common::query::QueryMap::new() };
    ($(($param:expr, $value:expr)),+ $(,)?) => {
        <$crate::common::query::QueryMap as $crate::common::query::QueryMapOps>::from_pairs(vec![
            $(($param.into(), $value.into()),)+
        ])
    }
}

/// Operations for a query parameter map.
pub trait QueryMapOps {
    /// Gets a query map from the given vector of parameter name and value pairs.
    fn from_pairs(param_values: Vec<(String, String)>) -> Self;
    /// Adds a parameter value to the map.
    fn add_param(&mut self, k: String, v: String);
    /// Checks if the map contains the given parameter and corresponding value.
    fn contains_param_value(&self, k: &str, v: &str) -> bool;
    /// Gets the first value for the given parameter.
    fn get_first_param_value(&self, k: &str) -> Option<&String>;
}

/// A multimap of query parameter names to values. Names are case sensitive.
pub type QueryMap = HashMap<String, Vec<String>>;

impl QueryMapOps for QueryMap {
    fn from_pairs(param_values: Vec<(String, String)>) -> QueryMap {
        param_values.into_iter().fold(HashMap::new(), |mut m, (param, value)| {
            m.add_param(param, value);
            m
        })
    }

    fn add_param(&mut self, k: String, v: String) {
        self.entry(k).or_insert(Vec::new()).push(v)
    }

    fn contains_param_value(&self, k: &str, v: &str) -> bool {
        if let Some(values) = self.get(k) {
            return values.contains(&String::from(v));
        }
        false
    }

    fn get_first_param_value(&self, k: &str) -> Option<&String> {
        self.get(k)?.get(0)
    }
}

/// Parses a raw query string into a map, percent-decoding names and values.
/// A parameter without a "=value" part gets an empty string value. Repeated
/// parameters keep their values in the order they appear.
pub fn parse_query(raw: &str) -> QueryMap {
    parse_pairs(raw.as_bytes()).into_owned().fold(QueryMap::new(), |mut m, (param, value)| {
        m.add_param(param, value);
        m
    })
}

/// Encodes name and value pairs into a query string.
pub fn encode_query<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut serializer = Serializer::new(String::new());
    for (param, value) in pairs {
        serializer.append_pair(param, value);
    }
    serializer.finish()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::common::query::{encode_query, parse_query, QueryMap, QueryMapOps};

    #[test]
    fn query_map() {
        let mut query = HashMap::new();
        query.add_param(String::from("tag"), String::from("dinner"));
        query.add_param(String::from("tag"), String::from("quick"));
        query.add_param(String::from("tab"), String::from("all"));

        assert!(query.contains_param_value("tag", "dinner"));
        assert!(query.contains_param_value("tag", "quick"));
        assert!(query.contains_param_value("tab", "all"));
        assert!(!query.contains_param_value("tag", "all"));
        assert!(!query.contains_param_value("missing", "dinner"));

        assert_eq!(query.get_first_param_value("tag").unwrap(), "dinner");
        assert_eq!(query.get_first_param_value("tab").unwrap(), "all");
        assert_eq!(query.get_first_param_value("missing"), None);
    }

    #[test]
    fn query_map_from_pairs() {
        let query: QueryMap = QueryMap::from_pairs(vec![
            (String::from("tag"), String::from("dinner")),
            (String::from("tab"), String::from("all")),
            (String::from("tag"), String::from("quick")),
        ]);

        assert!(query.contains_param_value("tag", "dinner"));
        assert!(query.contains_param_value("tag", "quick"));
        assert!(query.contains_param_value("tab", "all"));

        assert_eq!(query.get_first_param_value("tag").unwrap(), "dinner");
        assert_eq!(query.get_first_param_value("tab").unwrap(), "all");
    }

    #[test]
    fn query_map_macro_empty_query_map() {
        assert!(query_map![].is_empty());
    }

    #[test]
    fn query_map_macro() {
        let query = query_map![
            ("tab", "all"),
            ("tag", "dinner"),
            ("tag", "quick"),
        ];

        assert_eq!(query.len(), 2);
        assert_eq!(query.get("tag").unwrap(), &vec!["dinner".to_string(), "quick".to_string()]);
        assert_eq!(query.get_first_param_value("tab").unwrap(), "all");
    }

    #[test]
    fn parse_query_single_params() {
        let query = parse_query("tab=all&page=2");

        assert_eq!(query.len(), 2);
        assert_eq!(query.get_first_param_value("tab").unwrap(), "all");
        assert_eq!(query.get_first_param_value("page").unwrap(), "2");
    }

    #[test]
    fn parse_query_repeated_param_keeps_order() {
        let query = parse_query("tag=dinner&tab=all&tag=quick");

        assert_eq!(query.get("tag").unwrap(), &vec!["dinner".to_string(), "quick".to_string()]);
    }

    #[test]
    fn parse_query_decodes_names_and_values() {
        let query = parse_query("q=hello+world%21&full%20name=Jay%26Co");

        assert_eq!(query.get_first_param_value("q").unwrap(), "hello world!");
        assert_eq!(query.get_first_param_value("full name").unwrap(), "Jay&Co");
    }

    #[test]
    fn parse_query_param_without_value() {
        let query = parse_query("flag&tab=all");

        assert_eq!(query.get_first_param_value("flag").unwrap(), "");
        assert_eq!(query.get_first_param_value("tab").unwrap(), "all");
    }

    #[test]
    fn parse_query_empty_string() {
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn parse_query_skips_empty_sequences() {
        let query = parse_query("&tab=all&&");

        assert_eq!(query.len(), 1);
        assert_eq!(query.get_first_param_value("tab").unwrap(), "all");
    }

    #[test]
    fn parse_query_names_are_case_sensitive() {
        let query = parse_query("Tab=first&tab=second");

        assert_eq!(query.get_first_param_value("Tab").unwrap(), "first");
        assert_eq!(query.get_first_param_value("tab").unwrap(), "second");
    }

    #[test]
    fn encode_query_pairs() {
        assert_eq!(encode_query([("tab", "all"), ("q", "hello world!")]), "tab=all&q=hello+world%21");
        assert_eq!(encode_query([("note", "a&b=c")]), "note=a%26b%3Dc");
        assert_eq!(encode_query([]), "");
    }

    #[test]
    fn encode_query_round_trips() {
        let query = parse_query(&encode_query([("full name", "Jay&Co"), ("tag", "quick")]));

        assert_eq!(query.get_first_param_value("full name").unwrap(), "Jay&Co");
        assert_eq!(query.get_first_param_value("tag").unwrap(), "quick");
    }
}
