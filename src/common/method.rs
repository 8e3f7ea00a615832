use std::fmt::{Display, Formatter};

macro_rules! methods {
    (
        $(
            $(#[$docs:meta])*
            ($name:ident, $str:literal, $bytes:literal);
        )+
    ) => {
        /// An HTTP method.
        #[derive(Debug, Copy, Clone, PartialEq, Eq)]
        pub enum Method {
            $(
                $(#[$docs])*
                $name,
            )+
        }

        impl Method {
            /// Converts the given string to a method. Methods are case sensitive. Returns None if no Method matches.
            pub fn try_from_str(s: &str) -> Option<Method> {
                match s {
                    $(
                    $str => Some(Method::$name),
                    )+
                    _ => None
                }
            }

            /// Converts the given bytes to a method. Methods are case sensitive. Returns None if no Method matches.
            pub fn try_from_bytes(s: &[u8]) -> Option<Method> {
                match s {
                    $(
                    $bytes => Some(Method::$name),
                    )+
                    _ => None
                }
            }
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

methods! {
    /// GET method.
    (GET, "GET", b"GET");
    /// HEAD method.
    (HEAD, "HEAD", b"HEAD");
    /// POST method.
    (POST, "POST", b"POST");
    /// PUT method.
    (PUT, "PUT", b"PUT");
    /// DELETE method.
    (DELETE, "DELETE", b"DELETE");
    /// OPTIONS method.
    (OPTIONS, "OPTIONS", b"OPTIONS");
    /// PATCH method.
    (PATCH, "PATCH", b"PATCH");
}
