use clap::Parser;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");
const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

/// Inspects an HTTP request the way a handler sees it: the decoded query
/// parameters and whether the request counts as an AJAX request.
#[derive(Parser)]
#[command(author = AUTHORS, version = VERSION, about)]
pub struct Args {
    /// Request URI to inspect, e.g. "/dashboard?tab=all&X-Requested-With=XMLHttpRequest".
    pub uri: String,
    /// (Optional) Header line to attach to the request, written as "Name: value". May be repeated.
    #[arg(short = 'H', long = "header", value_name = "LINE")]
    pub headers: Vec<String>,
    /// (Optional) Method for the request line.
    #[arg(short, long, default_value_t = String::from("GET"))]
    pub method: String,
    /// (Optional) Single query parameter to look up instead of listing all of them.
    #[arg(short, long)]
    pub key: Option<String>,
    /// (Optional) Log debug details while building the request.
    #[arg(short, long)]
    pub verbose: bool
}
