use std::process;

use clap::Parser;
use log::{debug, error};
use request_ext::args::Args;
use request_ext::common::header::{Header, HeaderMap, HeaderMapOps};
use request_ext::common::method::Method;
use request_ext::common::request::Request;
use request_ext::ext::{is_ajax_request, query_value};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() {
    let args = Args::parse();

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).unwrap();

    let request = Request {
        uri: args.uri,
        method: parse_method(&args.method),
        headers: parse_header_lines(&args.headers),
        body: vec![],
    };

    println!("{} {}", request.method, request.path());

    let query = request.query();
    match &args.key {
        Some(key) => match query_value(&query, key) {
            Ok(Some(value)) => println!("{}: {}", key, value),
            Ok(None) => println!("{}: (not set)", key),
            Err(err) => {
                error!("{}", err);
                process::exit(1);
            }
        },
        None => {
            let mut params: Vec<_> = query.iter().collect();
            params.sort_by(|a, b| a.0.cmp(b.0));
            for (param, values) in params {
                println!("{}: {}", param, values.join(", "));
            }
        }
    }

    println!("ajax request: {}", is_ajax_request(&request));
}

fn parse_method(raw: &str) -> Method {
    match Method::try_from_str(raw) {
        Some(method) => method,
        None => {
            error!("\"{}\" is not a recognized method", raw);
            process::exit(1);
        }
    }
}

fn parse_header_lines(lines: &[String]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for line in lines {
        match line.split_once(": ") {
            Some((name, value)) => {
                let header = Header::from(name);
                debug!("attaching header {}: {}", header, value);
                headers.add_header(header, value.to_string());
            }
            None => {
                error!("\"{}\" is not a valid header line, expected \"Name: value\"", line);
                process::exit(1);
            }
        }
    }
    headers
}
