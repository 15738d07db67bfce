use crate::{
    breadcrumb::BreadcrumbMemo,
    config::SiteConfig,
    error::Error,
    guard::{self, Viewer},
    output::render_route,
};
use http::{header, Method, Request, Response, StatusCode, Uri, Version};
use httparse::Status;
use std::{
    io::{Read, Write},
    str::FromStr,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};
use tracing::{debug, info, warn};

/// Give up on clients that send more header than this.
const MAX_REQUEST_HEAD: usize = 64 * 1024;

pub fn serve(config: &SiteConfig, addr: &str) -> Result<(), Error> {
    let memo = &Mutex::new(BreadcrumbMemo::new(config.breadcrumb_builder()));
    let in_flight = &AtomicUsize::new(0);
    let listener = std::net::TcpListener::bind(addr)?;

    info!("serving on http://{addr}");

    std::thread::scope(|scope| loop {
        let mut stream = match listener.accept() {
            Ok((stream, _)) => stream,
            Err(e) => {
                warn!("accept failed: {e}");
                continue;
            }
        };
        scope.spawn(move || {
            let _guard = Guard::new(in_flight);
            let mut buf = Vec::new();

            let request = loop {
                let mut tmp = [0u8; 1024];
                match stream.read(&mut tmp) {
                    Ok(0) => return,
                    Ok(n) => {
                        buf.extend_from_slice(&tmp[0..n]);
                    }
                    Err(_) => {
                        return;
                    }
                };
                if buf.len() > MAX_REQUEST_HEAD {
                    return;
                }

                let mut headers = [httparse::EMPTY_HEADER; 128];
                let mut parse_req = httparse::Request::new(&mut headers);
                match parse_req.parse(&buf) {
                    Ok(Status::Complete(_)) => {}
                    Ok(Status::Partial) => continue,
                    Err(e) => {
                        debug!("bad request: {e}");
                        return;
                    }
                }
                let method = if let Some(method) =
                    parse_req.method.and_then(|m| Method::from_str(m).ok())
                {
                    method
                } else {
                    return;
                };
                let uri = if let Some(uri) = parse_req.path.and_then(|p| Uri::from_str(p).ok()) {
                    uri
                } else {
                    return;
                };
                let mut builder = Request::builder().method(method).uri(uri).version(
                    if parse_req.version == Some(1) {
                        Version::HTTP_11
                    } else {
                        Version::HTTP_10
                    },
                );
                for header in parse_req.headers.iter() {
                    builder = builder.header(header.name, header.value);
                }
                match builder.body(()) {
                    Ok(request) => break request,
                    Err(_) => return,
                }
            };

            let response = respond(config, memo, &request);

            info!(
                status = response.status().as_u16(),
                in_flight = in_flight.load(Ordering::SeqCst),
                "{} {}",
                request.method(),
                request.uri()
            );

            let status_line = format!(
                "{:?} {} {}\r\n",
                request.version(),
                response.status().as_u16(),
                response.status().canonical_reason().unwrap_or_default()
            );

            let mut headers = String::new();
            for (name, value) in response.headers() {
                headers.push_str(&format!("{}: {}\r\n", name, value.to_str().unwrap_or("")));
            }

            let body: &[u8] = if request.method() == Method::HEAD {
                &[]
            } else {
                response.body()
            };
            headers.push_str(&format!(
                "Content-Length: {}\r\n\r\n",
                response.body().len()
            ));
            if stream.write_all(status_line.as_bytes()).is_err() {
                return;
            }
            if stream.write_all(headers.as_bytes()).is_err() {
                return;
            }
            if stream.write_all(body).is_err() {
                return;
            }
            let _ = stream.flush();
        });
    })
}

/// Everything but the socket.
pub fn respond<B>(
    config: &SiteConfig,
    memo: &Mutex<BreadcrumbMemo>,
    request: &Request<B>,
) -> Response<Vec<u8>> {
    let path = request.uri().path();

    let response = if request.method() != Method::GET && request.method() != Method::HEAD {
        Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(header::ALLOW, "GET, HEAD")
            .body(b"method not allowed".to_vec())
    } else if path == "/favicon.ico" {
        Response::builder()
            .status(StatusCode::NOT_FOUND)
            .body(b"not found".to_vec())
    } else {
        let viewer = request
            .headers()
            .get(header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(Viewer::from_cookie_header)
            .unwrap_or_default();

        if let Some(location) = guard::check(config, path, viewer).location(config) {
            Response::builder()
                .status(StatusCode::TEMPORARY_REDIRECT)
                .header(header::LOCATION, location)
                .body(Vec::new())
        } else {
            let crumbs = match memo.lock() {
                Ok(mut memo) => memo.get(path),
                Err(poisoned) => poisoned.into_inner().get(path),
            };
            match render_route(config, path, &crumbs) {
                Ok(html) => Response::builder()
                    .status(StatusCode::OK)
                    .header(header::CONTENT_TYPE, "text/html; charset=utf-8")
                    .body(html),
                Err(e) => {
                    warn!(path, "render failed: {e}");
                    Ok(internal_error())
                }
            }
        }
    };

    response.unwrap_or_else(|e| {
        warn!(path, "bad response: {e}");
        internal_error()
    })
}

fn internal_error() -> Response<Vec<u8>> {
    let mut response = Response::new(b"internal error".to_vec());
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}

struct Guard<'a>(&'a AtomicUsize);

impl<'a> Guard<'a> {
    pub fn new(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl<'a> Drop for Guard<'a> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
