use crate::handler::{Gateway, GatewayResponse};
use crate::metrics::METRICS_CONTENT_TYPE;
use crate::{Result, RopeeErr};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;
use tiny_http::{Header, Method, Request, Response, Server, StatusCode};

pub const WRITE_PATH: &str = "/write";
pub const READ_PATH: &str = "/read";
pub const METRICS_PATH: &str = "/metrics";

/// HTTP front of the gateway. Every request is handled on its own thread.
pub struct RopeeServer {
    server: Server,
    gateway: Arc<Gateway>,
}

impl RopeeServer {
    pub fn bind(addr: &str, gateway: Gateway) -> Result<RopeeServer> {
        let server = Server::http(addr)
            .map_err(|e| RopeeErr::InternalErr(format!("cannot listen on {}: {}", addr, e)))?;
        Ok(RopeeServer {
            server,
            gateway: Arc::new(gateway),
        })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Accept requests until `shutdown` is called.
    pub fn serve(&self) {
        for request in self.server.incoming_requests() {
            let gateway = self.gateway.clone();
            let spawned = thread::Builder::new()
                .name("ropee-request".to_string())
                .spawn(move || dispatch(&gateway, request));
            if let Err(e) = spawned {
                error!("action=serve err={:?}", e.to_string());
            }
        }
    }

    pub fn shutdown(&self) {
        self.server.unblock()
    }
}

fn dispatch(gateway: &Gateway, mut request: Request) {
    let path = request.url().split('?').next().unwrap_or("").to_string();
    let method = request.method().clone();
    let resp = match (method, path.as_str()) {
        (Method::Post, WRITE_PATH) => gateway.handle_write(request.as_reader()),
        (Method::Post, READ_PATH) => {
            let authorization = header_value(&request, "Authorization");
            gateway.handle_read(request.as_reader(), authorization.as_deref())
        }
        (Method::Get, METRICS_PATH) => match gateway.metrics().encode() {
            Ok(text) => GatewayResponse {
                status: 200,
                headers: vec![("Content-Type", METRICS_CONTENT_TYPE.to_string())],
                body: text.into_bytes(),
            },
            Err(e) => GatewayResponse::error(&e),
        },
        (_, WRITE_PATH) | (_, READ_PATH) | (_, METRICS_PATH) => {
            GatewayResponse::text(405, "method not allowed")
        }
        _ => GatewayResponse::text(404, "not found"),
    };

    let status = resp.status;
    // status and headers may already be on the wire, nothing left but logging
    if let Err(e) = request.respond(into_response(resp)) {
        error!(
            "action=respond path={} status={} err={:?}",
            path,
            status,
            e.to_string()
        );
    }
}

fn header_value(request: &Request, name: &'static str) -> Option<String> {
    request
        .headers()
        .iter()
        .find(|h| h.field.equiv(name))
        .map(|h| h.value.as_str().to_string())
}

fn into_response(resp: GatewayResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(resp.body).with_status_code(StatusCode(resp.status));
    for (name, value) in resp.headers {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }
    response
}
