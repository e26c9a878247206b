#![deny(missing_docs)]

//! # Serve Command
//!
//! Serves every generated group over HTTP. Each response passes the cached
//! document through the transformation filters with the request's headers.

use crate::error::{CliError, CliResult};
use crate::generate::{ensure_exists, load_properties};
use actix_web::http::StatusCode;
use actix_web::{get, web, App, HttpRequest, HttpResponse, HttpServer, ResponseError};
use docket_core::{
    document_service, ApiSource, AppError, OpenApiDocumentService, RequestContext,
};
use serde::Deserialize;
use serde_json::json;
use std::net::TcpListener;
use std::path::PathBuf;
use tracing::info;

/// Base path of the documentation endpoints.
pub const API_DOCS_PATH: &str = "/v3/api-docs";

/// Arguments for the serve command.
#[derive(clap::Args, Debug, Clone)]
pub struct ServeArgs {
    /// Handler metadata (YAML or JSON).
    #[clap(long, short = 'i')]
    pub handlers: PathBuf,

    /// Documentation configuration; defaults apply when absent.
    #[clap(long, short = 'c', env = "DOCKET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on.
    #[clap(long, env = "DOCKET_BIND", default_value = "127.0.0.1:8080")]
    pub bind: String,
}

/// Header access for the filters.
struct RequestHeaders<'a>(&'a HttpRequest);

impl RequestContext for RequestHeaders<'_> {
    fn header(&self, name: &str) -> Option<&str> {
        self.0.headers().get(name).and_then(|value| value.to_str().ok())
    }
}

impl ResponseError for CliError {
    fn status_code(&self) -> StatusCode {
        match self {
            CliError::App(AppError::UnknownGroup(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GroupQuery {
    group: Option<String>,
}

#[get("/v3/api-docs")]
async fn api_docs_json(
    request: HttpRequest,
    query: web::Query<GroupQuery>,
    service: web::Data<OpenApiDocumentService>,
) -> Result<HttpResponse, CliError> {
    let headers = RequestHeaders(&request);
    let specification = service.specification(
        query.group.as_deref(),
        Some(&headers as &dyn RequestContext),
    )?;
    Ok(HttpResponse::Ok()
        .content_type("application/json")
        .body(specification.to_json()?))
}

#[get("/v3/api-docs.yaml")]
async fn api_docs_yaml(
    request: HttpRequest,
    query: web::Query<GroupQuery>,
    service: web::Data<OpenApiDocumentService>,
) -> Result<HttpResponse, CliError> {
    let headers = RequestHeaders(&request);
    let specification = service.specification(
        query.group.as_deref(),
        Some(&headers as &dyn RequestContext),
    )?;
    Ok(HttpResponse::Ok()
        .content_type("application/vnd.oai.openapi")
        .body(specification.to_yaml()?))
}

#[get("/v3/api-docs/swagger-config")]
async fn swagger_config(service: web::Data<OpenApiDocumentService>) -> HttpResponse {
    let urls: Vec<_> = service
        .groups()
        .map(|group| {
            let encoded: String = url::form_urlencoded::byte_serialize(group.as_bytes()).collect();
            json!({
                "name": group,
                "url": format!("{}?group={}", API_DOCS_PATH, encoded),
            })
        })
        .collect();
    HttpResponse::Ok().json(json!({
        "configUrl": format!("{}/swagger-config", API_DOCS_PATH),
        "urls": urls,
    }))
}

/// Registers the documentation routes.
pub fn configure(config: &mut web::ServiceConfig) {
    config
        .service(api_docs_json)
        .service(api_docs_yaml)
        .service(swagger_config);
}

/// Builds the server over an already bound listener.
pub fn build_server(
    listener: TcpListener,
    service: OpenApiDocumentService,
) -> std::io::Result<actix_web::dev::Server> {
    let data = web::Data::new(service);
    Ok(HttpServer::new(move || App::new().app_data(data.clone()).configure(configure))
        .listen(listener)?
        .run())
}

/// Executes the serve command.
pub async fn execute(args: &ServeArgs) -> CliResult<()> {
    ensure_exists(&args.handlers)?;
    let source = ApiSource::from_path(&args.handlers)?;
    let service = document_service(source, load_properties(args.config.as_deref())?)?;
    let listener = TcpListener::bind(&args.bind)?;
    let groups: Vec<&str> = service.groups().collect();
    info!(bind = %args.bind, ?groups, "Serving documentation");
    build_server(listener, service)?.await?;
    Ok(())
}
