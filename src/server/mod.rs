//! HTTP server: public pages, the admin panel and static files

mod error;

pub use error::{error_page, AppError, ErrorMessage};

use anyhow::Result;
use axum::{
    body::Body,
    extract::{Path as UrlPath, State},
    handler::HandlerWithoutStateExt,
    http::{Request, StatusCode, Uri},
    middleware::{from_fn_with_state, Next},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::admin::{
    self, require_admin, AdminError, Authenticator, ProjectForm, StaticCredentials,
};
use crate::composer::{HomeRecords, PageComposer};
use crate::store::{ContentStore, StoreError};
use crate::templates::FormData;
use crate::Portfolio;

/// Shared by every request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub composer: Arc<PageComposer>,
    pub auth: Arc<dyn Authenticator>,
}

/// Build the application router; anything unrouted is served from `public_dir`
pub fn build_router(state: AppState, public_dir: &Path) -> Router {
    let admin = Router::new()
        .route("/admin", get(admin_list))
        .route("/admin/add", get(add_form).post(add_project))
        .route("/admin/edit/:id", get(edit_form).post(edit_project))
        .route("/admin/delete/:id", get(delete_project))
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    let static_files = ServeDir::new(public_dir).not_found_service(not_found.into_service());

    Router::new()
        .route("/", get(home))
        .route("/projects", get(projects))
        .route("/tech-stack", get(tech_stack))
        .route("/certifications", get(certifications))
        .merge(admin)
        .fallback_service(static_files)
        .layer(from_fn_with_state(state.clone(), error_pages))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(
    portfolio: &Portfolio,
    store: Arc<dyn ContentStore>,
    ip: &str,
    port: u16,
) -> Result<()> {
    let config = &portfolio.config;
    if config.admin.uses_default_credentials() {
        tracing::warn!(
            "Admin panel is using the default credentials; set PORTFOLIO_ADMIN_USER and PORTFOLIO_ADMIN_PASSWORD"
        );
    }

    let state = AppState {
        store,
        composer: Arc::new(PageComposer::new(config)?),
        auth: Arc::new(StaticCredentials::from_config(&config.admin)),
    };
    tracing::info!("Serving content from the {} store", state.store.backend_tag());

    let app = build_router(state, &portfolio.public_dir);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let records = HomeRecords::fetch(state.store.as_ref()).await?;
    Ok(Html(state.composer.home(&records)?))
}

async fn projects(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let projects = state.store.list_projects().await?;
    Ok(Html(state.composer.projects(&projects)?))
}

async fn tech_stack(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let categories = state.store.list_tech_stack().await?;
    Ok(Html(state.composer.tech_stack(&categories)?))
}

async fn certifications(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let certifications = state.store.list_certifications().await?;
    Ok(Html(state.composer.certifications(&certifications)?))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::PageNotFound(uri.path().to_string())
}

/// Rebuild error pages so their home link follows the site root
async fn error_pages(State(state): State<AppState>, req: Request<Body>, next: Next) -> Response {
    let mut response = next.run(req).await;
    match response.extensions_mut().remove::<ErrorMessage>() {
        Some(ErrorMessage(message)) => {
            let status = response.status();
            let html = error_page(status, &message, state.composer.home_url());
            (status, Html(html)).into_response()
        }
        None => response,
    }
}

async fn admin_list(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let projects = state.store.list_projects().await?;
    Ok(Html(state.composer.admin_list(&projects)?))
}

async fn add_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let form = state.composer.new_form();
    Ok(Html(state.composer.admin_form(&form, None)?))
}

async fn add_project(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = ProjectForm::from_pairs(pairs);

    match admin::create_project(state.store.as_ref(), &form).await {
        Ok(_) => Ok(Redirect::to(state.composer.admin_url()).into_response()),
        Err(err) => {
            let data = form.to_form_data(state.composer.new_form().action, false);
            form_rejected(&state, &data, err)
        }
    }
}

async fn edit_form(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> Result<Html<String>, AppError> {
    let project = state.store.get_project(&id).await?;
    let form = ProjectForm::from_project(&project);
    let data = form.to_form_data(state.composer.edit_action(&id), true);
    Ok(Html(state.composer.admin_form(&data, None)?))
}

async fn edit_project(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let mut form = ProjectForm::from_pairs(pairs);

    match admin::update_project(state.store.as_ref(), &id, &form).await {
        Ok(_) => Ok(Redirect::to(state.composer.admin_url()).into_response()),
        Err(err) => {
            form.id = id;
            let data = form.to_form_data(state.composer.edit_action(&form.id), true);
            form_rejected(&state, &data, err)
        }
    }
}

async fn delete_project(
    State(state): State<AppState>,
    UrlPath(id): UrlPath<String>,
) -> Result<Response, AppError> {
    admin::delete_project(state.store.as_ref(), &id).await?;
    Ok(Redirect::to(state.composer.admin_url()).into_response())
}

/// Show the form again for errors the user can fix; anything else becomes an error page
fn form_rejected(
    state: &AppState,
    data: &FormData,
    err: AdminError,
) -> Result<Response, AppError> {
    let status = match err {
        AdminError::Validation(_) => StatusCode::BAD_REQUEST,
        AdminError::Store(StoreError::DuplicateIdentifier(_)) => StatusCode::CONFLICT,
        AdminError::Store(_) => return Err(err.into()),
    };

    tracing::debug!("Admin form rejected: {}", err);
    let html = state.composer.admin_form(data, Some(&err.to_string()))?;
    Ok((status, Html(html)).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::seed;
    use crate::store::MemoryStore;
    use axum::body::Body;
    use axum::http::{header, Request};
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app(store: Arc<MemoryStore>, public_dir: &Path) -> Router {
        app_with(SiteConfig::default(), store, public_dir)
    }

    fn app_with(config: SiteConfig, store: Arc<MemoryStore>, public_dir: &Path) -> Router {
        let state = AppState {
            store,
            composer: Arc::new(PageComposer::new(&config).unwrap()),
            auth: Arc::new(StaticCredentials::from_config(&config.admin)),
        };
        build_router(state, public_dir)
    }

    fn seeded() -> Arc<MemoryStore> {
        Arc::new(MemoryStore::new(seed::starter_collections()))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn authorized(uri: &str) -> axum::http::request::Builder {
        Request::builder().uri(uri).header(
            header::AUTHORIZATION,
            format!("Basic {}", STANDARD.encode("admin:admin")),
        )
    }

    fn post_form(uri: &str, body: &str) -> Request<Body> {
        authorized(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_public_pages() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(seeded(), dir.path());

        for uri in ["/", "/projects", "/tech-stack", "/certifications"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let response = app.oneshot(get("/")).await.unwrap();
        let html = body_text(response).await;
        assert!(html.contains("Featured Projects"));
        assert!(html.contains(r#"id="modal-pdao-portal""#));
    }

    #[tokio::test]
    async fn test_store_failure_fails_whole_page() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded();
        store.set_unavailable(true);
        let response = app(store, dir.path()).oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let html = body_text(response).await;
        assert!(html.contains("500 Internal Server Error"));
        assert!(!html.contains("Featured Projects"));
    }

    #[tokio::test]
    async fn test_error_page_links_to_site_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.root = "/me/".to_string();
        let app = app_with(config, seeded(), dir.path());

        let response = app.oneshot(get("/missing.png")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = body_text(response).await;
        assert!(html.contains(r#"<a href="/me/">Back to Home</a>"#));
        assert!(html.contains("no page at /missing.png"));
    }

    #[tokio::test]
    async fn test_static_fallback() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("hello.txt"), "hi there").unwrap();
        let app = app(seeded(), dir.path());

        let response = app.clone().oneshot(get("/hello.txt")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "hi there");

        let response = app.oneshot(get("/missing.png")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_admin_requires_credentials() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(seeded(), dir.path());

        let response = app.clone().oneshot(get("/admin")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::WWW_AUTHENTICATE],
            "Basic realm=\"Portfolio Admin\""
        );

        let wrong = Request::builder()
            .uri("/admin/delete/cet-tracker")
            .header(
                header::AUTHORIZATION,
                format!("Basic {}", STANDARD.encode("admin:nope")),
            )
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(wrong).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .oneshot(authorized("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_project_redirects() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded();
        let app = app(store.clone(), dir.path());

        let body = "id=rust-site&title=Rust+Site&tags=Rust%2C+Axum\
                    &block_type=text&block_value=Hello%0AWorld\
                    &block_type=image&block_value=%2Fshot.png\
                    &block_type=text&block_value=";
        let response = app.oneshot(post_form("/admin/add", body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/admin");

        let project = store.get_project("rust-site").await.unwrap();
        assert_eq!(project.tags, vec!["Rust", "Axum"]);
        assert_eq!(store.list_projects().await.unwrap().len(), 4);
        match project.body {
            crate::content::ProjectBody::Blocks(blocks) => assert_eq!(blocks.len(), 2),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_project_rejections() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded();
        let app = app(store.clone(), dir.path());

        let response = app
            .clone()
            .oneshot(post_form("/admin/add", "id=cet-tracker&title=Impostor"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(
            store.get_project("cet-tracker").await.unwrap().title,
            "CET Tracker PH"
        );

        let response = app
            .clone()
            .oneshot(post_form("/admin/add", "id=fresh&title="))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_text(response).await.contains("is required"));

        let response = app
            .oneshot(post_form(
                "/admin/add",
                "id=fresh&title=Fresh&block_type=video&block_value=x",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(store.list_projects().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_edit_and_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded();
        let app = app(store.clone(), dir.path());

        let response = app
            .clone()
            .oneshot(authorized("/admin/edit/pdao-portal").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("Edit Project"));

        let response = app
            .clone()
            .oneshot(post_form(
                "/admin/edit/pdao-portal",
                "id=ignored&title=Renamed&block_type=text&block_value=New+body",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let project = store.get_project("pdao-portal").await.unwrap();
        assert_eq!(project.title, "Renamed");
        assert!(store.get_project("ignored").await.is_err());

        let response = app
            .clone()
            .oneshot(authorized("/admin/delete/pdao-portal").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(store.list_projects().await.unwrap().len(), 2);

        let response = app
            .oneshot(authorized("/admin/delete/pdao-portal").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
