use std::path::Path;

use actix_files::NamedFile;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};

use crate::web::state::AppState;

/// Fallback for every route the server does not own: the browser client
/// takes over routing from here.
pub async fn client_shell(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if req.method() != Method::GET && req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed().finish();
    }

    let index = Path::new(&state.config.static_dir).join("index.html");
    match NamedFile::open_async(&index).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            log::error!("client shell {} unavailable: {}", index.display(), e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
