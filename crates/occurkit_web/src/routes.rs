//! axum wiring for the form page and the submit endpoint.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use chrono::Local;
use tracing::error;

use crate::conf::{
    C_MIME_PDF, C_NOTICE_PREFIX_FORM, C_QUERY_LEVEL, C_QUERY_MESSAGE, C_ROUTE_INDEX,
    C_ROUTE_SUBMIT,
};
use crate::gateway::{FormGateway, derive_content_disposition};
use crate::spec::{EnumSubmitReply, SpecNotice, SpecNoticeQuery};
use crate::view::render_index_page;

#[derive(Debug, Clone)]
pub struct AppState {
    gateway: Arc<FormGateway>,
}

pub fn build_router(gateway: FormGateway) -> Router {
    Router::new()
        .route(C_ROUTE_INDEX, get(get_index))
        .route(C_ROUTE_SUBMIT, post(post_submit))
        .with_state(AppState {
            gateway: Arc::new(gateway),
        })
}

async fn get_index(Query(query): Query<SpecNoticeQuery>) -> Html<String> {
    Html(render_index_page(query.to_notice().as_ref()))
}

async fn post_submit(
    State(state): State<AppState>,
    Form(l_pairs): Form<Vec<(String, String)>>,
) -> Response {
    let gateway = state.gateway.clone();
    let now = Local::now().naive_local();

    let reply = tokio::task::spawn_blocking(move || gateway.handle(l_pairs, &now))
        .await
        .unwrap_or_else(|err| {
            error!(error = %err, "[SUBMIT] worker failed");
            EnumSubmitReply::Redirect(SpecNotice::error(format!("{C_NOTICE_PREFIX_FORM} {err}")))
        });

    match reply {
        EnumSubmitReply::Redirect(notice) => {
            Redirect::to(&derive_notice_location(&notice)).into_response()
        }
        EnumSubmitReply::File(attachment) => (
            [
                (header::CONTENT_TYPE, C_MIME_PDF.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    derive_content_disposition(&attachment.file_name),
                ),
            ],
            attachment.v_bytes,
        )
            .into_response(),
    }
}

/// `/` with the notice encoded in the query string.
pub fn derive_notice_location(notice: &SpecNotice) -> String {
    let c_query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair(C_QUERY_LEVEL, notice.level.as_str())
        .append_pair(C_QUERY_MESSAGE, &notice.message)
        .finish();
    format!("{C_ROUTE_INDEX}?{c_query}")
}
