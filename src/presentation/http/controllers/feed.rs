// src/presentation/http/controllers/feed.rs
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    response::sse::{Event, KeepAlive, Sse},
};
use tokio_stream::{
    Stream, StreamExt,
    wrappers::{BroadcastStream, errors::BroadcastStreamRecvError},
};

#[utoipa::path(
    get,
    path = "/api/v1/articles/live",
    responses(
        (status = 200, description = "Server-sent `snapshot` events: the current collection, then one per change.",
            content_type = "text/event-stream", body = crate::application::dto::ArticleSnapshot),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn live_articles(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    let queries = &state.services.article_queries;

    // Subscribe first so no change between the snapshot read and the
    // subscription is lost.
    let receiver = queries.subscribe(&user).into_http()?;
    let initial = queries
        .current_snapshot(&user, state.services.clock().now())
        .await
        .into_http()?;
    let initial_revision = initial.revision;
    tracing::debug!(uid = %user.id, revision = initial_revision, "live subscriber connected");

    let updates = BroadcastStream::new(receiver).filter_map(move |message| match message {
        Ok(snapshot) if snapshot.revision > initial_revision => Some(snapshot),
        Ok(_) => None,
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            tracing::debug!(skipped, "live subscriber lagged");
            None
        }
    });

    let stream = tokio_stream::once(initial)
        .chain(updates)
        .map(|snapshot| {
            Event::default()
                .event("snapshot")
                .id(snapshot.revision.to_string())
                .json_data(snapshot.as_ref())
        });

    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
