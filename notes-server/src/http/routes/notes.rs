//! Note endpoints

use axum::{extract::State, routing::get, Json, Router};
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{CreatedRecord, NewRecord, Record};
use crate::state::AppState;

/// GET /notes - list every note
async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Record>>, ApiError> {
    let notes = state.store().find_many().await?;
    Ok(Json(notes))
}

/// POST /notes - create a note from the body as given
async fn create_note(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> Result<Json<CreatedRecord>, ApiError> {
    let newname = state.store().create(NewRecord::from_body(&body)).await?;
    Ok(Json(CreatedRecord { newname }))
}

/// Note routes
pub fn router() -> Router<AppState> {
    Router::new().route("/notes", get(list_notes).post(create_note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryNoteStore;
    use serde_json::json;

    #[tokio::test]
    async fn list_returns_store_contents() {
        let state = AppState::new(MemoryNoteStore::new());
        state
            .store()
            .create(NewRecord::new("Ada", "Lovelace"))
            .await
            .unwrap();

        let Json(notes) = list_notes(State(state)).await.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].name, "Ada");
    }

    #[tokio::test]
    async fn create_wraps_record_under_newname() {
        let state = AppState::new(MemoryNoteStore::new());

        let Json(body) = create_note(
            State(state),
            JsonBody(json!({ "name": "Ada", "lastname": "Lovelace" })),
        )
        .await
        .unwrap();

        assert_eq!(body.newname.id, 1);
        assert_eq!(body.newname.lastname, "Lovelace");
    }

    #[tokio::test]
    async fn create_propagates_store_rejection() {
        let state = AppState::new(MemoryNoteStore::new());

        let result = create_note(State(state), JsonBody(json!({}))).await;
        assert!(matches!(result, Err(ApiError::Database(_))));
    }
}
