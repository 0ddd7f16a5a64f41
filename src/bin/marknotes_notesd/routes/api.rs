use marknotes::note_store::NoteStore;
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use rocket::{catchers, delete, get, post, put, routes, Build, Rocket, State};
use uuid::Uuid;
use crate::app_constants::API_PREFIX;
use authentication_guard::Authenticated;
use errors::ApiError;
use model::{
    CreateNoteRequest, MessageResponse, NoteResponse, NoteWithContentResponse,
    NotesResponse, UpdateNoteRequest,
};

mod authentication_guard;
mod catchers;
mod errors;
mod model;
#[cfg(test)] mod tests;

#[get("/")]
async fn list_notes(
    auth: Authenticated,
    note_store: &State<Box<dyn NoteStore>>,
) -> Result<Json<NotesResponse>, ApiError> {
    let notes = note_store.list_notes(auth.0.user_id).await?;
    Ok(
        Json(
            NotesResponse {
                notes: notes.iter()
                    .map(|note| note.as_ref().into())
                    .collect(),
            }
        )
    )
}

#[get("/<id>")]
async fn get_note(
    auth: Authenticated,
    note_store: &State<Box<dyn NoteStore>>,
    id: Uuid,
) -> Result<Json<NoteWithContentResponse>, ApiError> {
    let note = note_store.get_note(id).await?
        .ok_or(ApiError::NotFound)?;
    if note.user_id != auth.0.user_id {
        return Err(ApiError::Forbidden);
    }
    // a missing content file is reported as null content, the record
    // still comes back
    let content = note_store.read_content(&note.file_key).await?;
    Ok(
        Json(
            NoteWithContentResponse {
                note: note.as_ref().into(),
                content,
            }
        )
    )
}

#[post("/", data = "<request>")]
async fn create_note(
    auth: Authenticated,
    note_store: &State<Box<dyn NoteStore>>,
    request: Json<CreateNoteRequest>,
) -> Result<status::Custom<Json<NoteResponse>>, ApiError> {
    let request = request.into_inner();
    let Some(title) = request.title else {
        return Err(ApiError::TitleRequired);
    };
    let content = request.content.unwrap_or_default();
    let note = note_store
        .create_note(auth.0.user_id, &title, &content)
        .await?;
    Ok(
        status::Custom(
            Status::Created,
            Json(
                NoteResponse {
                    note: note.as_ref().into(),
                }
            ),
        )
    )
}

#[put("/<id>", data = "<request>")]
async fn update_note(
    auth: Authenticated,
    note_store: &State<Box<dyn NoteStore>>,
    id: Uuid,
    request: Json<UpdateNoteRequest>,
) -> Result<Json<NoteResponse>, ApiError> {
    let note = note_store.get_note(id).await?
        .ok_or(ApiError::NotFound)?;
    if note.user_id != auth.0.user_id {
        return Err(ApiError::Forbidden);
    }
    let request = request.into_inner();
    let updated = note_store
        .update_note(id, request.title.as_deref(), request.content.as_deref())
        .await?;
    Ok(
        Json(
            NoteResponse {
                note: updated.as_ref().into(),
            }
        )
    )
}

#[delete("/<id>")]
async fn delete_note(
    auth: Authenticated,
    note_store: &State<Box<dyn NoteStore>>,
    id: Uuid,
) -> Result<Json<MessageResponse>, ApiError> {
    let note = note_store.get_note(id).await?
        .ok_or(ApiError::NotFound)?;
    if note.user_id != auth.0.user_id {
        return Err(ApiError::Forbidden);
    }
    if !note_store.delete_note(id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(
        Json(
            MessageResponse {
                message: "File deleted",
            }
        )
    )
}

pub trait ApiRocketBuildExt {
    fn install_notes_api(self) -> Self;
}

impl ApiRocketBuildExt for Rocket<Build> {
    fn install_notes_api(self) -> Self {
        self
            .mount(
                API_PREFIX,
                routes![
                    list_notes,
                    get_note,
                    create_note,
                    update_note,
                    delete_note,
                ]
            )
            .register(
                API_PREFIX,
                catchers![
                    catchers::bad_request,
                    catchers::unauthorized,
                    catchers::not_found,
                    catchers::unprocessable_entity,
                    catchers::internal_error,
                ]
            )
    }
}
