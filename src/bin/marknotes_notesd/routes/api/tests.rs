use std::collections::HashMap;
use std::str::FromStr;
use assert_fs::TempDir;
use async_trait::async_trait;
use marknotes::email_string::EmailString;
use marknotes::note_store::ProductionNoteStore;
use marknotes::rng::SyncRng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rocket::http::{Header, Status};
use rocket::local::asynchronous::Client;
use serde_json::{json, Value};
use crate::token_verifier::{
    RemoteTokenVerifier, TokenVerifier, TokenVerifierError, VerifiedUser,
};
use super::*;

const ALICE_TOKEN: &str = "alice-token";
const BOB_TOKEN: &str = "bob-token";

struct StaticTokenVerifier {
    users: HashMap<&'static str, VerifiedUser>,
}

impl StaticTokenVerifier {
    fn new() -> Self {
        let mut users = HashMap::new();
        users.insert(
            ALICE_TOKEN,
            VerifiedUser {
                user_id: Uuid::from_u128(0xa11ce),
                email: EmailString::from_str("alice@x.com").unwrap(),
            },
        );
        users.insert(
            BOB_TOKEN,
            VerifiedUser {
                user_id: Uuid::from_u128(0xb0b),
                email: EmailString::from_str("bob@x.com").unwrap(),
            },
        );
        StaticTokenVerifier { users }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(
        &self,
        auth_header_value: &str,
    ) -> Result<VerifiedUser, TokenVerifierError> {
        let token = auth_header_value.strip_prefix("Bearer ")
            .unwrap_or(auth_header_value);
        self.users.get(token)
            .cloned()
            .ok_or(TokenVerifierError::Rejected)
    }
}

async fn make_client() -> (Client, TempDir) {
    make_client_with_verifier(Box::new(StaticTokenVerifier::new())).await
}

async fn make_client_with_verifier(
    token_verifier: Box<dyn TokenVerifier>,
) -> (Client, TempDir) {
    let tmp = TempDir::new().expect("failed to create a temporary directory");
    let note_store = ProductionNoteStore::new(
        tmp.path().join("notes.toml"),
        tmp.path().join("notes"),
        SyncRng::new(StdRng::from_entropy()),
    ).await.expect("note store creation failed");

    let note_store: Box<dyn NoteStore> = Box::new(note_store);
    let client = Client::tracked(
        rocket::build()
            .manage(note_store)
            .manage(token_verifier)
            .install_notes_api()
    ).await.expect("failed to build a test client");
    (client, tmp)
}

fn bearer(token: &str) -> Header<'static> {
    Header::new("Authorization", format!("Bearer {token}"))
}

async fn create_note(client: &Client, token: &str, title: &str, content: &str) -> Value {
    let response = client.post("/notes")
        .header(bearer(token))
        .json(&json!({"title": title, "content": content}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let body: Value = response.into_json().await.unwrap();
    body["note"].clone()
}

#[rocket::async_test]
async fn requests_without_a_header_are_unauthorized() {
    let (client, _tmp) = make_client().await;
    let response = client.get("/notes").dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "Authorization header missing");
}

#[rocket::async_test]
async fn rejected_tokens_are_unauthorized() {
    let (client, _tmp) = make_client().await;
    let response = client.get("/notes")
        .header(bearer("unknown-token"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[rocket::async_test]
async fn an_unresponsive_auth_daemon_is_unauthorized() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        use tokio::io::AsyncReadExt;
        let (mut socket, _) = listener.accept().await.unwrap();
        // hold the connection open without answering
        let mut buf = [0u8; 4096];
        while socket.read(&mut buf).await.is_ok_and(|n| n > 0) {}
    });
    let verifier = RemoteTokenVerifier::new(
        &format!("http://{addr}"),
        std::time::Duration::from_millis(200),
    ).expect("verifier creation failed");
    let (client, _tmp) = make_client_with_verifier(Box::new(verifier)).await;

    let response = client.get("/notes")
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "Invalid or expired token");
}

#[rocket::async_test]
async fn created_notes_come_back_in_the_listing() {
    let (client, _tmp) = make_client().await;
    let first = create_note(&client, ALICE_TOKEN, "first", "one").await;
    let second = create_note(&client, ALICE_TOKEN, "second", "two").await;
    create_note(&client, BOB_TOKEN, "foreign", "three").await;

    let response = client.get("/notes")
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    let notes = body["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    // newest first
    assert_eq!(notes[0]["id"], second["id"]);
    assert_eq!(notes[1]["id"], first["id"]);
}

#[rocket::async_test]
async fn a_note_is_returned_with_its_content() {
    let (client, _tmp) = make_client().await;
    let note = create_note(&client, ALICE_TOKEN, "shopping", "- milk").await;

    let response = client.get(format!("/notes/{}", note["id"].as_str().unwrap()))
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["note"]["id"], note["id"]);
    assert_eq!(body["note"]["title"], "shopping");
    assert_eq!(body["content"], "- milk");
}

#[rocket::async_test]
async fn a_missing_content_file_reads_as_null() {
    let (client, tmp) = make_client().await;
    let note = create_note(&client, ALICE_TOKEN, "shopping", "- milk").await;
    let file_key = note["fileKey"].as_str().unwrap();
    std::fs::remove_file(tmp.path().join("notes").join(file_key))
        .expect("content file should exist on disk");

    let response = client.get(format!("/notes/{}", note["id"].as_str().unwrap()))
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["note"]["id"], note["id"]);
    assert!(body["content"].is_null());
}

#[rocket::async_test]
async fn unknown_notes_are_not_found() {
    let (client, _tmp) = make_client().await;
    let response = client.get(format!("/notes/{}", Uuid::from_u128(42)))
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "Note not found");
}

#[rocket::async_test]
async fn foreign_notes_are_forbidden() {
    let (client, _tmp) = make_client().await;
    let note = create_note(&client, BOB_TOKEN, "bobs", "secret").await;
    let path = format!("/notes/{}", note["id"].as_str().unwrap());

    let get = client.get(&path)
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(get.status(), Status::Forbidden);
    let body: Value = get.into_json().await.unwrap();
    assert_eq!(body["error"], "Forbidden");

    let put = client.put(&path)
        .header(bearer(ALICE_TOKEN))
        .json(&json!({"title": "stolen"}))
        .dispatch()
        .await;
    assert_eq!(put.status(), Status::Forbidden);

    let delete = client.delete(&path)
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(delete.status(), Status::Forbidden);

    // still intact for its owner
    let owner_get = client.get(&path)
        .header(bearer(BOB_TOKEN))
        .dispatch()
        .await;
    assert_eq!(owner_get.status(), Status::Ok);
}

#[rocket::async_test]
async fn creation_requires_a_title() {
    let (client, _tmp) = make_client().await;
    let response = client.post("/notes")
        .header(bearer(ALICE_TOKEN))
        .json(&json!({"content": "text"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::BadRequest);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["error"], "Title is required");
}

#[rocket::async_test]
async fn creation_defaults_to_empty_content() {
    let (client, _tmp) = make_client().await;
    let note = create_note_without_content(&client).await;

    let response = client.get(format!("/notes/{}", note["id"].as_str().unwrap()))
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["content"], "");
}

async fn create_note_without_content(client: &Client) -> Value {
    let response = client.post("/notes")
        .header(bearer(ALICE_TOKEN))
        .json(&json!({"title": "bare"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Created);
    let body: Value = response.into_json().await.unwrap();
    body["note"].clone()
}

#[rocket::async_test]
async fn title_only_update_keeps_the_content() {
    let (client, _tmp) = make_client().await;
    let note = create_note(&client, ALICE_TOKEN, "old", "body").await;
    let path = format!("/notes/{}", note["id"].as_str().unwrap());

    let response = client.put(&path)
        .header(bearer(ALICE_TOKEN))
        .json(&json!({"title": "new"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["note"]["title"], "new");

    let get: Value = client.get(&path)
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(get["note"]["title"], "new");
    assert_eq!(get["content"], "body");
}

#[rocket::async_test]
async fn content_only_update_keeps_the_title() {
    let (client, _tmp) = make_client().await;
    let note = create_note(&client, ALICE_TOKEN, "title", "old body").await;
    let path = format!("/notes/{}", note["id"].as_str().unwrap());

    let response = client.put(&path)
        .header(bearer(ALICE_TOKEN))
        .json(&json!({"content": "new body"}))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let get: Value = client.get(&path)
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await
        .into_json()
        .await
        .unwrap();
    assert_eq!(get["note"]["title"], "title");
    assert_eq!(get["content"], "new body");
}

#[rocket::async_test]
async fn deletion_removes_the_note() {
    let (client, tmp) = make_client().await;
    let note = create_note(&client, ALICE_TOKEN, "doomed", "gone soon").await;
    let path = format!("/notes/{}", note["id"].as_str().unwrap());
    let file_key = note["fileKey"].as_str().unwrap().to_owned();

    let response = client.delete(&path)
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().await.unwrap();
    assert_eq!(body["message"], "File deleted");

    let get = client.get(&path)
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(get.status(), Status::NotFound);
    assert!(!tmp.path().join("notes").join(file_key).exists());
}

#[rocket::async_test]
async fn deleting_an_unknown_note_is_not_found() {
    let (client, _tmp) = make_client().await;
    let response = client.delete(format!("/notes/{}", Uuid::from_u128(42)))
        .header(bearer(ALICE_TOKEN))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);
}
