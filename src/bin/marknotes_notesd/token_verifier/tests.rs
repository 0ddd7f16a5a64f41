use std::str::FromStr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use super::*;

const TIMEOUT: Duration = Duration::from_millis(200);

fn json_response(status_line: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status_line}\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\
         \r\n\
         {body}",
        body.len(),
    )
}

/// Answers a single request with a canned response and returns the
/// base url to reach it at.
async fn serve_once(response: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
    });
    format!("http://{addr}")
}

/// Accepts a single connection and holds it open without answering.
async fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        while socket.read(&mut buf).await.is_ok_and(|n| n > 0) {}
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn a_verified_token_yields_the_user() {
    let user_id = Uuid::from_u128(0xa11ce);
    let body = format!(
        "{{\"message\":\"Verified\",\"jwt\":\"t\",\"payload\":\
         {{\"userId\":\"{user_id}\",\"email\":\"alice@x.com\",\
         \"iat\":0,\"exp\":0}}}}"
    );
    let base = serve_once(json_response("200 OK", &body)).await;

    let verifier = RemoteTokenVerifier::new(&base, TIMEOUT).unwrap();
    let user = verifier.verify("Bearer t").await
        .expect("verification failed");
    assert_eq!(user.user_id, user_id);
    assert_eq!(user.email, EmailString::from_str("alice@x.com").unwrap());
}

#[tokio::test]
async fn a_rejection_from_the_auth_daemon_rejects_the_token() {
    let base = serve_once(
        json_response("401 Unauthorized", "{\"error\":\"Unauthenticated\"}"),
    ).await;

    let verifier = RemoteTokenVerifier::new(&base, TIMEOUT).unwrap();
    let err = verifier.verify("Bearer t").await.expect_err("should fail");
    assert!(
        matches!(err, TokenVerifierError::Rejected),
        "wrong error: {err:#?}",
    );
}

#[tokio::test]
async fn an_unresponsive_auth_daemon_fails_the_check() {
    let base = serve_silence().await;

    let verifier = RemoteTokenVerifier::new(&base, TIMEOUT).unwrap();
    let err = verifier.verify("Bearer t").await.expect_err("should time out");
    assert!(
        matches!(err, TokenVerifierError::Unavailable),
        "wrong error: {err:#?}",
    );
}

#[tokio::test]
async fn an_unreachable_auth_daemon_fails_the_check() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let verifier = RemoteTokenVerifier::new(&format!("http://{addr}"), TIMEOUT)
        .unwrap();
    let err = verifier.verify("Bearer t").await.expect_err("should fail");
    assert!(
        matches!(err, TokenVerifierError::Unavailable),
        "wrong error: {err:#?}",
    );
}

#[tokio::test]
async fn a_malformed_verify_response_fails_the_check() {
    let base = serve_once(
        json_response("200 OK", "{\"message\":\"Verified\"}"),
    ).await;

    let verifier = RemoteTokenVerifier::new(&base, TIMEOUT).unwrap();
    let err = verifier.verify("Bearer t").await.expect_err("should fail");
    assert!(
        matches!(err, TokenVerifierError::Unavailable),
        "wrong error: {err:#?}",
    );
}
