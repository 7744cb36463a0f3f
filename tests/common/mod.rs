//! Shared test utilities
//!
//! Spins up a fake generateContent upstream on an ephemeral port so flows can
//! be exercised end-to-end without network access or real credentials.

use axum::{
    extract::Path,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use base64::Engine;
use serde_json::{json, Value};

/// PCM payload the fake speech model returns (two 16-bit LE samples).
pub const FAKE_PCM: [u8; 4] = [0x01, 0x00, 0x02, 0x00];

/// Prompt marker that makes the fake upstream return HTTP 500.
pub const TRIGGER_FAIL: &str = "please fail";

/// Prompt marker that makes the fake speech model return text instead of audio.
pub const TRIGGER_SILENT: &str = "stay silent";

/// Start the fake upstream and return its base URL.
pub async fn spawn_fake_upstream() -> String {
    let app = Router::new().route("/v1beta/models/{model}", post(generate));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind fake upstream");
    let addr = listener.local_addr().expect("no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake upstream died");
    });
    format!("http://{addr}")
}

/// Canned generateContent handler.
///
/// Echoes the prompt (and the presented API key) for text requests, returns a
/// fixed PCM blob for audio requests, and honors the trigger markers above.
async fn generate(
    Path(model): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    assert!(
        model.ends_with(":generateContent"),
        "unexpected action in {model}"
    );

    let key = headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    let parts = body["contents"][0]["parts"]
        .as_array()
        .cloned()
        .unwrap_or_default();
    let text: String = parts
        .iter()
        .filter_map(|p| p["text"].as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let image_mime = parts
        .iter()
        .find_map(|p| p["inlineData"]["mimeType"].as_str().map(str::to_string));

    if text.contains(TRIGGER_FAIL) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    let wants_audio = body["generationConfig"]["responseModalities"][0] == "AUDIO";

    let reply = if wants_audio {
        if text.contains(TRIGGER_SILENT) {
            json!({"candidates": [{"content": {"parts": [{"text": "no audio today"}]}}]})
        } else {
            let data = base64::engine::general_purpose::STANDARD.encode(FAKE_PCM);
            json!({"candidates": [{"content": {"parts": [{
                "inlineData": {
                    "mimeType": "audio/L16;codec=pcm;rate=24000",
                    "data": data,
                }
            }]}}]})
        }
    } else if let Some(mime) = image_mime {
        json!({"candidates": [{"content": {"parts": [
            {"text": format!("summary of {mime} image (key={key})")}
        ]}}]})
    } else {
        json!({"candidates": [{"content": {"parts": [
            {"text": format!("echo(key={key}): {text}")}
        ]}}]})
    };

    Json(reply).into_response()
}
