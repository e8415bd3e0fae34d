use anyhow::Result;
use grammar_scorer::{
    create_router, AppState, HfCorrectionClient, HfTranscriptionClient, ScoringPipeline,
    ServiceConfig,
};
use httpmock::prelude::*;
use std::net::SocketAddr;

fn test_config(base_url: &str) -> ServiceConfig {
    ServiceConfig {
        hf_token: "test-token".to_string(),
        asr_model: "asr-model".to_string(),
        grammar_model: "grammar-model".to_string(),
        inference_url: base_url.to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 5,
        verbose: false,
        json_logs: false,
    }
}

async fn spawn_app(inference_url: &str) -> Result<SocketAddr> {
    let config = test_config(inference_url);
    let pipeline = ScoringPipeline::new(
        HfTranscriptionClient::new(&config)?,
        HfCorrectionClient::new(&config)?,
    );
    let app = create_router(AppState::new(pipeline));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Ok(addr)
}

async fn upload(addr: SocketAddr, filename: &str, bytes: &[u8]) -> Result<reqwest::Response> {
    let part = reqwest::multipart::Part::bytes(bytes.to_vec()).file_name(filename.to_string());
    let form = reqwest::multipart::Form::new().part("file", part);
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/score"))
        .multipart(form)
        .send()
        .await?;
    Ok(response)
}

#[tokio::test]
async fn test_health_endpoint() -> Result<()> {
    let addr = spawn_app("http://127.0.0.1:1").await?;

    let response = reqwest::get(format!("http://{addr}/health")).await?;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn test_score_endpoint_returns_rounded_report() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/models/asr-model");
        then.status(200)
            .json_body(serde_json::json!({ "text": "he go school" }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/models/grammar-model");
        then.status(200)
            .json_body(serde_json::json!([{ "generated_text": "he goes to school" }]));
    });

    let addr = spawn_app(&server.base_url()).await?;
    let response = upload(addr, "sample.wav", b"fake-wav-bytes").await?;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["filename"], "sample.wav");
    assert_eq!(body["asr_text"], "he go school");
    assert_eq!(body["corrected_text"], "he goes to school");
    // One substitution plus one insertion over a three-word reference: the
    // error rate 2/3 is reported with four decimals, the score with two.
    assert_eq!(body["wer"].as_f64(), Some(0.6667));
    assert_eq!(body["grammar_score_0_100"].as_f64(), Some(33.33));
    Ok(())
}

#[tokio::test]
async fn test_rejects_unsupported_extension() -> Result<()> {
    let addr = spawn_app("http://127.0.0.1:1").await?;

    let response = upload(addr, "notes.txt", b"some text").await?;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], "Upload an audio file");
    Ok(())
}

#[tokio::test]
async fn test_rejects_empty_upload() -> Result<()> {
    let addr = spawn_app("http://127.0.0.1:1").await?;

    let response = upload(addr, "sample.wav", b"").await?;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], "Empty file uploaded");
    Ok(())
}

#[tokio::test]
async fn test_rejects_missing_file_field() -> Result<()> {
    let addr = spawn_app("http://127.0.0.1:1").await?;

    let form = reqwest::multipart::Form::new().text("comment", "no file here");
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/score"))
        .multipart(form)
        .send()
        .await?;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["detail"], "Missing file field");
    Ok(())
}

#[tokio::test]
async fn test_remote_failure_maps_to_server_error() -> Result<()> {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(POST).path("/models/asr-model");
        then.status(503).body("model loading");
    });

    let addr = spawn_app(&server.base_url()).await?;
    let response = upload(addr, "sample.wav", b"fake-wav-bytes").await?;
    assert_eq!(response.status(), 500);

    let body: serde_json::Value = response.json().await?;
    let detail = body["detail"].as_str().unwrap();
    assert!(detail.starts_with("Processing failed:"), "detail: {detail}");
    Ok(())
}
