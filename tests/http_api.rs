//! End-to-end HTTP API tests.
//!
//! Each test spins up the full agent (registry, worker pool, axum router) on
//! an ephemeral port and drives it with a real HTTP client, the same way the
//! orchestrator would. The compute delay is shortened so completions happen
//! within test timeouts.

use math_agent::api;
use math_agent::executor::executor::TaskExecutor;
use math_agent::registry::store::TaskStore;

use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Starts a full agent instance and returns its address plus a handle on the
/// shared store for registry-level assertions.
async fn spawn_agent(compute_delay: Duration) -> (SocketAddr, Arc<TaskStore>) {
    let store = TaskStore::new();

    let executor = TaskExecutor::new(store.clone(), 4, compute_delay);
    executor.start().await;

    let app = api::router(store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, store)
}

async fn submit(client: &reqwest::Client, addr: SocketAddr, body: Value) -> reqwest::Response {
    client
        .post(format!("http://{}/execute", addr))
        .json(&body)
        .send()
        .await
        .expect("Submit request failed")
}

async fn task_status(client: &reqwest::Client, addr: SocketAddr, task_id: &str) -> reqwest::Response {
    client
        .get(format!("http://{}/task_status/{}", addr, task_id))
        .send()
        .await
        .expect("Status request failed")
}

/// Polls the status endpoint until the task reaches a terminal state.
async fn poll_until_terminal(
    client: &reqwest::Client,
    addr: SocketAddr,
    task_id: &str,
) -> Value {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(10);

    loop {
        let resp = task_status(client, addr, task_id).await;
        assert_eq!(resp.status(), 200);

        let record: Value = resp.json().await.unwrap();
        match record["status"].as_str().unwrap() {
            "completed" | "failed" => return record,
            "pending" | "running" => {
                assert!(
                    record.get("result").is_none(),
                    "result must be absent before completion: {}",
                    record
                );
            }
            other => panic!("Unexpected status: {}", other),
        }

        assert!(
            tokio::time::Instant::now() < deadline,
            "Task {} did not finish in time",
            task_id
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}

#[tokio::test]
async fn submit_and_poll_until_completed() {
    let (addr, _store) = spawn_agent(Duration::from_millis(50)).await;
    let client = reqwest::Client::new();

    let resp = submit(&client, addr, json!({"arguments": {"number": 7}})).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "pending");
    let task_id = body["task_id"].as_str().unwrap().to_string();
    assert!(task_id.starts_with("math-"));

    // A returned id is immediately visible, never 404
    let immediate = task_status(&client, addr, &task_id).await;
    assert_eq!(immediate.status(), 200);

    let record = poll_until_terminal(&client, addr, &task_id).await;
    assert_eq!(record["status"], "completed");
    assert_eq!(record["input"], 7);
    assert_eq!(record["result"]["input"], 7);
    assert_eq!(record["result"]["square"], 49);
    assert!(record["result"]["message"].is_string());
    assert!(record.get("error").is_none());
}

#[tokio::test]
async fn completed_status_is_sticky() {
    let (addr, _store) = spawn_agent(Duration::from_millis(10)).await;
    let client = reqwest::Client::new();

    let resp = submit(&client, addr, json!({"arguments": {"number": 3}})).await;
    let body: Value = resp.json().await.unwrap();
    let task_id = body["task_id"].as_str().unwrap().to_string();

    let record = poll_until_terminal(&client, addr, &task_id).await;
    assert_eq!(record["status"], "completed");

    // Once completed, later observations never regress
    for _ in 0..5 {
        let resp = task_status(&client, addr, &task_id).await;
        let record: Value = resp.json().await.unwrap();
        assert_eq!(record["status"], "completed");
        assert_eq!(record["result"]["square"], 9);
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
}

#[tokio::test]
async fn missing_number_defaults_to_zero() {
    let (addr, _store) = spawn_agent(Duration::from_millis(10)).await;
    let client = reqwest::Client::new();

    let resp = submit(&client, addr, json!({"arguments": {}})).await;
    assert_eq!(resp.status(), 200);

    let body: Value = resp.json().await.unwrap();
    let task_id = body["task_id"].as_str().unwrap().to_string();

    let record = poll_until_terminal(&client, addr, &task_id).await;
    assert_eq!(record["status"], "completed");
    assert_eq!(record["input"], 0);
    assert_eq!(record["result"]["square"], 0);
}

#[tokio::test]
async fn missing_arguments_is_rejected_without_side_effects() {
    let (addr, store) = spawn_agent(Duration::from_millis(10)).await;
    let client = reqwest::Client::new();

    let resp = submit(&client, addr, json!({})).await;
    assert_eq!(resp.status(), 400);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());

    // No record was created
    assert_eq!(store.task_count(), 0);
}

#[tokio::test]
async fn unparseable_body_is_rejected() {
    let (addr, store) = spawn_agent(Duration::from_millis(10)).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{}/execute", addr))
        .header("content-type", "application/json")
        .body("this is not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Wrong argument types are rejected the same way
    let resp = submit(&client, addr, json!({"arguments": {"number": "seven"}})).await;
    assert_eq!(resp.status(), 400);

    assert_eq!(store.task_count(), 0);
}

#[tokio::test]
async fn unknown_task_id_returns_not_found() {
    let (addr, _store) = spawn_agent(Duration::from_millis(10)).await;
    let client = reqwest::Client::new();

    let resp = task_status(&client, addr, "math-never-issued").await;
    assert_eq!(resp.status(), 404);

    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn overflow_input_reaches_failed_not_stuck_running() {
    let (addr, _store) = spawn_agent(Duration::from_millis(10)).await;
    let client = reqwest::Client::new();

    let resp = submit(&client, addr, json!({"arguments": {"number": i64::MAX}})).await;
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let task_id = body["task_id"].as_str().unwrap().to_string();

    let record = poll_until_terminal(&client, addr, &task_id).await;
    assert_eq!(record["status"], "failed");
    assert!(record["error"].as_str().unwrap().contains("overflow"));
    assert!(record.get("result").is_none());
}

#[tokio::test]
async fn concurrent_submissions_get_distinct_ids_and_correct_results() {
    let (addr, _store) = spawn_agent(Duration::from_millis(5)).await;
    let client = reqwest::Client::new();

    // 50 simultaneous submissions
    let mut submissions = Vec::new();
    for number in 0..50i64 {
        let client = client.clone();
        submissions.push(tokio::spawn(async move {
            let resp = submit(&client, addr, json!({"arguments": {"number": number}})).await;
            assert_eq!(resp.status(), 200);
            let body: Value = resp.json().await.unwrap();
            (body["task_id"].as_str().unwrap().to_string(), number)
        }));
    }

    let mut ids = Vec::new();
    for handle in submissions {
        ids.push(handle.await.unwrap());
    }

    // All ids distinct
    let mut unique: Vec<&str> = ids.iter().map(|(id, _)| id.as_str()).collect();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 50, "Every submission must get a fresh id");

    // Each task completes with the square of its own input
    for (task_id, number) in &ids {
        let record = poll_until_terminal(&client, addr, task_id).await;
        assert_eq!(record["status"], "completed");
        assert_eq!(record["input"], *number);
        assert_eq!(record["result"]["square"], number * number);
    }
}
