//! End-to-end tests driving the hook binary over stdin/stdout, with the
//! mem0 API mocked.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

fn hook() -> Command {
    let mut cmd = Command::cargo_bin("memory-retrieve").unwrap();
    // Start from a known configuration regardless of the host environment.
    cmd.env("MEM0_API_KEY", "")
        .env_remove("MEM0_USER_ID")
        .env_remove("MEM0_TOP_K")
        .env_remove("MEM0_THRESHOLD")
        .env_remove("MEM0_AUTO_SAVE")
        .env_remove("MEM0_BASE_URL");
    cmd
}

#[test]
fn continues_without_api_key() {
    hook()
        .write_stdin(json!({"prompt": "test prompt"}).to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"continue""#))
        .stdout(predicate::str::contains("context").not());
}

#[test]
fn continues_without_prompt() {
    hook()
        .write_stdin("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"continue""#));
}

#[test]
fn handles_invalid_json() {
    hook()
        .write_stdin("not valid json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"continue""#));
}

#[test]
fn injects_memories_above_threshold() {
    let mut server = mockito::Server::new();
    let search = server
        .mock("POST", "/v1/memories/search/")
        .with_status(200)
        .with_body(
            json!({
                "results": [
                    {"memory": "User prefers dark mode", "score": 0.9},
                    {"memory": "User codes in Rust", "score": 0.5},
                    {"memory": "User likes tea", "score": 0.1}
                ]
            })
            .to_string(),
        )
        .create();

    hook()
        .env("MEM0_API_KEY", "test-key")
        .env("MEM0_BASE_URL", server.url())
        .env("MEM0_TOP_K", "2")
        .env("MEM0_THRESHOLD", "0.3")
        .env("MEM0_AUTO_SAVE", "false")
        .write_stdin(json!({"prompt": "what are my preferences?"}).to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("Relevant memories"))
        .stdout(predicate::str::contains("User prefers dark mode"))
        .stdout(predicate::str::contains("User codes in Rust"))
        .stdout(predicate::str::contains("User likes tea").not());

    search.assert();
}

#[test]
fn auto_saves_prompt_by_default() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/v1/memories/search/")
        .with_status(200)
        .with_body(json!({"results": []}).to_string())
        .create();
    let add = server
        .mock("POST", "/v1/memories/")
        .match_body(mockito::Matcher::Json(json!({
            "messages": [{"role": "user", "content": "remember my setup"}],
            "user_id": "cursor-user"
        })))
        .with_status(200)
        .with_body("{}")
        .create();

    hook()
        .env("MEM0_API_KEY", "test-key")
        .env("MEM0_BASE_URL", server.url())
        .write_stdin(json!({"prompt": "remember my setup"}).to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"continue""#));

    add.assert();
}

#[test]
fn auto_save_off_suppresses_add() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/v1/memories/search/")
        .with_status(200)
        .with_body(
            json!({"results": [{"memory": "User prefers dark mode", "score": 0.9}]}).to_string(),
        )
        .create();
    let add = server
        .mock("POST", "/v1/memories/")
        .expect(0)
        .create();

    hook()
        .env("MEM0_API_KEY", "test-key")
        .env("MEM0_BASE_URL", server.url())
        .env("MEM0_AUTO_SAVE", "false")
        .write_stdin(json!({"prompt": "anything"}).to_string())
        .assert()
        .success()
        // The context block is unaffected by the auto-save toggle.
        .stdout(predicate::str::contains("User prefers dark mode"));

    add.assert();
}

#[test]
fn search_failure_degrades_to_plain_continue() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/v1/memories/search/")
        .with_status(500)
        .create();

    hook()
        .env("MEM0_API_KEY", "test-key")
        .env("MEM0_BASE_URL", server.url())
        .env("MEM0_AUTO_SAVE", "false")
        .write_stdin(json!({"prompt": "anything"}).to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"continue""#))
        .stdout(predicate::str::contains("context").not());
}

#[test]
fn empty_results_yield_plain_continue() {
    let mut server = mockito::Server::new();
    server
        .mock("POST", "/v1/memories/search/")
        .with_status(200)
        .with_body(json!({"results": []}).to_string())
        .create();

    hook()
        .env("MEM0_API_KEY", "test-key")
        .env("MEM0_BASE_URL", server.url())
        .env("MEM0_AUTO_SAVE", "false")
        .write_stdin(json!({"prompt": "anything"}).to_string())
        .assert()
        .success()
        .stdout(predicate::str::contains("context").not());
}

#[test]
fn reads_config_from_workspace_env_file() {
    let mut server = mockito::Server::new();
    let search = server
        .mock("POST", "/v1/memories/search/")
        .match_header("authorization", "Token file-key")
        .with_status(200)
        .with_body(
            json!({"results": [{"memory": "User prefers dark mode", "score": 0.9}]}).to_string(),
        )
        .create();

    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(
        workspace.path().join(".env"),
        format!(
            "MEM0_API_KEY=file-key\nMEM0_BASE_URL={}\nMEM0_AUTO_SAVE=false\n",
            server.url()
        ),
    )
    .unwrap();

    hook()
        .env_remove("MEM0_API_KEY")
        .write_stdin(
            json!({
                "prompt": "what are my preferences?",
                "workspace_roots": [workspace.path().to_string_lossy()]
            })
            .to_string(),
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("User prefers dark mode"));

    search.assert();
}

#[test]
fn process_env_overrides_env_file() {
    let mut server = mockito::Server::new();
    let search = server
        .mock("POST", "/v1/memories/search/")
        .expect(0)
        .create();

    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(
        workspace.path().join(".env"),
        format!("MEM0_API_KEY=file-key\nMEM0_BASE_URL={}\n", server.url()),
    )
    .unwrap();

    // hook() sets MEM0_API_KEY="" in the process environment; that must
    // win over the file's key, leaving the hook with no usable key.
    hook()
        .write_stdin(
            json!({
                "prompt": "anything",
                "workspace_roots": [workspace.path().to_string_lossy()]
            })
            .to_string(),
        )
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""action":"continue""#))
        .stdout(predicate::str::contains("context").not());

    search.assert();
}

#[test]
fn accepts_query_field_for_prompt() {
    let mut server = mockito::Server::new();
    let search = server
        .mock("POST", "/v1/memories/search/")
        .with_status(200)
        .with_body(json!({"results": []}).to_string())
        .create();

    hook()
        .env("MEM0_API_KEY", "test-key")
        .env("MEM0_BASE_URL", server.url())
        .env("MEM0_AUTO_SAVE", "false")
        .write_stdin(json!({"query": "from the query field"}).to_string())
        .assert()
        .success();

    search.assert();
}
