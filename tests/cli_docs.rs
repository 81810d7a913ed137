mod common;

use common::TestContext;
use predicates::prelude::*;

#[test]
fn upload_stores_text_content_verbatim() {
    let ctx = TestContext::new();
    ctx.login();
    let file = ctx.write_file("unit1.txt", "Photosynthesis converts light into chemical energy.");

    ctx.cli()
        .arg("upload")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved document"))
        .stdout(predicate::str::contains("unit1.txt"));

    let documents = ctx.read_archive_json("documents.json");
    let records = documents.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "unit1.txt");
    assert_eq!(records[0]["content"], "Photosynthesis converts light into chemical energy.");
    assert!(records[0]["uploadDate"].as_str().is_some());
    assert!(records[0]["size"].as_str().is_some());
}

#[test]
fn upload_non_text_file_stores_a_placeholder() {
    let ctx = TestContext::new();
    ctx.login();
    let file = ctx.write_file("syllabus.pdf", "%PDF-1.4");

    ctx.cli()
        .arg("upload")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("extraction unavailable"));

    let documents = ctx.read_archive_json("documents.json");
    assert!(
        documents[0]["content"]
            .as_str()
            .unwrap()
            .contains("PDF text extraction is not available")
    );
}

#[test]
fn upload_missing_file_fails() {
    let ctx = TestContext::new();
    ctx.login();

    ctx.cli().args(["upload", "nope.txt"]).assert().failure();
}

#[test]
fn documents_round_trip_most_recent_first() {
    let ctx = TestContext::new();
    ctx.login();

    for (name, content) in [("a.txt", "alpha"), ("b.txt", "beta"), ("c.txt", "gamma")] {
        let file = ctx.write_file(name, content);
        ctx.cli().arg("upload").arg(&file).assert().success();
    }

    let documents = ctx.read_archive_json("documents.json");
    let names: Vec<_> = documents
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["c.txt", "b.txt", "a.txt"]);

    let contents: Vec<_> = documents
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["content"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(contents, vec!["gamma", "beta", "alpha"]);
}

#[test]
fn docs_show_prints_the_extracted_text() {
    let ctx = TestContext::new();
    ctx.login();
    let file = ctx.write_file("bio.txt", "Osmosis notes, unit 3.");
    ctx.cli().arg("upload").arg(&file).assert().success();

    ctx.cli()
        .args(["docs", "show", "bio.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Osmosis notes, unit 3."));
}

#[test]
fn docs_delete_removes_exactly_the_named_record() {
    let ctx = TestContext::new();
    ctx.login();

    for (name, content) in [("a.txt", "alpha"), ("b.txt", "beta")] {
        let file = ctx.write_file(name, content);
        ctx.cli().arg("upload").arg(&file).assert().success();
    }

    let documents = ctx.read_archive_json("documents.json");
    let target_id = documents
        .as_array()
        .unwrap()
        .iter()
        .find(|doc| doc["name"] == "a.txt")
        .unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    ctx.cli().args(["docs", "delete", &target_id]).assert().success();

    let remaining = ctx.read_archive_json("documents.json");
    let names: Vec<_> = remaining
        .as_array()
        .unwrap()
        .iter()
        .map(|doc| doc["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["b.txt"]);
}

#[test]
fn docs_delete_unknown_id_fails() {
    let ctx = TestContext::new();
    ctx.login();

    ctx.cli()
        .args(["docs", "delete", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn docs_list_mentions_the_empty_state() {
    let ctx = TestContext::new();
    ctx.login();

    ctx.cli()
        .args(["docs", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No stored documents yet"));
}

#[test]
fn stored_document_feeds_ask_context() {
    let ctx = TestContext::new();
    ctx.login();
    let file = ctx.write_file("bio.txt", "Osmosis moves water across a semipermeable membrane.");
    ctx.cli().arg("upload").arg(&file).assert().success();

    ctx.cli()
        .args(["ask", "What is osmosis?", "--doc", "bio.txt", "--prompt-preview"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Osmosis moves water across a semipermeable membrane.",
        ));
}
