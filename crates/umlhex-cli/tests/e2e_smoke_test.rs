use std::{fs, path::PathBuf};

use tempfile::tempdir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, path_regex},
};

use umlhex::{FailureKind, encode::encode_hex};
use umlhex_cli::{Args, inputs::collect_diagrams, run};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nrendered";

/// Sample diagrams live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[tokio::test]
async fn e2e_smoke_test_demos() {
    let demos = demos_dir();
    let diagrams = collect_diagrams(&[&demos]).expect("Failed to read demos");
    assert!(!diagrams.is_empty(), "No demo diagrams found in demos/");

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/png/~h[0-9a-f]+$"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES))
        .expect(diagrams.len() as u64)
        .mount(&server)
        .await;

    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();
    let output_dir = temp_dir.path().join("out");

    let args = Args {
        inputs: vec![demos.to_string_lossy().to_string()],
        output_dir: Some(output_dir.to_string_lossy().to_string()),
        base_url: Some(format!("{}/png/", server.uri())),
        timeout: Some(5),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let (outcomes, report) = tokio::task::spawn_blocking(move || {
        let mut report = Vec::new();
        let outcomes = run(&args, &mut report).expect("run failed");
        (outcomes, String::from_utf8(report).unwrap())
    })
    .await
    .unwrap();

    assert_eq!(outcomes.len(), diagrams.len());
    assert_eq!(report.lines().count(), diagrams.len());

    for name in diagrams.keys() {
        assert!(outcomes[name].is_saved(), "{name}: {}", outcomes[name]);
        let image = output_dir.join(format!("{name}_hex.png"));
        assert_eq!(fs::read(&image).unwrap(), PNG_BYTES);
        assert!(report.contains(&format!("{name}: Diagram saved as: ")));
    }
}

#[tokio::test]
async fn e2e_failed_diagram_does_not_stop_batch() {
    let inputs_dir = tempdir().unwrap();
    fs::write(inputs_dir.path().join("alpha.puml"), "@startuml\nA -> B\n@enduml").unwrap();
    fs::write(inputs_dir.path().join("broken.puml"), "@startuml\nnot valid\n@enduml").unwrap();
    fs::write(inputs_dir.path().join("omega.puml"), "@startuml\nY -> Z\n@enduml").unwrap();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!(
            "/png/{}",
            encode_hex("@startuml\nnot valid\n@enduml")
        )))
        .respond_with(ResponseTemplate::new(400))
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(PNG_BYTES))
        .mount(&server)
        .await;

    let out_dir = tempdir().unwrap();
    fs::write(out_dir.path().join("keep.txt"), "untouched").unwrap();
    let config_path = inputs_dir.path().join("settings.toml");
    fs::write(&config_path, "timeout_secs = 5\n").unwrap();

    let args = Args {
        inputs: vec![inputs_dir.path().to_string_lossy().to_string()],
        output_dir: Some(out_dir.path().to_string_lossy().to_string()),
        base_url: Some(format!("{}/png/", server.uri())),
        timeout: None,
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let (outcomes, report) = tokio::task::spawn_blocking(move || {
        let mut report = Vec::new();
        let outcomes = run(&args, &mut report).expect("run failed");
        (outcomes, String::from_utf8(report).unwrap())
    })
    .await
    .unwrap();

    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes.values().filter(|o| o.is_saved()).count(), 2);
    assert_eq!(outcomes["broken"].failure_kind(), Some(FailureKind::Status));

    assert!(out_dir.path().join("alpha_hex.png").exists());
    assert!(out_dir.path().join("omega_hex.png").exists());
    assert!(!out_dir.path().join("broken_hex.png").exists());
    assert_eq!(
        fs::read_to_string(out_dir.path().join("keep.txt")).unwrap(),
        "untouched"
    );

    let lines: Vec<_> = report.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("alpha: Diagram saved as: "));
    assert!(lines[1].starts_with("broken: Failed to render diagram broken_hex.png"));
    assert!(lines[2].starts_with("omega: Diagram saved as: "));
}

#[test]
fn e2e_missing_input_is_an_error() {
    let temp_dir = tempdir().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    let args = Args {
        inputs: vec![temp_dir.path().join("absent.puml").to_string_lossy().to_string()],
        output_dir: Some(temp_dir.path().join("out").to_string_lossy().to_string()),
        base_url: None,
        timeout: None,
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    let mut report = Vec::new();
    assert!(run(&args, &mut report).is_err());
    assert!(report.is_empty());
    assert!(!temp_dir.path().join("out").exists());
}
