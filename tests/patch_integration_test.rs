use plusvalia_patch::core::plusvalia::{
    DEFAULT_VALUE_AFTER, DEFAULT_VALUE_BEFORE, LABEL_BLOCK_AFTER, LABEL_BLOCK_BEFORE,
};
use plusvalia_patch::{FilePatchPipeline, LocalStorage, PatchConfig, PatchEngine, PatchError};
use tempfile::TempDir;

const FIXTURE: &str = include_str!("fixtures/App.jsx");

fn setup(content: &str) -> (TempDir, LocalStorage) {
    let temp_dir = TempDir::new().unwrap();
    std::fs::create_dir(temp_dir.path().join("src")).unwrap();
    std::fs::write(temp_dir.path().join("src/App.jsx"), content).unwrap();
    let storage = LocalStorage::new(temp_dir.path());
    (temp_dir, storage)
}

fn read_target(temp_dir: &TempDir) -> String {
    std::fs::read_to_string(temp_dir.path().join("src/App.jsx")).unwrap()
}

fn engine(storage: LocalStorage, config: PatchConfig) -> PatchEngine<FilePatchPipeline<LocalStorage, PatchConfig>> {
    PatchEngine::new(FilePatchPipeline::new(storage, config))
}

#[tokio::test]
async fn test_builtin_patch_updates_default_and_tooltip() {
    let (temp_dir, storage) = setup(FIXTURE);

    let report = engine(storage, PatchConfig::builtin("src/App.jsx"))
        .run()
        .await
        .unwrap();

    assert!(report.written);
    assert!(!report.dry_run);
    assert_eq!(report.outcomes.len(), 2);
    assert_eq!(report.outcomes[0].occurrences, 1);
    assert_eq!(report.outcomes[1].occurrences, 1);

    let patched = read_target(&temp_dir);
    assert!(patched.contains(DEFAULT_VALUE_AFTER));
    assert!(!patched.contains(DEFAULT_VALUE_BEFORE));
    assert!(patched.contains(LABEL_BLOCK_AFTER));
    assert!(!patched.contains(LABEL_BLOCK_BEFORE));

    // everything else is byte-for-byte the same
    let expected = FIXTURE
        .replace(DEFAULT_VALUE_BEFORE, DEFAULT_VALUE_AFTER)
        .replace(LABEL_BLOCK_BEFORE, LABEL_BLOCK_AFTER);
    assert_eq!(patched, expected);
    assert!(patched.contains("// crecimiento real adicional del inmueble sobre inflación"));
    assert!(patched.contains("useState(4); // % anual"));
}

#[tokio::test]
async fn test_missing_block_leaves_file_untouched() {
    let content = FIXTURE.replace(LABEL_BLOCK_BEFORE, "");
    let (temp_dir, storage) = setup(&content);

    let result = engine(storage, PatchConfig::builtin("src/App.jsx")).run().await;

    match result {
        Err(PatchError::SectionNotFound { name }) => assert_eq!(name, "label-tooltip"),
        other => panic!("expected SectionNotFound, got {:?}", other),
    }
    // the default-value change is not persisted on its own
    assert_eq!(read_target(&temp_dir), content);
}

#[tokio::test]
async fn test_second_run_fails_gate() {
    let (temp_dir, storage) = setup(FIXTURE);

    let first = engine(storage.clone(), PatchConfig::builtin("src/App.jsx"))
        .run()
        .await;
    assert!(first.is_ok());
    let after_first = read_target(&temp_dir);

    let second = engine(storage, PatchConfig::builtin("src/App.jsx"))
        .run()
        .await;
    let err = second.unwrap_err();
    assert!(matches!(err, PatchError::SectionNotFound { .. }));
    assert_ne!(err.severity().exit_code(), 0);
    assert_eq!(read_target(&temp_dir), after_first);
}

#[tokio::test]
async fn test_block_present_without_default_literal() {
    let content = FIXTURE.replace(DEFAULT_VALUE_BEFORE, DEFAULT_VALUE_AFTER);
    let (temp_dir, storage) = setup(&content);

    let report = engine(storage, PatchConfig::builtin("src/App.jsx"))
        .run()
        .await
        .unwrap();

    assert_eq!(report.outcomes[0].occurrences, 0);
    assert_eq!(report.outcomes[1].occurrences, 1);
    assert!(report.written);
    assert!(read_target(&temp_dir).contains(LABEL_BLOCK_AFTER));
}

#[tokio::test]
async fn test_dry_run_never_writes() {
    let (temp_dir, storage) = setup(FIXTURE);
    let mut config = PatchConfig::builtin("src/App.jsx");
    config.dry_run = true;

    let report = engine(storage, config).run().await.unwrap();

    assert!(report.dry_run);
    assert!(!report.written);
    assert_eq!(report.outcomes[1].occurrences, 1);
    assert_eq!(read_target(&temp_dir), FIXTURE);
}

#[tokio::test]
async fn test_missing_target_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let err = engine(storage, PatchConfig::builtin("src/App.jsx"))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, PatchError::IoError(_)));
    assert_eq!(err.severity().exit_code(), 3);
}

#[tokio::test]
async fn test_non_utf8_target_rejected() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("App.jsx"), [0xff, 0xfe, 0x00]).unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let err = engine(storage, PatchConfig::builtin("App.jsx"))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, PatchError::EncodingError(_)));
}

#[tokio::test]
async fn test_report_serializes_to_json() {
    let (_temp_dir, storage) = setup(FIXTURE);

    let report = engine(storage, PatchConfig::builtin("src/App.jsx"))
        .run()
        .await
        .unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["patch_set"], "plusvalia-tooltip");
    assert_eq!(json["target"], "src/App.jsx");
    assert_eq!(json["written"], true);
    assert_eq!(json["outcomes"][1]["name"], "label-tooltip");
}
