use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use review_prep::lexicon::LexiconSources;
use review_prep::pipeline::runner::Pipeline;
use review_prep::types::PrepConfig;
use review_prep::{PrepError, ReviewTable};

const INPUT_CSV: &str = r#"app,content,score,date,country
foodpanda,"it takes 2hrs just to get my food. when it says 30mins.. don't get this app.",1,2021-05-02,SG
foodpanda,crashes whenever i open the app,2,2021-03-14,MY
foodpanda,good app,5,2021-05-03,SG
solo notes,crashes when saving,1,2021-04-01,TH
"#;

fn write_file(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn test_sources(dir: &TempDir) -> LexiconSources {
    LexiconSources {
        base_stopwords: Some(write_file(
            dir,
            "stopwords.txt",
            "it\nto\nmy\nthis\njust\nget\ni\nthe\n",
        )),
        grammar_fixes: Some(write_file(dir, "fixes.txt", "hrs hours\nmins minutes\n")),
    }
}

#[test]
fn test_csv_in_annotated_csv_out() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(&dir, "reviews.csv", INPUT_CSV);
    let config_path = write_file(
        &dir,
        "config.json",
        r#"{
            "eligibility": { "min_entity_reviews": 1 },
            "parallel": false,
            "supplemental_stopwords": []
        }"#,
    );
    let output_path = dir.path().join("annotated.csv");

    let config = PrepConfig::from_json_file(&config_path).unwrap();
    let table = ReviewTable::from_csv_path(&input).unwrap();
    assert_eq!(table.len(), 4);

    let pipeline = Pipeline::prepare(config, &test_sources(&dir), table.records()).unwrap();
    let output = pipeline.run(table.records());
    assert_eq!(output.summary.total, 4);
    assert_eq!(output.summary.marked_eligible, 2);
    assert_eq!(output.summary.demoted, 0);
    assert_eq!(output.summary.failed, 0);

    table
        .write_annotated_csv(&output_path, &output.annotations)
        .unwrap();

    let mut reader = csv::Reader::from_path(&output_path).unwrap();
    assert_eq!(
        reader.headers().unwrap().iter().collect::<Vec<_>>(),
        vec!["app", "content", "score", "date", "country", "eligible", "normalized_tokens"]
    );
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);

    // Raw cells survive untouched, the passthrough column included.
    assert_eq!(
        rows[0].get(1),
        Some("it takes 2hrs just to get my food. when it says 30mins.. don't get this app.")
    );
    assert_eq!(rows[0].get(4), Some("SG"));

    assert_eq!(rows[0].get(5), Some("true"));
    assert_eq!(rows[0].get(6), Some("take hour food when say minute app"));
    assert_eq!(rows[1].get(5), Some("true"));
    assert_eq!(rows[1].get(6), Some("crash whenever open app"));

    // Five stars, and a single-review app: both stay unannotated.
    assert_eq!(rows[2].get(5), Some("false"));
    assert_eq!(rows[2].get(6), Some(""));
    assert_eq!(rows[3].get(5), Some("false"));
    assert_eq!(rows[3].get(6), Some(""));
}

#[test]
fn test_config_file_tightens_eligibility() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_file(&dir, "reviews.csv", INPUT_CSV);
    let config_path = write_file(
        &dir,
        "config.json",
        r#"{
            "eligibility": { "max_score": 1, "min_entity_reviews": 1 },
            "parallel": false,
            "supplemental_stopwords": []
        }"#,
    );

    let config = PrepConfig::from_json_file(&config_path).unwrap();
    let table = ReviewTable::from_csv_path(&input).unwrap();
    let pipeline = Pipeline::prepare(config, &test_sources(&dir), table.records()).unwrap();
    let output = pipeline.run(table.records());

    // The two-star review no longer clears the rating gate.
    assert_eq!(output.summary.marked_eligible, 1);
    assert!(output.annotations[0].eligible);
    assert!(!output.annotations[1].eligible);
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = write_file(
        &dir,
        "config.json",
        r#"{ "eligibilty": { "max_score": 1 } }"#,
    );

    let err = PrepConfig::from_json_file(&config_path).unwrap_err();
    assert!(matches!(err, PrepError::Config(_)));
}
