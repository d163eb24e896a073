mod common;
use common::{SAMPLE_CSV, setup_test_db, temp_out, write_csv};
use guardias::core::pipeline::{Pipeline, PipelineConfig, compute_report};
use guardias::db::initialize::guardias_count;
use guardias::db::pool::DbPool;
use guardias::errors::AppError;
use std::fs;
use std::path::PathBuf;

fn config_for(name: &str, csv: &str) -> PipelineConfig {
    PipelineConfig {
        database: PathBuf::from(setup_test_db(name)),
        input_csv: PathBuf::from(write_csv(name, csv)),
        output_html: PathBuf::from(temp_out(name, "html")),
    }
}

#[test]
fn test_pipeline_writes_report() {
    let cfg = config_for("pipeline_writes", SAMPLE_CSV);

    let summary = Pipeline::run(&cfg).expect("pipeline run");
    assert_eq!(summary.rows_loaded, 3);
    assert_eq!(summary.output, cfg.output_html);

    let html = fs::read_to_string(&cfg.output_html).expect("read report");
    assert!(html.contains("Análisis de Guardias de Abogados"));
    assert!(html.contains("<li>1 a Carla</li>"));
}

#[test]
fn test_pipeline_twice_is_byte_identical() {
    let cfg = config_for("pipeline_idempotent", SAMPLE_CSV);

    Pipeline::run(&cfg).unwrap();
    let first = fs::read(&cfg.output_html).unwrap();

    Pipeline::run(&cfg).unwrap();
    let second = fs::read(&cfg.output_html).unwrap();

    assert_eq!(first, second);

    let pool = DbPool::new(&cfg.database).unwrap();
    assert_eq!(guardias_count(&pool.conn).unwrap(), 3);
}

#[test]
fn test_pipeline_reload_replaces_data() {
    let cfg = config_for("pipeline_reload", SAMPLE_CSV);
    Pipeline::run(&cfg).unwrap();

    fs::write(&cfg.input_csv, "tipo,cede,recibe\nFestiva,Luis,Marta\n").unwrap();
    let summary = Pipeline::run(&cfg).unwrap();
    assert_eq!(summary.rows_loaded, 1);

    let data = compute_report(&cfg.database).unwrap();
    assert_eq!(data.cesiones.len(), 1);
    assert_eq!(data.cesiones[0].abogado, "Luis");
    assert!(data.cede_y_recibe.is_empty());
}

#[test]
fn test_pipeline_bad_row_aborts_before_writing() {
    let cfg = config_for("pipeline_bad_row", "tipo,cede,recibe\nFestiva,Luis\n");

    let err = Pipeline::run(&cfg).unwrap_err();
    assert!(matches!(err, AppError::InvalidRow { .. }));
    assert!(!cfg.output_html.exists());
}

#[test]
fn test_pipeline_missing_csv_fails() {
    let mut cfg = config_for("pipeline_missing_csv", SAMPLE_CSV);
    cfg.input_csv = PathBuf::from("/definitely/not/here.csv");

    let err = Pipeline::run(&cfg).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
