#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use guardias::db::initialize::ensure_schema;
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Header + the three rows of the reference scenario.
pub const SAMPLE_CSV: &str = "tipo_guardia,abogado_cede,abogado_recibe\n\
Ordinaria,Ana,Beatriz\n\
Ordinaria,Beatriz,Ana\n\
Extra,Ana,Carla\n";

/// Binary under test, isolated from the user's real config file.
pub fn gda(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("guardias");
    cmd.env("HOME", temp_home(name));
    cmd.env("APPDATA", temp_home(name));
    cmd
}

fn temp_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guardias_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_guardias.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temporary CSV and return its path
pub fn write_csv(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_input.csv", name));
    fs::write(&path, content).expect("write csv");
    path.to_string_lossy().to_string()
}

/// In-memory store with the schema already created
pub fn memory_db() -> Connection {
    let conn = Connection::open_in_memory().expect("open in-memory db");
    ensure_schema(&conn).expect("schema");
    conn
}

/// In-memory store loaded with `csv`
pub fn memory_db_with(csv: &str) -> Connection {
    let mut conn = memory_db();
    guardias::db::loader::load_from_reader(&mut conn, csv.as_bytes()).expect("load csv");
    conn
}
