// src/report/mod.rs

pub mod html;
pub mod render;

pub use render::{
    REPORT_TITLE, render_breakdown, render_cede_recibe_table, render_count_table, render_report,
    render_table,
};

use crate::models::breakdown::Breakdown;
use crate::models::stats::{CedeRecibe, LawyerCount};
use serde::Serialize;

/// Everything the report needs, computed once per run.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ReportData {
    pub cesiones: Vec<LawyerCount>,
    pub recepciones: Vec<LawyerCount>,
    pub cede_y_recibe: Vec<CedeRecibe>,
    pub desglose: Breakdown,
}
