//! HTML fragments and the full report document.

use super::ReportData;
use super::html::HtmlBuilder;
use crate::models::breakdown::{Breakdown, LawyerBreakdown};
use crate::models::direction::Direction;
use crate::models::stats::{CedeRecibe, LawyerCount};

pub const REPORT_TITLE: &str = "Análisis de Guardias de Abogados";

const NO_DATA: &str = "Sin datos.";

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.5;
    color: #1f2933;
    background: #ffffff;
    max-width: 960px;
    margin: 0 auto;
    padding: 2rem;
}

h1 {
    border-bottom: 2px solid #e5e7eb;
    padding-bottom: 0.5rem;
}

h2 {
    margin-top: 2.5rem;
    color: #1e3a8a;
}

table {
    width: 100%;
    border-collapse: collapse;
    margin-bottom: 1rem;
}

th {
    background: #f3f4f6;
    text-align: left;
    padding: 0.5rem;
    border-bottom: 2px solid #d1d5db;
}

td {
    padding: 0.5rem;
    border-bottom: 1px solid #e5e7eb;
}

tbody tr:nth-child(even) {
    background: #f9fafb;
}

.lawyer {
    border: 1px solid #e5e7eb;
    border-radius: 0.5rem;
    padding: 0.5rem 1.5rem;
    margin-bottom: 1.5rem;
}

.empty {
    color: #6b7280;
    font-style: italic;
}
"#
}

/// Generic numbered table. `headers` includes the leading "N°" column;
/// every cell value is escaped.
pub fn render_table(headers: &[&'static str], rows: &[Vec<String>]) -> HtmlBuilder {
    let mut h = HtmlBuilder::new();

    if rows.is_empty() {
        h.element_class("p", "empty", NO_DATA).newline();
        return h;
    }

    h.open("table").newline();
    h.open("thead").open("tr");
    for header in headers {
        h.literal("<th>").literal(*header).literal("</th>");
    }
    h.close("tr").close("thead");

    h.open("tbody").newline();
    for (i, row) in rows.iter().enumerate() {
        h.open("tr");
        h.element("td", i + 1);
        for cell in row {
            h.element("td", cell);
        }
        h.close("tr");
    }
    h.close("tbody");
    h.close("table");
    h
}

/// Table with the fixed header {N°, Abogado, Cantidad}.
pub fn render_count_table(rows: &[LawyerCount]) -> HtmlBuilder {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| vec![r.abogado.clone(), r.cantidad.to_string()])
        .collect();

    render_table(&["N°", "Abogado", "Cantidad"], &cells)
}

pub fn render_cede_recibe_table(rows: &[CedeRecibe]) -> HtmlBuilder {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.abogado.clone(),
                r.cesiones.to_string(),
                r.recepciones.to_string(),
            ]
        })
        .collect();

    render_table(&["N°", "Abogado", "Cesiones", "Recepciones"], &cells)
}

fn render_side(h: &mut HtmlBuilder, lawyer: &LawyerBreakdown, dir: Direction) {
    let (title, fallback) = match dir {
        Direction::Cede => ("Guardias Cedidas", "No ha cedido guardias."),
        Direction::Recibe => ("Guardias Recibidas", "No ha recibido guardias."),
    };

    h.open("h4")
        .literal(title)
        .literal(": (")
        .text(lawyer.total(dir))
        .literal(")")
        .close("h4");

    let side = lawyer.side(dir);
    if side.is_empty() {
        h.element_class("p", "empty", fallback).newline();
        return;
    }

    h.open("ul").newline();
    for (tipo, counterparts) in side {
        h.open("li").text(tipo).newline();
        h.open("ul").newline();
        for c in counterparts {
            h.open("li")
                .text(c.cantidad)
                .literal(" ")
                .literal(dir.preposition())
                .literal(" ")
                .text(&c.abogado)
                .close("li");
        }
        h.close("ul");
        h.close("li");
    }
    h.close("ul");
}

/// One block per lawyer, in the breakdown's iteration order.
pub fn render_breakdown(breakdown: &Breakdown) -> HtmlBuilder {
    let mut h = HtmlBuilder::new();

    if breakdown.is_empty() {
        h.element_class("p", "empty", NO_DATA).newline();
        return h;
    }

    for (abogado, lawyer) in breakdown.iter() {
        h.open_class("section", "lawyer").newline();
        h.element("h3", abogado).newline();
        render_side(&mut h, lawyer, Direction::Cede);
        render_side(&mut h, lawyer, Direction::Recibe);
        h.close("section");
    }
    h
}

/// Full self-contained document.
pub fn render_report(data: &ReportData) -> String {
    let mut h = HtmlBuilder::new();

    h.literal("<!DOCTYPE html>\n")
        .literal("<html lang=\"es\">\n")
        .literal("<head>\n")
        .literal("<meta charset=\"UTF-8\">\n")
        .literal("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n")
        .open("title")
        .literal(REPORT_TITLE)
        .close("title")
        .open("style")
        .literal(inline_css())
        .close("style")
        .literal("</head>\n")
        .open("body")
        .newline();

    h.open("h1").literal(REPORT_TITLE).close("h1");

    h.open("h2").literal("Cesiones por Abogado").close("h2");
    h.fragment(render_count_table(&data.cesiones));

    h.open("h2").literal("Recepciones por Abogado").close("h2");
    h.fragment(render_count_table(&data.recepciones));

    h.open("h2")
        .literal("Abogados que Ceden y Reciben Guardias")
        .close("h2");
    h.fragment(render_cede_recibe_table(&data.cede_y_recibe));

    h.open("h2").literal("Desglose por Abogado").close("h2");
    h.fragment(render_breakdown(&data.desglose));

    h.close("body");
    h.close("html");
    h.finish()
}
