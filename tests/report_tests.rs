mod common;
use common::{SAMPLE_CSV, memory_db, memory_db_with};
use guardias::db::queries::{
    breakdown_by_lawyer, cessions_by_lawyer, lawyers_who_cede_and_receive, receptions_by_lawyer,
};
use guardias::models::breakdown::Breakdown;
use guardias::models::direction::Direction;
use guardias::models::stats::LawyerCount;
use guardias::report::html::escape;
use guardias::report::{
    REPORT_TITLE, ReportData, render_breakdown, render_count_table, render_report, render_table,
};
use rusqlite::Connection;

fn report_from(conn: &Connection) -> ReportData {
    ReportData {
        cesiones: cessions_by_lawyer(conn).unwrap(),
        recepciones: receptions_by_lawyer(conn).unwrap(),
        cede_y_recibe: lawyers_who_cede_and_receive(conn).unwrap(),
        desglose: breakdown_by_lawyer(conn).unwrap(),
    }
}

#[test]
fn test_escape_special_characters() {
    assert_eq!(
        escape(r#"<b>"Tom" & 'Jerry'</b>"#),
        "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
    );
    assert_eq!(escape("Núñez"), "Núñez");
}

#[test]
fn test_count_table_has_fixed_header_and_numbered_rows() {
    let rows = vec![
        LawyerCount {
            abogado: "Ana".into(),
            cantidad: 2,
        },
        LawyerCount {
            abogado: "Beatriz".into(),
            cantidad: 1,
        },
    ];
    let html = render_count_table(&rows).finish();

    assert!(html.contains("<th>N°</th><th>Abogado</th><th>Cantidad</th>"));
    assert!(html.contains("<tr><td>1</td><td>Ana</td><td>2</td></tr>"));
    assert!(html.contains("<tr><td>2</td><td>Beatriz</td><td>1</td></tr>"));
}

#[test]
fn test_empty_table_renders_placeholder() {
    let html = render_table(&["N°", "Abogado", "Cantidad"], &[]).finish();
    assert!(!html.contains("<table>"));
    assert!(html.contains("Sin datos."));
}

#[test]
fn test_breakdown_phrasing_and_fallbacks() {
    let mut b = Breakdown::new();
    b.push("Ana", Direction::Cede, "Ordinaria", "Beatriz", 2);
    b.push("Carla", Direction::Recibe, "Extra", "Ana", 1);

    let html = render_breakdown(&b).finish();

    assert!(html.contains("<h3>Ana</h3>"));
    assert!(html.contains("Guardias Cedidas: (2)"));
    assert!(html.contains("<li>2 a Beatriz</li>"));
    assert!(html.contains("No ha recibido guardias."));

    assert!(html.contains("<h3>Carla</h3>"));
    assert!(html.contains("Guardias Recibidas: (1)"));
    assert!(html.contains("<li>1 de Ana</li>"));
    assert!(html.contains("No ha cedido guardias."));

    // iteration order follows insertion order
    assert!(html.find("<h3>Ana</h3>").unwrap() < html.find("<h3>Carla</h3>").unwrap());
}

#[test]
fn test_report_sections_in_order() {
    let conn = memory_db_with(SAMPLE_CSV);
    let html = render_report(&report_from(&conn));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<meta charset=\"UTF-8\">"));
    assert!(html.contains(&format!("<title>{}</title>", REPORT_TITLE)));
    assert!(html.contains("<style>"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));

    let sections = [
        "<h1>Análisis de Guardias de Abogados</h1>",
        "<h2>Cesiones por Abogado</h2>",
        "<h2>Recepciones por Abogado</h2>",
        "<h2>Abogados que Ceden y Reciben Guardias</h2>",
        "<h2>Desglose por Abogado</h2>",
    ];
    let positions: Vec<usize> = sections
        .iter()
        .map(|s| html.find(s).unwrap_or_else(|| panic!("missing {s}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    assert!(html.contains("<th>Cesiones</th><th>Recepciones</th>"));
    assert!(html.contains("<tr><td>1</td><td>Ana</td><td>2</td><td>1</td></tr>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_report_escapes_names_and_types() {
    let conn = memory_db_with(
        "tipo,cede,recibe\n\
<i>Noche</i>,Smith & Sons,<script>alert(1)</script>\n",
    );
    let html = render_report(&report_from(&conn));

    assert!(html.contains("Smith &amp; Sons"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("&lt;i&gt;Noche&lt;/i&gt;"));
    assert!(!html.contains("Smith & Sons"));
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<i>"));
}

#[test]
fn test_report_on_empty_table() {
    let conn = memory_db();
    let html = render_report(&report_from(&conn));
    assert_eq!(html.matches("Sin datos.").count(), 4);
}

#[test]
fn test_render_is_deterministic() {
    let conn = memory_db_with(SAMPLE_CSV);
    let a = render_report(&report_from(&conn));
    let b = render_report(&report_from(&conn));
    assert_eq!(a, b);
}
