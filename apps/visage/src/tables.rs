//! Table rendering for the data, statistics and faces views

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use visage_glyph::Face;
use visage_io::{Dataset, DatasetSummary};
use visage_stats::ColumnStatistics;

/// Floats are shown with two decimals; the mode is shown as computed.
fn fixed(v: f64) -> String {
    format!("{:.2}", v)
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table
}

/// Data view: one row per record, numbered from 1
pub fn data_table(dataset: &Dataset) -> Table {
    let mut table = new_table();

    let mut header = vec!["Lp.".to_string()];
    header.extend(dataset.schema().column_names().iter().map(|s| s.to_string()));
    table.set_header(header);

    for (i, row) in dataset.display_rows().into_iter().enumerate() {
        let mut cells = vec![format!("{}.", i + 1)];
        cells.extend(row);
        table.add_row(cells);
    }
    table
}

/// Column types and excluded-cell counts, shown under the data view
pub fn schema_table(dataset: &Dataset) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Column", "Type", "Excluded"]);

    for column in &dataset.schema().columns {
        table.add_row(vec![
            column.name.clone(),
            column.dtype.name().to_string(),
            column.excluded.to_string(),
        ]);
    }
    table
}

/// Statistics view: one row per column
pub fn statistics_table(summary: &DatasetSummary) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        "Column",
        "Min",
        "Max",
        "Range",
        "Mean",
        "Mode",
        "Q1 (25%)",
        "Median (Q2)",
        "Q3 (75%)",
        "Variance",
        "Standard Deviation",
        "Sum",
    ]);

    for (name, s) in summary.iter() {
        table.add_row(vec![
            name.to_string(),
            fixed(s.min),
            fixed(s.max),
            fixed(s.range),
            fixed(s.mean),
            s.mode.to_string(),
            fixed(s.q1),
            fixed(s.q2),
            fixed(s.q3),
            fixed(s.variance),
            fixed(s.std_dev),
            fixed(s.sum),
        ]);
    }
    table
}

/// Detail view for a single column: statistic / value pairs
pub fn column_detail_table(stats: &ColumnStatistics) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Statistic", "Value"]);

    let rows = [
        ("Min", fixed(stats.min)),
        ("Max", fixed(stats.max)),
        ("Range", fixed(stats.range)),
        ("Mean", fixed(stats.mean)),
        ("Mode", stats.mode.to_string()),
        ("Q1 (25%)", fixed(stats.q1)),
        ("Median (Q2)", fixed(stats.q2)),
        ("Q3 (75%)", fixed(stats.q3)),
        ("Variance", fixed(stats.variance)),
        ("Standard Deviation", fixed(stats.std_dev)),
        ("Sum", fixed(stats.sum)),
    ];
    for (label, value) in rows {
        table.add_row(vec![label.to_string(), value]);
    }
    table
}

/// Faces view: which shape each column's feature was given
pub fn shapes_table(summary: &DatasetSummary, face: &Face) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Column", "Feature", "Mean", "Q1", "Q2", "Q3", "Shape"]);

    for ((name, s), (role, shape)) in summary.iter().zip(&face.shapes) {
        table.add_row(vec![
            name.to_string(),
            role.to_string(),
            fixed(s.mean),
            fixed(s.q1),
            fixed(s.q2),
            fixed(s.q3),
            shape.to_string(),
        ]);
    }
    table
}
