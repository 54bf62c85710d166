//! Subcommand implementations
//!
//! Every command returns the text to print so it can be tested without
//! capturing stdout.

use std::fs;
use std::path::Path;

use visage_glyph::svg::{render_face, SvgOptions};
use visage_glyph::{GlyphBuilder, GlyphStyle};
use visage_io::{load_csv, Dataset};

use crate::cli::Command;
use crate::error::{CliError, CliResult};
use crate::tables;

/// Run a parsed command
pub fn run(command: &Command) -> CliResult<String> {
    match command {
        Command::Data { file } => data(&load(file)?),
        Command::Stats { file, column, json } => stats(&load(file)?, column.as_deref(), *json),
        Command::Faces {
            file,
            out,
            style,
            size,
            json,
        } => {
            let style = match style {
                Some(path) => load_style(path)?,
                None => GlyphStyle::default(),
            };
            faces(&load(file)?, style, out, *size, *json)
        }
        Command::Style { json } => style(*json),
    }
}

fn load(file: &Path) -> CliResult<Dataset> {
    Ok(load_csv(&file.to_string_lossy())?)
}

fn load_style(path: &Path) -> CliResult<GlyphStyle> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadStyle {
        path: path.to_path_buf(),
        source,
    })?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let style = if is_json {
        GlyphStyle::from_json(&text)?
    } else {
        GlyphStyle::from_toml(&text)?
    };
    tracing::info!(path = %path.display(), "loaded glyph style");
    Ok(style)
}

fn write_file(path: &Path, contents: &str) -> CliResult<()> {
    fs::write(path, contents).map_err(|source| CliError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Data view, followed by the inferred column types
pub fn data(dataset: &Dataset) -> CliResult<String> {
    Ok(format!(
        "{}\n{}\n",
        tables::data_table(dataset),
        tables::schema_table(dataset)
    ))
}

/// Statistics view, or the detail view for one column
pub fn stats(dataset: &Dataset, column: Option<&str>, json: bool) -> CliResult<String> {
    let summary = dataset.summarize()?;

    match column {
        Some(name) => {
            let column_stats = summary
                .get(name)
                .ok_or_else(|| CliError::UnknownColumn(name.to_string()))?;
            if json {
                Ok(format!("{}\n", serde_json::to_string_pretty(column_stats)?))
            } else {
                Ok(format!(
                    "Statistics for column: {}\n{}\n",
                    name,
                    tables::column_detail_table(column_stats)
                ))
            }
        }
        None if json => Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?)),
        None => Ok(format!("{}\n", tables::statistics_table(&summary))),
    }
}

/// Faces view: writes `face.svg` plus one SVG per comparative cell
pub fn faces(
    dataset: &Dataset,
    style: GlyphStyle,
    out: &Path,
    size: u32,
    json: bool,
) -> CliResult<String> {
    let summary = dataset.summarize()?;
    let builder = GlyphBuilder::new(style)?;
    let face = builder.whole_face(&summary.statistics())?;

    fs::create_dir_all(out).map_err(|source| CliError::Write {
        path: out.to_path_buf(),
        source,
    })?;

    let options = SvgOptions::square(size);
    let face_path = out.join("face.svg");
    write_file(
        &face_path,
        &render_face(&face, &options.clone().with_title("Chernoff face")),
    )?;

    let grid = builder.comparative_grid();
    for cell in &grid {
        let name = format!("compare_{}_{}.svg", cell.tier, cell.shape);
        let title = format!("{} up to {}", cell.shape, cell.tier);
        write_file(
            &out.join(name),
            &render_face(&cell.face, &options.clone().with_title(title)),
        )?;
    }
    tracing::info!(out = %out.display(), files = grid.len() + 1, "wrote face glyphs");

    if json {
        return Ok(format!("{}\n", serde_json::to_string_pretty(&face)?));
    }

    Ok(format!(
        "{}\nWrote {} and {} comparison glyphs to {}\n",
        tables::shapes_table(&summary, &face),
        face_path.display(),
        grid.len(),
        out.display()
    ))
}

/// Default style table
pub fn style(json: bool) -> CliResult<String> {
    let style = GlyphStyle::default();
    let text = if json {
        style.to_json()?
    } else {
        style.to_toml()?
    };
    Ok(format!("{}\n", text.trim_end()))
}
