//! Trivial Graph Format (TGF) read/write.
//!
//! Layout: one `<position> <label>` line per vertex (1-based, insertion
//! order), a `#` separator line, then one `<source> <destination>` line per
//! directed arc.

use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::AdjListGraph;
use crate::error::{HollywoodError, Result};

const SEPARATOR: &str = "#";

/// Check that every label survives a write/read cycle.
///
/// A label is stored on one line and trimmed on load, so line breaks and
/// leading or trailing whitespace cannot be represented.
pub fn check_labels<T>(graph: &AdjListGraph<T>) -> Result<()>
where
    T: PartialEq + Display,
{
    for (i, vertex) in graph.vertices().iter().enumerate() {
        let label = vertex.to_string();
        if label.contains(['\n', '\r']) || label.trim() != label {
            return Err(HollywoodError::InvalidInput(format!(
                "vertex {} label {:?} cannot be stored in TGF",
                i + 1,
                label
            )));
        }
    }
    Ok(())
}

/// Write `graph` in TGF to `writer`.
///
/// Fails with `InvalidInput`, before writing anything, if a label cannot be
/// stored (see [`check_labels`]).
pub fn write_tgf<T, W>(graph: &AdjListGraph<T>, writer: W) -> Result<()>
where
    T: PartialEq + Display,
    W: Write,
{
    check_labels(graph)?;
    write_unchecked(graph, writer)
}

fn write_unchecked<T, W>(graph: &AdjListGraph<T>, mut writer: W) -> Result<()>
where
    T: PartialEq + Display,
    W: Write,
{
    for (i, vertex) in graph.vertices().iter().enumerate() {
        writeln!(writer, "{} {}", i + 1, vertex)?;
    }
    writeln!(writer, "{}", SEPARATOR)?;
    for (src, dst) in graph.arc_positions() {
        writeln!(writer, "{} {}", src + 1, dst + 1)?;
    }
    writer.flush()?;
    Ok(())
}

/// Save `graph` to a TGF file, replacing any existing file.
pub fn save_tgf<T>(graph: &AdjListGraph<T>, path: &Path) -> Result<()>
where
    T: PartialEq + Display,
{
    // Validate first so a bad label never truncates an existing file.
    check_labels(graph)?;
    let file = File::create(path)?;
    write_unchecked(graph, BufWriter::new(file))?;
    log::debug!(
        "Wrote {} vertices and {} arcs to {}",
        graph.num_vertices(),
        graph.num_arcs(),
        path.display()
    );
    Ok(())
}

/// Parse a TGF document into a new graph.
pub fn read_tgf<R: BufRead>(reader: R) -> Result<AdjListGraph<String>> {
    let mut graph = AdjListGraph::new();
    read_tgf_into(reader, &mut graph)?;
    Ok(graph)
}

/// Load a TGF file into a new graph.
pub fn load_tgf(path: &Path) -> Result<AdjListGraph<String>> {
    let file = File::open(path)?;
    read_tgf(BufReader::new(file))
}

/// Load a TGF file, keeping whatever was read before a failure.
///
/// A missing or unreadable file yields an empty graph. Errors are logged,
/// never returned.
pub fn load_tgf_lenient(path: &Path) -> AdjListGraph<String> {
    let mut graph = AdjListGraph::new();
    let result = File::open(path)
        .map_err(HollywoodError::from)
        .and_then(|file| read_tgf_into(BufReader::new(file), &mut graph));
    if let Err(e) = result {
        log::error!("Failed to load graph from {}: {}", path.display(), e);
    }
    graph
}

/// Parse TGF into an existing graph. Vertices and arcs read before an error
/// stay in `graph`.
fn read_tgf_into<R: BufRead>(reader: R, graph: &mut AdjListGraph<String>) -> Result<()> {
    let mut lines = reader.lines();
    let mut saw_separator = false;

    for line in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let (first, label) = trimmed
            .split_once(char::is_whitespace)
            .unwrap_or((trimmed, ""));
        if first == SEPARATOR {
            saw_separator = true;
            break;
        }
        graph.add_vertex(label.trim().to_string());
    }

    if !saw_separator {
        log::warn!("TGF input has no '#' separator; no arcs were read");
        return Ok(());
    }

    let mut pending: Option<usize> = None;
    for (line_no, line) in lines.enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value: usize = token.parse().map_err(|_| {
                HollywoodError::Parse(format!(
                    "invalid arc endpoint '{}' on arc line {}",
                    token,
                    line_no + 1
                ))
            })?;
            match pending.take() {
                None => pending = Some(value),
                Some(from) => {
                    // 1-based on disk; 0 or past-the-end endpoints are dropped.
                    if let (Some(src), Some(dst)) = (from.checked_sub(1), value.checked_sub(1)) {
                        graph.add_arc_at(src, dst);
                    }
                }
            }
        }
    }

    if let Some(dangling) = pending {
        return Err(HollywoodError::Parse(format!(
            "arc list ends with an unpaired endpoint {}",
            dangling
        )));
    }

    Ok(())
}
