use crate::ir::{EdgeSpec, FloorplanInput};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"number of modules\s*:?\s*(\d+)").unwrap());
static BLOCK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\S+\s+)?(?P<id>[^\s(:]+)\s*:?\s*\(\s*(?P<w>-?\d+)\s*,\s*(?P<h>-?\d+)\s*\)$")
        .unwrap()
});
static EDGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?P<from>\S+)\s+to\s+(?P<to>\S+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl ParseError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Blocks,
    Horizontal,
    Vertical,
}

/// Parses the labeled text format:
///
/// ```text
/// number of modules: 2
/// module dimension
/// module A (2, 3)
/// module B (2, 3)
/// edges in HCG
/// A to B
/// edges in VCG
/// ```
pub fn parse_floorplan(input: &str) -> Result<FloorplanInput, ParseError> {
    let mut plan = FloorplanInput::new();
    let mut declared: Option<(usize, usize)> = None;
    let mut section = Section::Preamble;
    let mut last_line = 0;

    for (idx, raw_line) in input.lines().enumerate() {
        let line_no = idx + 1;
        last_line = line_no;
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if line.contains("number of modules") {
            let count = COUNT_RE
                .captures(line)
                .and_then(|caps| caps[1].parse::<usize>().ok())
                .ok_or_else(|| ParseError::new(line_no, "module count is not a number"))?;
            declared = Some((count, line_no));
            continue;
        }
        if line.contains("module dimension") {
            section = Section::Blocks;
            continue;
        }
        if line.contains("edges in HCG") {
            section = Section::Horizontal;
            continue;
        }
        if line.contains("edges in VCG") {
            section = Section::Vertical;
            continue;
        }

        match section {
            Section::Preamble => {
                return Err(ParseError::new(
                    line_no,
                    format!("unexpected line before `module dimension`: `{line}`"),
                ));
            }
            Section::Blocks => {
                let caps = BLOCK_RE.captures(line).ok_or_else(|| {
                    ParseError::new(line_no, format!("expected `name (width, height)`, got `{line}`"))
                })?;
                let width = parse_dimension(&caps["w"], line_no)?;
                let height = parse_dimension(&caps["h"], line_no)?;
                plan.add_block(&caps["id"], width, height);
            }
            Section::Horizontal => plan.horizontal.extend(parse_edge_list(line, line_no)?),
            Section::Vertical => plan.vertical.extend(parse_edge_list(line, line_no)?),
        }
    }

    let Some((count, count_line)) = declared else {
        return Err(ParseError::new(last_line.max(1), "missing `number of modules` line"));
    };
    if count != plan.blocks.len() {
        return Err(ParseError::new(
            count_line,
            format!("declared {count} modules but found {}", plan.blocks.len()),
        ));
    }
    Ok(plan)
}

fn parse_dimension(value: &str, line_no: usize) -> Result<i64, ParseError> {
    value
        .parse::<i64>()
        .map_err(|_| ParseError::new(line_no, format!("dimension `{value}` is out of range")))
}

fn parse_edge_list(line: &str, line_no: usize) -> Result<Vec<EdgeSpec>, ParseError> {
    let mut edges = Vec::new();
    for token in line.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let caps = EDGE_RE.captures(token).ok_or_else(|| {
            ParseError::new(line_no, format!("expected `from to to`, got `{token}`"))
        })?;
        edges.push(EdgeSpec::new(&caps["from"], &caps["to"]));
    }
    Ok(edges)
}
