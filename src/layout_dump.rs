use crate::ir::EdgeSpec;
use crate::layout::{Analysis, Axis, Floorplan, SearchStats};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisDump {
    pub width: i64,
    pub height: i64,
    pub baseline_area: i64,
    pub min_area: i64,
    pub best_flip: Option<EdgeDump>,
    pub blocks: Vec<BlockDump>,
    pub horizontal_critical: Vec<EdgeDump>,
    pub vertical_critical: Vec<EdgeDump>,
    pub search: SearchStats,
}

#[derive(Debug, Serialize)]
pub struct BlockDump {
    pub id: String,
    pub width: i64,
    pub height: i64,
    pub x: WindowDump,
    pub y: WindowDump,
}

#[derive(Debug, Serialize)]
pub struct WindowDump {
    pub earliest: i64,
    pub latest: i64,
    pub slack: i64,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub from: String,
    pub to: String,
}

impl From<EdgeSpec> for EdgeDump {
    fn from(edge: EdgeSpec) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
        }
    }
}

impl AnalysisDump {
    pub fn from_analysis(analysis: &Analysis, plan: &Floorplan) -> Self {
        let window = |axis: Axis, handle: usize| {
            let w = analysis.window(axis);
            WindowDump {
                earliest: w.earliest[handle],
                latest: w.latest[handle],
                slack: w.slack(handle),
            }
        };
        let blocks = plan
            .registry()
            .iter()
            .enumerate()
            .map(|(handle, block)| BlockDump {
                id: block.id().to_string(),
                width: block.width(),
                height: block.height(),
                x: window(Axis::Horizontal, handle),
                y: window(Axis::Vertical, handle),
            })
            .collect();

        let result = analysis.result(plan);
        AnalysisDump {
            width: analysis.horizontal.span,
            height: analysis.vertical.span,
            baseline_area: result.baseline_area,
            min_area: result.min_area,
            best_flip: result.best_flip.map(EdgeDump::from),
            blocks,
            horizontal_critical: result
                .horizontal_critical
                .into_iter()
                .map(EdgeDump::from)
                .collect(),
            vertical_critical: result
                .vertical_critical
                .into_iter()
                .map(EdgeDump::from)
                .collect(),
            search: analysis.reduction.stats,
        }
    }
}

pub fn render_json(analysis: &Analysis, plan: &Floorplan) -> anyhow::Result<String> {
    let dump = AnalysisDump::from_analysis(analysis, plan);
    Ok(serde_json::to_string_pretty(&dump)?)
}

pub fn write_analysis_dump(path: &Path, analysis: &Analysis, plan: &Floorplan) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = AnalysisDump::from_analysis(analysis, plan);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
