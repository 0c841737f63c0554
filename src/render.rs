use crate::ir::EdgeSpec;
use crate::layout::FloorplanResult;
use anyhow::Result;
use std::path::Path;

pub fn render_text(result: &FloorplanResult) -> String {
    let mut out = String::new();
    push_edge_section(&mut out, "horizontal", &result.horizontal_critical);
    out.push('\n');
    push_edge_section(&mut out, "vertical", &result.vertical_critical);
    out.push('\n');
    out.push_str(&format!("minimum floorplan area {}", result.min_area));
    out
}

fn push_edge_section(out: &mut String, axis: &str, edges: &[EdgeSpec]) {
    out.push_str(&format!("number of {axis} critical edges {}\n", edges.len()));
    for edge in edges {
        out.push_str(&format!("{edge}\n"));
    }
}

pub fn write_output(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
        }
        None => {
            print!("{}", contents);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReductionConfig;
    use crate::ir::FloorplanInput;
    use crate::layout::analyze;

    #[test]
    fn renders_sections_in_order() {
        let mut input = FloorplanInput::new();
        input
            .add_block("A", 2, 3)
            .add_block("B", 2, 3)
            .add_horizontal("A", "B");
        let plan = input.build().unwrap();
        let analysis = analyze(&plan, &ReductionConfig::default()).unwrap();
        let text = render_text(&analysis.result(&plan));
        assert_eq!(
            text,
            "number of horizontal critical edges 1\nA to B\n\n\
             number of vertical critical edges 0\n\n\
             minimum floorplan area 12"
        );
    }

    #[test]
    fn writes_to_file() {
        let path = std::env::temp_dir().join(format!("cgfp-render-{}.txt", std::process::id()));
        write_output("minimum floorplan area 1", Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(written, "minimum floorplan area 1");
    }
}
