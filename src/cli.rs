use crate::config::{OutputConfig, OutputFormat, load_config};
use crate::layout::analyze;
use crate::layout_dump::{render_json, write_analysis_dump};
use crate::parser::parse_floorplan;
use crate::render::{render_text, write_output};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cgfp", version, about = "Constraint-graph floorplan analyzer")]
pub struct Args {
    /// Input floorplan (.txt) or '-' for stdin
    pub input: PathBuf,

    /// Output file. Defaults to the input stem plus the configured suffix.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Print the result to stdout instead of writing a file
    #[arg(long = "stdout", conflicts_with = "output")]
    pub stdout: bool,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short = 'e', long = "outputFormat", value_enum)]
    pub output_format: Option<OutputFormat>,

    /// Also write the full JSON analysis (windows, slack, search stats) here
    #[arg(long = "dump")]
    pub dump: Option<PathBuf>,

    /// Report the baseline area without trying edge moves
    #[arg(long = "no-reduction")]
    pub no_reduction: bool,

    /// Evaluate at most this many edge moves
    #[arg(long = "maxTrials")]
    pub max_trials: Option<usize>,

    /// Debug-level logging on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = load_config(args.config.as_deref())?;
    if args.no_reduction {
        config.reduction.enabled = false;
    }
    if let Some(limit) = args.max_trials {
        config.reduction.max_trials = Some(limit);
    }
    if let Some(format) = args.output_format {
        config.output.format = format;
    }

    let source = read_input(&args.input)?;
    let parsed = parse_floorplan(&source)
        .with_context(|| format!("failed to parse {}", args.input.display()))?;
    let plan = parsed.build()?;
    let analysis = analyze(&plan, &config.reduction)?;

    if let Some(dump) = args.dump.as_deref() {
        write_analysis_dump(dump, &analysis, &plan)?;
    }

    let contents = match config.output.format {
        OutputFormat::Text => render_text(&analysis.result(&plan)),
        OutputFormat::Json => render_json(&analysis, &plan)?,
    };
    let output = resolve_output(&args, &config.output);
    if let Some(path) = output.as_deref() {
        tracing::info!(path = %path.display(), "writing result");
    }
    write_output(&contents, output.as_deref())
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "constraint_floorplan=debug"
    } else {
        "constraint_floorplan=info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .init();
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("cannot open {}", path.display()))
}

/// `None` means stdout.
fn resolve_output(args: &Args, config: &OutputConfig) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }
    if args.stdout || args.input.as_path() == Path::new("-") {
        return None;
    }
    let stem = args
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("floorplan");
    let parent = args.input.parent().unwrap_or_else(|| Path::new("."));
    Some(parent.join(format!(
        "{}{}.{}",
        stem,
        config.suffix,
        config.format.extension()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("cgfp").chain(argv.iter().copied()))
    }

    #[test]
    fn derives_output_from_input_stem() {
        let config = OutputConfig::default();
        let out = resolve_output(&args(&["designs/case1.txt"]), &config);
        assert_eq!(out, Some(PathBuf::from("designs/case1_result.txt")));
    }

    #[test]
    fn json_format_changes_extension() {
        let config = OutputConfig {
            suffix: "_out".to_string(),
            format: OutputFormat::Json,
        };
        let out = resolve_output(&args(&["case2.txt"]), &config);
        assert_eq!(out, Some(PathBuf::from("case2_out.json")));
    }

    #[test]
    fn stdin_and_stdout_flag_print() {
        let config = OutputConfig::default();
        assert_eq!(resolve_output(&args(&["-"]), &config), None);
        assert_eq!(resolve_output(&args(&["a.txt", "--stdout"]), &config), None);
        assert_eq!(
            resolve_output(&args(&["a.txt", "-o", "b.txt"]), &config),
            Some(PathBuf::from("b.txt"))
        );
    }

    #[test]
    fn flags_parse() {
        let parsed = args(&["a.txt", "-e", "json", "--no-reduction", "--maxTrials", "4", "-v"]);
        assert_eq!(parsed.output_format, Some(OutputFormat::Json));
        assert!(parsed.no_reduction);
        assert_eq!(parsed.max_trials, Some(4));
        assert!(parsed.verbose);
    }
}
