use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_OUTPUT_SUFFIX: &str = "_result";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReductionConfig {
    pub enabled: bool,
    pub max_trials: Option<usize>,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_trials: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    pub suffix: String,
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_OUTPUT_SUFFIX.to_string(),
            format: OutputFormat::Text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub reduction: ReductionConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReductionConfigFile {
    enabled: Option<bool>,
    max_trials: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutputConfigFile {
    suffix: Option<String>,
    format: Option<OutputFormat>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    reduction: Option<ReductionConfigFile>,
    output: Option<OutputConfigFile>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(reduction) = parsed.reduction {
        if let Some(v) = reduction.enabled {
            config.reduction.enabled = v;
        }
        if let Some(v) = reduction.max_trials {
            config.reduction.max_trials = Some(v);
        }
    }

    if let Some(output) = parsed.output {
        if let Some(v) = output.suffix {
            config.output.suffix = v;
        }
        if let Some(v) = output.format {
            config.output.format = v;
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_keeps_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.reduction.enabled);
        assert_eq!(config.output.suffix, "_result");
    }

    #[test]
    fn partial_sections_override_only_given_keys() {
        let config = parse_config(
            r#"{ "reduction": { "maxTrials": 3 }, "output": { "format": "json" } }"#,
        )
        .unwrap();
        assert!(config.reduction.enabled);
        assert_eq!(config.reduction.max_trials, Some(3));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.suffix, "_result");
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(parse_config(r#"{ "output": { "format": "yaml" } }"#).is_err());
    }

    #[test]
    fn missing_path_is_default() {
        assert_eq!(load_config(None).unwrap(), Config::default());
    }
}
