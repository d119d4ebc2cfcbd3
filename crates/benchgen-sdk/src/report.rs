//! Report rendering for benchmark measurement results.
//!
//! A [`Measurement`] is produced by an external measurement pipeline; this
//! module only formats it. Rendering dispatches on the closed
//! [`ReportFormat`] enum, produces a single text blob, prints it to stdout,
//! and optionally persists the same blob to a resolved absolute path.
//! Printing happens before any filesystem write, so a failed write never
//! loses already-shown output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::types::ReportError;

/// Per-function measurement entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionStat {
    /// Benchmark function name.
    pub name: String,
    /// Average measured value.
    pub avr: f64,
    /// Percentage deviation.
    pub err: f64,
}

/// Completed benchmark measurement result.
///
/// Read-only input to the renderer; the values are computed by an external
/// measurement collaborator and never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Wall-clock seconds for the whole run.
    pub bench_time: f64,
    /// Mean percentage deviation across functions.
    pub mean_err: f64,
    /// Maximum percentage deviation across functions.
    pub max_err: f64,
    /// Per-function entries, in measurement order.
    #[serde(default)]
    pub functions: Vec<FunctionStat>,
}

/// Output format for rendered reports.
///
/// The enum is closed; an unrecognized format string is rejected when the
/// options record is built (at CLI parse time), never silently rendered as
/// empty output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Canonical key-sorted, indented JSON.
    Json,
    /// Headerless `key,value` rows.
    Csv,
    /// Human-readable `key: value` lines with fixed-width function rows.
    Readable,
}

impl ReportFormat {
    /// Returns the string representation of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Csv => "csv",
            ReportFormat::Readable => "readable",
        }
    }
}

/// Immutable report configuration, constructed once per invocation.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Include the per-function breakdown.
    pub moreinfo: bool,
    /// Selected output format.
    pub fmt: ReportFormat,
    /// When set, the rendered blob is also persisted here.
    pub outfile: Option<PathBuf>,
}

impl ReportOptions {
    /// Builds the options record, resolving `outfile` against the current
    /// directory so later writes are independent of working-directory changes.
    pub fn new(moreinfo: bool, fmt: ReportFormat, outfile: Option<&Path>) -> io::Result<Self> {
        let outfile = outfile.map(std::path::absolute).transpose()?;
        Ok(Self {
            moreinfo,
            fmt,
            outfile,
        })
    }
}

/// Renders a measurement into the format selected by `options.fmt`.
///
/// Rendering is deterministic: the same measurement and options always yield
/// byte-identical output.
pub fn render(result: &Measurement, options: &ReportOptions) -> Result<String, ReportError> {
    match options.fmt {
        ReportFormat::Json => render_json(result, options),
        ReportFormat::Csv => Ok(render_csv(result, options)),
        ReportFormat::Readable => Ok(render_readable(result, options)),
    }
}

/// Renders a measurement, prints it to stdout, and persists it when an
/// outfile is configured.
///
/// # Errors
///
/// Propagates filesystem failures from the persistence step; the report has
/// already been printed by then.
pub fn report(result: &Measurement, options: &ReportOptions) -> Result<(), ReportError> {
    let content = render(result, options)?;
    println!("{content}");
    if let Some(path) = &options.outfile {
        write_text(path, &content)?;
    }
    Ok(())
}

fn render_json(result: &Measurement, options: &ReportOptions) -> Result<String, ReportError> {
    // serde_json's map is ordered by key, which gives the canonical
    // key-sorted serialization without an extra pass.
    let mut root = serde_json::Map::new();
    root.insert("mean_err_percent".into(), json!(result.mean_err));
    root.insert("max_err_percent".into(), json!(result.max_err));
    root.insert("bench_time_sec".into(), json!(result.bench_time));
    if options.moreinfo {
        let functions: Vec<serde_json::Value> = result
            .functions
            .iter()
            .map(|f| json!({ "name": f.name, "avr": f.avr, "err": f.err }))
            .collect();
        root.insert("functions".into(), json!(functions));
    }
    Ok(serde_json::to_string_pretty(&serde_json::Value::Object(
        root,
    ))?)
}

fn render_csv(result: &Measurement, options: &ReportOptions) -> String {
    let mut lines = vec![
        format!("bench_time_sec,{}", metric(result.bench_time)),
        format!("mean_err_percent,{}", metric(result.mean_err)),
        format!("max_err_percent,{}", metric(result.max_err)),
    ];
    if options.moreinfo {
        lines.extend(
            result
                .functions
                .iter()
                .map(|f| format!("{},{},{}", f.name, metric(f.avr), metric(f.err))),
        );
    }
    lines.join("\n")
}

fn render_readable(result: &Measurement, options: &ReportOptions) -> String {
    let mut lines = vec![
        format!("bench_time_sec: {}", metric(result.bench_time)),
        format!("mean_err_percent: {}", metric(result.mean_err)),
        format!("max_err_percent: {}", metric(result.max_err)),
    ];
    if options.moreinfo {
        lines.extend(
            result
                .functions
                .iter()
                .map(|f| format!("{:<30}{:>15}{:>8.4}", f.name, metric(f.avr), f.err)),
        );
    }
    lines.join("\n")
}

/// Formats a metric value, keeping a trailing `.0` on integral floats so
/// `3.0` renders as `3.0` rather than `3`.
fn metric(value: f64) -> String {
    let repr = value.to_string();
    if value.is_finite() && !repr.contains('.') {
        format!("{repr}.0")
    } else {
        repr
    }
}

/// Writes `content` to `path` as UTF-8, creating parent directories and
/// overwriting any existing file.
pub fn write_text(path: &Path, content: &str) -> Result<(), ReportError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary_only() -> Measurement {
        Measurement {
            bench_time: 1.5,
            mean_err: 0.2,
            max_err: 0.9,
            functions: vec![],
        }
    }

    fn with_functions() -> Measurement {
        Measurement {
            functions: vec![
                FunctionStat {
                    name: "f".into(),
                    avr: 3.0,
                    err: 1.2345,
                },
                FunctionStat {
                    name: "sort_vector".into(),
                    avr: 12.75,
                    err: 0.5,
                },
            ],
            ..summary_only()
        }
    }

    fn options(moreinfo: bool, fmt: ReportFormat) -> ReportOptions {
        ReportOptions {
            moreinfo,
            fmt,
            outfile: None,
        }
    }

    #[test]
    fn csv_summary_matches_expected_rows() {
        let out = render(&summary_only(), &options(false, ReportFormat::Csv)).unwrap();
        assert_eq!(
            out,
            "bench_time_sec,1.5\nmean_err_percent,0.2\nmax_err_percent,0.9"
        );
    }

    #[test]
    fn csv_moreinfo_appends_function_rows_in_order() {
        let out = render(&with_functions(), &options(true, ReportFormat::Csv)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "f,3.0,1.2345");
        assert_eq!(lines[4], "sort_vector,12.75,0.5");
    }

    #[test]
    fn readable_function_line_is_fixed_width() {
        let out = render(&with_functions(), &options(true, ReportFormat::Readable)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "bench_time_sec: 1.5");
        assert_eq!(lines[1], "mean_err_percent: 0.2");
        assert_eq!(lines[2], "max_err_percent: 0.9");

        // name ljust 30, average rjust 15, error rjust 8 with 4 decimals
        let expected = format!("{:<30}{:>15}{:>8}", "f", "3.0", "1.2345");
        assert_eq!(lines[3], expected);
        assert_eq!(lines[3].len(), 53);
        assert!(lines[3].starts_with("f "));
        assert!(lines[3].ends_with("  1.2345"));
    }

    #[test]
    fn json_round_trips_summary_fields() {
        let result = summary_only();
        let out = render(&result, &options(false, ReportFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["bench_time_sec"].as_f64(), Some(1.5));
        assert_eq!(value["mean_err_percent"].as_f64(), Some(0.2));
        assert_eq!(value["max_err_percent"].as_f64(), Some(0.9));
        assert!(value.get("functions").is_none());
    }

    #[test]
    fn json_is_key_sorted_and_indented() {
        let out = render(&with_functions(), &options(true, ReportFormat::Json)).unwrap();
        assert!(out.starts_with("{\n  \"bench_time_sec\""));
        let functions_pos = out.find("\"functions\"").unwrap();
        let max_pos = out.find("\"max_err_percent\"").unwrap();
        let mean_pos = out.find("\"mean_err_percent\"").unwrap();
        assert!(functions_pos < max_pos && max_pos < mean_pos);
    }

    #[test]
    fn json_moreinfo_preserves_function_order() {
        let out = render(&with_functions(), &options(true, ReportFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let functions = value["functions"].as_array().unwrap();
        assert_eq!(functions.len(), 2);
        assert_eq!(functions[0]["name"], "f");
        assert_eq!(functions[0]["avr"].as_f64(), Some(3.0));
        assert_eq!(functions[0]["err"].as_f64(), Some(1.2345));
        assert_eq!(functions[1]["name"], "sort_vector");
    }

    #[test]
    fn moreinfo_off_hides_functions_in_every_format() {
        for fmt in [ReportFormat::Json, ReportFormat::Csv, ReportFormat::Readable] {
            let out = render(&with_functions(), &options(false, fmt)).unwrap();
            assert!(!out.contains("sort_vector"), "{} leaked functions", fmt.as_str());
            assert!(!out.contains("12.75"), "{} leaked functions", fmt.as_str());
        }
    }

    #[test]
    fn rendering_is_idempotent() {
        let result = with_functions();
        for fmt in [ReportFormat::Json, ReportFormat::Csv, ReportFormat::Readable] {
            let opts = options(true, fmt);
            assert_eq!(render(&result, &opts).unwrap(), render(&result, &opts).unwrap());
        }
    }

    #[test]
    fn metric_keeps_trailing_zero_on_integral_values() {
        assert_eq!(metric(3.0), "3.0");
        assert_eq!(metric(1.5), "1.5");
        assert_eq!(metric(0.2), "0.2");
        assert_eq!(metric(-4.0), "-4.0");
        assert_eq!(metric(0.0), "0.0");
    }

    #[test]
    fn options_resolve_outfile_to_absolute_path() {
        let opts =
            ReportOptions::new(true, ReportFormat::Csv, Some(Path::new("out/report.csv"))).unwrap();
        assert!(opts.outfile.unwrap().is_absolute());

        let opts = ReportOptions::new(false, ReportFormat::Json, None).unwrap();
        assert!(opts.outfile.is_none());
    }

    #[test]
    fn report_persists_rendered_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/report.csv");
        let opts = ReportOptions {
            moreinfo: true,
            fmt: ReportFormat::Csv,
            outfile: Some(path.clone()),
        };
        let result = with_functions();
        report(&result, &opts).unwrap();

        let persisted = std::fs::read_to_string(&path).unwrap();
        assert_eq!(persisted, render(&result, &opts).unwrap());
    }

    #[test]
    fn measurement_deserializes_without_functions_field() {
        let result: Measurement =
            serde_json::from_str(r#"{"bench_time": 2.0, "mean_err": 0.1, "max_err": 0.3}"#)
                .unwrap();
        assert!(result.functions.is_empty());
        assert_eq!(result.bench_time, 2.0);
    }
}
