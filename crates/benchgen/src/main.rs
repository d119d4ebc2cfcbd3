use anyhow::{Context, Result};
use benchgen_sdk::report::{Measurement, ReportFormat, ReportOptions};
use benchgen_sdk::{Framework, Shape, codegen, report};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI for generating benchmark framework scaffolding and rendering
/// measurement reports.
#[derive(Parser, Debug)]
#[command(name = "benchgen", author, version, about = "Benchmark scaffolding generator and result reporter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate one benchmark unit for a (framework, shape) pair.
    Generate {
        #[arg(long, value_enum)]
        framework: FrameworkArg,
        #[arg(long, value_enum)]
        shape: ShapeArg,
        #[arg(long, help = "Identifier interpolated into every generated symbol name")]
        uid: String,
        #[arg(long, help = "Output path; prints to stdout when omitted")]
        output: Option<PathBuf>,
    },
    /// Generate a suite of units cycling through a framework's supported shapes.
    Suite {
        #[arg(long, value_enum)]
        framework: FrameworkArg,
        #[arg(long, default_value_t = 10)]
        count: u32,
        #[arg(long, default_value = "generated")]
        output_dir: PathBuf,
    },
    /// Render a measurement result produced by the benchmark pipeline.
    Report {
        #[arg(long, help = "Path to the measurement result JSON")]
        input: PathBuf,
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        #[arg(long, help = "Include the per-function breakdown")]
        moreinfo: bool,
        #[arg(long, help = "Also persist the rendered report to this path")]
        outfile: Option<PathBuf>,
        #[arg(long, help = "Optional TOML config supplying report defaults")]
        config: Option<PathBuf>,
    },
    /// List the supported (framework, shape) matrix.
    List,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum FrameworkArg {
    Sltbench,
    Googlebench,
    Nonius,
}

impl From<FrameworkArg> for Framework {
    fn from(arg: FrameworkArg) -> Self {
        match arg {
            FrameworkArg::Sltbench => Framework::Sltbench,
            FrameworkArg::Googlebench => Framework::Googlebench,
            FrameworkArg::Nonius => Framework::Nonius,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ShapeArg {
    Simple,
    Args,
    Fixture,
    FixtureArgs,
    Generator,
    LazyGenerator,
    FixtureGenerator,
    FixtureLazyGenerator,
    FixtureBuilder,
    FixtureBuilderArgs,
    FixtureBuilderGenerator,
    FixtureBuilderLazyGenerator,
}

impl From<ShapeArg> for Shape {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Simple => Shape::Simple,
            ShapeArg::Args => Shape::Args,
            ShapeArg::Fixture => Shape::Fixture,
            ShapeArg::FixtureArgs => Shape::FixtureArgs,
            ShapeArg::Generator => Shape::Generator,
            ShapeArg::LazyGenerator => Shape::LazyGenerator,
            ShapeArg::FixtureGenerator => Shape::FixtureGenerator,
            ShapeArg::FixtureLazyGenerator => Shape::FixtureLazyGenerator,
            ShapeArg::FixtureBuilder => Shape::FixtureBuilder,
            ShapeArg::FixtureBuilderArgs => Shape::FixtureBuilderArgs,
            ShapeArg::FixtureBuilderGenerator => Shape::FixtureBuilderGenerator,
            ShapeArg::FixtureBuilderLazyGenerator => Shape::FixtureBuilderLazyGenerator,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
#[clap(rename_all = "lowercase")]
enum FormatArg {
    Json,
    Csv,
    Readable,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => ReportFormat::Json,
            FormatArg::Csv => ReportFormat::Csv,
            FormatArg::Readable => ReportFormat::Readable,
        }
    }
}

/// Optional config file supplying report defaults; CLI flags win over it.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    report: ReportDefaults,
}

#[derive(Debug, Default, Deserialize)]
struct ReportDefaults {
    format: Option<ReportFormat>,
    moreinfo: Option<bool>,
    outfile: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            framework,
            shape,
            uid,
            output,
        } => {
            cmd_generate(framework.into(), shape.into(), &uid, output.as_deref())?;
        }
        Command::Suite {
            framework,
            count,
            output_dir,
        } => {
            cmd_suite(framework.into(), count, &output_dir)?;
        }
        Command::Report {
            input,
            format,
            moreinfo,
            outfile,
            config,
        } => {
            let options = resolve_report_options(
                moreinfo,
                format.map(Into::into),
                outfile,
                config.as_deref(),
            )?;
            let result = load_measurement(&input)?;
            report::report(&result, &options)?;
        }
        Command::List => {
            cmd_list();
        }
    }

    Ok(())
}

fn cmd_generate(
    framework: Framework,
    shape: Shape,
    uid: &str,
    output: Option<&Path>,
) -> Result<()> {
    let unit = codegen::generate(framework, shape, uid)?;
    match output {
        Some(path) => {
            write_file(path, &unit)?;
            println!("Wrote {framework}/{shape} unit to {:?}", path);
        }
        None => print!("{unit}"),
    }
    Ok(())
}

fn cmd_suite(framework: Framework, count: u32, output_dir: &Path) -> Result<()> {
    let shapes = framework.supported_shapes();
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating output dir {:?}", output_dir))?;

    for index in 0..count {
        let shape = shapes[index as usize % shapes.len()];
        let unit = codegen::generate(framework, shape, &index.to_string())?;
        let path = output_dir.join(format!("bench_{index}.cpp"));
        write_file(&path, &unit)?;
    }

    println!("Wrote {count} {framework} unit(s) to {:?}", output_dir);
    Ok(())
}

fn cmd_list() {
    for framework in [
        Framework::Sltbench,
        Framework::Googlebench,
        Framework::Nonius,
    ] {
        let shapes: Vec<&str> = framework
            .supported_shapes()
            .iter()
            .map(|s| s.as_str())
            .collect();
        println!("{framework}: {}", shapes.join(", "));
    }
}

fn resolve_report_options(
    moreinfo_flag: bool,
    format: Option<ReportFormat>,
    outfile: Option<PathBuf>,
    config: Option<&Path>,
) -> Result<ReportOptions> {
    let defaults = match config {
        Some(path) => load_config(path)?.report,
        None => ReportDefaults::default(),
    };

    let fmt = format
        .or(defaults.format)
        .unwrap_or(ReportFormat::Readable);
    let moreinfo = moreinfo_flag || defaults.moreinfo.unwrap_or(false);
    let outfile = outfile.or(defaults.outfile);

    ReportOptions::new(moreinfo, fmt, outfile.as_deref()).context("resolving report outfile path")
}

fn load_config(path: &Path) -> Result<ConfigFile> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
    toml::from_str(&contents).with_context(|| format!("parsing config {:?}", path))
}

fn load_measurement(path: &Path) -> Result<Measurement> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading measurement {:?}", path))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing measurement {:?}", path))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating parent directory {:?}", parent))?;
    }
    fs::write(path, contents).with_context(|| format!("writing file {:?}", path))
}
