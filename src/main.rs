use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::builder::BoolishValueParser;
use clap::{Parser, ValueEnum};
use patchpanel::panel::load_input;
use patchpanel::render::html::element_id;
use patchpanel::{ConfigOverrides, OutputPlan, Panel, PanelConfig, PanelLayout, SwitchMode, plan_outputs, resolve_config};
use rayon::prelude::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render patch panel port listings to SVG, HTML or CSV", long_about = None)]
struct Cli {
    /// Port listing files (`-` reads standard input)
    #[arg(value_name = "INPUT", required = true)]
    inputs: Vec<Utf8PathBuf>,

    /// Panel attributes as in a tag, e.g. 'name="Rack 1" ports=24 switch=1'
    #[arg(long, value_name = "ATTRS")]
    attrs: Option<String>,

    /// Panel name
    #[arg(long)]
    name: Option<String>,

    /// Total number of ports
    #[arg(long)]
    ports: Option<u32>,

    /// Number of rows
    #[arg(long)]
    rows: Option<u32>,

    /// Ports per visual group
    #[arg(long)]
    groups: Option<u32>,

    /// Rotate the drawing a quarter turn (`--rotate=false` overrides `rotate=1` in --attrs)
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true",
          value_parser = BoolishValueParser::new())]
    rotate: Option<bool>,

    /// Port numbering: 0 sequential, 1 odd ports on top, 2 even ports on top
    #[arg(long = "switch", value_name = "MODE")]
    switch_mode: Option<SwitchMode>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Write one output file per input into this directory instead of stdout
    #[arg(long, value_name = "DIR")]
    out_dir: Option<Utf8PathBuf>,

    /// More logging (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Svg,
    Html,
    Csv,
    Json,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Svg => "svg",
            Format::Html => "html",
            Format::Csv => "csv",
            Format::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    panel: &'a Panel,
    layout: PanelLayout<'a>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = build_config(&cli)?;
    let plan = plan_outputs(&cli.inputs, cli.out_dir.as_deref(), cli.format.extension())?;

    match plan {
        OutputPlan::Stdout(input) => {
            let output = render_input(&input, &config, cli.format, 0)?;
            print!("{}", output);
        }
        OutputPlan::Files(targets) => {
            if let Some(dir) = &cli.out_dir {
                std::fs::create_dir_all(dir).with_context(|| format!("Create {}", dir))?;
            }
            targets
                .par_iter()
                .enumerate()
                .map(|(index, (input, target))| -> Result<()> {
                    let output = render_input(input, &config, cli.format, index)?;
                    std::fs::write(target, output)
                        .with_context(|| format!("Failed to write {}", target))?;
                    tracing::info!(%input, %target, "rendered panel");
                    Ok(())
                })
                .collect::<Result<Vec<()>>>()?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Defaults, then `--attrs`, then individual flags.
fn build_config(cli: &Cli) -> Result<PanelConfig> {
    let overrides = ConfigOverrides {
        name: cli.name.clone(),
        ports: cli.ports,
        rows: cli.rows,
        groups: cli.groups,
        rotate: cli.rotate,
        switch_mode: cli.switch_mode,
    };
    let config = resolve_config(cli.attrs.as_deref(), &overrides).context("Invalid panel configuration")?;
    Ok(config)
}

fn render_input(input: &Utf8Path, config: &PanelConfig, format: Format, index: usize) -> Result<String> {
    let panel = load_input(input, config.clone(), std::io::stdin())?;

    for err in &panel.parsed.errors {
        tracing::warn!(%input, line = err.line_number, text = %err.line, "syntax error in port line");
    }
    if !panel.has_content {
        tracing::warn!(%input, "no data found");
    }

    Ok(match format {
        Format::Svg => panel.to_svg(),
        Format::Html => panel.to_html(&element_id(&panel.config.name, index)),
        Format::Csv => panel.to_csv(),
        Format::Json => {
            let out = JsonOutput {
                panel: &panel,
                layout: panel.layout(),
            };
            let mut json = serde_json::to_string_pretty(&out)?;
            json.push('\n');
            json
        }
    })
}
