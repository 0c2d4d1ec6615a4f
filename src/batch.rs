//! Where the rendered output of each input goes.

use std::collections::HashSet;

use anyhow::{Result, bail};
use camino::{Utf8Path, Utf8PathBuf};

use crate::panel::STDIN_PATH;

/// Output destination for a set of inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputPlan {
    /// A single input rendered to standard output.
    Stdout(Utf8PathBuf),
    /// One `(input, target file)` pair per input, in input order.
    Files(Vec<(Utf8PathBuf, Utf8PathBuf)>),
}

/// Decide where each input is written.
///
/// Without `out_dir` there must be exactly one input. With it, every input
/// gets `<out_dir>/<stem>.<extension>` (`stdin` for `-`); two inputs mapping to
/// the same file, or `-` given twice, are rejected before anything is read.
pub fn plan_outputs(
    inputs: &[Utf8PathBuf],
    out_dir: Option<&Utf8Path>,
    extension: &str,
) -> Result<OutputPlan> {
    let stdin_count = inputs.iter().filter(|i| i.as_str() == STDIN_PATH).count();
    if stdin_count > 1 {
        bail!("standard input (`-`) can only be given once");
    }
    let Some(dir) = out_dir else {
        return match inputs {
            [input] => Ok(OutputPlan::Stdout(input.clone())),
            [] => bail!("no input given"),
            _ => bail!("--out-dir is required when rendering more than one input"),
        };
    };

    let mut seen = HashSet::new();
    let mut files = Vec::with_capacity(inputs.len());
    for input in inputs {
        let target = output_path(dir, input, extension);
        if !seen.insert(target.clone()) {
            bail!("{} would overwrite the output of another input ({})", input, target);
        }
        files.push((input.clone(), target));
    }
    Ok(OutputPlan::Files(files))
}

fn output_path(dir: &Utf8Path, input: &Utf8Path, extension: &str) -> Utf8PathBuf {
    let stem = match input.as_str() {
        STDIN_PATH => "stdin",
        _ => input.file_stem().unwrap_or("stdin"),
    };
    dir.join(format!("{}.{}", stem, extension))
}
