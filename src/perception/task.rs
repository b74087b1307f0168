// ARC task files: `{"train": [...], "test": [...], "arc-gen": [...]}`.
// Each example is `{"input": grid, "output": grid}`; test outputs may be
// missing. Generated examples come under `arc-gen`, `arc_gen`, or both; the
// two lists are concatenated in that order.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{ArcError, Result};
use crate::grid::{Grid, COLORS};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub input: Grid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Grid>,
}

impl Example {
    pub fn labeled(input: Grid, output: Grid) -> Self {
        Self { input, output: Some(output) }
    }

    pub fn unlabeled(input: Grid) -> Self {
        Self { input, output: None }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Task {
    #[serde(skip)]
    pub id: String,
    pub train: Vec<Example>,
    pub test: Vec<Example>,
    #[serde(rename = "arc-gen")]
    pub arc_gen: Vec<Example>,
}

// Cells are read wide so that out-of-range colors reach validation instead
// of failing inside the JSON decoder.
type RawGrid = Vec<Vec<i64>>;

#[derive(Deserialize)]
struct RawExample {
    input: RawGrid,
    #[serde(default)]
    output: Option<RawGrid>,
}

#[derive(Deserialize)]
struct RawTask {
    #[serde(default)]
    train: Vec<RawExample>,
    #[serde(default)]
    test: Vec<RawExample>,
    #[serde(default, rename = "arc-gen")]
    arc_gen: Vec<RawExample>,
    #[serde(default, rename = "arc_gen")]
    arc_gen_underscore: Vec<RawExample>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Split {
    Train,
    Test,
    #[serde(alias = "arc_gen")]
    ArcGen,
}

impl Split {
    pub const ALL: [Split; 3] = [Split::Train, Split::Test, Split::ArcGen];

    pub fn name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
            Split::ArcGen => "arc-gen",
        }
    }

    pub fn parse(name: &str) -> Result<Split> {
        match name {
            "train" => Ok(Split::Train),
            "test" => Ok(Split::Test),
            "arc-gen" | "arc_gen" => Ok(Split::ArcGen),
            other => Err(ArcError::UnknownSplit(other.to_string())),
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Task {
    pub fn split(&self, split: Split) -> &[Example] {
        match split {
            Split::Train => &self.train,
            Split::Test => &self.test,
            Split::ArcGen => &self.arc_gen,
        }
    }

    /// Labeled (input, output) pairs of one split.
    pub fn pairs(&self, split: Split) -> Vec<(Grid, Grid)> {
        self.split(split)
            .iter()
            .filter_map(|ex| ex.output.as_ref().map(|out| (ex.input.clone(), out.clone())))
            .collect()
    }
}

fn to_grid(raw: &RawGrid) -> std::result::Result<Grid, String> {
    let width = match raw.first() {
        Some(row) if !row.is_empty() => row.len(),
        _ => return Err("empty".into()),
    };
    if let Some(r) = raw.iter().position(|row| row.len() != width) {
        return Err(format!("row {} has {} cells, expected {}", r, raw[r].len(), width));
    }
    if let Some(&bad) = raw.iter().flatten().find(|&&c| c < 0 || c >= COLORS as i64) {
        return Err(format!("color {} out of range", bad));
    }
    Ok(raw.iter().map(|row| row.iter().map(|&c| c as u8).collect()).collect())
}

fn convert(id: &str, split: Split, raw: &[RawExample]) -> Result<Vec<Example>> {
    raw.iter().enumerate().map(|(i, ex)| {
        let at = |what: &str, e: String| ArcError::InvalidGrid(format!("task {} {} #{} {}: {}", id, split, i, what, e));
        let input = to_grid(&ex.input).map_err(|e| at("input", e))?;
        let output = ex.output.as_ref().map(to_grid).transpose().map_err(|e| at("output", e))?;
        Ok(Example { input, output })
    }).collect()
}

pub fn parse_task(id: &str, json: &str) -> Result<Task> {
    let mut raw: RawTask = serde_json::from_str(json)?;
    raw.arc_gen.append(&mut raw.arc_gen_underscore);
    let task = Task {
        id: id.to_string(),
        train: convert(id, Split::Train, &raw.train)?,
        test: convert(id, Split::Test, &raw.test)?,
        arc_gen: convert(id, Split::ArcGen, &raw.arc_gen)?,
    };
    if task.train.is_empty() {
        return Err(ArcError::MissingSplit(format!("task {} has no train examples", id)));
    }
    Ok(task)
}

pub fn load_task(path: &Path) -> anyhow::Result<Task> {
    use anyhow::Context;
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let id = path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();
    let task = parse_task(&id, &content).with_context(|| format!("parsing {}", path.display()))?;
    debug!(task = %task.id, train = task.train.len(), test = task.test.len(), arc_gen = task.arc_gen.len(), "loaded task");
    Ok(task)
}

/// Every `*.json` task in `dir`, sorted by file name. Unreadable files are
/// skipped with a warning.
pub fn load_dir(dir: &Path) -> anyhow::Result<Vec<Task>> {
    use anyhow::Context;
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("reading task directory {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    paths.sort();

    let mut tasks = Vec::with_capacity(paths.len());
    for path in &paths {
        match load_task(path) {
            Ok(t) => tasks.push(t),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping task file"),
        }
    }
    Ok(tasks)
}
