//! Hand a `PlanGraph` to the Graphviz `dot` executable.

use crate::error::VizError;
use crate::graph::{dot::to_dot, PlanGraph};

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

pub const DOT_ENV: &str = "MAPPING_PLAN_VIZ_DOT";
pub const OUT_DIR_ENV: &str = "MAPPING_PLAN_VIZ_OUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Created on demand; files inside are overwritten.
    pub output_dir: PathBuf,
    pub graph_name: String,
    /// Graphviz output format, passed as `-T<format>`.
    pub format: String,
    pub dot_binary: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output-graphviz"),
            graph_name: "mapping_tree".to_string(),
            format: "png".to_string(),
            dot_binary: PathBuf::from("dot"),
        }
    }
}

impl RenderConfig {
    /// Defaults, with the `dot` binary and output directory overridable from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<std::ffi::OsString>) -> Self {
        let mut config = Self::default();
        if let Some(dot) = lookup(DOT_ENV).filter(|v| !v.is_empty()) {
            config.dot_binary = PathBuf::from(dot);
        }
        if let Some(dir) = lookup(OUT_DIR_ENV).filter(|v| !v.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }
        config
    }

    pub fn source_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.gv", self.graph_name))
    }

    pub fn image_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.gv.{}", self.graph_name, self.format))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFiles {
    pub source: PathBuf,
    pub image: PathBuf,
}

/// Write the DOT source into the output directory and run `dot` on it.
pub fn render_to_dir(graph: &PlanGraph, config: &RenderConfig) -> Result<RenderedFiles, VizError> {
    fs::create_dir_all(&config.output_dir).map_err(|e| {
        VizError::RenderFailure(format!(
            "cannot create output directory {}: {}",
            config.output_dir.display(),
            e
        ))
    })?;

    let source = config.source_path();
    fs::write(&source, to_dot(graph)).map_err(|e| {
        VizError::RenderFailure(format!("cannot write {}: {}", source.display(), e))
    })?;
    debug!(path = %source.display(), "wrote graph source");

    let image = config.image_path();
    run_dot(&config.dot_binary, &config.format, &source, &image)?;
    info!(path = %image.display(), "rendered mapping plan");

    Ok(RenderedFiles { source, image })
}

fn run_dot(dot: &Path, format: &str, source: &Path, image: &Path) -> Result<(), VizError> {
    let output = Command::new(dot)
        .arg(format!("-T{}", format))
        .arg("-o")
        .arg(image)
        .arg(source)
        .output()
        .map_err(|e| {
            VizError::RenderFailure(format!("cannot run {}: {}", dot.display(), e))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VizError::RenderFailure(format!(
            "{} exited with {}: {}",
            dot.display(),
            output.status,
            stderr.trim()
        )));
    }
    Ok(())
}
