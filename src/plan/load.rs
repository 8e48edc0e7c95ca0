use crate::diagnostics;
use crate::error::VizError;
use crate::plan::MappingPlan;

use std::fs;
use std::path::Path;
use tracing::debug;

/// Read and parse a mapping plan file (a JSON array of root operators).
pub fn load_plan(path: impl AsRef<Path>) -> Result<MappingPlan, VizError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| VizError::InputNotReadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read mapping plan");

    let plan = MappingPlan::from_json_str(&text).map_err(|source| VizError::MalformedInput {
        path: path.to_path_buf(),
        source,
    })?;

    if plan.roots().is_empty() {
        diagnostics::warn(format!(
            "mapping plan {} has no operators, rendering an empty graph",
            path.display()
        ));
    }
    debug!(
        roots = plan.roots().len(),
        operators = plan.operator_count(),
        "parsed mapping plan"
    );
    Ok(plan)
}
