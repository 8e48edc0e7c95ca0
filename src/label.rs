//! Node labels for the rendered plan.

use crate::error::VizError;
use crate::plan::operator::value_text;
use crate::plan::{ExtendFunction, OperatorKind, OperatorNode};

/// Format one extend pair as nested function application.
///
/// `("x", UPPER -> TRIM -> "raw")` becomes `x -> UPPER(TRIM(raw))`.
/// An absent chain becomes `x -> ` with no parentheses.
pub fn format_extend(
    operator: &str,
    attr: &str,
    function: Option<&ExtendFunction>,
) -> Result<String, VizError> {
    let mut expr = String::new();
    let mut depth = 0usize;

    let mut cur = function;
    while let Some(f) = cur {
        depth += 1;
        expr.push_str(&f.kind);
        expr.push('(');
        match f.inner() {
            Some(inner) => cur = Some(inner),
            None => {
                let value = f
                    .value
                    .as_ref()
                    .ok_or_else(|| VizError::missing(operator, "value"))?;
                expr.push_str(&value_text(value));
                cur = None;
            }
        }
    }
    expr.extend(std::iter::repeat_n(')', depth));

    Ok(format!("{} -> {}", attr, expr))
}

/// Display label for one operator: its type tag plus kind-specific detail lines.
pub fn operator_label(op: &OperatorNode) -> Result<String, VizError> {
    let tag = op.kind.as_str();
    let label = match op.kind() {
        OperatorKind::Serializer => format!(
            "{}\n{}\n Format:{}",
            tag,
            op.config_text("template")?,
            op.config_text("format")?
        ),
        OperatorKind::Extend => {
            let lines = op
                .extend_pairs()?
                .iter()
                .map(|(attr, f)| format_extend(tag, attr, f.as_ref()))
                .collect::<Result<Vec<_>, _>>()?;
            format!("{}\n{}", tag, lines.join("\n"))
        }
        OperatorKind::Project => {
            format!("{}\n{}", tag, op.config_string_list("projection_attributes")?.join(","))
        }
        OperatorKind::Source => format!("{}\n file:{}", tag, op.config_text("path")?),
        OperatorKind::Other(_) => tag.to_string(),
    };
    Ok(label)
}
