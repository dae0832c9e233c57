//! Joining lowered list entries
//!
//! Absent slots are skipped before joining, so a separator only ever sits
//! between two lowered entries.

use crate::error::TranspileResult;

/// Lower every present entry and join the results with `separator`
pub(crate) fn join_present<'a, T: 'a>(
    nodes: impl IntoIterator<Item = &'a Option<T>>,
    separator: &str,
    lower: impl FnMut(&'a T) -> TranspileResult<String>,
) -> TranspileResult<String> {
    let parts = nodes
        .into_iter()
        .flatten()
        .map(lower)
        .collect::<TranspileResult<Vec<_>>>()?;
    Ok(parts.join(separator))
}

/// Lower every present entry and concatenate the results
pub(crate) fn concat_present<'a, T: 'a>(
    nodes: impl IntoIterator<Item = &'a Option<T>>,
    lower: impl FnMut(&'a T) -> TranspileResult<String>,
) -> TranspileResult<String> {
    join_present(nodes, "", lower)
}
