use crate::domain::model::{PatchResult, Replacement, ReplacementOutcome};
use crate::utils::error::{PatchError, Result};

/// Substitute every literal occurrence of `replacement.find` in `content`.
///
/// Returns the new text and the number of occurrences replaced. A required
/// replacement with no occurrence fails with [`PatchError::SectionNotFound`].
pub fn apply_replacement(content: &str, replacement: &Replacement) -> Result<(String, usize)> {
    let occurrences = content.matches(replacement.find.as_str()).count();

    if occurrences == 0 {
        if replacement.required {
            return Err(PatchError::SectionNotFound {
                name: replacement.name.clone(),
            });
        }
        tracing::debug!("'{}' not present, leaving text as is", replacement.name);
        return Ok((content.to_string(), 0));
    }

    tracing::debug!(
        "'{}' matched {} occurrence(s)",
        replacement.name,
        occurrences
    );
    Ok((
        content.replace(replacement.find.as_str(), &replacement.replace),
        occurrences,
    ))
}

/// Run `replacements` in order over `content`, stopping at the first failed gate.
pub fn apply_all(content: String, replacements: &[Replacement]) -> Result<PatchResult> {
    let mut patched = content.clone();
    let mut outcomes = Vec::with_capacity(replacements.len());

    for replacement in replacements {
        let (next, occurrences) = apply_replacement(&patched, replacement)?;
        patched = next;
        outcomes.push(ReplacementOutcome {
            name: replacement.name.clone(),
            occurrences,
        });
    }

    Ok(PatchResult {
        original: content,
        patched,
        outcomes,
    })
}
