//! Placeholder restoration

use crate::cloaking::mapping::Mapping;
use crate::cloaking::models::Restoration;
use crate::cloaking::token::find_tokens;
use crate::domain::{CloakError, Result, UnmappedTokenWarning};
use aho_corasick::{AhoCorasick, MatchKind};

/// Replace every token of `mapping` found in `text` with its original
///
/// Tokens are matched as literal strings in one left-to-right pass. Text between
/// matches is copied unchanged; placeholder-shaped tokens found there have no
/// mapping entry and are reported as warnings.
pub fn restore(text: &str, mapping: &Mapping) -> Result<Restoration> {
    let mut output = String::with_capacity(text.len());
    let mut warnings = Vec::new();
    let mut restored = 0;
    let mut cursor = 0;

    if !mapping.is_empty() {
        let tokens: Vec<&str> = mapping.tokens().collect();
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&tokens)
            .map_err(|e| CloakError::InvalidMapping(e.to_string()))?;

        for found in automaton.find_iter(text) {
            copy_literal(&text[cursor..found.start()], cursor, &mut output, &mut warnings);

            let token = tokens[found.pattern().as_usize()];
            match mapping.get(token) {
                Some(original) => {
                    output.push_str(original);
                    restored += 1;
                }
                None => output.push_str(token),
            }
            cursor = found.end();
        }
    }

    copy_literal(&text[cursor..], cursor, &mut output, &mut warnings);

    tracing::debug!(restored, unmapped = warnings.len(), "Restored placeholders");

    Ok(Restoration {
        text: output,
        restored,
        warnings,
    })
}

fn copy_literal(
    literal: &str,
    offset: usize,
    output: &mut String,
    warnings: &mut Vec<UnmappedTokenWarning>,
) {
    for (position, token) in find_tokens(literal) {
        tracing::warn!(token, offset = offset + position, "Placeholder has no mapping entry");
        warnings.push(UnmappedTokenWarning {
            token: token.to_string(),
            offset: offset + position,
        });
    }
    output.push_str(literal);
}
