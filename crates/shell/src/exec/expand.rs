// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Variable expansion driven by the quoting mask.
//!
//! Substitutes `$NAME` and `$?` wherever the mask says the `$` was unquoted
//! or double-quoted; single-quoted characters are never touched. There is no
//! field splitting (an expansion never turns one word into several), only
//! field collapsing: an argv word that expands to empty and had no quoted
//! region disappears.

use crate::ast::{Pipeline, Redirection};
use crate::env::Environment;
use crate::word::{QuoteStyle, Word};

/// Expand the tree in place: argv words and redirection targets.
///
/// Here-document delimiters are deliberately skipped; they are matched
/// literally, and their quoting mask decides body expansion later.
pub(crate) fn expand_pipeline(pipeline: &mut Pipeline, env: &Environment, last_status: i32) {
    for command in &mut pipeline.commands {
        let argv = std::mem::take(&mut command.argv);
        command.argv = argv
            .into_iter()
            .filter_map(|word| {
                let expanded = expand_word(&word, env, last_status);
                if expanded.is_empty() && !expanded.has_quotes() {
                    None
                } else {
                    Some(expanded)
                }
            })
            .collect();

        for redirection in &mut command.redirections {
            if matches!(redirection, Redirection::HereDoc { .. }) {
                continue;
            }
            let target = redirection.word_mut();
            *target = expand_word(target, env, last_status);
        }
    }
}

/// Expand one word, producing a new word with the same span.
pub(crate) fn expand_word(word: &Word, env: &Environment, last_status: i32) -> Word {
    let chars: Vec<(char, QuoteStyle)> = word.chars().collect();
    let mut result = Word::empty(word.span);
    if word.has_quotes() {
        result.mark_quoted();
    }

    let mut i = 0;
    while i < chars.len() {
        let (ch, style) = chars[i];
        if ch == '$' && style != QuoteStyle::Single {
            if let Some((consumed, replacement)) = scan_dollar(&chars, i, env, last_status) {
                result.push_str(&replacement, style);
                i += consumed;
                continue;
            }
        }
        result.push(ch, style);
        i += 1;
    }
    result
}

/// Expand a here-document body line: every character is eligible, exactly
/// as in double-quoted text.
pub(crate) fn expand_line(line: &str, env: &Environment, last_status: i32) -> String {
    expand_word(&Word::double_quoted(line), env, last_status).into_text()
}

/// Try to expand the `$` at `chars[at]`.
///
/// Returns the number of characters consumed (the `$` plus the name) and the
/// replacement text, or `None` when the `$` stays literal. The name may only
/// extend through characters with the same quoting style as the `$`: the
/// style boundary is where a quote stood in the source, and a quote ends a
/// name just like whitespace does.
fn scan_dollar(
    chars: &[(char, QuoteStyle)],
    at: usize,
    env: &Environment,
    last_status: i32,
) -> Option<(usize, String)> {
    let style = chars[at].1;
    let (next, _) = *chars.get(at + 1).filter(|(_, s)| *s == style)?;

    if next == '?' {
        return Some((2, last_status.to_string()));
    }

    if next.is_ascii_alphabetic() || next == '_' {
        let mut end = at + 2;
        while end < chars.len()
            && chars[end].1 == style
            && (chars[end].0.is_ascii_alphanumeric() || chars[end].0 == '_')
        {
            end += 1;
        }
        let name: String = chars[at + 1..end].iter().map(|(c, _)| *c).collect();
        let value = env.get(&name).unwrap_or_default().to_string();
        return Some((end - at, value));
    }

    None
}
