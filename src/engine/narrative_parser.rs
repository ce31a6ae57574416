use crate::model::state_change::StateChange;
use crate::model::vocabulary::Vocabulary;

/// Cut out the part of a narration that carries status changes.
///
/// That is everything after the last option line, or the whole narration when
/// there is no option line. The result is lowercased.
pub fn status_segment(narrative: &str, vocab: &Vocabulary) -> String {
    let lines: Vec<&str> = narrative.split('\n').collect();

    let segment = match lines.iter().rposition(|line| vocab.is_option_line(line)) {
        Some(idx) => lines[idx + 1..].join("\n"),
        None => narrative.to_string(),
    };

    segment.to_lowercase()
}

/// Read every state change out of a narration.
///
/// Changes come back grouped in application order: damage, healing, gains,
/// losses, each group in order of appearance.
pub fn parse_changes(narrative: &str, vocab: &Vocabulary) -> Vec<StateChange> {
    let segment = status_segment(narrative, vocab);
    let mut changes = Vec::new();

    for amount in scan_hp_deltas(&segment, '-', vocab) {
        changes.push(StateChange::Damage { amount });
    }
    for amount in scan_hp_deltas(&segment, '+', vocab) {
        changes.push(StateChange::Heal { amount });
    }
    for item in scan_phrases(&segment, &vocab.gain_verbs, vocab) {
        changes.push(StateChange::GainItem { item });
    }
    for item in scan_phrases(&segment, &vocab.loss_verbs, vocab) {
        changes.push(StateChange::LoseItem { item });
    }

    changes
}

/// Amounts of every `<sign><digits> <unit>` in `segment`, left to right.
fn scan_hp_deltas(segment: &str, sign: char, vocab: &Vocabulary) -> Vec<u32> {
    let mut found = Vec::new();
    let mut pos = 0;

    while let Some(offset) = segment[pos..].find(sign) {
        let after_sign = pos + offset + sign.len_utf8();
        match match_hp_delta(&segment[after_sign..], vocab) {
            Some((amount, len)) => {
                found.push(amount);
                pos = after_sign + len;
            }
            None => pos = after_sign,
        }
    }

    found
}

/// Match `<digits><blanks><unit>` at the start of `text`.
/// Returns the amount (saturating) and the matched length.
fn match_hp_delta(text: &str, vocab: &Vocabulary) -> Option<(u32, usize)> {
    let digits_len = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    if digits_len == 0 {
        return None;
    }

    let amount = text[..digits_len].bytes().fold(0u32, |acc, b| {
        acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    });

    let after_digits = &text[digits_len..];
    let blanks_len = after_digits.len() - after_digits.trim_start().len();
    let after_blanks = &after_digits[blanks_len..];

    let unit = vocab
        .hp_units
        .iter()
        .find(|unit| after_blanks.starts_with(unit.as_str()))?;

    Some((amount, digits_len + blanks_len + unit.len()))
}

/// Trimmed item phrases following any of `verbs`, left to right.
fn scan_phrases(segment: &str, verbs: &[String], vocab: &Vocabulary) -> Vec<String> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos < segment.len() {
        let rest = &segment[pos..];

        let hit = verbs.iter().find_map(|verb| {
            let after_verb = rest.strip_prefix(verb.as_str())?;
            let (phrase, len) = capture_phrase(after_verb, vocab)?;
            Some((phrase, verb.len() + len))
        });

        match hit {
            Some((phrase, len)) => {
                found.push(phrase.trim().to_string());
                pos += len;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    found
}

/// Match one or more blanks and then a non-empty run of non-delimiters.
///
/// The blank run is taken greedily and given back one char at a time when
/// nothing but a delimiter follows it, so `"pegou  ."` still captures a
/// single blank (which trims to an empty name).
fn capture_phrase<'a>(text: &'a str, vocab: &Vocabulary) -> Option<(&'a str, usize)> {
    let blanks: Vec<(usize, char)> = text
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .collect();
    let (last_idx, last_char) = *blanks.last()?;
    let blanks_end = last_idx + last_char.len_utf8();

    for taken in (1..=blanks.len()).rev() {
        let start = if taken == blanks.len() {
            blanks_end
        } else {
            blanks[taken].0
        };

        let phrase_len = text[start..]
            .find(|c: char| vocab.is_delimiter(c))
            .unwrap_or(text.len() - start);

        if phrase_len > 0 {
            return Some((&text[start..start + phrase_len], start + phrase_len));
        }
    }

    None
}
