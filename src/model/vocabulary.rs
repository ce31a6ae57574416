/// Words and markers the extractor recognizes in a narration.
///
/// Held as plain data so the status format the generator is asked to follow
/// and the scanner that reads it share a single source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    /// Prefixes of the player-facing choice lines.
    pub option_markers: Vec<String>,

    /// Units following a signed HP delta, e.g. `-10 hp`.
    /// Units and verbs are matched against lowercased text; see [`Vocabulary::normalized`].
    pub hp_units: Vec<String>,

    pub gain_verbs: Vec<String>,
    pub loss_verbs: Vec<String>,

    /// Characters that end an item phrase.
    pub delimiters: Vec<char>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            option_markers: to_strings(&["1.", "2.", "3."]),
            hp_units: to_strings(&["pontos de vida", "hp"]),
            gain_verbs: to_strings(&["pegou", "obteve", "encontrou", "recebeu", "ganhou"]),
            loss_verbs: to_strings(&["perdeu", "usou", "consumiu", "gastou"]),
            delimiters: vec!['.', ',', '!', '?', '\n'],
        }
    }
}

impl Vocabulary {
    /// Lowercase units and verbs so they can match the lowercased status segment.
    pub fn normalized(mut self) -> Self {
        for word in self
            .hp_units
            .iter_mut()
            .chain(self.gain_verbs.iter_mut())
            .chain(self.loss_verbs.iter_mut())
        {
            *word = word.to_lowercase();
        }
        self
    }

    pub fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(&c)
    }

    pub fn is_option_line(&self, line: &str) -> bool {
        let line = line.trim();
        self.option_markers.iter().any(|m| line.starts_with(m.as_str()))
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_lines_may_be_indented() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_option_line("1. Lutar"));
        assert!(vocab.is_option_line("   3. Fugir"));
        assert!(!vocab.is_option_line("4. Dormir"));
        assert!(!vocab.is_option_line("Escolha 1."));
    }

    #[test]
    fn normalized_lowercases_units_and_verbs() {
        let vocab = Vocabulary {
            hp_units: vec!["HP".into()],
            gain_verbs: vec!["Picked Up".into()],
            loss_verbs: vec!["DROPPED".into()],
            ..Vocabulary::default()
        }
        .normalized();

        assert_eq!(vocab.hp_units, vec!["hp"]);
        assert_eq!(vocab.gain_verbs, vec!["picked up"]);
        assert_eq!(vocab.loss_verbs, vec!["dropped"]);
        assert_eq!(vocab.option_markers, Vocabulary::default().option_markers);
    }

    #[test]
    fn newline_ends_a_phrase() {
        let vocab = Vocabulary::default();
        assert!(vocab.is_delimiter('\n'));
        assert!(vocab.is_delimiter('?'));
        assert!(!vocab.is_delimiter(';'));
    }
}
