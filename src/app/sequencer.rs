/// The symbols collected for a handwriting dataset, in capture order:
/// uppercase, lowercase, then digits.
pub const STANDARD_SYMBOLS: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Immutable, ordered set of symbols to capture. Fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// The standard 62-symbol alphabet (A-Z, a-z, 0-9).
    pub fn standard() -> Self {
        Self::new(STANDARD_SYMBOLS)
    }

    /// Build an alphabet from a symbol string.
    ///
    /// Panics if the string is empty or contains duplicates; alphabets
    /// are constructed once at startup from known-good constants.
    pub fn new(symbols: &str) -> Self {
        let symbols: Vec<char> = symbols.chars().collect();
        assert!(!symbols.is_empty(), "alphabet must not be empty");
        for (i, c) in symbols.iter().enumerate() {
            assert!(
                !symbols[i + 1..].contains(c),
                "alphabet contains duplicate symbol {c:?}"
            );
        }
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbol(&self, index: usize) -> Option<char> {
        self.symbols.get(index).copied()
    }

    /// The full symbol string, as submitted to the dataset endpoint.
    pub fn request_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

/// Outcome of advancing the sequencer after a successful save.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Moved on; this symbol is now current.
    Next(char),
    /// The walk is exhausted. The position stays on the final symbol.
    Complete,
}

/// Walks the alphabet one symbol at a time.
///
/// The position starts at 0 and moves forward only, one step per
/// acknowledged save. It never skips, repeats, or wraps; after the last
/// symbol the sequencer reports `Advance::Complete` and stays put.
pub struct LetterSequencer {
    alphabet: Alphabet,
    position: usize,
    complete: bool,
}

impl LetterSequencer {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            position: 0,
            complete: false,
        }
    }

    /// The symbol the user should draw next.
    pub fn current_symbol(&self) -> char {
        self.alphabet.symbols[self.position]
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Progress as (1-based current, total), for the letter panel.
    pub fn progress(&self) -> (usize, usize) {
        (self.position + 1, self.alphabet.len())
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Move to the next symbol after a save was acknowledged.
    pub fn advance(&mut self) -> Advance {
        if self.position + 1 < self.alphabet.len() {
            self.position += 1;
            Advance::Next(self.current_symbol())
        } else {
            self.complete = true;
            Advance::Complete
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_alphabet_shape() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.len(), 62);
        assert_eq!(alphabet.symbol(0), Some('A'));
        assert_eq!(alphabet.symbol(25), Some('Z'));
        assert_eq!(alphabet.symbol(26), Some('a'));
        assert_eq!(alphabet.symbol(51), Some('z'));
        assert_eq!(alphabet.symbol(52), Some('0'));
        assert_eq!(alphabet.symbol(61), Some('9'));
        assert_eq!(alphabet.symbol(62), None);
    }

    #[test]
    fn test_request_string_round_trip() {
        let alphabet = Alphabet::standard();
        assert_eq!(alphabet.request_string(), STANDARD_SYMBOLS);
    }

    #[test]
    #[should_panic(expected = "duplicate")]
    fn test_duplicate_symbols_rejected() {
        Alphabet::new("ABA");
    }

    #[test]
    #[should_panic(expected = "empty")]
    fn test_empty_alphabet_rejected() {
        Alphabet::new("");
    }

    #[test]
    fn test_fresh_sequencer_starts_at_first_symbol() {
        let seq = LetterSequencer::new(Alphabet::standard());
        assert_eq!(seq.current_symbol(), 'A');
        assert_eq!(seq.position(), 0);
        assert_eq!(seq.progress(), (1, 62));
        assert!(!seq.is_complete());
    }

    #[test]
    fn test_advance_walks_in_order_without_skips() {
        let mut seq = LetterSequencer::new(Alphabet::standard());
        let mut seen = vec![seq.current_symbol()];
        let mut last_position = seq.position();

        while let Advance::Next(symbol) = seq.advance() {
            assert_eq!(seq.position(), last_position + 1);
            assert_eq!(seq.alphabet().symbol(seq.position()), Some(symbol));
            seen.push(symbol);
            last_position = seq.position();
        }

        let expected: Vec<char> = STANDARD_SYMBOLS.chars().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_advance_stops_at_final_symbol() {
        let mut seq = LetterSequencer::new(Alphabet::new("AB"));
        assert_eq!(seq.advance(), Advance::Next('B'));
        assert_eq!(seq.advance(), Advance::Complete);
        assert!(seq.is_complete());
        assert_eq!(seq.current_symbol(), 'B');
        assert_eq!(seq.position(), 1);

        // No wraparound, however many more saves arrive.
        assert_eq!(seq.advance(), Advance::Complete);
        assert_eq!(seq.current_symbol(), 'B');
        assert_eq!(seq.position(), 1);
    }

    #[test]
    fn test_single_symbol_alphabet_completes_immediately() {
        let mut seq = LetterSequencer::new(Alphabet::new("A"));
        assert_eq!(seq.advance(), Advance::Complete);
        assert_eq!(seq.current_symbol(), 'A');
    }

    #[test]
    fn test_progress_tracks_position() {
        let mut seq = LetterSequencer::new(Alphabet::standard());
        seq.advance();
        seq.advance();
        assert_eq!(seq.progress(), (3, 62));
        assert_eq!(seq.current_symbol(), 'C');
    }
}
