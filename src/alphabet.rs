/// Number of symbols a trie node can branch on.
pub const ALPHABET_SIZE: usize = 26;

/// Maps an uppercase letter to its symbol index.
pub fn index_of(letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter as u8 - b'A')
    } else {
        None
    }
}

/// Maps a symbol index back to its letter.
///
/// Panics if `index` is outside the alphabet.
pub fn letter(index: u8) -> char {
    assert!(
        (index as usize) < ALPHABET_SIZE,
        "symbol index {} out of range",
        index
    );
    (b'A' + index) as char
}

/// Converts a word into symbol indices, or returns the first letter that
/// is not in the alphabet.
pub fn encode(word: &str) -> Result<Vec<u8>, char> {
    word.chars().map(|c| index_of(c).ok_or(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::{encode, index_of, letter, ALPHABET_SIZE};

    #[test]
    fn mapping_is_invertible() {
        for index in 0..ALPHABET_SIZE as u8 {
            assert_eq!(Some(index), index_of(letter(index)));
        }
        assert_eq!(Some(0), index_of('A'));
        assert_eq!(Some(25), index_of('Z'));
    }

    #[test]
    fn rejects_non_letters() {
        assert_eq!(None, index_of('a'));
        assert_eq!(None, index_of(' '));
        assert_eq!(None, index_of('É'));
    }

    #[test]
    fn encode_works() {
        assert_eq!(Ok(vec![2, 0, 19]), encode("CAT"));
        assert_eq!(Err('-'), encode("X-RAY"));
    }

    #[test]
    #[should_panic]
    fn letter_out_of_range_panics() {
        letter(26);
    }
}
