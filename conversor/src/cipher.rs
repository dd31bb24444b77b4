//! The PERNAMBUCO price cipher: a fixed mapping from ten letters to the
//! ten decimal digits, used to spell prices on tags without exposing them.

/// Letter/digit pairs of the cipher. Process-wide constant.
pub const CIPHER_TABLE: [(char, char); 10] = [
    ('P', '1'),
    ('E', '2'),
    ('R', '3'),
    ('N', '4'),
    ('A', '5'),
    ('M', '6'),
    ('B', '7'),
    ('U', '8'),
    ('C', '9'),
    ('O', '0'),
];

/// Digit for an (already uppercased) letter, or `None` when the character
/// is not part of the cipher.
pub fn digit_for(letter: char) -> Option<char> {
    CIPHER_TABLE
        .iter()
        .find(|(l, _)| *l == letter)
        .map(|(_, d)| *d)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_all_ten_letters() {
        for (letter, digit) in "PERNAMBUCO".chars().zip("1234567890".chars()) {
            assert_eq!(digit_for(letter), Some(digit));
        }
    }

    #[test]
    fn rejects_unmapped_characters() {
        assert_eq!(digit_for('X'), None);
        assert_eq!(digit_for('p'), None); // callers uppercase first
        assert_eq!(digit_for(' '), None);
        assert_eq!(digit_for('1'), None);
    }

    #[test]
    fn table_covers_every_digit_once() {
        let mut digits: Vec<char> = CIPHER_TABLE.iter().map(|(_, d)| *d).collect();
        digits.sort_unstable();
        assert_eq!(digits, "0123456789".chars().collect::<Vec<_>>());
    }
}
