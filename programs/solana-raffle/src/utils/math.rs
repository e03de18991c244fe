use uint::construct_uint;

construct_uint! {
    /// 256-bit unsigned integer.
    pub struct U256(4);
}

/// Reads a random word as a big-endian 256-bit integer.
pub fn as_u256(word: &[u8; 32]) -> U256 {
    U256::from_big_endian(word)
}

/// Reduces a random word, read as a big-endian 256-bit integer, modulo
/// `modulus`. Exact over all 256 bits. Returns `None` for a zero modulus.
pub fn word_mod(word: &[u8; 32], modulus: u64) -> Option<u64> {
    if modulus == 0 {
        return None;
    }

    Some((as_u256(word) % U256::from(modulus)).low_u64())
}

/// Index of the winning entry for `num_players` entries.
pub fn winner_index(word: &[u8; 32], num_players: usize) -> Option<usize> {
    word_mod(word, num_players as u64).map(|index| index as usize)
}

/// Big-endian word holding `value` in its low 8 bytes.
pub fn word_from_u64(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
