/// Uppercase initials from the first two whitespace-separated tokens of a
/// display name. Blank names yield an empty string.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Deterministic avatar hue in [0, 360).
///
/// Rolling hash `h = c + ((h << 5) - h)` over the UTF-16 code units of the
/// name, in 32-bit wrapping arithmetic so the value is reproducible on any
/// platform. Cosmetic only, not a real hash.
pub fn hue(name: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in name.encode_utf16() {
        hash = (unit as i32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash));
    }
    hash.unsigned_abs() % 360
}
