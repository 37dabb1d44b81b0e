//! CPF (tax-ID) shape validation.

/// Check whether a CPF has a plausible shape.
///
/// Strips literal `.` and `-` punctuation and accepts exactly eleven
/// characters that are not all identical. This is a shape check only; the
/// official check digits are intentionally not computed, so values such as
/// `12345678910` pass. Callers relying on real checksum validation must not
/// reuse this function.
pub fn shape_is_valid(cpf: &str) -> bool {
    if cpf.trim().is_empty() {
        return false;
    }

    let stripped: Vec<char> = cpf.chars().filter(|c| *c != '.' && *c != '-').collect();
    if stripped.len() != 11 {
        return false;
    }

    let first = stripped[0];
    !stripped.iter().all(|c| *c == first)
}
