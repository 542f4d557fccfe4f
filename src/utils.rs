//! Common utility functions shared across the codebase.

/// Hashes a string the same way the `string-hash` npm package does.
///
/// djb2 variant: starts from 5381 and walks the UTF-16 code units from the
/// end of the string, computing `hash * 33 ^ unit` in 32-bit arithmetic.
///
/// # Examples
///
/// ```
/// use i18n_inject::utils::string_hash;
///
/// assert_eq!(string_hash(""), 5381);
/// assert_eq!(string_hash("a"), 177604);
/// ```
pub fn string_hash(input: &str) -> u32 {
    let units: Vec<u16> = input.encode_utf16().collect();
    let mut hash: i32 = 5381;
    for unit in units.iter().rev() {
        hash = hash.wrapping_mul(33) ^ i32::from(*unit);
    }
    hash as u32
}

/// Formats a number in base 36 with lowercase digits (`Number#toString(36)`).
pub fn to_base36(mut value: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(DIGITS[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.iter().rev().collect()
}

/// Converts text to camelCase, splitting on any non-alphanumeric character.
///
/// `en` stays `en`, `en-US` becomes `enUs`, `pt_BR` becomes `ptBr`.
pub fn camel_case(input: &str) -> String {
    let mut result = String::new();

    for (index, word) in input
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .enumerate()
    {
        let lower = word.to_lowercase();
        if index == 0 {
            result.push_str(&lower);
            continue;
        }
        let mut chars = lower.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

/// Pluralize a noun for summary lines ("1 file", "2 files").
pub fn pluralize(count: usize, singular: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}s", count, singular)
    }
}
