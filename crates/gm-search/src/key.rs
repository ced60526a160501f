/// Derives the search key of a documented name.
///
/// The name is lowercased, underscores are doubled and every other character outside of
/// `[a-z0-9]` is replaced by an underscore followed by the two hex digits of each of its
/// UTF-8 bytes.
///
/// ```
/// assert_eq!(gm_search::search_key("Vec3fRange"), "vec3frange");
/// assert_eq!(gm_search::search_key("mat3f.h"), "mat3f_2eh");
/// assert_eq!(gm_search::search_key("gm_types"), "gm__types");
/// ```
pub fn search_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());

    for byte in name.to_lowercase().bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' => key.push(byte as char),
            b'_' => key.push_str("__"),
            other => key.push_str(&format!("_{other:02x}")),
        }
    }

    key
}

/// Whether `key` could have been produced by [search_key].
pub fn is_valid_key(key: &str) -> bool {
    let bytes = key.as_bytes();
    if bytes.is_empty() {
        return false;
    }

    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'a'..=b'z' | b'0'..=b'9' => index += 1,
            b'_' => {
                let escape = &bytes[index + 1..];
                match escape {
                    [b'_', ..] => index += 2,
                    [high, low, ..] if is_lower_hex(*high) && is_lower_hex(*low) => index += 3,
                    _ => return false,
                }
            }
            _ => return false,
        }
    }

    true
}

fn is_lower_hex(byte: u8) -> bool {
    byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte)
}
