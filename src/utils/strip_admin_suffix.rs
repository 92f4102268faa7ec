use crate::constants::ADMIN_UNIT_SUFFIXES;

/// Strips trailing administrative-unit suffixes (`COUNTY`, `PARISH`, ...) from `name`.
///
/// A suffix is only removed when it is a whole trailing token, i.e. it is preceded by a
/// space or is the entire string. Stripping repeats until no suffix remains, so
/// `"CHARLES CITY COUNTY"` becomes `"CHARLES"`. Matching is ASCII case-insensitive.
pub fn strip_admin_suffix(name: &str) -> &str {
    let mut stripped = name.trim_end();

    loop {
        let remainder = ADMIN_UNIT_SUFFIXES.iter().find_map(|suffix| {
            let split_at = stripped.len().checked_sub(suffix.len())?;
            if !stripped.is_char_boundary(split_at) {
                return None;
            }

            let (rest, tail) = stripped.split_at(split_at);
            if tail.eq_ignore_ascii_case(suffix) && (rest.is_empty() || rest.ends_with(' ')) {
                Some(rest)
            } else {
                None
            }
        });

        match remainder {
            Some(rest) => stripped = rest.trim_end(),
            None => return stripped,
        }
    }
}
