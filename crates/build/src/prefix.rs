// external crates
use itertools::Itertools;

/// Remove empty and repeated entries from a search path
///
/// The first occurrence of every entry is kept, so the search order is
/// unchanged.
///
/// ```rust
/// # use ftools_build::dedup_prefix;
/// assert_eq!(
///     dedup_prefix("/opt/frensie/bin::/usr/bin:/opt/frensie/bin:/bin", ':'),
///     "/opt/frensie/bin:/usr/bin:/bin"
/// );
/// ```
pub fn dedup_prefix(value: &str, separator: char) -> String {
    value
        .split(separator)
        .filter(|entry| !entry.is_empty())
        .unique()
        .join(&separator.to_string())
}

/// Put `new` at the front of a search path, dropping any later copy
///
/// ```rust
/// # use ftools_build::prepend_unique;
/// assert_eq!(prepend_unique("/usr/bin:/opt/bin", "/opt/bin", ':'), "/opt/bin:/usr/bin");
/// assert_eq!(prepend_unique("", "/opt/bin", ':'), "/opt/bin");
/// ```
pub fn prepend_unique(existing: &str, new: &str, separator: char) -> String {
    let mut combined = String::from(new);
    combined.push(separator);
    combined.push_str(existing);
    dedup_prefix(&combined, separator)
}
