use std::collections::HashSet;

/// Returns `file_name` unchanged if it is free, otherwise the first
/// `"{base} (n).{ext}"` (n = 1, 2, ...) not present in `existing`.
pub fn resolve_collision(file_name: &str, existing: &HashSet<String>) -> String {
    if !existing.contains(file_name) {
        return file_name.to_string();
    }

    let (base, ext) = match file_name.rsplit_once('.') {
        Some((base, ext)) => (base, Some(ext)),
        None => (file_name, None),
    };

    (1u64..)
        .map(|counter| match ext {
            Some(ext) => format!("{base} ({counter}).{ext}"),
            None => format!("{base} ({counter})"),
        })
        .find(|candidate| !existing.contains(candidate))
        .expect("a finite set leaves some counter free")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_free_name_unchanged() {
        assert_eq!(resolve_collision("b.txt", &names(&[])), "b.txt");
    }

    #[test]
    fn test_first_collision_gets_one() {
        assert_eq!(resolve_collision("a.txt", &names(&["a.txt"])), "a (1).txt");
    }

    #[test]
    fn test_skips_taken_counters() {
        assert_eq!(
            resolve_collision("a.txt", &names(&["a.txt", "a (1).txt"])),
            "a (2).txt"
        );
    }

    #[test]
    fn test_gap_in_counters_is_reused() {
        assert_eq!(
            resolve_collision("a.txt", &names(&["a.txt", "a (2).txt"])),
            "a (1).txt"
        );
    }

    #[test]
    fn test_splits_on_last_dot() {
        assert_eq!(
            resolve_collision("my.resume.pdf", &names(&["my.resume.pdf"])),
            "my.resume (1).pdf"
        );
    }

    #[test]
    fn test_name_without_extension() {
        assert_eq!(resolve_collision("README", &names(&["README"])), "README (1)");
    }

    #[test]
    fn test_unrelated_names_ignored() {
        assert_eq!(
            resolve_collision("cv.pdf", &names(&["cv.txt", "other.pdf"])),
            "cv.pdf"
        );
    }
}
