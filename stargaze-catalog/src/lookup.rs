//! Name resolution shared by every catalog table.

/// A catalog entry addressable by a primary name and optional aliases.
pub trait Named {
    fn name(&self) -> &str;

    fn aliases(&self) -> &[&'static str] {
        &[]
    }
}

/// Resolves `query` against `entries`.
///
/// The query is trimmed and compared case-insensitively. Primary names win
/// over aliases: the first entry whose name matches is returned, otherwise
/// the first entry with a matching alias. Linear in the table size.
pub fn find_by_name<'a, T: Named>(entries: &'a [T], query: &str) -> Option<&'a T> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    entries
        .iter()
        .find(|entry| entry.name().to_lowercase() == query)
        .or_else(|| {
            entries.iter().find(|entry| {
                entry
                    .aliases()
                    .iter()
                    .any(|alias| alias.to_lowercase() == query)
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        name: &'static str,
        aliases: &'static [&'static str],
    }

    impl Named for Entry {
        fn name(&self) -> &str {
            self.name
        }

        fn aliases(&self) -> &[&'static str] {
            self.aliases
        }
    }

    const TABLE: &[Entry] = &[
        Entry { name: "Alpha", aliases: &["Beta"] },
        Entry { name: "Beta", aliases: &[] },
        Entry { name: "Gamma", aliases: &["G", "伽马"] },
        Entry { name: "Delta", aliases: &["g"] },
    ];

    #[test]
    fn test_primary_name_beats_earlier_alias() {
        let hit = find_by_name(TABLE, "beta").unwrap();
        assert_eq!(hit.name, "Beta");
    }

    #[test]
    fn test_first_alias_match_wins() {
        let hit = find_by_name(TABLE, "G").unwrap();
        assert_eq!(hit.name, "Gamma");
    }

    #[test]
    fn test_trim_and_case() {
        assert_eq!(find_by_name(TABLE, "  GAMMA\t").unwrap().name, "Gamma");
        assert_eq!(find_by_name(TABLE, "伽马").unwrap().name, "Gamma");
    }

    #[test]
    fn test_not_found() {
        assert!(find_by_name(TABLE, "Epsilon").is_none());
        assert!(find_by_name(TABLE, "").is_none());
        assert!(find_by_name(TABLE, "   ").is_none());
        assert!(find_by_name::<Entry>(&[], "Alpha").is_none());
    }
}
