//! Letter-reveal hint for the names of missing neighbours.

/// Highest names-hint level; each level reveals one more leading character.
pub const MAX_NAMES_HINT_LEVEL: u8 = 3;

/// Masks `name` so that only its first `level` characters are readable.
///
/// Later alphabetic characters become `_`, one per character; spaces,
/// hyphens, apostrophes and other non-letters stay visible so the shape of
/// the name is kept.
pub fn mask_name(name: &str, level: u8) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if i < usize::from(level) || !c.is_alphabetic() {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_name_level_one_reveals_first_letter() {
        assert_eq!(mask_name("Spain", 1), "S____");
    }

    #[test]
    fn test_mask_name_level_zero_hides_every_letter() {
        assert_eq!(mask_name("Chad", 0), "____");
    }

    #[test]
    fn test_mask_name_keeps_separators_visible() {
        assert_eq!(mask_name("Guinea-Bissau", 2), "Gu____-______");
        assert_eq!(mask_name("Côte d'Ivoire", 3), "Côt_ _'______");
    }

    #[test]
    fn test_mask_name_counts_characters_not_bytes() {
        assert_eq!(mask_name("Österreich", 1), "Ö_________");
    }

    #[test]
    fn test_mask_name_level_longer_than_name_reveals_all() {
        assert_eq!(mask_name("Iran", 3), "Ira_");
        assert_eq!(mask_name("Mali", 10), "Mali");
    }
}
