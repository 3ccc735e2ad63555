use crate::catalogue::ActionCatalogue;

/// The recognised action of a sentence and where it appeared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMatch {
    pub set_index: usize,
    pub position: usize,
}

/// Find the first token (in sentence order) that is a catalogue word.
pub fn find_action<S: AsRef<str>>(tokens: &[S], catalogue: &ActionCatalogue) -> Option<ActionMatch> {
    tokens.iter().enumerate().find_map(|(position, token)| {
        catalogue
            .lookup(&token.as_ref().to_lowercase())
            .map(|set_index| ActionMatch {
                set_index,
                position,
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> ActionCatalogue {
        ActionCatalogue::parse("show, teach\nmove, go\nstop\nfollow, watch").unwrap()
    }

    #[test]
    fn test_first_match_by_position() {
        let catalogue = catalogue();
        // "watch" sorts after "stop" but appears first
        let found = find_action(&["please", "watch", "and", "stop"], &catalogue).unwrap();
        assert_eq!(found, ActionMatch { set_index: 3, position: 1 });
    }

    #[test]
    fn test_case_insensitive() {
        let found = find_action(&["Go", "left"], &catalogue()).unwrap();
        assert_eq!(found.set_index, 1);
        assert_eq!(found.position, 0);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(find_action(&["blorg", "me"], &catalogue()), None);
        assert_eq!(find_action::<&str>(&[], &catalogue()), None);
        let empty = ActionCatalogue::parse("").unwrap();
        assert_eq!(find_action(&["stop"], &empty), None);
    }
}
