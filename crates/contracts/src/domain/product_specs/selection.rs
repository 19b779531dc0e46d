use serde::{Deserialize, Serialize};

/// Which of the two model selectors a change event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectorSlot {
    First,
    Second,
}

/// The pair of independently selected record identifiers.
///
/// Both start unset. Nothing forces the two to differ; selecting the same
/// identifier in both slots is permitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    pub first: Option<String>,
    pub second: Option<String>,
}

impl SelectionState {
    pub fn get(&self, slot: SelectorSlot) -> Option<&str> {
        match slot {
            SelectorSlot::First => self.first.as_deref(),
            SelectorSlot::Second => self.second.as_deref(),
        }
    }

    pub fn set(&mut self, slot: SelectorSlot, id: Option<String>) {
        match slot {
            SelectorSlot::First => self.first = id,
            SelectorSlot::Second => self.second = id,
        }
    }

    /// True when neither selector holds an identifier.
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unset() {
        let selection = SelectionState::default();
        assert!(selection.is_empty());
        assert_eq!(selection.get(SelectorSlot::First), None);
        assert_eq!(selection.get(SelectorSlot::Second), None);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut selection = SelectionState::default();
        selection.set(SelectorSlot::First, Some("a".to_string()));
        assert_eq!(selection.get(SelectorSlot::First), Some("a"));
        assert_eq!(selection.get(SelectorSlot::Second), None);
        assert!(!selection.is_empty());

        selection.set(SelectorSlot::Second, Some("a".to_string()));
        assert_eq!(selection.get(SelectorSlot::Second), Some("a"));

        selection.set(SelectorSlot::First, None);
        assert_eq!(selection.get(SelectorSlot::First), None);
        assert!(!selection.is_empty());
    }
}
