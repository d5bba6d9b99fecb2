/// At most one item chosen at a time. Choosing another replaces the
/// current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<K> {
    #[default]
    None,
    Selected(K),
}

impl<K: PartialEq> Selection<K> {
    pub fn select(&mut self, key: K) {
        *self = Self::Selected(key);
    }

    pub fn clear(&mut self) {
        *self = Self::None;
    }

    pub fn selected(&self) -> Option<&K> {
        match self {
            Self::None => None,
            Self::Selected(k) => Some(k),
        }
    }

    pub fn is_selected(&self, key: &K) -> bool {
        self.selected() == Some(key)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Two-state overlay. Opening an open modal or closing a closed one is a
/// no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

impl ModalState {
    pub fn open(&mut self) {
        *self = Self::Open;
    }

    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_replace_then_close() {
        let mut s = Selection::default();
        assert!(s.is_none());
        s.select("postal-carrier");
        s.select("shift-lead");
        assert_eq!(s.selected(), Some(&"shift-lead"));
        assert!(!s.is_selected(&"postal-carrier"));
        s.clear();
        assert!(s.is_none());
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_select_same_twice_is_idempotent() {
        let mut once = Selection::default();
        once.select("shift-lead");
        let mut twice = Selection::default();
        twice.select("shift-lead");
        twice.select("shift-lead");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_modal_transitions() {
        let mut m = ModalState::default();
        assert!(!m.is_open());
        m.open();
        assert!(m.is_open());
        m.open();
        assert!(m.is_open());
        m.close();
        assert_eq!(m, ModalState::Closed);
        m.close();
        assert_eq!(m, ModalState::Closed);
    }
}
