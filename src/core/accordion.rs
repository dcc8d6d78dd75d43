//! Exclusive FAQ accordion: opening one item closes the others

/// Which item of an accordion group is open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionGroup {
    len: usize,
    open: Option<usize>,
}

impl AccordionGroup {
    pub fn new(len: usize) -> Self {
        Self { len, open: None }
    }

    /// Header click on item `index`
    ///
    /// Opens it and closes any other item, or closes it if it was the open
    /// one. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }

        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let group = AccordionGroup::new(3);
        assert!((0..3).all(|i| !group.is_open(i)));
    }

    #[test]
    fn test_opening_one_closes_the_other() {
        let mut group = AccordionGroup::new(3);
        group.toggle(0);
        assert!(group.is_open(0));

        group.toggle(2);
        assert!(!group.is_open(0));
        assert!(group.is_open(2));
    }

    #[test]
    fn test_toggle_open_item_closes_it() {
        let mut group = AccordionGroup::new(2);
        group.toggle(1);
        group.toggle(1);
        assert!(!group.is_open(1));
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut group = AccordionGroup::new(2);
        group.toggle(1);
        group.toggle(5);
        assert!(group.is_open(1));
        assert!(!group.is_open(5));

        let mut empty = AccordionGroup::default();
        empty.toggle(0);
        assert!(!empty.is_open(0));
    }
}
