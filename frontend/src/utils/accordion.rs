/// At most one panel open at a time, identified by index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(self, index: usize) -> Self {
        if self.open == Some(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_collapsed() {
        let accordion = Accordion::new();
        assert!((0..5).all(|i| !accordion.is_open(i)));
    }

    #[test]
    fn opening_one_closes_the_other() {
        let accordion = Accordion::new().toggle(1).toggle(3);
        assert!(accordion.is_open(3));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn toggling_the_open_panel_closes_it() {
        let accordion = Accordion::new().toggle(2).toggle(2);
        assert!(!accordion.is_open(2));
        assert_eq!(accordion, Accordion::new());
    }
}
