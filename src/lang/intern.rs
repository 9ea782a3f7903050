use std::collections::HashMap;
use std::rc::Rc;

/// ## Append-only text to index table
///
/// Indices start at 1 and follow first-seen order.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Intern {
    index: HashMap<Rc<str>, usize>,
    entries: Vec<Rc<str>>,
}

impl Intern {
    pub fn intern(&mut self, text: &str) -> usize {
        if let Some(idx) = self.index.get(text) {
            return *idx;
        }
        let text: Rc<str> = text.into();
        self.entries.push(text.clone());
        let idx = self.entries.len();
        self.index.insert(text, idx);
        idx
    }

    pub fn get(&self, text: &str) -> Option<usize> {
        self.index.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, text)| (i + 1, text.as_ref()))
    }
}

impl std::fmt::Display for Intern {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (idx, text) in self.iter() {
            writeln!(f, "{:>4}  {}", idx, text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut t = Intern::default();
        assert_eq!(t.intern("b"), 1);
        assert_eq!(t.intern("a"), 2);
        assert_eq!(t.intern("b"), 1);
        assert_eq!(t.len(), 2);
        assert_eq!(t.get("a"), Some(2));
        assert_eq!(t.get("c"), None);
        let all: Vec<(usize, &str)> = t.iter().collect();
        assert_eq!(all, vec![(1, "b"), (2, "a")]);
        assert_eq!(t.to_string(), "   1  b\n   2  a\n");
    }
}
