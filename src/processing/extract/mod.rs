//! Per-section entry extraction
//!
//! Each extractor is a fold over the section's lines carrying the completed
//! entries and one open entry. A boundary line flushes the open entry into the
//! completed list when it carries enough data to be worth keeping.

pub mod education;
pub mod experience;
pub mod projects;
pub mod skills;

/// An entry that can be discarded when it never received its identifying field.
pub trait Flushable {
    fn is_flushable(&self) -> bool;
}

/// Fold state: completed entries plus the currently open one.
#[derive(Debug, Default)]
pub struct EntryAccumulator<T> {
    completed: Vec<T>,
    current: T,
}

impl<T: Flushable + Default> EntryAccumulator<T> {
    /// Close the open entry and start `next`.
    pub fn start(self, next: T) -> Self {
        let mut completed = self.completed;
        if self.current.is_flushable() {
            completed.push(self.current);
        }
        Self {
            completed,
            current: next,
        }
    }

    /// Apply an edit to the open entry.
    pub fn update(mut self, edit: impl FnOnce(&mut T)) -> Self {
        edit(&mut self.current);
        self
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn finish(self) -> Vec<T> {
        self.start(T::default()).completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Named(String);

    impl Flushable for Named {
        fn is_flushable(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[test]
    fn test_flush_skips_empty_entries() {
        let entries = EntryAccumulator::default()
            .start(Named("first".into()))
            .start(Named(String::new()))
            .start(Named("third".into()))
            .update(|n| n.0.push('!'))
            .finish();

        assert_eq!(entries, vec![Named("first".into()), Named("third!".into())]);
    }

    #[test]
    fn test_empty_fold_yields_nothing() {
        let entries: Vec<Named> = EntryAccumulator::default().finish();
        assert!(entries.is_empty());
    }
}
