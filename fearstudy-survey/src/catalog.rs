//! Fear catalog: distinct effective fears in first-occurrence order

use crate::subject::Subject;
use std::ops::Index;

/// Ordered list of distinct fear labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FearCatalog {
    labels: Vec<String>,
}

impl FearCatalog {
    /// Build the catalog from subjects' effective fears
    pub fn from_subjects(subjects: &[Subject]) -> Self {
        Self::from_labels(subjects.iter().map(Subject::effective_fear))
    }

    /// Build a catalog from labels, keeping first occurrences only
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::default();
        for label in labels {
            catalog.push_unique(label.as_ref());
        }
        catalog
    }

    fn push_unique(&mut self, label: &str) {
        if !self.contains(label) {
            self.labels.push(label.to_string());
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.labels.get(position).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Index<usize> for FearCatalog {
    type Output = str;

    fn index(&self, position: usize) -> &str {
        &self.labels[position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(index: usize, fear: &str, greatest: &str) -> Subject {
        Subject::parse(index, &format!("{},{},1,No,1,No,No", fear, greatest)).unwrap()
    }

    #[test]
    fn test_first_occurrence_order() {
        let subjects = vec![
            subject(1, "Heights", ""),
            subject(2, "Spiders", ""),
            subject(3, "Heights", ""),
            subject(4, "Flying", ""),
            subject(5, "Spiders", ""),
        ];
        let catalog = FearCatalog::from_subjects(&subjects);

        assert_eq!(catalog.labels(), ["Heights", "Spiders", "Flying"]);
    }

    #[test]
    fn test_other_uses_greatest() {
        let subjects = vec![
            subject(1, "Other", "Clowns"),
            subject(2, "Clowns", ""),
            subject(3, "Other", "Dark"),
        ];
        let catalog = FearCatalog::from_subjects(&subjects);

        assert_eq!(catalog.labels(), ["Clowns", "Dark"]);
        assert!(!catalog.contains("Other"));
    }

    #[test]
    fn test_no_duplicates_for_any_ordering() {
        let orderings = [
            ["A", "B", "A", "C", "B"],
            ["C", "C", "C", "A", "B"],
            ["B", "A", "C", "A", "B"],
        ];
        for ordering in orderings {
            let catalog = FearCatalog::from_labels(ordering);
            let mut seen = std::collections::HashSet::new();
            assert!(catalog.iter().all(|label| seen.insert(label.to_string())));
            assert_eq!(catalog.len(), 3);
            assert_eq!(&catalog[0], ordering[0]);
        }
    }

    #[test]
    fn test_empty_subjects_give_empty_catalog() {
        let catalog = FearCatalog::from_subjects(&[]);
        assert!(catalog.is_empty());
        assert_eq!(catalog.get(0), None);
    }
}
