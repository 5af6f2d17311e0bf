use std::collections::HashSet;

/// Label holding the metric name in prometheus.
pub const METRIC_NAME_LABEL: &str = "__name__";

#[derive(Hash, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Label {
    name: String,
    value: String,
}

impl Label {
    pub fn from(name: &str, value: &str) -> Label {
        Label {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn new(name: String, value: String) -> Label {
        Label { name, value }
    }

    pub fn name_value(self) -> (String, String) {
        (self.name, self.value)
    }

    pub fn name(&self) -> &String {
        &self.name
    }

    pub fn value(&self) -> &String {
        &self.value
    }
}

impl From<&Label> for crate::proto::Label {
    fn from(l: &Label) -> Self {
        crate::proto::Label {
            name: l.name.clone(),
            value: l.value.clone(),
            ..Default::default()
        }
    }
}

impl From<&crate::proto::Label> for Label {
    fn from(l: &crate::proto::Label) -> Self {
        Label::new(l.name.clone(), l.value.clone())
    }
}

/// Label set of one series. Keeps insertion order, which is also wire order.
#[derive(Hash, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new() -> Labels {
        Labels(Vec::new())
    }

    pub fn from_vec(labels: Vec<Label>) -> Labels {
        Labels(labels)
    }

    pub fn add(&mut self, label: Label) {
        self.0.push(label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|l| l.name == name)
            .map(|l| l.value.as_str())
    }

    pub fn has_duplicate_names(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        !self.0.iter().all(|l| seen.insert(l.name.as_str()))
    }

    pub fn sort(&mut self) {
        self.0.sort()
    }

    pub fn vec(&self) -> &Vec<Label> {
        &self.0
    }
}

impl From<Vec<Label>> for Labels {
    fn from(labels: Vec<Label>) -> Self {
        Labels(labels)
    }
}

#[cfg(test)]
mod test {
    use crate::common::label::{Label, Labels};

    #[test]
    fn test_get_label() {
        let labels = Labels::from(vec![Label::from("__name__", "up"), Label::from("job", "node")]);
        assert_eq!(labels.get("job"), Some("node"));
        assert_eq!(labels.get("instance"), None);
    }

    #[test]
    fn test_duplicate_names() {
        let mut labels = Labels::new();
        labels.add(Label::from("job", "a"));
        labels.add(Label::from("instance", "b"));
        assert!(!labels.has_duplicate_names());
        labels.add(Label::from("job", "c"));
        assert!(labels.has_duplicate_names());
    }

    #[test]
    fn test_sort() {
        let mut labels = Labels::from(vec![Label::from("b", "1"), Label::from("a", "2")]);
        labels.sort();
        assert_eq!(labels.vec()[0].name(), "a");
    }
}
