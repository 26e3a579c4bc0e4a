//! Ordered submission record model.

////////////////////////////////////////////////////////////////////////////////
// #region SubmissionRecord

/// One form's worth of field-name/value data, in arrival order.
///
/// Keys are arbitrary; the record never rejects unknown names. Column order of
/// a freshly created store follows the order kept here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecSubmissionRecord {
    l_fields: Vec<(String, String)>,
}

impl SpecSubmissionRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(name, value)` pairs; the first value of a repeated name wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new();
        for (key, value) in pairs {
            let key = key.into();
            if record.contains_key(&key) {
                continue;
            }
            record.l_fields.push((key, value.into()));
        }
        record
    }

    /// Set `key`, replacing in place when present and appending otherwise.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.l_fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, v)) => *v = value,
            None => self.l_fields.push((key, value)),
        }
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.l_fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value for `key`, or `""` when absent.
    pub fn get_or_empty(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.l_fields.iter().any(|(k, _)| k == key)
    }

    /// Keys in encounter order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.l_fields.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, value)` pairs in encounter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.l_fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.l_fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.l_fields.is_empty()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SpecSubmissionRecord;

    #[test]
    fn from_pairs_keeps_first_value_and_position() {
        let record = SpecSubmissionRecord::from_pairs([
            ("tipo", "Incidente"),
            ("descricao", "a"),
            ("tipo", "Outro"),
        ]);

        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["tipo", "descricao"]);
        assert_eq!(record.get("tipo"), Some("Incidente"));
    }

    #[test]
    fn insert_replaces_in_place_or_appends() {
        let mut record = SpecSubmissionRecord::from_pairs([("a", "1"), ("b", "2")]);
        record.insert("a", "9");
        record.insert("c", "3");

        assert_eq!(
            record.iter().collect::<Vec<_>>(),
            vec![("a", "9"), ("b", "2"), ("c", "3")]
        );
        assert_eq!(record.get_or_empty("missing"), "");
    }
}
