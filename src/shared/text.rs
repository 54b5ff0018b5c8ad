//! Accent- and case-insensitive matching of motive labels.
//!
//! Backend counter keys do not always agree with the labels the report
//! columns are built from ("FÉRIAS" vs "Ferias", doubled spaces, ...).
//! Every lookup goes through [`fold_label`] so those variants meet.

use std::collections::HashMap;
use std::ops::Add;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::shared::validation::WHITESPACE_RUN_REGEX;

/// Strip diacritics, lowercase and collapse whitespace
pub fn fold_label(label: &str) -> String {
    let stripped: String = label
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();
    WHITESPACE_RUN_REGEX
        .replace_all(&stripped, " ")
        .to_lowercase()
}

pub fn labels_match(a: &str, b: &str) -> bool {
    fold_label(a) == fold_label(b)
}

/// Value stored under `label`, tolerating accent and case differences in the
/// map keys. An exact key wins; among folded matches the smallest key wins.
pub fn find_motive<V: Copy>(values: &HashMap<String, V>, label: &str) -> Option<V> {
    if let Some(value) = values.get(label) {
        return Some(*value);
    }

    let wanted = fold_label(label);
    values
        .iter()
        .filter(|(key, _)| fold_label(key) == wanted)
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(_, value)| *value)
}

/// Count for `label`, summing every key that folds to it. Absent labels
/// read as `V::default()`.
pub fn lookup_motive<V>(values: &HashMap<String, V>, label: &str) -> V
where
    V: Copy + Default + Add<Output = V>,
{
    let wanted = fold_label(label);
    values
        .iter()
        .filter(|(key, _)| fold_label(key) == wanted)
        .fold(V::default(), |sum, (_, value)| sum + *value)
}

/// Position of the column whose label matches `label`, if any
pub fn find_label<S: AsRef<str>>(labels: &[S], label: &str) -> Option<usize> {
    let wanted = fold_label(label);
    labels
        .iter()
        .position(|candidate| fold_label(candidate.as_ref()) == wanted)
}
