//! Frequency counting on top of [`ChainingMap`].

use std::cmp::Ordering;

use crate::ChainingMap;

/// The most frequent values of a sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mode {
    /// Every value reaching the highest count, in the map's iteration order
    pub values: Vec<String>,
    /// How often each of `values` occurs
    pub frequency: usize,
}

/// Finds the mode of `values`.
///
/// Counts are kept in a default [`ChainingMap`]. Ties are all reported, so a
/// multi-modal sequence yields several values sharing one frequency. An empty
/// sequence yields no values and a frequency of 0.
///
/// ```rust
/// use strmap::find_mode;
///
/// let mode = find_mode(["apple", "apple", "grape", "melon", "peach"]);
/// assert_eq!(mode.values, vec!["apple".to_string()]);
/// assert_eq!(mode.frequency, 2);
/// ```
pub fn find_mode<I>(values: I) -> Mode
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts: ChainingMap<usize> = ChainingMap::default();
    for value in values {
        let value = value.as_ref();
        let count = counts.get(value).copied().unwrap_or(0);
        counts.put(value, count.saturating_add(1));
    }

    let mut mode = Mode::default();
    for (value, &count) in &counts {
        match count.cmp(&mode.frequency) {
            Ordering::Greater => {
                mode.values.clear();
                mode.values.push(value.to_owned());
                mode.frequency = count;
            }
            Ordering::Equal => mode.values.push(value.to_owned()),
            Ordering::Less => {}
        }
    }

    mode
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut mode: Mode) -> Mode {
        mode.values.sort();
        mode
    }

    #[test]
    fn test_single_mode() {
        let mode = find_mode(["apple", "apple", "grape", "melon", "peach"]);
        assert_eq!(mode, Mode { values: vec!["apple".to_owned()], frequency: 2 });
    }

    #[test]
    fn test_multi_modal() {
        let input = ["2", "4", "2", "6", "8", "4", "1", "3", "4", "5", "7", "3", "3", "2"];
        let mode = sorted(find_mode(input));
        assert_eq!(mode.values, vec!["2", "3", "4"]);
        assert_eq!(mode.frequency, 3);
    }

    #[test]
    fn test_all_distinct() {
        let mode = sorted(find_mode(["Arch", "Manjaro", "Manjaro", "Mint", "Mint", "Mint", "Ubuntu"]));
        assert_eq!(mode.values, vec!["Mint"]);
        assert_eq!(mode.frequency, 3);

        let mode = sorted(find_mode(["one", "two", "three"]));
        assert_eq!(mode.values, vec!["one", "three", "two"]);
        assert_eq!(mode.frequency, 1);
    }

    #[test]
    fn test_empty_input() {
        let mode = find_mode(Vec::<String>::new());
        assert!(mode.values.is_empty());
        assert_eq!(mode.frequency, 0);
    }

    #[test]
    fn test_many_values_grow_the_counter() {
        let input: Vec<String> = (0..500).map(|i| (i % 50).to_string()).collect();
        let mode = find_mode(&input);
        assert_eq!(mode.values.len(), 50);
        assert_eq!(mode.frequency, 10);
    }
}
