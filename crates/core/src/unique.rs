/// The duplicate diff of an ordered value list: the value at position
/// `i` is reported iff it reoccurs at some later position `j > i`.
///
/// This is all-but-last-occurrence semantics — a value present three
/// times is reported twice. The diff feeds the rejection message
/// verbatim, so the exact shape is part of the contract.
pub fn duplicate_values(values: &[String]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|(i, value)| values[i + 1..].contains(value))
        .map(|(_, value)| value.clone())
        .collect()
}

/// Check an ordered value list for duplicates.
///
/// Compares the first-occurrence dedup against the original list; if
/// they are equal the list is unique, otherwise `Err` carries the
/// duplicate diff in order.
pub fn check_local_unique(values: &[String]) -> Result<(), Vec<String>> {
    let mut seen = Vec::with_capacity(values.len());
    for value in values {
        if !seen.contains(value) {
            seen.push(value.clone());
        }
    }
    if seen.len() == values.len() {
        Ok(())
    } else {
        Err(duplicate_values(values))
    }
}
