use serde::Serializer;

/// Prices are shown to two decimal places.
pub fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64((price * 100.0).round() / 100.0)
}

pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Row letter for a zero-based row index: A..Z, then AA, AB, ...
pub fn row_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.reverse();
    String::from_utf8(label).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_labels_roll_over_after_z() {
        assert_eq!(row_label(0), "A");
        assert_eq!(row_label(4), "E");
        assert_eq!(row_label(25), "Z");
        assert_eq!(row_label(26), "AA");
        assert_eq!(row_label(27), "AB");
        assert_eq!(row_label(52), "BA");
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ignore_case("The Grand Cinema", "grand"));
        assert!(contains_ignore_case("Downtown", ""));
        assert!(!contains_ignore_case("Downtown", "uptown"));
    }
}
