//! String similarity - edit distance and normalized similarity ratio.
//!
//! Both functions work on UTF-16 code units so that lengths and distances
//! agree with what a browser reports for the same input.

/// Computes the Levenshtein edit distance between `a` and `b`.
///
/// Insertion, deletion and substitution each cost 1.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();
    distance(&a, &b)
}

/// Returns the normalized similarity of `a` and `b` in `[0, 1]`.
///
/// `(max_len - levenshtein(a, b)) / max_len`, where `1.0` means identical.
/// Two empty strings are identical and score `1.0`.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<u16> = a.encode_utf16().collect();
    let b: Vec<u16> = b.encode_utf16().collect();

    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let dist = distance(&a, &b);
    (longest - dist) as f64 / longest as f64
}

// Two-row DP over the (b + 1) x (a + 1) table.
fn distance(a: &[u16], b: &[u16]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=a.len()).collect();
    let mut curr = vec![0; a.len() + 1];

    for i in 1..=b.len() {
        curr[0] = i;
        for j in 1..=a.len() {
            curr[j] = if b[i - 1] == a[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(curr[j - 1]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_classic() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }

    #[test]
    fn test_levenshtein_empty() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abcd"), 4);
    }

    #[test]
    fn test_levenshtein_is_symmetric() {
        assert_eq!(levenshtein("johnsmith", "jsmith"), levenshtein("jsmith", "johnsmith"));
    }

    #[test]
    fn test_levenshtein_counts_code_units() {
        // U+1F600 is a surrogate pair, two units against one
        assert_eq!(levenshtein("\u{1F600}", "a"), 2);
        assert_eq!(levenshtein("hasło", "haslo"), 1);
    }

    #[test]
    fn test_ratio_kitten_sitting() {
        let r = ratio("kitten", "sitting");
        assert!((r - 4.0 / 7.0).abs() < 1e-9, "got {}", r);
        assert!((r - 0.571).abs() < 1e-3);
    }

    #[test]
    fn test_ratio_identical() {
        assert_eq!(ratio("johnsmith", "johnsmith"), 1.0);
    }

    #[test]
    fn test_ratio_both_empty() {
        assert_eq!(ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_one_empty() {
        assert_eq!(ratio("", "abc"), 0.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(ratio("abc", "xyz"), 0.0);
    }
}
