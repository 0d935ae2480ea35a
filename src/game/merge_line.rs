/// Drop the zero entries of a line, keeping the nonzero order.
pub fn strip(line: &[u32]) -> Vec<u32> {
    line.iter().copied().filter(|&value| value != 0).collect()
}

/// Merge one traversal line toward its low index: strip the gaps, combine
/// each adjacent equal pair once (the left entry takes the sum, the right one
/// is zeroed and never revisited), strip again, and pad back to the original
/// length with zeros.
pub fn merge_line(line: &[u32]) -> Vec<u32> {
    let mut merged = strip(line);
    for i in 1..merged.len() {
        if merged[i - 1] == merged[i] {
            merged[i - 1] += merged[i];
            merged[i] = 0;
        }
    }
    let mut merged = strip(&merged);
    merged.resize(line.len(), 0);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_preserves_order() {
        assert_eq!(strip(&[0, 2, 0, 4]), vec![2, 4]);
        assert_eq!(strip(&[0, 0, 0]), Vec::<u32>::new());
        assert_eq!(strip(&[2, 4, 8]), vec![2, 4, 8]);
    }

    #[test]
    fn gaps_close_before_merging() {
        assert_eq!(merge_line(&[0, 2, 0, 2]), vec![4, 0, 0, 0]);
        assert_eq!(merge_line(&[2, 0, 2, 4]), vec![4, 4, 0, 0]);
    }

    #[test]
    fn each_tile_merges_at_most_once() {
        assert_eq!(merge_line(&[2, 2, 2, 2]), vec![4, 4, 0, 0]);
        assert_eq!(merge_line(&[2, 2, 2]), vec![4, 2, 0]);
        assert_eq!(merge_line(&[4, 2, 2, 0]), vec![4, 4, 0, 0]);
    }

    #[test]
    fn pairs_merge_left_to_right() {
        assert_eq!(merge_line(&[2, 2, 4, 4]), vec![4, 8, 0, 0]);
        assert_eq!(merge_line(&[4, 4, 8, 8]), vec![8, 16, 0, 0]);
    }

    #[test]
    fn all_zero_line_is_a_no_op() {
        assert_eq!(merge_line(&[0, 0, 0, 0]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn packed_line_without_pairs_is_unchanged() {
        assert_eq!(merge_line(&[2, 4, 8, 16]), vec![2, 4, 8, 16]);
    }
}
