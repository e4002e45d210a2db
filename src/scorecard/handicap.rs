//! Stroke index allocation across two halves of a combined card.

/// Positions of a half ordered hardest first. Holes without a usable stroke
/// index go last, in card order.
fn difficulty_order(handicaps: &[Option<i32>]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..handicaps.len()).collect();
    order.sort_by_key(|&pos| match handicaps[pos] {
        Some(h) if h > 0 => (0, h, pos),
        _ => (1, 0, pos),
    });
    order
}

/// Assign a fresh stroke index to every hole of two halves.
///
/// The hardest remaining hole of the first half takes the next odd slot and
/// the hardest remaining hole of the second half the next even slot. Once the
/// shorter half runs out the longer one continues with consecutive numbers, so
/// `m + n` holes always receive exactly `1..=m+n`.
///
/// Returns the new indices aligned with the input positions.
#[must_use]
pub fn interleave(first: &[Option<i32>], second: &[Option<i32>]) -> (Vec<u32>, Vec<u32>) {
    let first_order = difficulty_order(first);
    let second_order = difficulty_order(second);
    let mut first_out = vec![0u32; first.len()];
    let mut second_out = vec![0u32; second.len()];

    let mut next = 1u32;
    for rank in 0..first_order.len().max(second_order.len()) {
        if let Some(&pos) = first_order.get(rank) {
            first_out[pos] = next;
            next += 1;
        }
        if let Some(&pos) = second_order.get(rank) {
            second_out[pos] = next;
            next += 1;
        }
    }

    debug_assert!(first_out.iter().chain(&second_out).all(|&i| i > 0));
    (first_out, second_out)
}

/// Canonical 1..18 indices for an eighteen-hole card printed as two nines,
/// each with its own 1..9 stroke index: the front nine takes the odd numbers
/// and the back nine the even ones, hardest first.
#[must_use]
pub fn distribute_eighteen(front: &[i32], back: &[i32]) -> (Vec<u32>, Vec<u32>) {
    fn assign(half: &[i32], first_slot: u32) -> Vec<u32> {
        let as_options: Vec<Option<i32>> = half.iter().copied().map(Some).collect();
        let mut out = vec![0u32; half.len()];
        for (rank, pos) in difficulty_order(&as_options).into_iter().enumerate() {
            let rank = u32::try_from(rank).unwrap_or(u32::MAX / 2);
            out[pos] = first_slot + 2 * rank;
        }
        out
    }
    (assign(front, 1), assign(back, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[i32]) -> Vec<Option<i32>> {
        values.iter().copied().map(Some).collect()
    }

    #[test]
    fn equal_halves_alternate_odd_and_even() {
        let (front, back) = interleave(&some(&[3, 1, 2]), &some(&[2, 3, 1]));
        assert_eq!(front, vec![5, 1, 3]);
        assert_eq!(back, vec![4, 6, 2]);
    }

    #[test]
    fn uneven_halves_use_every_index_once() {
        let (front, back) = interleave(&some(&[9, 8, 7, 6, 5, 4, 3, 2, 1]), &some(&[2, 1, 3]));
        let mut all: Vec<u32> = front.iter().chain(&back).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (1..=12).collect::<Vec<u32>>());
        // hardest of the front nine is the last column
        assert_eq!(front[8], 1);
        assert_eq!(back[1], 2);
    }

    #[test]
    fn relative_difficulty_is_preserved_within_a_half() {
        let original = some(&[4, 2, 9, 1, 7]);
        let (front, _) = interleave(&original, &some(&[1, 2, 3, 4, 5]));
        for a in 0..original.len() {
            for b in 0..original.len() {
                if original[a] < original[b] {
                    assert!(front[a] < front[b]);
                }
            }
        }
    }

    #[test]
    fn missing_indices_sort_last() {
        let (front, back) = interleave(&[None, Some(1)], &[Some(2), None]);
        assert_eq!(front, vec![3, 1]);
        assert_eq!(back, vec![2, 4]);
    }

    #[test]
    fn eighteen_hole_distribution() {
        let (front, back) =
            distribute_eighteen(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(front, vec![1, 3, 5, 7, 9, 11, 13, 15, 17]);
        assert_eq!(back, vec![18, 16, 14, 12, 10, 8, 6, 4, 2]);
    }
}
