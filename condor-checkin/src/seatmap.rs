use std::collections::HashSet;

use condor_domain::Seat;

/// Cabin columns in physical order. Column comparison is case-insensitive;
/// labels outside this alphabet never match anything.
const COLUMNS: [char; 6] = ['A', 'B', 'C', 'D', 'E', 'F'];

fn column_index(label: &str) -> Option<usize> {
    let mut chars = label.chars();
    let first = chars.next()?.to_ascii_uppercase();
    if chars.next().is_some() {
        return None;
    }
    COLUMNS.iter().position(|&c| c == first)
}

/// Two seats are adjacent iff they share a row and their column positions
/// differ by exactly 1.
pub fn are_adjacent(a: &Seat, b: &Seat) -> bool {
    if a.seat_row != b.seat_row {
        return false;
    }
    match (column_index(&a.seat_column), column_index(&b.seat_column)) {
        (Some(ca), Some(cb)) => ca.abs_diff(cb) == 1,
        _ => false,
    }
}

/// First adjacent pair in stable scan order (outer index ascending, inner
/// index after it). Used to seat a minor next to an accompanying adult.
/// O(n²), fine for the per-group candidate sets this runs on.
pub fn find_adjacent_pair(seats: &[Seat]) -> Option<(Seat, Seat)> {
    for i in 0..seats.len() {
        for j in i + 1..seats.len() {
            if are_adjacent(&seats[i], &seats[j]) {
                return Some((seats[i].clone(), seats[j].clone()));
            }
        }
    }
    None
}

// Buckets seats by row, keeping rows in the order they first appear in the
// input. Scan order is part of the search contract, so a HashMap won't do.
fn rows_in_encounter_order(seats: &[Seat]) -> Vec<Vec<Seat>> {
    let mut order: Vec<i32> = Vec::new();
    let mut rows: Vec<Vec<Seat>> = Vec::new();
    for seat in seats {
        match order.iter().position(|&row| row == seat.seat_row) {
            Some(idx) => rows[idx].push(seat.clone()),
            None => {
                order.push(seat.seat_row);
                rows.push(vec![seat.clone()]);
            }
        }
    }
    rows
}

fn columns_in_encounter_order(seats: &[Seat]) -> Vec<Vec<Seat>> {
    let mut order: Vec<String> = Vec::new();
    let mut columns: Vec<Vec<Seat>> = Vec::new();
    for seat in seats {
        let key = seat.seat_column.to_ascii_uppercase();
        match order.iter().position(|k| *k == key) {
            Some(idx) => columns[idx].push(seat.clone()),
            None => {
                order.push(key);
                columns.push(vec![seat.clone()]);
            }
        }
    }
    columns
}

/// Finds `size` seats in one row with strictly consecutive columns, e.g.
/// A-B-C-D. Rows are scanned in first-encounter order; the first full run
/// wins.
pub fn find_contiguous_block_same_row(seats: &[Seat], size: usize) -> Option<Vec<Seat>> {
    if size == 0 {
        return None;
    }
    for mut row in rows_in_encounter_order(seats) {
        row.sort_by_key(|s| column_index(&s.seat_column));
        if row.len() < size {
            continue;
        }
        for window in row.windows(size) {
            let consecutive = window.windows(2).all(|pair| {
                matches!(
                    (
                        column_index(&pair[0].seat_column),
                        column_index(&pair[1].seat_column),
                    ),
                    (Some(a), Some(b)) if b == a + 1
                )
            });
            if consecutive {
                return Some(window.to_vec());
            }
        }
    }
    None
}

/// Fallback when no perfect block exists. Tries, in order:
/// 1. same row, greedily accepting a column step of 1 or 2 (at most one
///    skipped seat between accepted ones); first row that fills wins, no
///    ranking of rows by gap count;
/// 2. a vertical run: one column, strictly consecutive rows.
pub fn find_near_block(seats: &[Seat], size: usize) -> Option<Vec<Seat>> {
    if size == 0 {
        return None;
    }

    for mut row in rows_in_encounter_order(seats) {
        row.sort_by_key(|s| column_index(&s.seat_column));
        let mut picked: Vec<Seat> = Vec::new();
        for seat in &row {
            if picked.len() == size {
                break;
            }
            match picked.last() {
                None => picked.push(seat.clone()),
                Some(prev) => {
                    if let (Some(prev_col), Some(col)) =
                        (column_index(&prev.seat_column), column_index(&seat.seat_column))
                    {
                        let step = col as i64 - prev_col as i64;
                        if step == 1 || step == 2 {
                            picked.push(seat.clone());
                        }
                    }
                }
            }
        }
        if picked.len() == size {
            return Some(picked);
        }
    }

    for mut column in columns_in_encounter_order(seats) {
        column.sort_by_key(|s| s.seat_row);
        if column.len() < size {
            continue;
        }
        for window in column.windows(size) {
            let consecutive = window
                .windows(2)
                .all(|pair| pair[1].seat_row == pair[0].seat_row + 1);
            if consecutive {
                return Some(window.to_vec());
            }
        }
    }

    None
}

/// Removes every seat whose id is in `ids`, in place, keeping the relative
/// order of the remainder.
pub fn remove_seats(seats: &mut Vec<Seat>, ids: &HashSet<i64>) {
    seats.retain(|seat| !ids.contains(&seat.seat_id));
}

/// The shared, shrinking set of seats still open for assignment during one
/// check-in run. Owned by the engine invocation and threaded through every
/// stage, so two purchase groups can never race for the same seat.
#[derive(Debug, Clone)]
pub struct SeatPool {
    seats: Vec<Seat>,
}

impl SeatPool {
    /// Builds the pool from the airplane inventory, excluding seats already
    /// referenced by a boarding pass.
    pub fn new(inventory: &[Seat], taken: &HashSet<i64>) -> Self {
        Self {
            seats: inventory
                .iter()
                .filter(|seat| !taken.contains(&seat.seat_id))
                .cloned()
                .collect(),
        }
    }

    /// Snapshot of the pool filtered to one seat type. A seat never crosses
    /// seat-type boundaries.
    pub fn compatible(&self, seat_type_id: i64) -> Vec<Seat> {
        self.seats
            .iter()
            .filter(|seat| seat.seat_type_id == seat_type_id)
            .cloned()
            .collect()
    }

    pub fn remove(&mut self, ids: &HashSet<i64>) {
        remove_seats(&mut self.seats, ids);
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seat(seat_id: i64, seat_row: i32, seat_column: &str) -> Seat {
        Seat {
            seat_id,
            seat_row,
            seat_column: seat_column.to_string(),
            seat_type_id: 1,
            airplane_id: 1,
        }
    }

    #[test]
    fn adjacency_requires_same_row_and_one_column_step() {
        assert!(are_adjacent(&seat(1, 5, "A"), &seat(2, 5, "B")));
        assert!(are_adjacent(&seat(1, 5, "B"), &seat(2, 5, "A")));
        assert!(!are_adjacent(&seat(1, 5, "A"), &seat(2, 5, "C")));
        assert!(!are_adjacent(&seat(1, 5, "A"), &seat(2, 6, "B")));
    }

    #[test]
    fn adjacency_is_case_insensitive() {
        assert!(are_adjacent(&seat(1, 3, "c"), &seat(2, 3, "D")));
    }

    #[test]
    fn unknown_column_labels_never_match() {
        assert!(!are_adjacent(&seat(1, 3, "A"), &seat(2, 3, "Z")));
    }

    #[test]
    fn adjacent_pair_respects_scan_order() {
        // (A, D) is not a pair; (D, E) comes before (E, F) in scan order.
        let seats = vec![seat(1, 1, "A"), seat(2, 1, "D"), seat(3, 1, "E"), seat(4, 1, "F")];
        let (first, second) = find_adjacent_pair(&seats).unwrap();
        assert_eq!((first.seat_id, second.seat_id), (2, 3));
    }

    #[test]
    fn adjacent_pair_none_when_all_isolated() {
        let seats = vec![seat(1, 1, "A"), seat(2, 1, "C"), seat(3, 2, "B")];
        assert!(find_adjacent_pair(&seats).is_none());
    }

    #[test]
    fn contiguous_block_found_in_first_row_encountered() {
        let seats = vec![
            seat(1, 1, "A"),
            seat(2, 1, "B"),
            seat(3, 1, "C"),
            seat(4, 2, "A"),
            seat(5, 2, "B"),
            seat(6, 2, "C"),
        ];
        let block = find_contiguous_block_same_row(&seats, 3).unwrap();
        assert_eq!(block.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn contiguous_block_skips_rows_with_holes() {
        // Row 1 has A, C, D: no 3-run. Row 2 has B, C, D.
        let seats = vec![
            seat(1, 1, "A"),
            seat(2, 1, "C"),
            seat(3, 1, "D"),
            seat(4, 2, "B"),
            seat(5, 2, "C"),
            seat(6, 2, "D"),
        ];
        let block = find_contiguous_block_same_row(&seats, 3).unwrap();
        assert_eq!(block.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![4, 5, 6]);
    }

    #[test]
    fn contiguous_block_sorts_columns_before_scanning() {
        let seats = vec![seat(1, 1, "C"), seat(2, 1, "A"), seat(3, 1, "B")];
        let block = find_contiguous_block_same_row(&seats, 3).unwrap();
        assert_eq!(block.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![2, 3, 1]);
    }

    #[test]
    fn near_block_tolerates_a_single_hole() {
        // A, C, D: the A->C step is 2 (one hole), C->D is 1.
        let seats = vec![seat(1, 4, "A"), seat(2, 4, "C"), seat(3, 4, "D")];
        assert!(find_contiguous_block_same_row(&seats, 3).is_none());
        let block = find_near_block(&seats, 3).unwrap();
        assert_eq!(block.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn near_block_rejects_wider_gaps() {
        // A -> D is a step of 3; the row only yields 2 of 3 wanted seats,
        // and no vertical run exists either.
        let seats = vec![seat(1, 4, "A"), seat(2, 4, "D"), seat(3, 4, "E")];
        assert!(find_near_block(&seats, 3).is_none());
    }

    #[test]
    fn near_block_falls_back_to_vertical_run() {
        let seats = vec![seat(1, 7, "B"), seat(2, 8, "B"), seat(3, 9, "B")];
        let block = find_near_block(&seats, 3).unwrap();
        assert_eq!(block.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn vertical_run_requires_consecutive_rows() {
        let seats = vec![seat(1, 7, "B"), seat(2, 9, "B"), seat(3, 10, "B")];
        assert!(find_near_block(&seats, 3).is_none());
    }

    #[test]
    fn remove_seats_keeps_relative_order() {
        let mut seats = vec![seat(1, 1, "A"), seat(2, 1, "B"), seat(3, 1, "C"), seat(4, 1, "D")];
        remove_seats(&mut seats, &HashSet::from([1, 3]));
        assert_eq!(seats.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn pool_excludes_taken_seats_and_filters_by_type() {
        let mut inventory = vec![seat(1, 1, "A"), seat(2, 1, "B"), seat(3, 1, "C")];
        inventory[2].seat_type_id = 2;

        let pool = SeatPool::new(&inventory, &HashSet::from([1]));
        assert_eq!(pool.len(), 2);
        let economy = pool.compatible(1);
        assert_eq!(economy.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![2]);
        let premium = pool.compatible(2);
        assert_eq!(premium.iter().map(|s| s.seat_id).collect::<Vec<_>>(), vec![3]);
    }
}
