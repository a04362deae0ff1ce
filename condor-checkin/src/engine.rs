use std::collections::{HashSet, VecDeque};

use condor_domain::BoardingPass;
use tracing::debug;

use crate::seatmap::{self, SeatPool};

/// Assigns a seat to every boarding pass that lacks one, best-effort, one
/// purchase group at a time. Per group the cascade is: seat each minor next
/// to an accompanying adult, pack the remainder into a contiguous or
/// near-contiguous block, then scatter onto whatever compatible seats are
/// left. Passes that already carry a seat are never touched. The shared
/// `pool` shrinks as seats are consumed, so no seat is handed out twice.
pub fn assign_seats(passes: &mut [BoardingPass], pool: &mut SeatPool) {
    for group in purchase_groups(passes) {
        assign_group(passes, &group, pool);
    }
}

// Member indices per purchase id, groups in first-encounter order, members
// in input order.
fn purchase_groups(passes: &[BoardingPass]) -> Vec<Vec<usize>> {
    let mut order: Vec<i64> = Vec::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (idx, pass) in passes.iter().enumerate() {
        match order.iter().position(|&p| p == pass.purchase_id) {
            Some(g) => groups[g].push(idx),
            None => {
                order.push(pass.purchase_id);
                groups.push(vec![idx]);
            }
        }
    }
    groups
}

fn assign_group(passes: &mut [BoardingPass], members: &[usize], pool: &mut SeatPool) {
    let seat_type_id = passes[members[0]].seat_type_id;

    pair_minors_with_adults(passes, members, seat_type_id, pool);

    let remaining: Vec<usize> = members
        .iter()
        .copied()
        .filter(|&i| passes[i].seat_id.is_none())
        .collect();
    if remaining.is_empty() {
        return;
    }

    let compatible = pool.compatible(seat_type_id);
    let block = seatmap::find_contiguous_block_same_row(&compatible, remaining.len())
        .or_else(|| seatmap::find_near_block(&compatible, remaining.len()));

    match block {
        Some(block) => {
            // Block seats map onto the remaining members in order.
            for (&member, seat) in remaining.iter().zip(&block) {
                passes[member].seat_id = Some(seat.seat_id);
            }
            pool.remove(&block.iter().map(|s| s.seat_id).collect());
        }
        None => {
            debug!(
                purchase_id = passes[members[0]].purchase_id,
                remaining = remaining.len(),
                "no block found, scattering onto remaining compatible seats"
            );
            for (&member, seat) in remaining.iter().zip(&compatible) {
                passes[member].seat_id = Some(seat.seat_id);
                pool.remove(&HashSet::from([seat.seat_id]));
            }
        }
    }
}

// Stage one of the cascade: each unseated minor gets the first adjacent
// compatible pair, sharing it with the first still-pending adult. The adult
// is peeked first and only consumed once a pair is actually found. A minor
// skipped here (no adult left, or no pair at this moment) is not retried by
// this stage; the later stages seat it with the rest of the group.
fn pair_minors_with_adults(
    passes: &mut [BoardingPass],
    members: &[usize],
    seat_type_id: i64,
    pool: &mut SeatPool,
) {
    let minors: Vec<usize> = members
        .iter()
        .copied()
        .filter(|&i| passes[i].seat_id.is_none() && passes[i].passenger.is_minor())
        .collect();
    let mut adults: VecDeque<usize> = members
        .iter()
        .copied()
        .filter(|&i| passes[i].seat_id.is_none() && !passes[i].passenger.is_minor())
        .collect();

    if minors.is_empty() {
        return;
    }

    let mut compatible = pool.compatible(seat_type_id);

    for minor in minors {
        let Some(&adult) = adults.front() else {
            continue;
        };
        let Some((minor_seat, adult_seat)) = seatmap::find_adjacent_pair(&compatible) else {
            continue;
        };

        passes[minor].seat_id = Some(minor_seat.seat_id);
        passes[adult].seat_id = Some(adult_seat.seat_id);
        adults.pop_front();

        let consumed: HashSet<i64> = [minor_seat.seat_id, adult_seat.seat_id].into();
        seatmap::remove_seats(&mut compatible, &consumed);
        pool.remove(&consumed);
    }
}
