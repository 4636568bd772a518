//! Comparison sorts over track collections
//!
//! Pure functions: each takes a slice and returns a newly ordered copy,
//! leaving the input untouched. Callers that want timings measure the
//! call themselves.

use crate::model::Track;

/// Tracks ordered by title, ascending
///
/// Stable merge sort: equal titles keep their input order.
pub fn by_title(songs: &[Track]) -> Vec<Track> {
    merge_sort(songs.to_vec())
}

/// Tracks ordered by duration
///
/// Quicksort ascending, then a reverse pass when descending order is
/// asked for. Partition-based, so equal durations may reorder.
pub fn by_duration(songs: &[Track], ascending: bool) -> Vec<Track> {
    let mut sorted = songs.to_vec();
    quick_sort(&mut sorted);
    if !ascending {
        sorted.reverse();
    }
    sorted
}

/// Tracks ordered most recently created first
pub fn by_recently_added(songs: &[Track]) -> Vec<Track> {
    let mut sorted = songs.to_vec();
    // Ids rise in creation order, which breaks timestamp ties.
    sorted.sort_by(|a, b| (b.added_at, b.id).cmp(&(a.added_at, a.id)));
    sorted
}

fn merge_sort(mut songs: Vec<Track>) -> Vec<Track> {
    if songs.len() <= 1 {
        return songs;
    }
    let mid = songs.len() / 2;
    let right = songs.split_off(mid);
    let left = songs;
    merge(merge_sort(left), merge_sort(right))
}

fn merge(left: Vec<Track>, right: Vec<Track>) -> Vec<Track> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter();
    let mut right = right.into_iter();
    let mut a = left.next();
    let mut b = right.next();

    loop {
        match (a.take(), b.take()) {
            (Some(x), Some(y)) => {
                // <= takes from the left run on ties, keeping the sort stable.
                if x.title <= y.title {
                    merged.push(x);
                    a = left.next();
                    b = Some(y);
                } else {
                    merged.push(y);
                    a = Some(x);
                    b = right.next();
                }
            }
            (Some(x), None) => {
                merged.push(x);
                a = left.next();
            }
            (None, Some(y)) => {
                merged.push(y);
                b = right.next();
            }
            (None, None) => break,
        }
    }

    merged
}

fn quick_sort(songs: &mut [Track]) {
    if songs.len() <= 1 {
        return;
    }
    let pivot = partition(songs);
    let (low, high) = songs.split_at_mut(pivot);
    quick_sort(low);
    quick_sort(&mut high[1..]);
}

/// Lomuto partition around the last element's duration
fn partition(songs: &mut [Track]) -> usize {
    let high = songs.len() - 1;
    let pivot_duration = songs[high].duration_secs;
    let mut i = 0;

    for j in 0..high {
        if songs[j].duration_secs <= pivot_duration {
            songs.swap(i, j);
            i += 1;
        }
    }
    songs.swap(i, high);
    i
}
