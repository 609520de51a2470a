//! Degree of separation between two people in an actor/movie graph.

use crate::graph::BreadthFirst;

/// Sentinel for "no separation computed": unknown people or no connection.
pub const NOT_CONNECTED: i32 = -1;

/// Count the movies separating `person_a` from `person_b`, not counting the
/// movie they were first linked through.
///
/// Walks the BFS discovery order from `person_a`. Each run of consecutive
/// non-person labels adds one degree, starting from `-1`; the current degree
/// is returned when `person_b` is reached.
///
/// Returns [`NOT_CONNECTED`] without traversing when neither name is a
/// person, and when `person_b` is never reached. Only one missing name still
/// traverses. `person_a == person_b` also yields `-1`, because the start is
/// matched before any movie is counted.
pub fn degree_of_separation<G, F>(graph: &G, person_a: &str, person_b: &str, is_person: F) -> i32
where
    G: BreadthFirst + ?Sized,
    F: Fn(&str) -> bool,
{
    if !is_person(person_a) && !is_person(person_b) {
        return NOT_CONNECTED;
    }

    let mut degree = NOT_CONNECTED;
    let mut prev_was_work = false;

    for label in graph.bfs_order(person_a) {
        if is_person(&label) {
            prev_was_work = false;
            if label == person_b {
                return degree;
            }
        } else {
            if !prev_was_work {
                degree += 1;
            }
            prev_was_work = true;
        }
    }

    NOT_CONNECTED
}
