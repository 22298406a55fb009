//! Random position selection for shuffle navigation

use rand::Rng;

/// Pick a uniformly random queue position
///
/// The draw covers the whole range, current position included, so an
/// episode can repeat back-to-back. Returns None for an empty queue.
pub fn pick_position(len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let mut rng = rand::thread_rng();
    Some(rng.gen_range(0..len))
}
