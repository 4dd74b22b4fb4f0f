//! Index lists for line-strip-with-adjacency rendering
//!
//! Every segment is emitted as 4 indices: the vertex before it, its two
//! endpoints, and the vertex after it. A polyline of `k` vertices becomes
//! `k - 1` such groups. The polyline's first and last vertices are repeated
//! to act as their own missing neighbours.

/// Appends the adjacency groups of one polyline to `out`.
///
/// Returns `false`, appending nothing, if the polyline has fewer than two
/// vertices.
pub fn extend_adjacent_lines(out: &mut Vec<u32>, polyline: &[u32]) -> bool {
    let (Some(&first), Some(&last)) = (polyline.first(), polyline.last()) else {
        return false;
    };
    if polyline.len() < 2 {
        return false;
    }

    let padded: Vec<u32> = std::iter::once(first)
        .chain(polyline.iter().copied())
        .chain(std::iter::once(last))
        .collect();

    out.reserve(4 * (polyline.len() - 1));
    for window in padded.windows(4) {
        out.extend_from_slice(window);
    }
    true
}

/// Adjacency groups of one polyline, empty if it has fewer than two vertices.
///
/// `(0, 1, 2, 3)` becomes `(0, 0, 1, 2,  0, 1, 2, 3,  1, 2, 3, 3)`.
pub fn adjacent_lines_indexes(polyline: &[u32]) -> Vec<u32> {
    let mut out = Vec::new();
    extend_adjacent_lines(&mut out, polyline);
    out
}

/// One polyline per iteration through all of its walkers, optionally
/// closed back to the first walker.
///
/// Rings of fewer than two walkers are skipped.
pub fn ring_indexes(walkers: usize, iterations: usize, close: bool) -> Vec<u32> {
    let mut out = Vec::new();
    if walkers < 2 {
        log::trace!("Skipping {} rings of {} walker", iterations, walkers);
        return out;
    }

    let mut ring = Vec::with_capacity(walkers + 1);
    for k in 0..iterations {
        let start = (k * walkers) as u32;
        ring.clear();
        ring.extend(start..start + walkers as u32);
        if close {
            ring.push(start);
        }
        extend_adjacent_lines(&mut out, &ring);
    }
    out
}

/// One polyline per walker through all of its iterations.
///
/// Every walker has the same number of iterations, so building stops at the
/// first trajectory too short to draw.
pub fn edge_indexes(walkers: usize, iterations: usize) -> Vec<u32> {
    let mut out = Vec::new();
    let mut edge = Vec::with_capacity(iterations);

    for i in 0..walkers {
        edge.clear();
        edge.extend((0..iterations).map(|k| (i + k * walkers) as u32));
        if !extend_adjacent_lines(&mut out, &edge) {
            log::trace!("Trajectories of {} iterations are too short for edges", iterations);
            break;
        }
    }
    out
}
