//! Running-bond layout of voussoirs along the vault length.
//!
//! Each rib pair (the band of the arch between two neighbouring ribs) is cut
//! into courses along the length. Even rib pairs use whole courses; odd rib
//! pairs are shifted by half a course, which leaves a half-depth block at the
//! start and at the end of the vault.

/// Which end of the vault a boundary block closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryEnd {
    /// The front edge, where the length coordinate is zero.
    Start,
    /// The back edge, where the length coordinate equals the vault length.
    End,
}

/// The position of one block along the vault length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Course {
    /// A whole course `i` on an even rib pair.
    FullSlice(usize),
    /// A whole course `i` on an odd rib pair, shifted by half a course.
    HalfOffsetSlice(usize),
    /// A half-depth block closing an odd rib pair at one end.
    BoundarySlice(BoundaryEnd),
}

impl Course {
    /// Extent `(start, end)` along the length, measured from the front edge.
    pub fn extent(&self, length: f64, length_count: usize) -> (f64, f64) {
        let depth = length / length_count as f64;
        match *self {
            Course::FullSlice(i) => (depth * i as f64, depth * (i + 1) as f64),
            Course::HalfOffsetSlice(i) => (
                depth / 2.0 + depth * i as f64,
                depth / 2.0 + depth * (i + 1) as f64,
            ),
            Course::BoundarySlice(BoundaryEnd::Start) => (0.0, depth / 2.0),
            Course::BoundarySlice(BoundaryEnd::End) => (length - depth / 2.0, length),
        }
    }
}

/// A block's rib pair together with its course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Index of the rib pair, counted from the +X springing.
    pub rib_pair: usize,
    /// Position along the vault length.
    pub course: Course,
}

/// Whether a rib pair is laid with half-offset courses.
pub fn is_staggered(rib_pair: usize) -> bool {
    rib_pair % 2 == 1
}

/// Number of blocks produced for the given counts, `None` on overflow.
pub fn block_count(span_count: usize, length_count: usize) -> Option<usize> {
    let full = span_count.div_ceil(2);
    let staggered = span_count / 2;
    full.checked_mul(length_count)?
        .checked_add(staggered.checked_mul(length_count.checked_add(1)?)?)
}

/// Every block placement in emission order.
///
/// Courses are the outer loop and rib pairs the inner one; the boundary
/// blocks of the staggered rib pairs follow at the end, start before end.
/// Downstream consumers address blocks by position, so this order is part
/// of the output contract.
pub fn course_plan(span_count: usize, length_count: usize) -> Vec<Placement> {
    let mut plan = Vec::with_capacity(block_count(span_count, length_count).unwrap_or(0));

    if length_count == 1 {
        // A single course has no interior joints to stagger: staggered rib
        // pairs consist of their two boundary blocks only.
        plan.extend(
            (0..span_count)
                .filter(|&k| !is_staggered(k))
                .map(|rib_pair| Placement {
                    rib_pair,
                    course: Course::FullSlice(0),
                }),
        );
    } else {
        for slice in 0..length_count {
            for rib_pair in 0..span_count {
                let course = if !is_staggered(rib_pair) {
                    Course::FullSlice(slice)
                } else if slice + 1 < length_count {
                    Course::HalfOffsetSlice(slice)
                } else {
                    continue;
                };
                plan.push(Placement { rib_pair, course });
            }
        }
    }

    for rib_pair in (0..span_count).filter(|&k| is_staggered(k)) {
        for end in [BoundaryEnd::Start, BoundaryEnd::End] {
            plan.push(Placement {
                rib_pair,
                course: Course::BoundarySlice(end),
            });
        }
    }

    plan
}
