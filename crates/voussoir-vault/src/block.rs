//! Hexahedral voussoir meshes.

use std::collections::HashMap;

use voussoir_math::{Frame, Point3, Transform, Vec3};

/// Quad faces shared by every voussoir, wound outward.
///
/// Vertex layout: `0..4` is the block's start cross-section (intrados and
/// extrados of the first rib, then of the second rib), `4..8` the same
/// points at the block's end.
/// ```text
///       5-------7        extrados
///      /|      /|
///     1-------3 |
///     | 4-----|-6        intrados
///     |/      |/
///     0-------2      length runs 0 -> 4
/// ```
pub const BLOCK_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [0, 4, 5, 1],
    [4, 6, 7, 5],
    [6, 2, 3, 7],
    [1, 5, 7, 3],
    [2, 6, 4, 0],
];

/// Index of the intrados face, which carries the block's reference frame.
pub const FRAME_FACE: usize = 5;

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum corner.
    pub min: Point3,
    /// Maximum corner.
    pub max: Point3,
}

impl Bounds {
    /// Bounding box of a set of points, `None` when empty.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        Some(iter.fold(
            Self {
                min: first,
                max: first,
            },
            |b, p| Self {
                min: b.min.inf(p),
                max: b.max.sup(p),
            },
        ))
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Extent along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// One masonry block of a vault.
#[derive(Debug, Clone, PartialEq)]
pub struct Voussoir {
    /// The eight corner positions.
    pub vertices: [Point3; 8],
    /// Whether the block bears on a support (first or last rib pair).
    pub is_support: bool,
}

impl Voussoir {
    /// Create a block from its corners.
    pub fn new(vertices: [Point3; 8], is_support: bool) -> Self {
        Self {
            vertices,
            is_support,
        }
    }

    /// Face connectivity.
    pub fn faces(&self) -> &'static [[usize; 4]; 6] {
        &BLOCK_FACES
    }

    /// Corner positions of face `face`.
    pub fn face_polygon(&self, face: usize) -> [Point3; 4] {
        BLOCK_FACES[face].map(|i| self.vertices[i])
    }

    /// Centroid of face `face`.
    ///
    /// Block faces are planar parallelograms or trapezoids built from two
    /// congruent sections, so the vertex average is the area centroid.
    pub fn face_centroid(&self, face: usize) -> Point3 {
        average(&self.face_polygon(face))
    }

    /// Vertex average of the block.
    pub fn centroid(&self) -> Point3 {
        average(&self.vertices)
    }

    /// Undirected edges of [`BLOCK_FACES`] as sorted vertex index pairs.
    pub fn edges() -> Vec<(usize, usize)> {
        let mut edges: Vec<_> = face_edge_uses().into_keys().collect();
        edges.sort_unstable();
        edges
    }

    /// True when every edge of [`BLOCK_FACES`] is shared by exactly two faces
    /// that traverse it in opposite directions.
    ///
    /// Topology only: whether a particular block encloses space is decided
    /// by [`Voussoir::volume`].
    pub fn is_closed() -> bool {
        face_edge_uses()
            .values()
            .all(|uses| uses.len() == 2 && uses[0] != uses[1])
    }

    /// Signed volume; positive when faces wind outward.
    pub fn volume(&self) -> f64 {
        BLOCK_FACES
            .iter()
            .map(|f| {
                let [a, b, c, d] = f.map(|i| self.vertices[i].coords);
                (a.dot(&b.cross(&c)) + a.dot(&c.cross(&d))) / 6.0
            })
            .sum()
    }

    /// Axis-aligned bounds.
    pub fn bounds(&self) -> Bounds {
        let mut b = Bounds {
            min: self.vertices[0],
            max: self.vertices[0],
        };
        for p in &self.vertices[1..] {
            b.min = b.min.inf(p);
            b.max = b.max.sup(p);
        }
        b
    }

    /// Lowest z-coordinate of the block.
    pub fn min_z(&self) -> f64 {
        self.vertices
            .iter()
            .map(|p| p.z)
            .fold(f64::INFINITY, f64::min)
    }

    /// Move the block in place.
    pub fn translate(&mut self, offset: &Vec3) {
        for p in &mut self.vertices {
            *p += *offset;
        }
    }

    /// A copy of the block with every vertex transformed.
    pub fn transformed(&self, t: &Transform) -> Self {
        Self {
            vertices: self.vertices.map(|p| t.apply_point(&p)),
            is_support: self.is_support,
        }
    }

    /// Reference frame on the intrados face.
    ///
    /// Origin at the face centroid, x-axis along the arch (`v0 - v2`),
    /// y-axis towards the block's end (`v4 - v2`). `None` for a collapsed
    /// block.
    pub fn frame(&self) -> Option<Frame> {
        let v = &self.vertices;
        Frame::new(self.face_centroid(FRAME_FACE), v[0] - v[2], v[4] - v[2])
    }

    /// The block re-expressed with `frame` as the world XY frame.
    pub fn to_local(&self, frame: &Frame) -> Self {
        self.transformed(&Transform::from_frame_to_frame(frame, &Frame::world_xy()))
    }
}

fn average(points: &[Point3]) -> Point3 {
    let sum = points.iter().fold(Vec3::zeros(), |acc, p| acc + p.coords);
    Point3::from(sum / points.len() as f64)
}

/// Directions in which each undirected edge is traversed by the faces.
fn face_edge_uses() -> HashMap<(usize, usize), Vec<bool>> {
    let mut uses: HashMap<(usize, usize), Vec<bool>> = HashMap::new();
    for face in &BLOCK_FACES {
        for j in 0..4 {
            let (a, b) = (face[j], face[(j + 1) % 4]);
            uses.entry((a.min(b), a.max(b))).or_default().push(a < b);
        }
    }
    uses
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Unit cube in the block's vertex layout: sections at y = 0 and y = 1,
    /// the first rib at x = 1, the second at x = 0.
    fn unit_block() -> Voussoir {
        Voussoir::new(
            [
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 1.0),
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(0.0, 0.0, 1.0),
                Point3::new(1.0, 1.0, 0.0),
                Point3::new(1.0, 1.0, 1.0),
                Point3::new(0.0, 1.0, 0.0),
                Point3::new(0.0, 1.0, 1.0),
            ],
            false,
        )
    }

    #[test]
    fn test_topology() {
        assert_eq!(unit_block().faces().len(), 6);
        assert_eq!(Voussoir::edges().len(), 12);
        assert!(Voussoir::is_closed());
    }

    #[test]
    fn test_inside_out_block_has_negative_volume() {
        let mut block = unit_block();
        block.vertices.swap(0, 2);
        block.vertices.swap(1, 3);
        block.vertices.swap(4, 6);
        block.vertices.swap(5, 7);
        assert_relative_eq!(block.volume(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_volume_is_positive() {
        assert_relative_eq!(unit_block().volume(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_face_centroid() {
        let block = unit_block();
        assert_relative_eq!(
            block.face_centroid(FRAME_FACE),
            Point3::new(0.5, 0.5, 0.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(block.centroid(), Point3::new(0.5, 0.5, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn test_frame() {
        let frame = unit_block().frame().unwrap();
        assert_relative_eq!(frame.origin, Point3::new(0.5, 0.5, 0.0), epsilon = 1e-12);
        assert_relative_eq!(frame.x_axis.into_inner(), Vec3::x(), epsilon = 1e-12);
        assert_relative_eq!(frame.y_axis.into_inner(), Vec3::y(), epsilon = 1e-12);
    }

    #[test]
    fn test_collapsed_block_has_no_frame() {
        let block = Voussoir::new([Point3::origin(); 8], false);
        assert!(block.frame().is_none());
    }

    #[test]
    fn test_translate_and_bounds() {
        let mut block = unit_block();
        block.translate(&Vec3::new(0.0, 0.0, -2.0));
        assert_relative_eq!(block.min_z(), -2.0);
        let b = block.bounds();
        assert_relative_eq!(b.min, Point3::new(0.0, 0.0, -2.0));
        assert_relative_eq!(b.size(), Vec3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_to_local_puts_frame_on_world_xy() {
        let mut block = unit_block();
        block.translate(&Vec3::new(10.0, 20.0, 30.0));
        let frame = block.frame().unwrap();
        let local = block.to_local(&frame);
        assert_relative_eq!(
            local.face_centroid(FRAME_FACE),
            Point3::origin(),
            epsilon = 1e-9
        );
        assert_relative_eq!(local.volume(), block.volume(), epsilon = 1e-9);
        for p in local.face_polygon(FRAME_FACE) {
            assert_relative_eq!(p.z, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::from_points(&[Point3::origin()]).unwrap();
        let b = Bounds::from_points(&[Point3::new(1.0, -1.0, 2.0)]).unwrap();
        let u = a.union(&b);
        assert_eq!(u.min, Point3::new(0.0, -1.0, 0.0));
        assert_eq!(u.max, Point3::new(1.0, 0.0, 2.0));
        assert!(Bounds::from_points(&[]).is_none());
    }
}
