// Triangular brain surface meshes, as produced by an external surface loader.
// Each vertex is defined by its x,y,z coord and each face is defined by 3 vertices,
// stored as 3 indices into the vertices.

use crate::error::{NeuroSmoothError, Result};

/// A brain mesh, stored in flat buffers: 3 coordinates per vertex and 3 vertex indices per face.
#[derive(Debug, PartialEq, Clone)]
pub struct BrainMesh {
    pub vertices: Vec<f32>,
    pub faces: Vec<i32>,
}

impl BrainMesh {
    pub fn new(vertices: Vec<f32>, faces: Vec<i32>) -> BrainMesh {
        BrainMesh { vertices, faces }
    }

    /// The number of vertices of this mesh.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// The number of faces of this mesh.
    pub fn num_faces(&self) -> usize {
        self.faces.len() / 3
    }

    /// Get the x,y,z coordinates of the vertex with the given index.
    ///
    /// # Panics
    ///
    /// If `idx` is not a valid vertex index, see [`BrainMesh::num_vertices`].
    pub fn vertex(&self, idx: usize) -> [f32; 3] {
        [self.vertices[idx * 3], self.vertices[idx * 3 + 1], self.vertices[idx * 3 + 2]]
    }

    /// Get the 3 vertex indices of the face with the given index.
    ///
    /// # Panics
    ///
    /// If `idx` is not a valid face index, see [`BrainMesh::num_faces`].
    pub fn face(&self, idx: usize) -> [i32; 3] {
        [self.faces[idx * 3], self.faces[idx * 3 + 1], self.faces[idx * 3 + 2]]
    }

    /// Check that the buffers describe a triangle mesh, and that all faces reference existing vertices.
    ///
    /// The error names the first offending face.
    pub fn validate(&self) -> Result<()> {
        self.check_vertex_coords()?;
        check_faces(self.num_vertices(), &self.faces)
    }

    /// Check that the vertex buffer holds complete x,y,z triples.
    pub(crate) fn check_vertex_coords(&self) -> Result<()> {
        if self.vertices.len() % 3 != 0 {
            return Err(NeuroSmoothError::LengthMismatch {
                what: "vertex coordinates",
                expected: self.num_vertices() * 3,
                actual: self.vertices.len(),
            });
        }
        Ok(())
    }

    /// Compute the center of the axis-aligned bounding box of the mesh. Returns `None` for a mesh without vertices.
    ///
    /// # Examples
    ///
    /// ```
    /// let mesh = neurosmooth::BrainMesh::new(vec![0.0, 0.0, 0.0, 2.0, 4.0, -2.0], vec![]);
    /// assert_eq!(mesh.center(), Some([1.0, 2.0, -1.0]));
    /// ```
    pub fn center(&self) -> Option<[f32; 3]> {
        if self.num_vertices() == 0 {
            return None;
        }
        let mut min = [f32::INFINITY; 3];
        let mut max = [f32::NEG_INFINITY; 3];
        for coords in self.vertices.chunks_exact(3) {
            for dim in 0..3 {
                min[dim] = min[dim].min(coords[dim]);
                max[dim] = max[dim].max(coords[dim]);
            }
        }
        Some([
            (min[0] + max[0]) / 2.0,
            (min[1] + max[1]) / 2.0,
            (min[2] + max[2]) / 2.0,
        ])
    }
}

/// Check a flat face buffer against a vertex count: it must hold triples, and each index must be in `[0, num_vertices)`.
pub(crate) fn check_faces(num_vertices: usize, faces: &[i32]) -> Result<()> {
    if faces.len() % 3 != 0 {
        return Err(NeuroSmoothError::NonTriangularFaces { len: faces.len() });
    }
    for (face_idx, face) in faces.chunks_exact(3).enumerate() {
        for &index in face {
            vertex_index(face_idx, index, num_vertices)?;
        }
    }
    Ok(())
}

/// Turn a stored face index into a vertex index, failing if it is negative or too large.
pub(crate) fn vertex_index(face: usize, index: i32, num_vertices: usize) -> Result<usize> {
    if index < 0 || index as usize >= num_vertices {
        return Err(NeuroSmoothError::FaceIndexOutOfRange {
            face,
            index,
            num_vertices,
        });
    }
    Ok(index as usize)
}
