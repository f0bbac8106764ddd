//! Vertex neighborhoods derived from the face connectivity of a triangle mesh.
//!
//! Two vertices are neighbors if they share at least one face. A vertex that is part of
//! several faces with the same other vertex lists that vertex only once.

use std::collections::BTreeSet;

use crate::error::{NeuroSmoothError, Result};
use crate::mesh::{vertex_index, BrainMesh};

/// The neighbors of all vertices of a mesh, stored compactly: the neighbors of vertex `i` are
/// `indices[offsets[i]..offsets[i + 1]]`, in ascending order.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexNeighbors {
    offsets: Vec<usize>,
    indices: Vec<usize>,
}

impl VertexNeighbors {
    /// Compute the vertex neighborhoods for the given mesh.
    pub fn from_mesh(mesh: &BrainMesh) -> Result<VertexNeighbors> {
        VertexNeighbors::from_faces(mesh.num_vertices(), &mesh.faces)
    }

    /// Compute the vertex neighborhoods from a flat buffer of triangle vertex indices.
    ///
    /// Fails on the first face that references a vertex outside `[0, num_vertices)`, and if the
    /// length of `faces` is not a multiple of 3.
    ///
    /// # Examples
    ///
    /// ```
    /// let nb = neurosmooth::VertexNeighbors::from_faces(4, &[0, 1, 2, 1, 2, 3]).unwrap();
    /// assert_eq!(nb.neighbors(1), &[0, 2, 3]);
    /// ```
    pub fn from_faces(num_vertices: usize, faces: &[i32]) -> Result<VertexNeighbors> {
        if faces.len() % 3 != 0 {
            return Err(NeuroSmoothError::NonTriangularFaces { len: faces.len() });
        }

        let mut sets: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); num_vertices];
        for (face_idx, face) in faces.chunks_exact(3).enumerate() {
            let corners = [
                vertex_index(face_idx, face[0], num_vertices)?,
                vertex_index(face_idx, face[1], num_vertices)?,
                vertex_index(face_idx, face[2], num_vertices)?,
            ];
            for i in 0..3 {
                for j in 0..3 {
                    if i != j {
                        sets[corners[i]].insert(corners[j]);
                    }
                }
            }
        }

        let mut offsets: Vec<usize> = Vec::with_capacity(num_vertices + 1);
        let mut indices: Vec<usize> = Vec::with_capacity(sets.iter().map(|s| s.len()).sum());
        offsets.push(0);
        for set in sets {
            indices.extend(set);
            offsets.push(indices.len());
        }

        Ok(VertexNeighbors { offsets, indices })
    }

    pub fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The neighbors of the given vertex, sorted ascending.
    ///
    /// # Panics
    ///
    /// If `vertex` is not a valid vertex index.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.indices[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    /// The number of neighbors of the given vertex.
    pub fn degree(&self, vertex: usize) -> usize {
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    /// Whether the vertex has no neighbors, i.e., it is not part of any face.
    pub fn is_isolated(&self, vertex: usize) -> bool {
        self.degree(vertex) == 0
    }

    /// Total number of stored neighbor entries over all vertices.
    pub fn num_entries(&self) -> usize {
        self.indices.len()
    }
}
