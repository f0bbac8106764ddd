//! Laplacian smoothing of per-vertex scalar data over the graph of a brain surface mesh.
//!
//! In each iteration, every vertex value is moved towards the unweighted mean of its neighbors'
//! values by the factor `lambda`. All new values of an iteration are computed from the values of
//! the previous iteration, so the result does not depend on the order in which vertices are visited.

use ndarray::{Array1, ArrayView1};
use tracing::debug;

use crate::error::{NeuroSmoothError, Result};
use crate::mesh::BrainMesh;
use crate::neighbors::VertexNeighbors;

/// Settings for [`laplacian_smoothing`].
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothParams {
    /// Number of smoothing iterations. Must not be negative. Default: 10
    pub iterations: i32,

    /// Smoothing factor, typically in `(0, 1)`. `0` leaves the data unchanged, `1` replaces each
    /// value by the mean of its neighbors. Not clamped. Default: 0.5
    pub lambda: f32,
}

impl Default for SmoothParams {
    fn default() -> Self {
        Self {
            iterations: 10,
            lambda: 0.5,
        }
    }
}

impl SmoothParams {
    pub fn new(iterations: i32, lambda: f32) -> Self {
        Self { iterations, lambda }
    }

    pub fn with_iterations(mut self, iterations: i32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_lambda(mut self, lambda: f32) -> Self {
        self.lambda = lambda;
        self
    }

    fn checked_iterations(&self) -> Result<usize> {
        if self.iterations < 0 {
            return Err(NeuroSmoothError::InvalidIterations { iterations: self.iterations });
        }
        Ok(self.iterations as usize)
    }
}


/// Smooth per-vertex data over the given mesh.
///
/// Returns a new array with one value per vertex. Vertices which are not part of any face keep their value.
///
/// # Errors
///
/// * If the vertex buffer of the mesh does not hold complete x,y,z triples.
/// * If `scalars` does not contain exactly one value per mesh vertex.
/// * If a face references a vertex that does not exist, or the face buffer does not hold index triples.
/// * If the iteration count is negative.
///
/// # Examples
///
/// ```
/// use ndarray::arr1;
/// use neurosmooth::{laplacian_smoothing, BrainMesh, SmoothParams};
///
/// let mesh = BrainMesh::new(vec![0.0; 12], vec![0, 1, 2, 1, 2, 3]);
/// let values = arr1(&[0.0, 10.0, 10.0, 0.0]);
/// let smoothed = laplacian_smoothing(&mesh, values.view(), &SmoothParams::new(1, 0.5)).unwrap();
/// assert_eq!(smoothed[0], 5.0);
/// ```
pub fn laplacian_smoothing(mesh: &BrainMesh, scalars: ArrayView1<f32>, params: &SmoothParams) -> Result<Array1<f32>> {
    mesh.check_vertex_coords()?;
    let num_vertices = mesh.num_vertices();
    if scalars.len() != num_vertices {
        return Err(NeuroSmoothError::LengthMismatch {
            what: "per-vertex scalars",
            expected: num_vertices,
            actual: scalars.len(),
        });
    }
    params.checked_iterations()?;

    let neighbors = VertexNeighbors::from_mesh(mesh)?;
    smooth_with_neighbors(&neighbors, scalars, params)
}


/// Smooth per-vertex data using precomputed vertex neighborhoods.
///
/// Use this to smooth several data arrays on the same mesh without recomputing the neighborhoods.
pub fn smooth_with_neighbors(
    neighbors: &VertexNeighbors,
    scalars: ArrayView1<f32>,
    params: &SmoothParams,
) -> Result<Array1<f32>> {
    let num_vertices = neighbors.num_vertices();
    if scalars.len() != num_vertices {
        return Err(NeuroSmoothError::LengthMismatch {
            what: "per-vertex scalars",
            expected: num_vertices,
            actual: scalars.len(),
        });
    }
    let iterations = params.checked_iterations()?;
    let lambda = params.lambda;

    debug!(
        vertices = num_vertices,
        neighbor_entries = neighbors.num_entries(),
        iterations,
        lambda,
        "Starting Laplacian smoothing"
    );

    let mut current: Array1<f32> = scalars.to_owned();
    let mut next: Array1<f32> = current.clone();

    for _ in 0..iterations {
        for (vertex, new_value) in next.iter_mut().enumerate() {
            let old_value = current[vertex];
            let vertex_neighbors = neighbors.neighbors(vertex);
            *new_value = if vertex_neighbors.is_empty() {
                old_value
            } else {
                let sum: f32 = vertex_neighbors.iter().map(|&n| current[n]).sum();
                let neighbor_mean = sum / vertex_neighbors.len() as f32;
                old_value + lambda * (neighbor_mean - old_value)
            };
        }
        std::mem::swap(&mut current, &mut next);
    }

    debug!(iterations, "Laplacian smoothing complete");
    Ok(current)
}
