use approx::assert_relative_eq;
use ndarray::{arr1, Array1};
use neurosmooth::{
    aggregate_by_region, clip_scalars, laplacian_smoothing, BrainMesh, NeuroSmoothError, Parcellation,
    SmoothParams, SurfaceOverlay, VertexNeighbors,
};

/// A flat grid mesh with `n * n` vertices, two triangles per grid cell.
fn grid_mesh(n: usize) -> BrainMesh {
    let mut vertices: Vec<f32> = Vec::with_capacity(n * n * 3);
    for row in 0..n {
        for col in 0..n {
            vertices.extend_from_slice(&[col as f32, row as f32, 0.0]);
        }
    }
    let mut faces: Vec<i32> = Vec::with_capacity((n - 1) * (n - 1) * 6);
    for row in 0..n - 1 {
        for col in 0..n - 1 {
            let v = (row * n + col) as i32;
            let n = n as i32;
            faces.extend_from_slice(&[v, v + 1, v + n, v + 1, v + n + 1, v + n]);
        }
    }
    BrainMesh::new(vertices, faces)
}

#[test]
fn the_two_triangle_example_is_smoothed_correctly() {
    let mesh = BrainMesh::new(vec![0.0; 12], vec![0, 1, 2, 1, 2, 3]);
    let nb = VertexNeighbors::from_mesh(&mesh).unwrap();
    assert_eq!(nb.neighbors(0), &[1, 2]);
    assert_eq!(nb.neighbors(1), &[0, 2, 3]);
    assert_eq!(nb.neighbors(2), &[0, 1, 3]);
    assert_eq!(nb.neighbors(3), &[1, 2]);

    let smoothed = laplacian_smoothing(&mesh, arr1(&[0.0, 10.0, 10.0, 0.0]).view(), &SmoothParams::new(1, 0.5)).unwrap();
    assert_relative_eq!(smoothed[0], 5.0);
    assert_relative_eq!(smoothed[1], 20.0 / 3.0, epsilon = 1e-5);
}

#[test]
fn out_of_range_faces_and_negative_iterations_are_rejected() {
    let mesh = BrainMesh::new(vec![0.0; 12], vec![0, 1, 2, 1, 2, 4]);
    let res = laplacian_smoothing(&mesh, arr1(&[0.0; 4]).view(), &SmoothParams::default());
    assert!(matches!(res, Err(NeuroSmoothError::FaceIndexOutOfRange { .. })));

    let mesh = BrainMesh::new(vec![0.0; 12], vec![0, 1, 2, 1, 2, 3]);
    let res = laplacian_smoothing(&mesh, arr1(&[0.0; 4]).view(), &SmoothParams::default().with_iterations(-5));
    assert!(matches!(res, Err(NeuroSmoothError::InvalidIterations { iterations: -5 })));
}

#[test]
fn a_constant_field_is_invariant_under_smoothing() {
    let mesh = grid_mesh(20);
    let values: Array1<f32> = Array1::from_elem(mesh.num_vertices(), 2.5);
    let smoothed = laplacian_smoothing(&mesh, values.view(), &SmoothParams::new(15, 0.7)).unwrap();

    for v in smoothed.iter() {
        assert_relative_eq!(*v, 2.5, epsilon = 1e-5);
    }
}

#[test]
fn smoothing_reduces_the_spread_of_a_spike() {
    let mesh = grid_mesh(11);
    let mut values: Array1<f32> = Array1::zeros(mesh.num_vertices());
    values[60] = 100.0; // center of the grid

    let smoothed = laplacian_smoothing(&mesh, values.view(), &SmoothParams::default()).unwrap();

    assert!(smoothed[60] < 100.0);
    assert!(smoothed[59] > 0.0);
    assert!(smoothed.iter().all(|v| (0.0..=100.0).contains(v)));
}

#[test]
fn clipped_and_smoothed_overlays_can_be_aggregated_by_region() {
    let mesh = grid_mesh(4);
    // Left half of the grid is region 1, right half region 2, first row is background.
    let labels: Vec<i32> = (0..16)
        .map(|v| if v < 4 { -1 } else if v % 4 < 2 { 1 } else { 2 })
        .collect();
    let pet: Array1<f32> = (0..16).map(|v| v as f32).collect();
    let pet = clip_scalars(pet.view(), 0.0, 10.0).unwrap();

    let parc = Parcellation::new(labels.clone(), vec!["unknown", "lingual", "cuneus"].into_iter().collect());
    let overlay = SurfaceOverlay::new(mesh).with_scalars(pet.clone()).unwrap().with_parcellation(parc.clone()).unwrap();

    let means = overlay.region_means("rh").unwrap().unwrap();
    assert_eq!(parc.label_set().len(), means.len());
    // lingual: 4, 5, 8, 9, 10 (clipped from 12), 10 (clipped from 13)
    assert_relative_eq!(means["ctx-rh-lingual"], 46.0 / 6.0, epsilon = 1e-5);

    let smoothed = overlay.smoothed(&SmoothParams::default()).unwrap().unwrap();
    let smoothed_means = aggregate_by_region(smoothed.view(), &labels, &parc.regions, "rh").unwrap();
    assert_eq!(means.keys().collect::<Vec<_>>(), smoothed_means.keys().collect::<Vec<_>>());
}
