// A brain surface mesh together with the per-vertex data attached to it: a scalar overlay
// and a parcellation. The data is loaded by the caller, this only checks that it fits the mesh.

use std::collections::BTreeMap;
use std::fmt;

use ndarray::Array1;

use crate::error::{NeuroSmoothError, Result};
use crate::mesh::BrainMesh;
use crate::region::Parcellation;
use crate::smooth::{laplacian_smoothing, SmoothParams};

#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOverlay {
    pub mesh: BrainMesh,
    pub scalars: Option<Array1<f32>>,
    pub parcellation: Option<Parcellation>,
}

impl SurfaceOverlay {
    pub fn new(mesh: BrainMesh) -> SurfaceOverlay {
        SurfaceOverlay {
            mesh,
            scalars: None,
            parcellation: None,
        }
    }

    /// Attach per-vertex scalar data, replacing any data attached before.
    ///
    /// # Errors
    ///
    /// If `scalars` does not contain exactly one value per mesh vertex.
    pub fn with_scalars(mut self, scalars: Array1<f32>) -> Result<SurfaceOverlay> {
        check_vertex_count("per-vertex scalars", self.mesh.num_vertices(), scalars.len())?;
        self.scalars = Some(scalars);
        Ok(self)
    }

    /// Attach a parcellation, replacing any parcellation attached before.
    ///
    /// # Errors
    ///
    /// If the parcellation does not contain exactly one label per mesh vertex.
    pub fn with_parcellation(mut self, parcellation: Parcellation) -> Result<SurfaceOverlay> {
        check_vertex_count("per-vertex labels", self.mesh.num_vertices(), parcellation.num_vertices())?;
        self.parcellation = Some(parcellation);
        Ok(self)
    }

    /// Smooth the attached scalar data over the mesh, see [`laplacian_smoothing`]. Returns `None` if no scalar data is attached.
    pub fn smoothed(&self, params: &SmoothParams) -> Option<Result<Array1<f32>>> {
        self.scalars
            .as_ref()
            .map(|scalars| laplacian_smoothing(&self.mesh, scalars.view(), params))
    }

    /// Compute the mean of the attached scalar data for each region of the attached parcellation.
    /// Returns `None` unless both scalar data and a parcellation are attached.
    pub fn region_means(&self, hemi: &str) -> Option<Result<BTreeMap<String, f32>>> {
        match (&self.scalars, &self.parcellation) {
            (Some(scalars), Some(parcellation)) => Some(parcellation.region_means(scalars.view(), hemi)),
            _ => None,
        }
    }
}

impl fmt::Display for SurfaceOverlay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Brain surface with {} vertices and {} faces, {}, {}.",
            self.mesh.num_vertices(),
            self.mesh.num_faces(),
            if self.scalars.is_some() { "with scalar data" } else { "without scalar data" },
            if self.parcellation.is_some() { "with parcellation" } else { "without parcellation" }
        )
    }
}

fn check_vertex_count(what: &'static str, num_vertices: usize, actual: usize) -> Result<()> {
    if actual != num_vertices {
        return Err(NeuroSmoothError::LengthMismatch {
            what,
            expected: num_vertices,
            actual,
        });
    }
    Ok(())
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::region::RegionTable;
    use approx::assert_relative_eq;
    use ndarray::arr1;

    fn two_triangles() -> BrainMesh {
        BrainMesh::new(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0],
            vec![0, 1, 2, 1, 2, 3],
        )
    }

    fn demo_parcellation() -> Parcellation {
        Parcellation::new(vec![0, 0, 1, -1], vec!["precentral", "postcentral"].into_iter().collect::<RegionTable>())
    }

    #[test]
    fn an_overlay_without_data_yields_nothing() {
        let overlay = SurfaceOverlay::new(two_triangles());

        assert!(overlay.smoothed(&SmoothParams::default()).is_none());
        assert!(overlay.region_means("lh").is_none());
    }

    #[test]
    fn attached_data_is_smoothed_and_aggregated() {
        let overlay = SurfaceOverlay::new(two_triangles())
            .with_scalars(arr1(&[0.0, 10.0, 10.0, 0.0]))
            .unwrap()
            .with_parcellation(demo_parcellation())
            .unwrap();

        let smoothed = overlay.smoothed(&SmoothParams::new(1, 0.5)).unwrap().unwrap();
        assert_relative_eq!(smoothed[0], 5.0);

        let means = overlay.region_means("lh").unwrap().unwrap();
        assert_eq!(2, means.len());
        assert_relative_eq!(means["ctx-lh-precentral"], 5.0);
        assert_relative_eq!(means["ctx-lh-postcentral"], 10.0);
    }

    #[test]
    fn data_of_wrong_length_is_rejected() {
        let res = SurfaceOverlay::new(two_triangles()).with_scalars(arr1(&[1.0, 2.0]));
        assert!(matches!(res, Err(NeuroSmoothError::LengthMismatch { expected: 4, actual: 2, .. })));

        let parc = Parcellation::new(vec![0; 5], RegionTable::new(vec![String::from("insula")]));
        let res = SurfaceOverlay::new(two_triangles()).with_parcellation(parc);
        assert!(matches!(res, Err(NeuroSmoothError::LengthMismatch { expected: 4, actual: 5, .. })));
    }

    #[test]
    fn the_overlay_display_is_informative() {
        let overlay = SurfaceOverlay::new(two_triangles())
            .with_scalars(arr1(&[0.0; 4]))
            .unwrap();
        assert_eq!(
            "Brain surface with 4 vertices and 2 faces, with scalar data, without parcellation.",
            format!("{}", overlay)
        );
    }
}
