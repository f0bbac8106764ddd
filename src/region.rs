//! Brain surface parcellations and region-wise aggregation of per-vertex data.
//!
//! A parcellation assigns each vertex of a brain surface mesh to at most one brain region
//! or label. Labels are indices into a table of region names, and vertices which are not
//! part of any region carry the [`BACKGROUND_LABEL`].

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use ndarray::ArrayView1;
use tracing::debug;

use crate::error::{NeuroSmoothError, Result};

/// The label of vertices that do not belong to any region.
pub const BACKGROUND_LABEL: i32 = -1;


/// The names of the regions of a parcellation. The name of the region with label `l` is stored at index `l`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionTable {
    pub names: Vec<String>,
}

impl RegionTable {
    pub fn new(names: Vec<String>) -> RegionTable {
        RegionTable { names }
    }

    /// Get the name of the region with the given label, if any. Negative labels never have a name.
    pub fn name(&self, label: i32) -> Option<&str> {
        if label < 0 {
            return None;
        }
        self.names.get(label as usize).map(|n| n.as_str())
    }

    /// Get the label of the region with the given name, if any.
    pub fn label(&self, name: &str) -> Option<i32> {
        self.names.iter().position(|n| n == name).map(|idx| idx as i32)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> std::iter::FromIterator<S> for RegionTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        RegionTable::new(iter.into_iter().map(Into::into).collect())
    }
}


/// Build the key under which the mean value of a cortical region is reported, e.g. `ctx-lh-bankssts`.
pub fn region_key(hemi: &str, region_name: &str) -> String {
    format!("ctx-{}-{}", hemi, region_name)
}


/// Compute the mean of the per-vertex `scalars` for each region present in `labels`.
///
/// Vertices with the [`BACKGROUND_LABEL`] are ignored. The result maps the region key (see [`region_key`])
/// to the mean value over all vertices carrying the region's label. Non-finite values are not filtered.
/// If two labels share a region name, the value for the higher label is kept.
///
/// # Errors
///
/// * If `scalars` and `labels` differ in length.
/// * If a label other than the background label has no name in the `regions` table.
///
/// # Examples
///
/// ```
/// use ndarray::arr1;
/// use neurosmooth::{aggregate_by_region, RegionTable};
///
/// let regions: RegionTable = vec!["unknown", "bankssts"].into_iter().collect();
/// let means = aggregate_by_region(arr1(&[1.0, 3.0, 9.0]).view(), &[1, 1, -1], &regions, "lh").unwrap();
/// assert_eq!(means["ctx-lh-bankssts"], 2.0);
/// ```
pub fn aggregate_by_region(
    scalars: ArrayView1<f32>,
    labels: &[i32],
    regions: &RegionTable,
    hemi: &str,
) -> Result<BTreeMap<String, f32>> {
    if scalars.len() != labels.len() {
        return Err(NeuroSmoothError::LengthMismatch {
            what: "per-vertex labels",
            expected: scalars.len(),
            actual: labels.len(),
        });
    }

    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for (&label, &value) in labels.iter().zip(scalars.iter()) {
        if label == BACKGROUND_LABEL {
            continue;
        }
        let entry = sums.entry(label).or_insert((0.0, 0));
        entry.0 += value as f64;
        entry.1 += 1;
    }

    let mut region_means: BTreeMap<String, f32> = BTreeMap::new();
    for (label, (sum, count)) in sums {
        let name = regions
            .name(label)
            .ok_or(NeuroSmoothError::RegionNameNotFound { label })?;
        region_means.insert(region_key(hemi, name), (sum / count as f64) as f32);
    }

    debug!(hemi, regions = region_means.len(), "Aggregated per-vertex data by region");
    Ok(region_means)
}


/// Models a brain surface parcellation: one label per mesh vertex, and the names of the regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Parcellation {
    pub vertex_labels: Vec<i32>,
    pub regions: RegionTable,
}

impl Parcellation {
    pub fn new(vertex_labels: Vec<i32>, regions: RegionTable) -> Parcellation {
        Parcellation { vertex_labels, regions }
    }

    /// The number of vertices covered by this parcellation.
    pub fn num_vertices(&self) -> usize {
        self.vertex_labels.len()
    }

    /// Get the region names contained in the [`Parcellation`].
    pub fn regions(&self) -> Vec<String> {
        self.regions.names.clone()
    }

    /// Get the number of regions contained in the [`Parcellation`], including regions without vertices.
    pub fn num_regions(&self) -> usize {
        self.regions.len()
    }

    /// The distinct labels assigned to at least one vertex, in ascending order, without the background label.
    pub fn label_set(&self) -> BTreeSet<i32> {
        self.vertex_labels
            .iter()
            .copied()
            .filter(|&l| l != BACKGROUND_LABEL)
            .collect()
    }

    /// Get the indices of all vertices which are part of the given brain region.
    ///
    /// Note that it can happen that no vertices are assigned to the region, in which case the result vector is empty.
    ///
    /// # Errors
    ///
    /// If the given `region` is not a valid region name for this parcellation.
    ///
    /// # Examples
    ///
    /// ```
    /// use neurosmooth::Parcellation;
    ///
    /// let parc = Parcellation::new(vec![0, 1, 1, -1], vec!["unknown", "insula"].into_iter().collect());
    /// assert_eq!(parc.region_vertices("insula").unwrap(), vec![1, 2]);
    /// ```
    pub fn region_vertices(&self, region: &str) -> Result<Vec<usize>> {
        let region_label = self
            .regions
            .label(region)
            .ok_or_else(|| NeuroSmoothError::NoSuchRegion { name: region.to_string() })?;

        Ok(self
            .vertex_labels
            .iter()
            .enumerate()
            .filter(|(_, vlabel)| **vlabel == region_label)
            .map(|(idx, _)| idx)
            .collect())
    }

    /// Get the region name for each vertex, `None` for background vertices and labels without a name.
    pub fn vertex_regions(&self) -> Vec<Option<&str>> {
        self.vertex_labels.iter().map(|&l| self.regions.name(l)).collect()
    }

    /// Compute the mean of the per-vertex `scalars` for each region, see [`aggregate_by_region`].
    pub fn region_means(&self, scalars: ArrayView1<f32>, hemi: &str) -> Result<BTreeMap<String, f32>> {
        aggregate_by_region(scalars, &self.vertex_labels, &self.regions, hemi)
    }
}

impl fmt::Display for Parcellation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Surface parcellation assigning {} vertices to {} brain regions.",
            self.vertex_labels.len(),
            self.regions.len()
        )
    }
}
