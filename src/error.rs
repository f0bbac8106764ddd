use quick_error::quick_error;

quick_error! {
    /// Error type for all error variants originated by this crate.
    #[derive(Debug, Clone, PartialEq)]
    pub enum NeuroSmoothError {
        /// A per-vertex array does not have one entry per vertex.
        LengthMismatch { what: &'static str, expected: usize, actual: usize } {
            display("Length mismatch for {}: expected {} values, got {}", what, expected, actual)
        }

        /// A face references a vertex that does not exist.
        FaceIndexOutOfRange { face: usize, index: i32, num_vertices: usize } {
            display("Face {} references vertex index {}, but the mesh has {} vertices", face, index, num_vertices)
        }

        NonTriangularFaces { len: usize } {
            display("Face buffer of length {} does not hold vertex index triples", len)
        }

        InvalidIterations { iterations: i32 } {
            display("Invalid iteration count {}, must not be negative", iterations)
        }

        InvalidClipRange { min: f32, max: f32 } {
            display("Invalid clip range: min {} is greater than max {}", min, max)
        }

        /// A vertex label has no entry in the region name table.
        RegionNameNotFound { label: i32 } {
            display("Region name not found for label {}", label)
        }

        NoSuchRegion { name: String } {
            display("No region named '{}' in parcellation", name)
        }
    }
}

/// Alias type for results originated from this crate.
pub type Result<T> = ::std::result::Result<T, NeuroSmoothError>;
