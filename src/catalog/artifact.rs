use super::definition::NodeCatalog;
use crate::error::ArtifactError;
use crate::matrix::CompatibilityMatrix;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// A fully analyzed catalog: the node descriptors together with the
/// compatibility matrix built from them.
///
/// The analyzer itself has no cache; callers that want to skip re-analysis
/// persist this artifact and reload it later.
#[derive(Serialize, Deserialize)]
pub struct CompiledCatalog {
    pub catalog: NodeCatalog,
    pub matrix: CompatibilityMatrix,
}

impl CompiledCatalog {
    pub fn new(catalog: NodeCatalog, matrix: CompatibilityMatrix) -> Self {
        Self { catalog, matrix }
    }

    /// Saves the compiled catalog to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = encode_to_vec(self, standard())
            .map_err(|e| ArtifactError::Generic(format!("Serialization failed: {}", e)))?;
        let mut file = fs::File::create(path).map_err(|e| {
            ArtifactError::Generic(format!("Could not create file '{}': {}", path, e))
        })?;
        file.write_all(&bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not write to file '{}': {}", path, e))
        })?;
        Ok(())
    }

    /// Loads a compiled catalog from a file.
    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let mut file = fs::File::open(path)
            .map_err(|e| ArtifactError::Generic(format!("Could not open file '{}': {}", path, e)))?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(|e| {
            ArtifactError::Generic(format!("Could not read from file '{}': {}", path, e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Deserializes a compiled catalog from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        decode_from_slice(bytes, standard())
            .map(|(compiled, _)| compiled) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ArtifactError::Generic(format!("Deserialization failed: {}", e)))
    }
}
