use super::definition::ModelDefinition;
use crate::error::ModelError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use std::fs;
use std::path::Path;

impl ModelDefinition {
    /// Saves the model descriptor to a file using the bincode format.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ModelError> {
        let bytes = self.to_bytes()?;
        fs::write(path.as_ref(), bytes).map_err(|e| ModelError::Io {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Encodes the model descriptor into its binary on-disk form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ModelError> {
        encode_to_vec(self, standard()).map_err(|e| ModelError::Encode(e.to_string()))
    }

    /// Loads a binary model descriptor from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let bytes = fs::read(path.as_ref()).map_err(|e| ModelError::Io {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Decodes a model descriptor from a binary byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        decode_from_slice(bytes, standard())
            .map(|(model, _)| model) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| ModelError::Decode(e.to_string()))
    }

    /// Loads a model descriptor from its JSON form.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ModelError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ModelError::Io {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    /// Parses a model descriptor from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        serde_json::from_str(json).map_err(|e| ModelError::Json(e.to_string()))
    }
}
