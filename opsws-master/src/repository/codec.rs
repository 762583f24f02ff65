//! Blob Codec
//!
//! Encoding of nested values into the opaque text columns of the pipelines
//! table. The repository only ever talks to the [`Codec`] trait, so the
//! on-disk format can change without touching the document model.

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{0}")]
pub struct CodecError(String);

/// Encode/decode boundary for nested column values
pub trait Codec: Send + Sync {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError>;

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError>;
}

/// JSON blobs, the format written by earlier releases
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl Codec for JsonCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        serde_json::to_string(value).map_err(|e| CodecError(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        serde_json::from_str(text).map_err(|e| CodecError(e.to_string()))
    }
}

/// YAML blobs
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl Codec for YamlCodec {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        serde_yaml::to_string(value).map_err(|e| CodecError(e.to_string()))
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        serde_yaml::from_str(text).map_err(|e| CodecError(e.to_string()))
    }
}

/// Codec chosen at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BlobFormat {
    #[default]
    Json,
    Yaml,
}

impl Codec for BlobFormat {
    fn encode<T: Serialize>(&self, value: &T) -> Result<String, CodecError> {
        match self {
            BlobFormat::Json => JsonCodec.encode(value),
            BlobFormat::Yaml => YamlCodec.encode(value),
        }
    }

    fn decode<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        match self {
            BlobFormat::Json => JsonCodec.decode(text),
            BlobFormat::Yaml => YamlCodec.decode(text),
        }
    }
}
