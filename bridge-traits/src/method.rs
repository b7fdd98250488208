//! Wire-Level Request and Reply Types
//!
//! The transport collaborator owns serialization and invocation; these types
//! describe what arrives at, and leaves, the core's handler.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Named operations the provider understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    TemporaryDirectory,
    ApplicationDocumentsDirectory,
    ApplicationSupportDirectory,
    StorageDirectory,
    ExternalCacheDirectories,
    ExternalStorageDirectories,
}

impl Method {
    /// Look up a method by its wire name.
    ///
    /// Returns `None` for unrecognized names; the dispatcher answers those
    /// with [`MethodReply::NotImplemented`] rather than an error, since an
    /// unknown name signals a caller/version mismatch and not a failure.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "getTemporaryDirectory" => Some(Self::TemporaryDirectory),
            "getApplicationDocumentsDirectory" => Some(Self::ApplicationDocumentsDirectory),
            "getApplicationSupportDirectory" => Some(Self::ApplicationSupportDirectory),
            "getStorageDirectory" => Some(Self::StorageDirectory),
            "getExternalCacheDirectories" => Some(Self::ExternalCacheDirectories),
            "getExternalStorageDirectories" => Some(Self::ExternalStorageDirectories),
            _ => None,
        }
    }

    /// Wire name of the method.
    pub fn name(self) -> &'static str {
        match self {
            Self::TemporaryDirectory => "getTemporaryDirectory",
            Self::ApplicationDocumentsDirectory => "getApplicationDocumentsDirectory",
            Self::ApplicationSupportDirectory => "getApplicationSupportDirectory",
            Self::StorageDirectory => "getStorageDirectory",
            Self::ExternalCacheDirectories => "getExternalCacheDirectories",
            Self::ExternalStorageDirectories => "getExternalStorageDirectories",
        }
    }
}

/// A single incoming invocation: a method name plus an optional argument
/// value. Constructed per request and discarded once replied to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodCall {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, arguments: Option<Value>) -> Self {
        Self {
            method: method.into(),
            arguments,
        }
    }
}

/// Outcome of an invocation as it crosses back over the boundary.
///
/// The boundary contract fixes error details to absent, so errors carry only
/// a code and a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MethodReply {
    /// The operation succeeded; the payload is a path string, `null` for an
    /// absent location, or an array of path strings.
    Success(Value),
    /// The method name is not part of this provider's contract.
    NotImplemented,
    /// Resolution failed; content mirrors the underlying error verbatim.
    Error { code: String, message: String },
}

/// Typed resolver output prior to marshaling.
///
/// Modeling absence as `Maybe(None)` keeps "no such location" distinct from
/// failure all the way to the boundary, where it becomes `null`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathValue {
    /// Exactly one path.
    Single(PathBuf),
    /// Zero or one path; `None` means the location does not exist on this
    /// host right now.
    Maybe(Option<PathBuf>),
    /// Zero or more paths, one per available volume. Never contains
    /// placeholder entries for unavailable volumes.
    Many(Vec<PathBuf>),
}

impl PathValue {
    /// Marshal into the dynamic value handed to the transport.
    pub fn into_value(self) -> Value {
        match self {
            Self::Single(path) => Value::String(path_string(path)),
            Self::Maybe(Some(path)) => Value::String(path_string(path)),
            Self::Maybe(None) => Value::Null,
            Self::Many(paths) => Value::Array(
                paths
                    .into_iter()
                    .map(|path| Value::String(path_string(path)))
                    .collect(),
            ),
        }
    }
}

fn path_string(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_method() {
        let methods = [
            Method::TemporaryDirectory,
            Method::ApplicationDocumentsDirectory,
            Method::ApplicationSupportDirectory,
            Method::StorageDirectory,
            Method::ExternalCacheDirectories,
            Method::ExternalStorageDirectories,
        ];
        for method in methods {
            assert_eq!(Method::parse(method.name()), Some(method));
        }
        assert_eq!(Method::parse("getLibraryDirectory"), None);
    }

    #[test]
    fn absent_location_marshals_to_null() {
        assert_eq!(PathValue::Maybe(None).into_value(), Value::Null);
    }

    #[test]
    fn single_path_marshals_to_string() {
        let value = PathValue::Single(PathBuf::from("/tmp/app")).into_value();
        assert_eq!(value, Value::String("/tmp/app".into()));
    }

    #[test]
    fn sequences_marshal_without_placeholders() {
        let value = PathValue::Many(vec![
            PathBuf::from("/media/user/a/Pictures"),
            PathBuf::from("/media/user/b/Pictures"),
        ])
        .into_value();
        let items = value.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.is_string()));

        assert_eq!(PathValue::Many(Vec::new()).into_value(), Value::Array(Vec::new()));
    }
}
