//! Request Dispatcher
//!
//! Maps an incoming named operation onto the resolver and runs it through
//! the configured execution strategy. The dispatcher has no state beyond its
//! two collaborators and performs no recovery: resolver errors cross the
//! boundary with their content unmodified.

use async_trait::async_trait;
use bridge_traits::{
    ExecutionStrategy, Method, MethodCall, MethodHandler, MethodReply, PathResolver, PathValue,
    ResolveJob, StorageKind,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Handler installed on the method channel by the bridge lifecycle.
pub struct PathProviderDispatcher {
    resolver: Arc<dyn PathResolver>,
    strategy: Arc<dyn ExecutionStrategy>,
}

impl PathProviderDispatcher {
    pub fn new(resolver: Arc<dyn PathResolver>, strategy: Arc<dyn ExecutionStrategy>) -> Self {
        Self { resolver, strategy }
    }

    fn job_for(&self, method: Method, arguments: Option<Value>) -> ResolveJob {
        let resolver = Arc::clone(&self.resolver);
        match method {
            Method::TemporaryDirectory => {
                Box::new(move || resolver.temporary_directory().map(PathValue::Single))
            }
            Method::ApplicationDocumentsDirectory => Box::new(move || {
                resolver
                    .application_documents_directory()
                    .map(PathValue::Single)
            }),
            Method::ApplicationSupportDirectory => Box::new(move || {
                resolver
                    .application_support_directory()
                    .map(PathValue::Single)
            }),
            Method::StorageDirectory => {
                Box::new(move || resolver.storage_directory().map(PathValue::Maybe))
            }
            Method::ExternalCacheDirectories => {
                Box::new(move || resolver.external_cache_directories().map(PathValue::Many))
            }
            Method::ExternalStorageDirectories => {
                // Translated here so a bad argument fails fast on the calling
                // context and never reaches the worker.
                let kind = storage_kind_argument(arguments.as_ref());
                Box::new(move || {
                    resolver
                        .external_storage_directories(kind)
                        .map(PathValue::Many)
                })
            }
        }
    }
}

/// Translate the wire argument of `getExternalStorageDirectories`.
///
/// # Panics
///
/// A missing or non-integer argument, like an out-of-range code, is a
/// programmer error on the calling side and is not recovered from.
fn storage_kind_argument(arguments: Option<&Value>) -> StorageKind {
    let code = arguments.and_then(Value::as_i64).unwrap_or_else(|| {
        panic!("getExternalStorageDirectories requires an integer type code, got {arguments:?}")
    });
    StorageKind::from_code(code)
}

#[async_trait]
impl MethodHandler for PathProviderDispatcher {
    async fn on_method_call(&self, call: MethodCall) -> MethodReply {
        let Some(method) = Method::parse(&call.method) else {
            debug!(method = %call.method, "method not implemented by this provider");
            return MethodReply::NotImplemented;
        };

        debug!(method = method.name(), "dispatching path request");
        let job = self.job_for(method, call.arguments);
        match self.strategy.run(job).await {
            Ok(value) => MethodReply::Success(value.into_value()),
            Err(err) => {
                warn!(method = method.name(), error = %err, "path resolution failed");
                MethodReply::Error {
                    code: err.code().to_string(),
                    message: err.to_string(),
                }
            }
        }
    }
}
