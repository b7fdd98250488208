//! End-to-end tests driving the full attach → call → reply path through a
//! fake messaging endpoint, with the real desktop resolver underneath.

use bridge_desktop::DesktopPathResolver;
use bridge_traits::{
    HostCapabilities, MethodCall, MethodChannel, MethodHandler, MethodReply, PathResolver,
};
use core_provider::PathProviderBridge;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Host-side endpoint stand-in: remembers the installed handler and lets the
/// test invoke it the way the real channel would.
struct FakeChannel {
    handler: Mutex<Option<Arc<dyn MethodHandler>>>,
}

impl FakeChannel {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            handler: Mutex::new(None),
        })
    }

    async fn invoke(&self, method: &str, arguments: Option<Value>) -> MethodReply {
        let handler = self
            .handler
            .lock()
            .unwrap()
            .clone()
            .expect("no handler attached");
        handler.on_method_call(MethodCall::new(method, arguments)).await
    }
}

impl MethodChannel for FakeChannel {
    fn set_handler(&self, handler: Option<Arc<dyn MethodHandler>>) {
        *self.handler.lock().unwrap() = handler;
    }
}

fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ppc-e2e-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn resolver_in(dir: &Path, volume_roots: Vec<PathBuf>) -> Arc<dyn PathResolver> {
    Arc::new(DesktopPathResolver::with_roots(
        "ppc-e2e-app",
        dir.join("cache"),
        dir.join("data"),
        dir.join("config"),
        volume_roots,
    ))
}

#[tokio::test]
async fn documents_directory_round_trip() {
    init_logging();
    let dir = scratch("documents");
    let channel = FakeChannel::new();
    let _bridge = PathProviderBridge::attach(
        channel.clone(),
        resolver_in(&dir, Vec::new()),
        HostCapabilities::default(),
    )
    .unwrap();

    let reply = channel
        .invoke("getApplicationDocumentsDirectory", None)
        .await;
    let MethodReply::Success(Value::String(path)) = reply else {
        panic!("expected a path string, got {reply:?}");
    };
    assert!(Path::new(&path).is_absolute());
    assert!(path.ends_with("ppc-e2e-app"));
}

#[tokio::test]
async fn pictures_on_two_mounted_volumes() {
    init_logging();
    let dir = scratch("pictures");
    let mounts = dir.join("mounts");
    fs::create_dir_all(mounts.join("usb0")).unwrap();
    fs::create_dir_all(mounts.join("usb1")).unwrap();

    let channel = FakeChannel::new();
    let _bridge = PathProviderBridge::attach(
        channel.clone(),
        resolver_in(&dir, vec![mounts]),
        HostCapabilities::default(),
    )
    .unwrap();

    // Type code 0 is the pictures category.
    let reply = channel
        .invoke("getExternalStorageDirectories", Some(json!(0)))
        .await;
    let MethodReply::Success(Value::Array(paths)) = reply else {
        panic!("expected a path list, got {reply:?}");
    };
    assert_eq!(paths.len(), 2);
    for path in &paths {
        let path = path.as_str().unwrap();
        assert!(Path::new(path).is_absolute());
        assert!(path.ends_with("Pictures"));
    }
}

#[tokio::test]
async fn storage_directory_without_external_storage_is_null() {
    init_logging();
    let dir = scratch("no-storage");
    let channel = FakeChannel::new();
    let _bridge = PathProviderBridge::attach(
        channel.clone(),
        resolver_in(&dir, Vec::new()),
        HostCapabilities::default(),
    )
    .unwrap();

    let reply = channel.invoke("getStorageDirectory", None).await;
    assert_eq!(reply, MethodReply::Success(Value::Null));
}

#[tokio::test]
async fn unknown_method_is_not_implemented_not_an_error() {
    init_logging();
    let dir = scratch("unknown");
    let channel = FakeChannel::new();
    let _bridge = PathProviderBridge::attach(
        channel.clone(),
        resolver_in(&dir, Vec::new()),
        HostCapabilities::default(),
    )
    .unwrap();

    let reply = channel.invoke("getDownloadsDirectory", None).await;
    assert_eq!(reply, MethodReply::NotImplemented);
}

#[tokio::test]
async fn inline_capable_host_gets_the_same_answers() {
    init_logging();
    let dir = scratch("inline");
    let channel = FakeChannel::new();
    let _bridge = PathProviderBridge::attach(
        channel.clone(),
        resolver_in(&dir, Vec::new()),
        HostCapabilities {
            background_task_queue: true,
        },
    )
    .unwrap();

    for method in [
        "getTemporaryDirectory",
        "getApplicationDocumentsDirectory",
        "getApplicationSupportDirectory",
    ] {
        let reply = channel.invoke(method, None).await;
        let MethodReply::Success(Value::String(path)) = reply else {
            panic!("{method}: expected a path string, got {reply:?}");
        };
        assert!(Path::new(&path).is_absolute());
    }

    let reply = channel.invoke("getExternalCacheDirectories", None).await;
    assert_eq!(reply, MethodReply::Success(json!([])));
}

#[tokio::test]
async fn detach_releases_the_endpoint() {
    init_logging();
    let dir = scratch("detach");
    let channel = FakeChannel::new();
    let bridge = PathProviderBridge::attach(
        channel.clone(),
        resolver_in(&dir, Vec::new()),
        HostCapabilities::default(),
    )
    .unwrap();

    assert!(channel.handler.lock().unwrap().is_some());
    bridge.detach();
    assert!(channel.handler.lock().unwrap().is_none());
}
