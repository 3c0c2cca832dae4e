// One shared server per test binary, backed by a throwaway data directory.
use std::{
    path::PathBuf,
    sync::{Arc, OnceLock},
    time::Duration,
};

pub const PARTY_TOKEN: &str = "it-party-token";
pub const ADMIN_TOKEN: &str = "it-admin-token";

static SERVER_URL: OnceLock<String> = OnceLock::new();
static SERVER_READY: OnceLock<()> = OnceLock::new();

// Ensure the test server is running and return the shared base URL.
pub fn ensure_server() -> &'static str {
    SERVER_READY.get_or_init(|| {
        let data_dir = prepare_data_dir();
        let published_url = Arc::new(OnceLock::<String>::new());
        let published_url_thread = Arc::clone(&published_url);
        // An OS thread keeps the server alive across individual `#[tokio::test]` runtimes.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("test runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
                    .await
                    .expect("bind ephemeral test port");
                let addr = listener.local_addr().expect("get local addr");
                let base_url = format!("http://{addr}");
                let _ = published_url_thread.set(base_url.clone());
                let settings = pizza_party::Settings {
                    data_dir,
                    public_url: base_url,
                };
                pizza_party::run(listener, settings)
                    .await
                    .expect("server failed");
            });
        });
        wait_for_server_url_and_readiness(published_url);
    });

    SERVER_URL
        .get()
        .expect("server url should be initialized")
        .as_str()
}

// Known tokens are written up front so tests can build links.
fn prepare_data_dir() -> PathBuf {
    let dir = tempfile::tempdir().expect("tempdir").keep();
    let tokens = serde_json::json!({"party": PARTY_TOKEN, "admin": ADMIN_TOKEN});
    std::fs::write(dir.join("tokens.json"), tokens.to_string()).expect("write tokens");
    dir
}

fn wait_for_server_url_and_readiness(published_url: Arc<OnceLock<String>>) {
    let base_url = loop {
        if let Some(url) = published_url.get() {
            break url.clone();
        }
        std::thread::sleep(Duration::from_millis(10));
    };

    let _ = SERVER_URL.set(base_url.clone());

    let addr = base_url
        .strip_prefix("http://")
        .expect("base url should use http://");

    // The listener is bound before the URL is published, but state setup may still be running.
    for _ in 0..100 {
        if std::net::TcpStream::connect(addr).is_ok() {
            return;
        }
        std::thread::sleep(Duration::from_millis(20));
    }

    panic!("server did not become ready in time");
}
