#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tokio::sync::oneshot;

pub const REGISTRY: &str = "OUI/MA-L\t\t\t\t\t\t\t\tOrganization\r\n\
    company_id\t\t\t\t\t\t\t\tOrganization\r\n\
    \t\t\t\t\t\t\t\tAddress\r\n\
    \r\n\
    00-50-C2   (hex)\t\tMINIBAR SYSTEMS\r\n\
    0050C2     (base 16)\t\tMINIBAR SYSTEMS\r\n\
    \t\t\t\tRUE DE LA PAIX\r\n\
    \t\t\t\tPARIS    75002\r\n\
    \t\t\t\tFR\r\n\
    \r\n\
    00-1B-63   (hex)\t\tApple, Inc.\r\n\
    001B63     (base 16)\t\tApple, Inc.\r\n\
    \t\t\t\t1 Infinite Loop\r\n\
    \r\n\
    AC-DE-48   (hex)\t\tPrivate\r\n\
    ACDE48     (base 16)\t\tPrivate\r\n";

/// Registry server on its own thread and runtime, so both `#[tokio::test]`
/// and plain `#[test]` callers (which drive their own runtime) can use it.
pub struct RegistryServer {
    pub url: String,
    hits: Arc<AtomicUsize>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl RegistryServer {
    /// Answers `GET /oui.txt` with `status` and `body`.
    pub fn serve(status: StatusCode, body: &'static str) -> Self {
        Self::start(move |hits| {
            Router::new().route(
                "/oui.txt",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        (status, body)
                    }
                }),
            )
        })
    }

    /// Accepts `GET /oui.txt` but never answers it.
    pub fn stalled() -> Self {
        Self::start(|hits| {
            Router::new().route(
                "/oui.txt",
                get(move || {
                    let hits = hits.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        std::future::pending::<&'static str>().await
                    }
                }),
            )
        })
    }

    /// Requests that reached `/oui.txt`.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn start<F>(app: F) -> Self
    where
        F: FnOnce(Arc<AtomicUsize>) -> Router,
    {
        let hits = Arc::new(AtomicUsize::new(0));
        let app = app(hits.clone());

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let url = format!("http://{}/oui.txt", listener.local_addr().unwrap());
        let (shutdown, stop) = oneshot::channel::<()>();

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = stop.await;
                    })
                    .await
                    .unwrap();
            });
        });

        RegistryServer {
            url,
            hits,
            shutdown: Some(shutdown),
        }
    }
}

impl Drop for RegistryServer {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
