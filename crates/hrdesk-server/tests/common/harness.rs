//! Test server harness: a real listener on an ephemeral port, backed by
//! the stub embedder and a mock completion backend.

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use hrdesk::classify::CategoryClassifier;
use hrdesk::completion::MockCompleter;
use hrdesk::corpus::{CorpusIndex, load_document};
use hrdesk::embedding::{SbertConfig, SbertEmbedder};
use hrdesk::resolve::ResolutionEngine;
use hrdesk::session::SessionStore;
use hrdesk_server::api::{AppState, create_router_with_state};

pub const TEST_API_KEY: &str = "test-api-key";

const TEST_CORPUS: &str = r#"{
  "faqs": [
    {
      "question": "What is the leave policy?",
      "answer": "Employees get 20 days annually.",
      "category": "leave"
    },
    {
      "question": "When will I get my salary?",
      "answer": "Salaries are credited on the last working day.",
      "category": "payroll"
    }
  ]
}"#;

pub struct TestServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _server_handle: JoinHandle<()>,
    _corpus_file: NamedTempFile,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn spawn_test_server() -> TestServer {
    spawn_test_server_with_completer(MockCompleter::new()).await
}

pub async fn spawn_test_server_with_completer(completer: MockCompleter) -> TestServer {
    let mut corpus_file = NamedTempFile::new().expect("create corpus file");
    write!(corpus_file, "{TEST_CORPUS}").expect("write corpus file");

    let entries = load_document(corpus_file.path()).expect("load corpus");

    let embedder = SbertEmbedder::load(SbertConfig::stub()).expect("stub embedder");
    let embedder_stub = embedder.is_stub();
    let index = CorpusIndex::build(entries, &embedder).expect("build index");
    let classifier = CategoryClassifier::with_defaults(&embedder).expect("build classifier");

    let engine = Arc::new(ResolutionEngine::new(
        index,
        classifier,
        SessionStore::new(),
        embedder,
        completer,
    ));

    let state = AppState::new(engine, TEST_API_KEY, "mock-completion", embedder_stub);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("local addr");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .expect("test server");
    });

    TestServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
        _server_handle: server_handle,
        _corpus_file: corpus_file,
    }
}
