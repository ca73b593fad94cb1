//! Drive a real server over TCP.
//!
//! # Design
//! Starts the server on an ephemeral port in a background thread with its own
//! runtime, then talks to it with ureq the way an external client would. The
//! server is stopped through the graceful-shutdown future at the end.

use std::net::SocketAddr;
use std::thread::JoinHandle;

use todo_server::{AppState, Item, ItemStore};
use tokio::sync::oneshot;

struct Running {
    addr: SocketAddr,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl Running {
    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    fn shutdown(self) {
        self.stop.send(()).unwrap();
        self.handle.join().unwrap();
    }
}

fn start(store: ItemStore) -> Running {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();
    let (stop, stopped) = oneshot::channel::<()>();
    let state = AppState::new(store, concat!(env!("CARGO_MANIFEST_DIR"), "/static"));

    let handle = std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::serve(listener, state, async {
                let _ = stopped.await;
            })
            .await
        })
        .unwrap();
    });

    Running { addr, stop, handle }
}

fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

#[test]
fn seeded_server_round_trip() {
    let server = start(ItemStore::seeded());
    let agent = agent();

    // Step 1: landing page.
    let mut resp = agent.get(&server.url("/")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert!(resp.body_mut().read_to_string().unwrap().contains("<h1>Todos</h1>"));

    // Step 2: the three seed items.
    let mut resp = agent.get(&server.url("/todos")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let todos: Vec<Item> = serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![0, 1, 2]);

    // Step 3: create.
    let mut resp = agent
        .post(&server.url("/todos"))
        .content_type("application/json")
        .send(r#"{"title":"Live","body":"over tcp"}"#.as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    let created: Item = serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert_eq!(created.id, 3);
    assert_eq!(created.title, "Live");

    // Step 4: rejected body.
    let mut resp = agent
        .post(&server.url("/todos"))
        .content_type("application/json")
        .send("nope".as_bytes())
        .unwrap();
    assert_eq!(resp.status().as_u16(), 400);
    assert_eq!(resp.body_mut().read_to_string().unwrap(), "Invalid body");

    // Step 5: delete, then delete again.
    let resp = agent.delete(&server.url("/todos/0")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 204);
    let resp = agent.delete(&server.url("/todos/0")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 404);

    // Step 6: bad id.
    let resp = agent.delete(&server.url("/todos/zero")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 400);

    // Step 7: final state.
    let mut resp = agent.get(&server.url("/todos")).call().unwrap();
    let todos: Vec<Item> = serde_json::from_str(&resp.body_mut().read_to_string().unwrap()).unwrap();
    assert_eq!(todos.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2, 3]);

    drop(agent);
    server.shutdown();
}

#[test]
fn empty_server_lists_nothing() {
    let server = start(ItemStore::new());

    let mut resp = agent().get(&server.url("/todos")).call().unwrap();
    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(resp.body_mut().read_to_string().unwrap(), "[]");

    server.shutdown();
}
