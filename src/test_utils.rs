//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting marketplace fixtures across tests.
#![allow(dead_code)]

use std::time::Duration;

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use crate::client::{HttpConfig, MarketClient};
use crate::domain::transaction::TxMetadata;
use crate::domain::{PaymentChain, Seller, SellerStatus, Transaction, TxStatus};
use crate::state::{App, AppConfig, Route};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct SellerMother;

impl SellerMother {
    #[must_use]
    pub fn active(id: &str) -> Seller {
        Seller {
            seller_id: id.to_string(),
            evm_address: format!("0x{id:0>40}"),
            price_wei: None,
            price_conflux_wei: Some(1_000_000_000_000_000),
            price_tron_sun: None,
            description: format!("{id} sells context"),
            keywords: vec!["rust".to_string(), "defi".to_string()],
            status: SellerStatus::Active,
            created_at: "2024-03-01T12:00:00Z".to_string(),
            updated_at: "2024-03-02T12:00:00Z".to_string(),
        }
    }

    #[must_use]
    pub fn inactive(id: &str) -> Seller {
        Seller {
            status: SellerStatus::Inactive,
            ..Self::active(id)
        }
    }

    #[must_use]
    pub fn with_address(id: &str, evm_address: &str) -> Seller {
        Seller {
            evm_address: evm_address.to_string(),
            ..Self::active(id)
        }
    }

    /// Seller with explicit `(price_wei, price_conflux_wei, price_tron_sun)`.
    #[must_use]
    pub fn with_prices(
        id: &str,
        price_wei: Option<u128>,
        price_conflux_wei: Option<u128>,
        price_tron_sun: Option<u128>,
    ) -> Seller {
        Seller {
            price_wei,
            price_conflux_wei,
            price_tron_sun,
            ..Self::active(id)
        }
    }
}

pub struct TransactionMother;

impl TransactionMother {
    /// Pending transaction with no chain information.
    #[must_use]
    pub fn basic(id: &str, seller_id: &str, buyer_address: &str) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            seller_id: seller_id.to_string(),
            buyer_address: buyer_address.to_string(),
            price_wei: 0,
            payment_chain: None,
            payment_network: None,
            status: TxStatus::Pending,
            tx_hash: None,
            chat_id: None,
            message_thread_id: None,
            metadata: None,
            error_reason: None,
            created_at: "2024-03-01T12:00:00Z".to_string(),
            updated_at: "2024-03-01T12:05:00Z".to_string(),
        }
    }

    #[must_use]
    pub fn on_network(id: &str, network: &str, price_wei: u128) -> Transaction {
        Transaction {
            payment_network: Some(network.to_string()),
            price_wei,
            status: TxStatus::Paid,
            ..Self::basic(id, "seller", "0xbuyer")
        }
    }

    #[must_use]
    pub fn with_status(id: &str, status: TxStatus, price_wei: u128) -> Transaction {
        Transaction {
            status,
            price_wei,
            payment_chain: Some(PaymentChain::Conflux),
            ..Self::basic(id, "seller", "0xbuyer")
        }
    }

    /// Fully populated session transaction, as the detail view sees it.
    #[must_use]
    pub fn session(id: &str) -> Transaction {
        Transaction {
            price_wei: 2_500_000,
            payment_chain: Some(PaymentChain::Tron),
            payment_network: Some("tron:2494104990".to_string()),
            status: TxStatus::SessionCreated,
            tx_hash: Some("0xdeadbeefcafebabe".to_string()),
            chat_id: Some("-100123".to_string()),
            message_thread_id: Some(7),
            metadata: Some(TxMetadata {
                initial_prompt: Some("Summarize the repo".to_string()),
                buyer_bot_username: Some("buyer_bot".to_string()),
                seller_bot_username: Some("seller_bot".to_string()),
            }),
            ..Self::basic(id, "alpha", "0xbuyer00000000000000000000000000000000001")
        }
    }
}

/// Raw backend JSON payloads.
pub struct JsonMother;

impl JsonMother {
    #[must_use]
    pub fn seller(id: &str) -> serde_json::Value {
        serde_json::json!({
            "seller_id": id,
            "evm_address": "0x1234567890abcdef1234567890abcdef12345678",
            "price_wei": null,
            "price_conflux_wei": "1000000000000000000",
            "price_tron_sun": 1_000_000_u64,
            "description": "Context about Rust",
            "keywords": "rust, defi",
            "status": "active",
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-01T12:00:00Z",
        })
    }

    #[must_use]
    pub fn transaction(id: &str, seller_id: &str, buyer: &str) -> serde_json::Value {
        serde_json::json!({
            "transaction_id": id,
            "seller_id": seller_id,
            "buyer_address": buyer,
            "price_wei": 1_000_000_000_000_000_u64,
            "payment_chain": null,
            "payment_network": "eip155:71",
            "status": "paid",
            "tx_hash": "0xfeed",
            "chat_id": "-1001",
            "message_thread_id": 42,
            "metadata": {
                "initial_prompt": "Explain the codebase",
                "buyer_bot_username": "buyer_bot"
            },
            "error_reason": null,
            "created_at": "2024-03-01T12:00:00Z",
            "updated_at": "2024-03-01T12:01:00Z",
        })
    }
}

// ============================================================================
// Stub HTTP Server
// ============================================================================

/// Serves exactly one HTTP response and hands back the raw request it received.
pub async fn serve_once(status: &str, body: String) -> (MarketClient, JoinHandle<String>) {
    serve_once_after(Duration::ZERO, status, body).await
}

/// Like [`serve_once`], but waits `delay` after reading the request before answering.
pub async fn serve_once_after(
    delay: Duration,
    status: &str,
    body: String,
) -> (MarketClient, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = http_response(status, &body);

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;
        tokio::time::sleep(delay).await;
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = socket.shutdown().await;
        request
    });

    let client =
        MarketClient::new(&format!("http://{addr}/api"), &HttpConfig::default()).unwrap();
    (client, handle)
}

/// Answers one `200 OK` request per route, picking the body whose path
/// fragment appears in the request line. Connections are handled
/// concurrently; the handle yields the sorted request lines.
pub async fn serve_paths(
    routes: Vec<(&'static str, String)>,
) -> (MarketClient, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let mut connections = Vec::with_capacity(routes.len());
        for _ in 0..routes.len() {
            let (mut socket, _) = listener.accept().await.unwrap();
            let routes = routes.clone();
            connections.push(tokio::spawn(async move {
                let request = read_request(&mut socket).await;
                let line = request.lines().next().unwrap_or_default().to_string();
                let body = routes
                    .iter()
                    .find(|(fragment, _)| line.contains(fragment))
                    .map_or_else(|| "{}".to_string(), |(_, body)| body.clone());
                socket
                    .write_all(http_response("200 OK", &body).as_bytes())
                    .await
                    .unwrap();
                let _ = socket.shutdown().await;
                line
            }));
        }
        let mut lines = Vec::with_capacity(connections.len());
        for connection in connections {
            lines.push(connection.await.unwrap());
        }
        lines.sort();
        lines
    });

    let client =
        MarketClient::new(&format!("http://{addr}/api"), &HttpConfig::default()).unwrap();
    (client, handle)
}

fn http_response(status: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len()
    )
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let Some(header_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..header_end]).to_ascii_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= header_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

// ============================================================================
// App
// ============================================================================

/// App on `route` with default config, pointed at a closed local port.
///
/// Nothing is persisted and fetches fail fast, so render tests can fill page
/// state by hand.
#[must_use]
pub fn test_app(route: Route) -> App {
    let client = MarketClient::new("http://127.0.0.1:9/api", &HttpConfig::default())
        .expect("test client should build");
    App::with_client(AppConfig::default(), client, route)
}

// ============================================================================
// rstest Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 40)).expect("terminal creation should succeed")
}

/// Flattens a rendered buffer into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut rows = Vec::with_capacity(area.height as usize);
    for y in area.top()..area.bottom() {
        let row: String = (area.left()..area.right())
            .map(|x| buffer[(x, y)].symbol())
            .collect();
        rows.push(row);
    }
    rows.join("\n")
}
