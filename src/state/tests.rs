//! Tests for the state module.

use super::{App, AppConfig, AppMessage, BackendHealth, DashboardFocus, Route};
use crate::commands::{AppCommand, InputContext};
use crate::domain::{ChainFilter, PaymentChain, Transaction, TxStatus};
use crate::test_utils::{
    JsonMother, SellerMother, TransactionMother, serve_once, serve_paths, test_app,
};
use crate::theme::Theme;

// ========================================================================
// Test Helper Functions
// ========================================================================

fn create_test_app() -> App {
    test_app(Route::Cover)
}

fn tron_txn(id: &str) -> Transaction {
    Transaction {
        payment_chain: Some(PaymentChain::Tron),
        ..TransactionMother::basic(id, "alpha", "0xbuyer")
    }
}

// ========================================================================
// Input Context
// ========================================================================

#[test]
fn test_input_context_priority() {
    struct TestCase {
        name: &'static str,
        route: Route,
        help: bool,
        message: bool,
        search: bool,
        expected: InputContext,
    }

    let cases = [
        TestCase {
            name: "cover page",
            route: Route::Cover,
            help: false,
            message: false,
            search: false,
            expected: InputContext::Cover,
        },
        TestCase {
            name: "detail page",
            route: Route::TransactionDetail("x".into()),
            help: false,
            message: false,
            search: false,
            expected: InputContext::TransactionDetail,
        },
        TestCase {
            name: "search bar on dashboard",
            route: Route::Dashboard,
            help: false,
            message: false,
            search: true,
            expected: InputContext::SearchInput,
        },
        TestCase {
            name: "stale search focus off the dashboard",
            route: Route::Transactions,
            help: false,
            message: false,
            search: true,
            expected: InputContext::Transactions,
        },
        TestCase {
            name: "message beats search",
            route: Route::Dashboard,
            help: false,
            message: true,
            search: true,
            expected: InputContext::MessagePopup,
        },
        TestCase {
            name: "help beats everything",
            route: Route::Dashboard,
            help: true,
            message: true,
            search: true,
            expected: InputContext::HelpPopup,
        },
    ];

    for case in cases {
        let mut app = create_test_app();
        app.route = case.route;
        app.ui.show_help = case.help;
        if case.message {
            app.ui.show_message("oops");
        }
        app.ui.search_focused = case.search;
        assert_eq!(app.get_input_context(), case.expected, "{}", case.name);
    }
}

// ========================================================================
// Routing
// ========================================================================

#[tokio::test]
async fn test_navigation_history_and_back() {
    let mut app = create_test_app();

    app.execute_command(AppCommand::GoDashboard);
    assert_eq!(app.route, Route::Dashboard);
    assert!(app.data.dashboard.load.loading);

    app.execute_command(AppCommand::GoTransactions);
    assert_eq!(app.history, vec![Route::Cover, Route::Dashboard]);

    // Re-entering the current route neither refetches nor grows history.
    app.execute_command(AppCommand::GoTransactions);
    assert_eq!(app.history.len(), 2);

    app.execute_command(AppCommand::Back);
    assert_eq!(app.route, Route::Dashboard);
    app.execute_command(AppCommand::Back);
    assert_eq!(app.route, Route::Cover);
    app.execute_command(AppCommand::Back);
    assert_eq!(app.route, Route::Cover);
}

#[tokio::test]
async fn test_back_without_history_goes_to_parent() {
    let mut app = create_test_app();
    app.route = Route::TransactionDetail("tx-1".into());
    app.execute_command(AppCommand::Back);
    assert_eq!(app.route, Route::Transactions);
}

#[tokio::test]
async fn test_enter_on_cover_opens_dashboard() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::Select);
    assert_eq!(app.route, Route::Dashboard);
}

#[tokio::test]
async fn test_enter_opens_selected_transaction() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::GoTransactions);
    let seq = 1;
    app.apply_message(AppMessage::TransactionsLoaded {
        seq,
        result: Ok(vec![
            tron_txn("t-0"),
            TransactionMother::with_status("cfx", TxStatus::Paid, 1),
            tron_txn("t-1"),
        ]),
    });

    app.execute_command(AppCommand::MoveDown);
    app.execute_command(AppCommand::Select);
    assert_eq!(app.route, Route::TransactionDetail("t-1".into()));
    assert_eq!(app.data.detail.id, "t-1");
    assert!(app.data.detail.load.loading);
}

#[tokio::test]
async fn test_dashboard_enter_depends_on_focus() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::GoDashboard);
    app.apply_message(AppMessage::DashboardLoaded {
        seq: 1,
        result: Ok((
            vec![SellerMother::active("alpha")],
            vec![TransactionMother::session("tx-9")],
        )),
    });

    app.execute_command(AppCommand::Select);
    assert_eq!(app.route, Route::Dashboard);

    app.execute_command(AppCommand::CycleFocus);
    assert_eq!(app.data.dashboard.focus, DashboardFocus::Transactions);
    app.execute_command(AppCommand::Select);
    assert_eq!(app.route, Route::TransactionDetail("tx-9".into()));
}

// ========================================================================
// Message Processing
// ========================================================================

#[tokio::test]
async fn test_stale_responses_are_dropped() {
    let mut app = create_test_app();
    app.route = Route::Transactions;
    app.execute_command(AppCommand::Refresh);
    app.execute_command(AppCommand::Refresh);

    app.apply_message(AppMessage::TransactionsLoaded {
        seq: 1,
        result: Ok(vec![tron_txn("old")]),
    });
    assert!(app.data.transactions.transactions.is_empty());
    assert!(app.data.transactions.load.loading);

    app.apply_message(AppMessage::TransactionsLoaded {
        seq: 2,
        result: Ok(vec![tron_txn("new")]),
    });
    assert!(!app.data.transactions.load.loading);
    assert_eq!(app.data.transactions.transactions[0].transaction_id, "new");
}

#[tokio::test]
async fn test_dashboard_error_clears_both_lists() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::GoDashboard);
    app.apply_message(AppMessage::DashboardLoaded {
        seq: 1,
        result: Ok((
            vec![SellerMother::active("a")],
            vec![TransactionMother::basic("t", "a", "b")],
        )),
    });
    assert_eq!(app.data.dashboard.sellers.len(), 1);

    app.execute_command(AppCommand::Refresh);
    app.apply_message(AppMessage::DashboardLoaded {
        seq: 2,
        result: Err("HTTP 500: boom".into()),
    });
    let page = &app.data.dashboard;
    assert!(page.sellers.is_empty());
    assert!(page.transactions.is_empty());
    assert_eq!(page.load.error.as_deref(), Some("HTTP 500: boom"));
}

#[tokio::test]
async fn test_detail_not_found() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::GoTransactions);
    app.navigate_to(Route::TransactionDetail("missing".into()));
    app.apply_message(AppMessage::TransactionLoaded {
        seq: 1,
        result: Ok(None),
    });
    assert!(app.data.detail.not_found);
    assert!(app.data.detail.load.error.is_none());
}

#[test]
fn test_health_messages() {
    let mut app = create_test_app();
    assert_eq!(app.health, BackendHealth::Unknown);
    app.apply_message(AppMessage::HealthChecked(Ok("ok".into())));
    assert_eq!(app.health, BackendHealth::Up("ok".into()));
    app.apply_message(AppMessage::HealthChecked(Err("refused".into())));
    assert_eq!(app.health.label(), "offline");
}

#[tokio::test]
async fn test_transactions_page_fetches_end_to_end() {
    let body = serde_json::json!({
        "items": [
            JsonMother::transaction("tx-1", "alpha", "0xb1"),
            {
                "transaction_id": "tx-2",
                "seller_id": "beta",
                "buyer_address": "0xb2",
                "price_wei": 2_000_000,
                "payment_network": "tron:2494104990",
                "status": "session_created",
                "created_at": "2024-03-02T08:00:00Z",
                "updated_at": "2024-03-02T08:00:00Z"
            }
        ]
    })
    .to_string();
    let (client, request) = serve_once("200 OK", body).await;
    let mut app = App::with_client(AppConfig::default(), client, Route::Transactions);

    app.load_current_route();
    let message = app.message_rx.recv().await.expect("fetch result");
    app.apply_message(message);

    let raw = request.await.unwrap();
    assert!(raw.starts_with("GET /api/v1/transactions?limit=200 "));

    let page = &app.data.transactions;
    assert_eq!(page.filter, ChainFilter::Tron);
    assert_eq!(page.counts(), (1, 2));
    assert_eq!(
        page.selected_transaction().map(|t| t.transaction_id.as_str()),
        Some("tx-2")
    );
}

fn marketplace_routes() -> Vec<(&'static str, String)> {
    let sellers = serde_json::json!({ "items": [JsonMother::seller("alpha")] });
    let transactions = serde_json::json!({
        "items": [
            JsonMother::transaction("tx-1", "alpha", "0xb1"),
            JsonMother::transaction("tx-2", "alpha", "0xb2"),
        ]
    });
    vec![
        ("/v1/sellers?", sellers.to_string()),
        ("/v1/transactions?", transactions.to_string()),
    ]
}

#[tokio::test]
async fn test_cover_fetches_snapshot_concurrently() {
    let (client, server) = serve_paths(marketplace_routes()).await;
    let mut app = App::with_client(AppConfig::default(), client, Route::Cover);

    app.load_current_route();
    let message = app.message_rx.recv().await.expect("cover result");
    app.apply_message(message);

    assert_eq!(
        server.await.unwrap(),
        vec![
            "GET /api/v1/sellers?limit=300 HTTP/1.1",
            "GET /api/v1/transactions?limit=500 HTTP/1.1",
        ]
    );
    let cover = &app.data.cover;
    assert!(cover.load.error.is_none());
    assert_eq!((cover.seller_count, cover.transaction_count), (1, 2));
    assert_eq!(cover.topology.nodes.len(), 1);
}

#[tokio::test]
async fn test_dashboard_fetches_sellers_and_transactions_concurrently() {
    let (client, server) = serve_paths(marketplace_routes()).await;
    let mut app = App::with_client(AppConfig::default(), client, Route::Dashboard);

    app.load_current_route();
    let message = app.message_rx.recv().await.expect("dashboard result");
    app.apply_message(message);

    assert_eq!(
        server.await.unwrap(),
        vec![
            "GET /api/v1/sellers?limit=200&status=active HTTP/1.1",
            "GET /api/v1/transactions?limit=100 HTTP/1.1",
        ]
    );
    let page = &app.data.dashboard;
    assert_eq!(page.sellers.len(), 1);
    assert_eq!(page.transactions.len(), 2);
    assert_eq!(page.stats.active_tx, 2);
}

// ========================================================================
// Search, Ticks and Theme
// ========================================================================

#[tokio::test]
async fn test_search_submit_and_cancel() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::GoDashboard);
    app.execute_command(AppCommand::FocusSearch);
    assert_eq!(app.get_input_context(), InputContext::SearchInput);

    for c in " rust ".chars() {
        app.execute_command(AppCommand::TypeChar(c));
    }
    app.execute_command(AppCommand::SubmitSearch);
    assert_eq!(app.data.dashboard.keyword, "rust");
    assert!(!app.ui.is_search_focused());

    app.execute_command(AppCommand::FocusSearch);
    app.execute_command(AppCommand::Backspace);
    app.execute_command(AppCommand::TypeChar('x'));
    app.execute_command(AppCommand::CancelSearch);
    assert_eq!(app.ui.search_query(), "rust");
    assert_eq!(app.data.dashboard.keyword, "rust");
}

#[test]
fn test_hero_rotates_only_on_cover() {
    let mut app = create_test_app();
    for _ in 0..30 {
        app.on_tick();
    }
    assert_eq!(app.data.cover.hero_index, 1);

    app.route = Route::Dashboard;
    for _ in 0..30 {
        app.on_tick();
    }
    assert_eq!(app.data.cover.hero_index, 1);
}

#[test]
fn test_toggle_theme_updates_config_without_saving() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::ToggleTheme);
    assert_eq!(app.ui.theme, Theme::Light);
    assert_eq!(app.config.theme, Theme::Light);
    assert_eq!(app.ui.toast_message(), Some("Theme: light"));
}

#[test]
fn test_copy_without_transaction_shows_toast() {
    let mut app = create_test_app();
    app.route = Route::TransactionDetail("x".into());
    app.execute_command(AppCommand::CopyTxHash);
    assert_eq!(app.ui.toast_message(), Some("No tx hash to copy"));
}

#[test]
fn test_chain_filter_command_cycles() {
    let mut app = create_test_app();
    app.route = Route::Transactions;
    app.execute_command(AppCommand::CycleChainFilter);
    assert_eq!(app.data.transactions.filter, ChainFilter::Conflux);
}

#[test]
fn test_quit() {
    let mut app = create_test_app();
    app.execute_command(AppCommand::Quit);
    assert!(app.exit);
}
