//! View-Model Scenario Tests
//!
//! Catalog and login flows driven against in-memory gateways.

use std::cell::{Cell as StdCell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::oneshot;

use crate::{
    decode_detail, detail_fields, detail_title, project_row, AuthGateway, CatalogGateway, CatalogOptions, CatalogState,
    CatalogViewModel, Cell, GatewayError, LoginFlow, LoginOutcome, OverlayPhase, Product, Session,
    PASSWORD_REQUIRED, USERNAME_REQUIRED,
};

fn make_product(id: u32) -> Product {
    Product {
        id,
        title: format!("Product {}", id),
        description: format!("Description {}", id),
        category: "Category 1".to_string(),
        price: 100.0,
        discount_percentage: 10.0,
        rating: 4.0,
        stock: 10,
        tags: vec!["Tag1".to_string()],
        brand: Some("Brand1".to_string()),
    }
}

type DetailReply = Result<Option<Product>, GatewayError>;

/// Catalog double with canned list and per-id detail replies
#[derive(Default)]
struct FakeCatalog {
    list: RefCell<Option<Result<Vec<Product>, GatewayError>>>,
    details: RefCell<HashMap<u32, DetailReply>>,
    pending: RefCell<HashMap<u32, oneshot::Receiver<DetailReply>>>,
    list_calls: StdCell<u32>,
    detail_calls: RefCell<Vec<u32>>,
}

impl FakeCatalog {
    fn with_list(list: Result<Vec<Product>, GatewayError>) -> Self {
        let fake = Self::default();
        *fake.list.borrow_mut() = Some(list);
        fake
    }

    fn reply(self, id: u32, reply: DetailReply) -> Self {
        self.details.borrow_mut().insert(id, reply);
        self
    }

    /// Detail for `id` resolves when the returned sender fires
    fn deferred(&self, id: u32) -> oneshot::Sender<DetailReply> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().insert(id, rx);
        tx
    }
}

#[async_trait(?Send)]
impl CatalogGateway for Rc<FakeCatalog> {
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.list.borrow().clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn get_product(&self, id: u32) -> Result<Option<Product>, GatewayError> {
        self.detail_calls.borrow_mut().push(id);
        let deferred = self.pending.borrow_mut().remove(&id);
        if let Some(rx) = deferred {
            return rx.await.unwrap_or_else(|_| Err(GatewayError::Transport("dropped".into())));
        }
        self.details
            .borrow()
            .get(&id)
            .cloned()
            .unwrap_or_else(|| Err(GatewayError::Status { code: 404, message: "not found".into() }))
    }
}

fn view_model(fake: FakeCatalog) -> (Rc<FakeCatalog>, CatalogViewModel<Rc<FakeCatalog>, Rc<RefCell<CatalogState>>>) {
    let fake = Rc::new(fake);
    let vm = CatalogViewModel::new(fake.clone(), Rc::new(RefCell::new(CatalogState::new())));
    (fake, vm)
}

fn snapshot(vm: &CatalogViewModel<Rc<FakeCatalog>, Rc<RefCell<CatalogState>>>) -> CatalogState {
    vm.store().borrow().clone()
}

// ========================
// Catalog
// ========================

#[tokio::test]
async fn test_initialize_loads_list_once() {
    let (fake, vm) = view_model(FakeCatalog::with_list(Ok(vec![make_product(1), make_product(2)])));

    vm.initialize().await;
    vm.initialize().await;

    assert_eq!(fake.list_calls.get(), 1);
    let state = snapshot(&vm);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, 1);
    assert_eq!(state.items[1].id, 2);
}

#[tokio::test]
async fn test_rows_dispatch_their_own_id() {
    let items: Vec<Product> = (1..=3).map(make_product).collect();
    let fake = FakeCatalog::with_list(Ok(items.clone()))
        .reply(1, Ok(Some(make_product(1))))
        .reply(2, Ok(Some(make_product(2))))
        .reply(3, Ok(Some(make_product(3))));
    let (fake, vm) = view_model(fake);

    vm.initialize().await;
    let rows: Vec<_> = snapshot(&vm).items.iter().map(project_row).collect();
    assert_eq!(rows.len(), 3);

    for row in &rows {
        let action = row.iter().find_map(|(_, cell)| match cell {
            Cell::Action { product_id } => Some(*product_id),
            _ => None,
        });
        vm.open_detail(action.unwrap()).await;
    }
    assert_eq!(*fake.detail_calls.borrow(), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_list_failure_leaves_empty_table() {
    let (_, vm) = view_model(FakeCatalog::with_list(Err(GatewayError::Transport("offline".into()))));

    vm.initialize().await;

    let state = snapshot(&vm);
    assert!(state.items.is_empty());
    assert_eq!(state.phase(), OverlayPhase::Closed);
}

#[tokio::test]
async fn test_reload_replaces_list() {
    let (fake, vm) = view_model(FakeCatalog::with_list(Ok(vec![make_product(1)])));
    vm.initialize().await;

    *fake.list.borrow_mut() = Some(Ok(Vec::new()));
    vm.load_list().await;

    assert!(snapshot(&vm).items.is_empty());
}

#[tokio::test]
async fn test_open_detail_failure_changes_nothing() {
    let fake = FakeCatalog::with_list(Ok(vec![make_product(1)]))
        .reply(1, Ok(Some(make_product(1))))
        .reply(2, Err(GatewayError::Status { code: 500, message: "boom".into() }));
    let (_, vm) = view_model(fake);
    vm.initialize().await;

    vm.open_detail(2).await;
    assert_eq!(snapshot(&vm).phase(), OverlayPhase::Closed);

    vm.open_detail(1).await;
    vm.open_detail(2).await;
    let state = snapshot(&vm);
    assert!(state.overlay_open);
    assert_eq!(state.detail.as_ref().map(|p| p.id), Some(1));
}

#[tokio::test]
async fn test_empty_detail_opens_blank_overlay() {
    let (_, vm) = view_model(FakeCatalog::default().reply(5, Ok(None)));

    vm.open_detail(5).await;

    let state = snapshot(&vm);
    assert!(state.overlay_open);
    assert!(state.detail.is_none());
}

#[tokio::test]
async fn test_sparse_detail_opens_overlay_with_blanks() {
    let sparse = decode_detail(serde_json::json!({ "id": 3, "title": "X" })).unwrap();
    let (_, vm) = view_model(FakeCatalog::default().reply(3, Ok(sparse)));

    vm.open_detail(3).await;

    let state = snapshot(&vm);
    assert!(state.overlay_open);
    assert_eq!(state.detail.as_ref().map(|p| p.id), Some(3));
    assert_eq!(detail_title(state.detail.as_ref()), "X Reviews");
    let fields = detail_fields(state.detail.as_ref());
    assert!(fields.iter().any(|(label, value)| *label == "Description" && value.is_empty()));
}

#[tokio::test]
async fn test_empty_detail_stays_closed_when_configured() {
    let (_, vm) = view_model(FakeCatalog::default().reply(5, Ok(None)));
    let vm = vm.with_options(CatalogOptions { open_on_empty_detail: false, ..Default::default() });

    vm.open_detail(5).await;

    assert_eq!(snapshot(&vm).phase(), OverlayPhase::Closed);
}

#[tokio::test]
async fn test_close_detail_resets_regardless_of_content() {
    let (_, vm) = view_model(FakeCatalog::with_list(Ok(vec![make_product(1)])).reply(1, Ok(Some(make_product(1)))));
    vm.initialize().await;

    vm.close_detail();
    assert!(!snapshot(&vm).overlay_open);

    vm.open_detail(1).await;
    vm.close_detail();
    let state = snapshot(&vm);
    assert!(!state.overlay_open);
    assert!(state.detail.is_none());
    assert_eq!(state.items.len(), 1);
}

#[tokio::test]
async fn test_concurrent_details_last_resolution_wins() {
    let fake = FakeCatalog::default();
    let first = fake.deferred(1);
    let second = fake.deferred(2);
    let (_, vm) = view_model(fake);
    let (second_done_tx, second_done_rx) = oneshot::channel::<()>();

    tokio::join!(
        vm.open_detail(1),
        async {
            tokio::task::yield_now().await;
            vm.open_detail(2).await;
            let _ = second_done_tx.send(());
        },
        async {
            let _ = second.send(Ok(Some(make_product(2))));
            let _ = second_done_rx.await;
            let _ = first.send(Ok(Some(make_product(1))));
        },
    );

    // issued first, resolved last
    let state = snapshot(&vm);
    assert_eq!(state.detail.as_ref().map(|p| p.id), Some(1));
    assert_eq!(state.pending_details(), 0);
}

#[tokio::test]
async fn test_fenced_details_keep_newest_request() {
    let fake = FakeCatalog::default();
    let first = fake.deferred(1);
    let second = fake.deferred(2);
    let (_, vm) = view_model(fake);
    let vm = vm.with_options(CatalogOptions { fence_detail_requests: true, ..Default::default() });
    let (second_done_tx, second_done_rx) = oneshot::channel::<()>();

    tokio::join!(
        vm.open_detail(1),
        async {
            tokio::task::yield_now().await;
            vm.open_detail(2).await;
            let _ = second_done_tx.send(());
        },
        async {
            let _ = second.send(Ok(Some(make_product(2))));
            let _ = second_done_rx.await;
            let _ = first.send(Ok(Some(make_product(1))));
        },
    );

    assert_eq!(snapshot(&vm).detail.as_ref().map(|p| p.id), Some(2));
}

#[tokio::test]
async fn test_overlay_loading_while_in_flight() {
    let fake = FakeCatalog::default();
    let tx = fake.deferred(1);
    let (_, vm) = view_model(fake);
    let (observed_tx, observed_rx) = oneshot::channel();

    tokio::join!(vm.open_detail(1), async {
        tokio::task::yield_now().await;
        let _ = observed_tx.send(snapshot(&vm).phase());
        let _ = tx.send(Ok(Some(make_product(1))));
    });

    assert_eq!(observed_rx.await.unwrap(), OverlayPhase::Loading);
    assert_eq!(snapshot(&vm).phase(), OverlayPhase::Open);
}

#[tokio::test]
async fn test_catalog_end_to_end() {
    let fake = FakeCatalog::with_list(Ok(vec![make_product(1)])).reply(1, Ok(Some(make_product(1))));
    let (_, vm) = view_model(fake);

    vm.initialize().await;
    let state = snapshot(&vm);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Product 1");

    vm.open_detail(state.items[0].id).await;
    let state = snapshot(&vm);
    assert!(state.overlay_open);
    assert_eq!(detail_title(state.detail.as_ref()), "Product 1 Reviews");

    vm.close_detail();
    let state = snapshot(&vm);
    assert!(!state.overlay_open);
    assert_eq!(state.items[0].title, "Product 1");
}

// ========================
// Login
// ========================

struct FakeAuth {
    reply: Result<Session, GatewayError>,
    calls: StdCell<u32>,
}

impl FakeAuth {
    fn new(reply: Result<Session, GatewayError>) -> Rc<Self> {
        Rc::new(Self { reply, calls: StdCell::new(0) })
    }
}

#[async_trait(?Send)]
impl AuthGateway for Rc<FakeAuth> {
    async fn login(&self, _username: &str, _password: &str) -> Result<Session, GatewayError> {
        self.calls.set(self.calls.get() + 1);
        self.reply.clone()
    }
}

fn session() -> Session {
    Session {
        id: 1,
        username: "user".to_string(),
        access_token: "token".to_string(),
        refresh_token: None,
    }
}

#[tokio::test]
async fn test_login_success() {
    let auth = FakeAuth::new(Ok(session()));
    let flow = LoginFlow::new(auth.clone());

    let outcome = flow.submit("user", "password").await;

    assert_eq!(outcome, LoginOutcome::Authenticated(session()));
    assert!(outcome.field_errors().is_empty());
    assert_eq!(outcome.message(), None);
    assert_eq!(auth.calls.get(), 1);
}

#[tokio::test]
async fn test_login_empty_fields_skip_gateway() {
    let auth = FakeAuth::new(Ok(session()));
    let flow = LoginFlow::new(auth.clone());

    let outcome = flow.submit("", "password").await;
    assert_eq!(outcome.field_errors().username, Some(USERNAME_REQUIRED));

    let outcome = flow.submit("user", "").await;
    assert_eq!(outcome.field_errors().password, Some(PASSWORD_REQUIRED));

    assert_eq!(auth.calls.get(), 0);
}

#[tokio::test]
async fn test_login_failures_collapse_to_one_message() {
    let failures = [
        GatewayError::Status { code: 400, message: "Invalid credentials".into() },
        GatewayError::Status { code: 503, message: "unavailable".into() },
        GatewayError::Transport("offline".into()),
        GatewayError::Decode("missing accessToken".into()),
    ];

    for failure in failures {
        let flow = LoginFlow::new(FakeAuth::new(Err(failure)));
        let outcome = flow.submit("wrong", "wrong").await;
        assert_eq!(outcome, LoginOutcome::Rejected);
        assert_eq!(outcome.message(), Some("Invalid credentials"));
    }
}
