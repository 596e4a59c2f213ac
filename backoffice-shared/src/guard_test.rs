use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::api::TokenValidator;
use crate::guard::{Disposition, GuardPhase, NavigationGuard, NavigationRequest, decide};
use crate::routes::{DASHBOARD, LOGIN, RouteDescriptor, RouteTable};
use crate::state::AppState;
use crate::storage::MemoryStorage;

/// Accepts exactly one token and records what the loading flag read while
/// each check was in flight.
#[derive(Clone)]
struct RecordingValidator {
    accepted: &'static str,
    state: Arc<AppState>,
    calls: Arc<AtomicUsize>,
    loading_seen: Arc<Mutex<Vec<bool>>>,
}

#[async_trait]
impl TokenValidator for RecordingValidator {
    async fn is_valid(&self, token: &str) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.loading_seen.lock().unwrap().push(self.state.loading.get());
        token == self.accepted
    }
}

struct Harness {
    state: Arc<AppState>,
    guard: NavigationGuard<RecordingValidator>,
    calls: Arc<AtomicUsize>,
    loading_seen: Arc<Mutex<Vec<bool>>>,
}

fn harness(token: Option<&str>) -> Harness {
    let state = Arc::new(AppState::new(Arc::new(MemoryStorage::new())));
    if let Some(token) = token {
        state.token.set(token).unwrap();
    }
    let validator = RecordingValidator {
        accepted: "valid-token",
        state: Arc::clone(&state),
        calls: Arc::new(AtomicUsize::new(0)),
        loading_seen: Arc::new(Mutex::new(Vec::new())),
    };
    let calls = Arc::clone(&validator.calls);
    let loading_seen = Arc::clone(&validator.loading_seen);
    let guard = NavigationGuard::new(
        Arc::clone(&state),
        validator,
        Arc::new(RouteTable::dashboard()),
    );
    Harness {
        state,
        guard,
        calls,
        loading_seen,
    }
}

fn to(guard: &NavigationGuard<RecordingValidator>, name: &str) -> NavigationRequest {
    NavigationRequest::new(*guard.routes().get(name).unwrap(), None)
}

#[test]
fn decision_policy_table() {
    let login = RouteDescriptor::public(LOGIN, "/");
    let open = RouteDescriptor::public("about", "/about");
    let protected = RouteDescriptor::protected(DASHBOARD, "/admin/dashboard");

    assert_eq!(decide(&login, true), Disposition::RedirectDashboard);
    assert_eq!(decide(&login, false), Disposition::Continue);
    assert_eq!(decide(&open, true), Disposition::Continue);
    assert_eq!(decide(&open, false), Disposition::Continue);
    assert_eq!(decide(&protected, true), Disposition::Continue);
    assert_eq!(decide(&protected, false), Disposition::RedirectLogin);
}

#[tokio::test]
async fn public_route_without_token_continues() {
    let h = harness(None);
    assert_eq!(h.guard.evaluate(to(&h.guard, LOGIN)).await, Disposition::Continue);
}

#[tokio::test]
async fn every_protected_route_redirects_to_login_without_token() {
    let h = harness(None);
    for route in h.guard.routes().iter().filter(|route| route.requires_auth) {
        let disposition = h.guard.evaluate(NavigationRequest::new(*route, None)).await;
        assert_eq!(disposition, Disposition::RedirectLogin, "route {}", route.name);
    }
    assert_eq!(h.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn protected_route_with_invalid_token_redirects_to_login() {
    let h = harness(Some("expired-token"));
    let disposition = h.guard.evaluate(to(&h.guard, "reports")).await;
    assert_eq!(disposition, Disposition::RedirectLogin);
    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn protected_route_with_valid_token_continues() {
    let h = harness(Some("valid-token"));
    for route in h.guard.routes().iter().filter(|route| route.requires_auth) {
        let disposition = h.guard.evaluate(NavigationRequest::new(*route, None)).await;
        assert_eq!(disposition, Disposition::Continue, "route {}", route.name);
    }
}

#[tokio::test]
async fn login_with_valid_token_redirects_to_dashboard() {
    let h = harness(Some("valid-token"));
    let request = NavigationRequest::new(
        *h.guard.routes().login(),
        h.guard.routes().get("orders").copied(),
    );
    let disposition = h.guard.evaluate(request).await;
    assert_eq!(disposition, Disposition::RedirectDashboard);
    assert_eq!(
        disposition.destination(request.to, h.guard.routes()).name,
        DASHBOARD
    );
}

#[tokio::test]
async fn login_with_invalid_token_continues() {
    let h = harness(Some("expired-token"));
    assert_eq!(h.guard.evaluate(to(&h.guard, LOGIN)).await, Disposition::Continue);
}

#[tokio::test]
async fn loading_is_raised_only_during_the_remote_check() {
    let h = harness(Some("valid-token"));
    h.guard.evaluate(to(&h.guard, "stocks")).await;
    assert!(!h.state.loading.get());

    let h_invalid = harness(Some("expired-token"));
    h_invalid.guard.evaluate(to(&h_invalid.guard, "stocks")).await;
    assert!(!h_invalid.state.loading.get());

    assert_eq!(*h.loading_seen.lock().unwrap(), vec![true]);
    assert_eq!(*h_invalid.loading_seen.lock().unwrap(), vec![true]);
}

#[tokio::test]
async fn loading_is_lowered_when_no_token_is_stored() {
    let h = harness(None);
    h.state.loading.set(true);
    h.guard.evaluate(to(&h.guard, "stocks")).await;
    assert!(!h.state.loading.get());
    assert!(h.loading_seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn attempt_walks_through_phases_once() {
    let h = harness(Some("valid-token"));
    let mut attempt = h.guard.begin(to(&h.guard, LOGIN));
    assert_eq!(attempt.phase(), GuardPhase::Pending);
    assert_eq!(attempt.request().to.name, LOGIN);

    let disposition = h.guard.run(&mut attempt).await;
    assert_eq!(attempt.phase(), GuardPhase::Decided(disposition));

    h.state.token.clear().unwrap();
    assert_eq!(h.guard.run(&mut attempt).await, disposition);
    assert_eq!(h.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn sequence_numbers_increase() {
    let h = harness(None);
    let first = h.guard.begin(to(&h.guard, LOGIN));
    let second = h.guard.begin(to(&h.guard, LOGIN));
    assert!(second.sequence() > first.sequence());
    assert!(!h.guard.is_current(&first));
    assert!(h.guard.is_current(&second));
}

/// Blocks the first check until released; later checks answer at once.
#[derive(Clone)]
struct GatedValidator {
    gate: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl TokenValidator for GatedValidator {
    async fn is_valid(&self, _token: &str) -> bool {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            self.gate.notified().await;
        }
        true
    }
}

fn gated_guard() -> (Arc<AppState>, Arc<Notify>, NavigationGuard<GatedValidator>) {
    let state = Arc::new(AppState::new(Arc::new(MemoryStorage::new())));
    state.token.set("valid-token").unwrap();
    let gate = Arc::new(Notify::new());
    let guard = NavigationGuard::new(
        Arc::clone(&state),
        GatedValidator {
            gate: Arc::clone(&gate),
            calls: Arc::new(AtomicUsize::new(0)),
        },
        Arc::new(RouteTable::dashboard()),
    );
    (state, gate, guard)
}

#[tokio::test]
async fn superseded_navigation_is_discarded() {
    let (state, gate, guard) = gated_guard();
    let routes = guard.routes().clone();

    let older = guard.navigate(NavigationRequest::new(*routes.get("users").unwrap(), None));
    let newer = async {
        tokio::task::yield_now().await;
        let decided = guard
            .navigate(NavigationRequest::new(*routes.get("orders").unwrap(), None))
            .await;
        gate.notify_one();
        decided
    };

    let (older, newer) = tokio::join!(older, newer);
    assert_eq!(older, None);
    assert_eq!(newer, Some(Disposition::Continue));
    assert!(!state.loading.get());
}

#[tokio::test]
async fn evaluate_decides_every_concurrent_attempt() {
    let h = harness(Some("valid-token"));
    let requests: Vec<_> = h
        .guard
        .routes()
        .iter()
        .map(|route| NavigationRequest::new(*route, None))
        .collect();

    let decisions =
        futures::future::join_all(requests.iter().map(|request| h.guard.evaluate(*request))).await;

    assert_eq!(decisions.len(), h.guard.routes().len());
    assert_eq!(decisions[0], Disposition::RedirectDashboard);
    assert!(decisions[1..].iter().all(|d| *d == Disposition::Continue));
    assert!(!h.state.loading.get());
}

#[tokio::test]
async fn evaluate_does_not_supersede_a_navigation_in_flight() {
    let (state, gate, guard) = gated_guard();
    let routes = guard.routes().clone();

    let navigation = guard.navigate(NavigationRequest::new(*routes.get("users").unwrap(), None));
    let evaluation = async {
        tokio::task::yield_now().await;
        let decided = guard
            .evaluate(NavigationRequest::new(*routes.get("orders").unwrap(), None))
            .await;
        gate.notify_one();
        decided
    };

    let (navigation, evaluation) = tokio::join!(navigation, evaluation);
    assert_eq!(navigation, Some(Disposition::Continue));
    assert_eq!(evaluation, Disposition::Continue);
    assert!(!state.loading.get());
}
