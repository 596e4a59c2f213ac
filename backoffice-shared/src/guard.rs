//! Navigation authorization guard.
//!
//! Every attempted route transition goes through [`NavigationGuard`], which
//! checks the stored session token against the remote authority and decides
//! whether the navigation proceeds or is redirected.
//!
//! Each attempt moves through `Pending -> Checking -> Decided` exactly once.
//! The only suspension point is the remote validity check; while it runs the
//! shared loading flag is raised.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

use crate::api::TokenValidator;
use crate::routes::{RouteDescriptor, RouteTable};
use crate::state::AppState;

/// Outcome of a guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Let the navigation reach its target.
    Continue,
    /// Send the user to the login route.
    RedirectLogin,
    /// Send the user to the dashboard.
    RedirectDashboard,
}

impl Disposition {
    /// Route the user ends up on when navigating to `target`.
    #[must_use]
    pub fn destination(self, target: RouteDescriptor, routes: &RouteTable) -> RouteDescriptor {
        match self {
            Self::Continue => target,
            Self::RedirectLogin => *routes.login(),
            Self::RedirectDashboard => *routes.dashboard_route(),
        }
    }
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Continue => "continue",
            Self::RedirectLogin => "redirect-login",
            Self::RedirectDashboard => "redirect-dashboard",
        })
    }
}

/// Decision policy. First matching rule wins:
///
/// 1. login with a valid token goes to the dashboard;
/// 2. a protected route without a valid token goes to login;
/// 3. everything else continues.
#[must_use]
pub fn decide(target: &RouteDescriptor, token_valid: bool) -> Disposition {
    if target.is_login() && token_valid {
        Disposition::RedirectDashboard
    } else if target.requires_auth && !token_valid {
        Disposition::RedirectLogin
    } else {
        Disposition::Continue
    }
}

/// A requested transition. `from` is `None` for the first navigation of a
/// session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Destination.
    pub to: RouteDescriptor,
    /// Route being left, if any.
    pub from: Option<RouteDescriptor>,
}

impl NavigationRequest {
    /// Request a transition from `from` to `to`.
    #[must_use]
    pub const fn new(to: RouteDescriptor, from: Option<RouteDescriptor>) -> Self {
        Self { to, from }
    }
}

/// Where an attempt stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardPhase {
    /// Submitted, not yet examined.
    Pending,
    /// Waiting on the token validity check.
    Checking,
    /// Terminal.
    Decided(Disposition),
}

/// One pass of a [`NavigationRequest`] through the guard.
#[derive(Debug, Clone)]
pub struct NavigationAttempt {
    sequence: u64,
    request: NavigationRequest,
    phase: GuardPhase,
}

impl NavigationAttempt {
    /// Monotonic stamp assigned when the attempt began.
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The request under evaluation.
    #[must_use]
    pub const fn request(&self) -> &NavigationRequest {
        &self.request
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> GuardPhase {
        self.phase
    }
}

/// Runs the authorization policy for every navigation.
#[derive(Debug, Clone)]
pub struct NavigationGuard<V> {
    state: Arc<AppState>,
    validator: V,
    routes: Arc<RouteTable>,
    latest: Arc<AtomicU64>,
}

impl<V: TokenValidator> NavigationGuard<V> {
    /// Guard reading the session from `state` and checking tokens with
    /// `validator`.
    pub fn new(state: Arc<AppState>, validator: V, routes: Arc<RouteTable>) -> Self {
        Self {
            state,
            validator,
            routes,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Registered routes.
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Session state the guard reads.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Stamp `request` and return it as a pending attempt. The new attempt
    /// supersedes every earlier one.
    pub fn begin(&self, request: NavigationRequest) -> NavigationAttempt {
        let sequence = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        NavigationAttempt {
            sequence,
            request,
            phase: GuardPhase::Pending,
        }
    }

    /// Whether no attempt has begun since `attempt`.
    pub fn is_current(&self, attempt: &NavigationAttempt) -> bool {
        self.latest.load(Ordering::SeqCst) == attempt.sequence
    }

    /// Drive `attempt` to its decision. A decided attempt is returned as is
    /// without checking the token again.
    pub async fn run(&self, attempt: &mut NavigationAttempt) -> Disposition {
        if let GuardPhase::Decided(disposition) = attempt.phase {
            return disposition;
        }

        attempt.phase = GuardPhase::Checking;
        self.state.loading.set(true);

        let token_valid = match self.state.token.get() {
            Some(token) => self.validator.is_valid(&token).await,
            None => false,
        };

        self.state.loading.set(false);

        let disposition = decide(&attempt.request.to, token_valid);
        attempt.phase = GuardPhase::Decided(disposition);
        debug!(
            sequence = attempt.sequence,
            to = attempt.request.to.name,
            from = attempt.request.from.map(|route| route.name),
            token_valid,
            ?disposition,
            "navigation decided"
        );
        disposition
    }

    /// Evaluate `request` to completion. The attempt is not stamped, so it
    /// never supersedes a navigation in flight.
    pub async fn evaluate(&self, request: NavigationRequest) -> Disposition {
        let mut attempt = NavigationAttempt {
            sequence: self.latest.load(Ordering::SeqCst),
            request,
            phase: GuardPhase::Pending,
        };
        self.run(&mut attempt).await
    }

    /// Evaluate `request`, returning `None` when a newer navigation began
    /// before this one was decided.
    pub async fn navigate(&self, request: NavigationRequest) -> Option<Disposition> {
        let mut attempt = self.begin(request);
        let disposition = self.run(&mut attempt).await;
        if self.is_current(&attempt) {
            Some(disposition)
        } else {
            debug!(
                sequence = attempt.sequence,
                to = attempt.request.to.name,
                "discarding superseded navigation"
            );
            None
        }
    }
}
