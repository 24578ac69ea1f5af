//! Per-route permission guard.
//!
//! `require(..)` produces a tower layer that consults the authorization gate
//! with the `Principal` the authentication middleware injected. On deny the
//! wrapped handler is never invoked; the guard responds 403 with the
//! permission's description. Runs after `authenticate`, so a missing
//! principal means the route was wired without the auth layer, and that
//! fails closed with 401 rather than letting the handler run unguarded.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use axum::{
    extract::Request,
    response::{IntoResponse, Response},
};
use tower::{Layer, Service};

use crate::authz::{self, Decision, Principal, Requirement};
use crate::error::ApiError;

/// Guard a handler or router with a permission requirement.
pub fn require(requirement: impl Into<Requirement>) -> RequireLayer {
    RequireLayer {
        requirement: requirement.into(),
    }
}

#[derive(Clone)]
pub struct RequireLayer {
    requirement: Requirement,
}

impl<S> Layer<S> for RequireLayer {
    type Service = Require<S>;

    fn layer(&self, inner: S) -> Self::Service {
        Require {
            inner,
            requirement: self.requirement.clone(),
        }
    }
}

#[derive(Clone)]
pub struct Require<S> {
    inner: S,
    requirement: Requirement,
}

impl<S> Service<Request> for Require<S>
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Response, Infallible>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let Some(principal) = request.extensions().get::<Principal>().cloned() else {
            let response = ApiError::unauthorized("No token provided").into_response();
            return Box::pin(std::future::ready(Ok(response)));
        };

        match authz::allow(&principal, &self.requirement) {
            Decision::Allow => {
                // Swap in the clone so the polled-ready instance runs the call.
                let clone = self.inner.clone();
                let mut inner = std::mem::replace(&mut self.inner, clone);
                Box::pin(async move { inner.call(request).await })
            }
            Decision::Deny => {
                tracing::debug!(
                    user = %principal.username,
                    requirement = ?self.requirement,
                    "permission denied"
                );
                let response = ApiError::forbidden(self.requirement.describe()).into_response();
                Box::pin(std::future::ready(Ok(response)))
            }
        }
    }
}
