//! Address API Endpoints
//!
//! Proxies address-centric queries to the chain gateway and reshapes the
//! results into `{ok, ...}` envelopes:
//! - GET  /address                      - Index page (frontend shell)
//! - POST /api/address                  - Address details
//! - POST /api/address/transfers        - Transfers page
//! - POST /api/address/executions       - Executions page
//! - POST /api/address/voters           - Votes page, with closing pass
//! - POST /api/address/settle-deposits  - Settle-deposit page
//! - POST /api/address/create-deposits  - Create-deposit page
//!
//! Every gateway failure is caught here and rendered as an `ok: false`
//! envelope; nothing propagates past the handler boundary. Success bodies
//! echo the REQUEST's `offset`/`count`, never values derived from the page
//! the gateway actually returned.

use axum::{
    extract::{Json, State},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{RouteDef, RouteMethod};
use crate::api::envelope::{codes, FailResponse};
use crate::api::server::SharedAppState;
use crate::types::{AddressDetails, Deposit, Execution, Transfer, Vote};

/// The address API surface
pub const ROUTES: &[RouteDef] = &[
    RouteDef {
        method: RouteMethod::Get,
        name: "address",
        path: "/address",
    },
    RouteDef {
        method: RouteMethod::Post,
        name: "getAddress",
        path: "/api/address",
    },
    RouteDef {
        method: RouteMethod::Post,
        name: "getAddressTransfers",
        path: "/api/address/transfers",
    },
    RouteDef {
        method: RouteMethod::Post,
        name: "getAddressExecutions",
        path: "/api/address/executions",
    },
    RouteDef {
        method: RouteMethod::Post,
        name: "getAddressVoters",
        path: "/api/address/voters",
    },
    RouteDef {
        method: RouteMethod::Post,
        name: "getAddressSettleDeposits",
        path: "/api/address/settle-deposits",
    },
    RouteDef {
        method: RouteMethod::Post,
        name: "getAddressCreateDeposits",
        path: "/api/address/create-deposits",
    },
];

/// Build the address router
///
/// Paths must stay in sync with [`ROUTES`]; the table is what the startup
/// banner and the surface test enumerate.
pub fn address_router() -> Router<SharedAppState> {
    Router::new()
        .route("/address", get(address_index))
        .route("/api/address", post(get_address))
        .route("/api/address/transfers", post(get_transfers))
        .route("/api/address/executions", post(get_executions))
        .route("/api/address/voters", post(get_voters))
        .route("/api/address/settle-deposits", post(get_settle_deposits))
        .route("/api/address/create-deposits", post(get_create_deposits))
}

// =============================================================================
// Request/Response Types
// =============================================================================

/// Body for the address detail lookup
#[derive(Debug, Deserialize)]
pub struct AddressQuery {
    pub id: String,
}

/// Body for paginated relation lookups
///
/// `offset` and `count` are non-negative by construction; no upper bound is
/// enforced here (delegated to the gateway).
#[derive(Debug, Clone, Deserialize)]
pub struct RelationQuery {
    pub id: String,
    pub offset: u64,
    pub count: u64,
}

#[derive(Debug, Serialize)]
struct AddressResponse {
    ok: bool,
    address: AddressDetails,
}

#[derive(Debug, Serialize)]
struct TransfersResponse {
    ok: bool,
    transfers: Vec<Transfer>,
    offset: u64,
    count: u64,
}

#[derive(Debug, Serialize)]
struct ExecutionsResponse {
    ok: bool,
    executions: Vec<Execution>,
    offset: u64,
    count: u64,
}

#[derive(Debug, Serialize)]
struct VotersResponse {
    ok: bool,
    voters: Vec<Vote>,
    offset: u64,
    count: u64,
}

#[derive(Debug, Serialize)]
struct SettleDepositsResponse {
    ok: bool,
    #[serde(rename = "settleDeposits")]
    settle_deposits: Vec<Deposit>,
    offset: u64,
    count: u64,
}

#[derive(Debug, Serialize)]
struct CreateDepositsResponse {
    ok: bool,
    #[serde(rename = "createDeposits")]
    create_deposits: Vec<Deposit>,
    offset: u64,
    count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /address
///
/// The explorer page itself is rendered by the frontend bundle; this serves
/// the shell that loads it.
async fn address_index() -> impl IntoResponse {
    Html(concat!(
        "<!doctype html><html><head><title>Explorer</title></head>",
        "<body><div id=\"root\"></div><script src=\"/main.js\"></script></body></html>",
    ))
}

/// POST /api/address
async fn get_address(
    State(state): State<SharedAppState>,
    Json(req): Json<AddressQuery>,
) -> Response {
    match state.gateway.get_address_details(&req.id).await {
        Ok(address) => Json(AddressResponse { ok: true, address }).into_response(),
        Err(e) => {
            warn!(target: "explorer::address", id = %req.id, error = %e, "address lookup failed");
            Json(FailResponse::new(
                codes::FAIL_GET_ADDRESS,
                "address.error.failGetAddress",
                req.id,
            ))
            .into_response()
        }
    }
}

/// POST /api/address/transfers
async fn get_transfers(
    State(state): State<SharedAppState>,
    Json(req): Json<RelationQuery>,
) -> Response {
    match state
        .gateway
        .get_transfers_by_address(&req.id, req.offset, req.count)
        .await
    {
        Ok(transfers) => Json(TransfersResponse {
            ok: true,
            transfers,
            offset: req.offset,
            count: req.count,
        })
        .into_response(),
        Err(e) => {
            warn!(target: "explorer::address", id = %req.id, error = %e, "transfers lookup failed");
            Json(FailResponse::new(
                codes::FAIL_GET_ADDRESS_TRANSFERS,
                "address.error.failGetTransfers",
                req.id,
            ))
            .into_response()
        }
    }
}

/// POST /api/address/executions
async fn get_executions(
    State(state): State<SharedAppState>,
    Json(req): Json<RelationQuery>,
) -> Response {
    match state
        .gateway
        .get_executions_by_address(&req.id, req.offset, req.count)
        .await
    {
        Ok(executions) => Json(ExecutionsResponse {
            ok: true,
            executions,
            offset: req.offset,
            count: req.count,
        })
        .into_response(),
        Err(e) => {
            warn!(target: "explorer::address", id = %req.id, error = %e, "executions lookup failed");
            Json(FailResponse::new(
                codes::FAIL_GET_ADDRESS_EXECUTIONS,
                "address.error.failGetExecutions",
                req.id,
            ))
            .into_response()
        }
    }
}

/// POST /api/address/voters
///
/// Fetches the vote window and applies the closing pass before answering.
async fn get_voters(
    State(state): State<SharedAppState>,
    Json(req): Json<RelationQuery>,
) -> Response {
    match state
        .gateway
        .get_votes_by_address(&req.id, req.offset, req.count)
        .await
    {
        Ok(votes) => Json(VotersResponse {
            ok: true,
            voters: close_votes(votes),
            offset: req.offset,
            count: req.count,
        })
        .into_response(),
        Err(e) => {
            warn!(target: "explorer::address", id = %req.id, error = %e, "votes lookup failed");
            Json(FailResponse::new(
                codes::FAIL_GET_ADDRESS_VOTES,
                "address.error.failGetVotes",
                req.id,
            ))
            .into_response()
        }
    }
}

/// POST /api/address/settle-deposits
async fn get_settle_deposits(
    State(state): State<SharedAppState>,
    Json(req): Json<RelationQuery>,
) -> Response {
    match state
        .gateway
        .get_settle_deposits_by_address(&req.id, req.offset, req.count)
        .await
    {
        Ok(settle_deposits) => Json(SettleDepositsResponse {
            ok: true,
            settle_deposits,
            offset: req.offset,
            count: req.count,
        })
        .into_response(),
        Err(e) => {
            warn!(target: "explorer::address", id = %req.id, error = %e, "settle deposits lookup failed");
            Json(FailResponse::new(
                codes::FAIL_GET_SETTLE_DEPOSITS,
                "address.error.failGetSettleDeposits",
                req.id,
            ))
            .into_response()
        }
    }
}

/// POST /api/address/create-deposits
async fn get_create_deposits(
    State(state): State<SharedAppState>,
    Json(req): Json<RelationQuery>,
) -> Response {
    match state
        .gateway
        .get_create_deposits_by_address(&req.id, req.offset, req.count)
        .await
    {
        Ok(create_deposits) => Json(CreateDepositsResponse {
            ok: true,
            create_deposits,
            offset: req.offset,
            count: req.count,
        })
        .into_response(),
        Err(e) => {
            warn!(target: "explorer::address", id = %req.id, error = %e, "create deposits lookup failed");
            Json(FailResponse::new(
                codes::FAIL_GET_CREATE_DEPOSITS,
                "address.error.failGetCreateDeposits",
                req.id,
            ))
            .into_response()
        }
    }
}

// =============================================================================
// Vote Closing
// =============================================================================

/// Strip empty slots from a vote window and mark closed votes
///
/// A record whose id differs from the previous non-empty record's id gets
/// `out = true`; `previous_id` starts as the empty string and is updated on
/// every non-empty record regardless of the comparison. Relative order is
/// preserved. An empty window yields an empty result.
pub fn close_votes(votes: Vec<Option<Vote>>) -> Vec<Vote> {
    let mut closed = Vec::with_capacity(votes.len());
    let mut previous_id = String::new();

    for slot in votes {
        let Some(mut vote) = slot else { continue };

        if vote.id != previous_id {
            vote.out = true;
        }
        previous_id = vote.id.clone();
        closed.push(vote);
    }

    closed
}
