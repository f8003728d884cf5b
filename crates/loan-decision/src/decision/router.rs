use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use super::identity::IdentityCodeReader;
use super::outcome::{LoanDecision, RejectionReason};
use super::DecisionEngine;

/// Inbound payload for `POST /api/v1/loan/decision`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRequest {
    pub personal_code: String,
    pub loan_amount: i64,
    pub loan_period: i32,
}

/// Public view of a decision: approved terms, or an error message with no terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResponse {
    pub loan_amount: Option<i64>,
    pub loan_period: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub error_message: Option<String>,
}

impl From<&LoanDecision> for DecisionResponse {
    fn from(decision: &LoanDecision) -> Self {
        match decision {
            LoanDecision::Approved {
                amount,
                period,
                adjustment,
            } => Self {
                loan_amount: Some(*amount),
                loan_period: Some(*period),
                note: adjustment.as_ref().map(|adjustment| adjustment.summary()),
                error_message: None,
            },
            LoanDecision::Rejected { reason } => Self {
                loan_amount: None,
                loan_period: None,
                note: None,
                error_message: Some(reason.summary()),
            },
        }
    }
}

/// Router builder exposing the decision endpoint.
pub fn decision_router<R>(engine: Arc<DecisionEngine<R>>) -> Router
where
    R: IdentityCodeReader + 'static,
{
    Router::new()
        .route("/api/v1/loan/decision", post(decision_handler::<R>))
        .with_state(engine)
}

pub(crate) async fn decision_handler<R>(
    State(engine): State<Arc<DecisionEngine<R>>>,
    axum::Json(request): axum::Json<DecisionRequest>,
) -> Response
where
    R: IdentityCodeReader + 'static,
{
    let decision = engine.decide(
        &request.personal_code,
        request.loan_amount,
        request.loan_period,
    );
    let status = status_for(&decision);
    (status, axum::Json(DecisionResponse::from(&decision))).into_response()
}

pub(crate) fn status_for(decision: &LoanDecision) -> StatusCode {
    match decision.rejection() {
        None => StatusCode::OK,
        Some(RejectionReason::NoValidLoan { .. }) => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::BAD_REQUEST,
    }
}
