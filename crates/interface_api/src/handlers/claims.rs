//! Claim checklist and insurer packet handlers

use axum::{extract::rejection::JsonRejection, Extension, Json};
use validator::Validate;

use domain_documents::{build_checklist, required_documents, InsurerPacket};

use crate::auth::{permissions, AuthClaims};
use crate::dto::claims::*;
use crate::error::ApiError;

const REQUEST_SHAPE_MESSAGE: &str = "Invalid request. Required fields: insurer";

/// Builds the document checklist for a claim's stored documents
pub async fn get_checklist(
    Extension(claims): Extension<AuthClaims>,
    payload: Result<Json<ClaimDocumentsRequest>, JsonRejection>,
) -> Result<Json<ChecklistResponse>, ApiError> {
    claims.require(permissions::CLAIM_READ)?;
    let request = parse(payload)?;

    let checklist = build_checklist(&request.insurer, &request.stored_documents())
        .into_iter()
        .map(ChecklistItem::from)
        .collect();

    Ok(Json(ChecklistResponse {
        required_documents: required_documents(&request.insurer),
        insurer: request.insurer,
        checklist,
    }))
}

/// Assembles the insurer packet once every checklist document is stored
pub async fn generate_packet(
    Extension(claims): Extension<AuthClaims>,
    payload: Result<Json<ClaimDocumentsRequest>, JsonRejection>,
) -> Result<Json<PacketResponse>, ApiError> {
    claims.require(permissions::PACKET_GENERATE)?;
    let request = parse(payload)?;

    let packet = InsurerPacket::assemble(&request.insurer, &request.stored_documents())?;

    Ok(Json(packet.into()))
}

fn parse(payload: Result<Json<ClaimDocumentsRequest>, JsonRejection>) -> Result<ClaimDocumentsRequest, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::malformed_body(REQUEST_SHAPE_MESSAGE, e))?;
    request
        .validate()
        .map_err(|e| ApiError::invalid_request(REQUEST_SHAPE_MESSAGE, &e, ""))?;
    Ok(request)
}
