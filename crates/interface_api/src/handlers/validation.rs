//! Document validation handlers

use axum::{extract::rejection::JsonRejection, Json};
use validator::Validate;

use domain_documents::DocumentValidator;

use crate::dto::validation::*;
use crate::error::ApiError;

const REQUEST_SHAPE_MESSAGE: &str =
    "Invalid request. Required fields: insurerName, claimType, uploadedDocuments (array)";
const DOCUMENT_SHAPE_MESSAGE: &str = "Each document must have name and type properties";

/// Validates a claim's uploaded documents against insurer requirements
pub async fn validate_documents(
    payload: Result<Json<ValidateDocumentsRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::malformed_body(REQUEST_SHAPE_MESSAGE, e))?;
    check_shape(&request)?;

    let documents: Vec<_> = request
        .uploaded_documents
        .into_iter()
        .map(DocumentInput::into_domain)
        .collect();

    let verdict = DocumentValidator::validate(&request.insurer_name, &request.claim_type, &documents);

    Ok(Json(verdict.into()))
}

fn check_shape(request: &ValidateDocumentsRequest) -> Result<(), ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::invalid_request(REQUEST_SHAPE_MESSAGE, &e, ""))?;

    for (index, document) in request.uploaded_documents.iter().enumerate() {
        document.validate().map_err(|e| {
            ApiError::invalid_request(
                DOCUMENT_SHAPE_MESSAGE,
                &e,
                &format!("uploadedDocuments[{}].", index),
            )
        })?;
    }
    Ok(())
}
