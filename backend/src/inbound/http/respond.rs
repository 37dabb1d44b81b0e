//! Envelope-to-HTTP translation.
//!
//! The rule engines return a [`ResponseEnvelope`] for every outcome; these
//! helpers hold the category-to-status mapping in one place so handlers stay
//! declarative. The mapping is operation-sensitive: `ValidationError` means
//! 409 on create (duplicate) but 404 on lookup/edit/delete (missing record).

use actix_web::http::header;
use actix_web::HttpResponse;
use serde::Serialize;

use crate::domain::{ErrorCategory, ResponseEnvelope};

/// Map a create outcome: 201 with a `Location` reference on success,
/// 409 for validation failures, 404 for a missing related entity, 500
/// otherwise.
pub(crate) fn created<T: Serialize>(
    envelope: ResponseEnvelope<T>,
    location: impl FnOnce(&T) -> String,
) -> HttpResponse {
    match envelope.category() {
        None => {
            let target = envelope
                .data
                .as_ref()
                .map(location)
                .unwrap_or_default();
            HttpResponse::Created()
                .insert_header((header::LOCATION, target))
                .json(envelope)
        }
        Some(ErrorCategory::ValidationError) => HttpResponse::Conflict().json(envelope),
        Some(ErrorCategory::NotFound) => HttpResponse::NotFound().json(envelope),
        Some(ErrorCategory::ServerError) => HttpResponse::InternalServerError().json(envelope),
    }
}

/// Map a lookup/edit/delete outcome: 200 on success, 404 for validation
/// failures (the engines report missing records as `ValidationError`), 500
/// otherwise. The beneficiary edit reports storage failures under the
/// `NotFound` category, so that category maps to 500 here, not 404.
pub(crate) fn found<T: Serialize>(envelope: ResponseEnvelope<T>) -> HttpResponse {
    match envelope.category() {
        None => HttpResponse::Ok().json(envelope),
        Some(ErrorCategory::ValidationError) => HttpResponse::NotFound().json(envelope),
        Some(ErrorCategory::NotFound | ErrorCategory::ServerError) => {
            HttpResponse::InternalServerError().json(envelope)
        }
    }
}

/// Map a list outcome: 200 on success, 500 on any failure.
pub(crate) fn listed<T: Serialize>(envelope: ResponseEnvelope<T>) -> HttpResponse {
    match envelope.category() {
        None => HttpResponse::Ok().json(envelope),
        Some(_) => HttpResponse::InternalServerError().json(envelope),
    }
}
