// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Custom extractors for the gateway's request body contract
//!
//! The proxy contract is deliberately blunt: any failure to read or parse the
//! request body yields HTTP 400 with the fixed "Invalid properties format"
//! message, regardless of whether the problem is malformed JSON, a wrong
//! shape, or an unreadable body. Parse details are logged, never exposed.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ServerError;

/// JSON body extractor that maps every failure to the fixed 400 response
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = axum::body::Bytes::from_request(req, state)
            .await
            .map_err(|rejection| {
                debug!(%rejection, "failed to read request body");
                ServerError::InvalidProperties
            })?;

        match serde_json::from_slice::<T>(&bytes) {
            Ok(value) => Ok(JsonBody(value)),
            Err(err) => {
                debug!(%err, "request body failed to parse");
                Err(ServerError::InvalidProperties)
            }
        }
    }
}
