// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Server state management module
//!
//! This module provides shared application state for the gateway: the
//! immutable configuration, the injected service implementation, and the
//! cancellation token for coordinated shutdown. The state is generic over
//! the service capability so tests can substitute stand-ins.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

use crate::config::{Environment, ServerConfig};

/// Shared application state with cancellation token support
#[derive(Debug)]
pub struct ServerState<S> {
    /// Server configuration
    config: ServerConfig,
    /// Application service the handlers delegate to
    service: Arc<S>,
    /// Cancellation token for coordinated shutdown
    pub cancellation_token: CancellationToken,
}

// Manual impl: `#[derive(Clone)]` would require `S: Clone`, but the service
// is shared behind an Arc.
impl<S> Clone for ServerState<S> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            service: Arc::clone(&self.service),
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl<S> ServerState<S> {
    /// Create new server state
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `service` - Application service implementation
    /// * `cancellation_token` - Token for coordinated cancellation
    pub fn new(config: ServerConfig, service: Arc<S>, cancellation_token: CancellationToken) -> Self {
        Self {
            config,
            service,
            cancellation_token,
        }
    }

    /// Server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The application service
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Produce a local liveness report
    pub fn health_check(&self) -> HealthCheck {
        HealthCheck {
            status: HealthStatus::Up,
            version: Box::from(env!("CARGO_PKG_VERSION")),
            environment: self.config.environment,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Health status of the gateway process
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthStatus {
    /// Service is operational and accepting requests
    Up,
}

/// Health check report
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Service status
    pub status: HealthStatus,
    /// Service version
    pub version: Box<str>,
    /// Environment
    pub environment: Environment,
    /// Timestamp
    pub timestamp: String,
}
