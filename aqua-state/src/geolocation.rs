//! Geolocation gate: user position, permission prompt and request tickets.

use aqua_lakes::lake::GeoPoint;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Why a position could not be obtained.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeolocationError {
    /// The user or browser refused access
    #[error("Location permission denied")]
    Denied,

    /// No geolocation capability, timeout, or position unavailable
    #[error("Location unavailable")]
    Unavailable,
}

/// Result of the passive permission query made at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionState {
    Granted,
    Denied,
    Prompt,
}

impl FromStr for PermissionState {
    type Err = std::convert::Infallible;

    /// Browser `PermissionStatus.state` strings; anything unknown is
    /// treated as `prompt` so it never triggers an automatic request.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "granted" => PermissionState::Granted,
            "denied" => PermissionState::Denied,
            _ => PermissionState::Prompt,
        })
    }
}

/// Tracks the user position and the "permission needed" prompt.
///
/// At most one position request is outstanding. Each request gets a ticket
/// and only the completion carrying the pending ticket is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationGate {
    user_location: Option<GeoPoint>,
    prompt_visible: bool,
    pending: Option<u64>,
    next_ticket: u64,
}

impl LocationGate {
    pub fn user_location(&self) -> Option<GeoPoint> {
        self.user_location
    }

    pub fn is_prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn show_prompt(&mut self) {
        self.prompt_visible = true;
    }

    pub fn hide_prompt(&mut self) {
        self.prompt_visible = false;
    }

    /// Issue a new request ticket, or `None` if one is already pending.
    pub fn request(&mut self) -> Option<u64> {
        if self.pending.is_some() {
            log::debug!("[Aqua] geolocation: request already pending");
            return None;
        }
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        Some(self.next_ticket)
    }

    /// Issue a new ticket for an explicit user action, replacing any pending
    /// one. The older request may still complete; its result is dropped.
    pub fn supersede(&mut self) -> u64 {
        if let Some(old) = self.pending {
            log::info!("[Aqua] geolocation: ticket {} superseded", old);
        }
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        self.next_ticket
    }

    /// Apply a completion. Returns the new position on success.
    ///
    /// A failure shows the prompt; a success stores the position and hides
    /// it. Completions for any ticket other than the pending one are ignored.
    pub fn resolve(
        &mut self,
        ticket: u64,
        result: Result<GeoPoint, GeolocationError>,
    ) -> Option<GeoPoint> {
        if self.pending != Some(ticket) {
            log::warn!("[Aqua] geolocation: dropping stale result for ticket {}", ticket);
            return None;
        }
        self.pending = None;
        match result {
            Ok(point) => {
                self.user_location = Some(point);
                self.prompt_visible = false;
                Some(point)
            }
            Err(e) => {
                log::warn!("[Aqua] geolocation: {}", e);
                self.prompt_visible = true;
                None
            }
        }
    }
}
