//! Response status interpretation and league URL failover
//!
//! `200` is success, `404` an unknown league and anything else unexpected.
//! A `401` on a league-scoped URL is not terminal: the same request is sent
//! once more to the other URL family and, when that works, the other family
//! becomes the client's active league URL for good.

use reqwest::header::HeaderMap;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{info, instrument, warn};

use super::client::AuthCredential;
use super::fetch_utils::{QueryParams, ResponseShape, execute, read_json};
use super::urls::{EndpointSet, LeagueUrlForm};
use crate::error::AppError;

/// Classification of one HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Success,
    /// `401`: retry once against the other URL family
    AuthFailure,
    NotFound,
    Unknown(u16),
}

pub fn classify_status(status: StatusCode) -> ResponseStatus {
    match status.as_u16() {
        200 => ResponseStatus::Success,
        401 => ResponseStatus::AuthFailure,
        404 => ResponseStatus::NotFound,
        other => ResponseStatus::Unknown(other),
    }
}

const FORM_HISTORY: u8 = 0b01;
const FAILED_OVER: u8 = 0b10;

/// The client's active league URL form.
///
/// Starts at the year-based form. A successful fallback commits the other
/// form once; after that the state never changes again, so a league that
/// answers on both families cannot make the client oscillate. Concurrent
/// fallbacks race on a compare-exchange and the loser's commit is a no-op.
#[derive(Debug)]
pub struct ActiveEndpoint {
    state: AtomicU8,
}

impl ActiveEndpoint {
    pub fn new(form: LeagueUrlForm) -> Self {
        ActiveEndpoint {
            state: AtomicU8::new(encode(form, false)),
        }
    }

    pub fn form(&self) -> LeagueUrlForm {
        decode(self.state.load(Ordering::Acquire))
    }

    pub fn has_failed_over(&self) -> bool {
        self.state.load(Ordering::Acquire) & FAILED_OVER != 0
    }

    /// Switches from `attempted` to `alternate` unless a switch already
    /// happened. Returns whether this call made the switch.
    pub fn commit(&self, attempted: LeagueUrlForm, alternate: LeagueUrlForm) -> bool {
        self.state
            .compare_exchange(
                encode(attempted, false),
                encode(alternate, true),
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }
}

fn encode(form: LeagueUrlForm, failed_over: bool) -> u8 {
    let form_bit = match form {
        LeagueUrlForm::Current => 0,
        LeagueUrlForm::History => FORM_HISTORY,
    };
    if failed_over {
        form_bit | FAILED_OVER
    } else {
        form_bit
    }
}

fn decode(state: u8) -> LeagueUrlForm {
    if state & FORM_HISTORY != 0 {
        LeagueUrlForm::History
    } else {
        LeagueUrlForm::Current
    }
}

/// One request as it was sent, kept so it can be replayed.
#[derive(Debug)]
pub(super) struct SentRequest<'a> {
    pub url: String,
    pub params: &'a QueryParams,
    pub headers: &'a HeaderMap,
    pub shape: ResponseShape,
}

/// Everything the interpreter needs from the client.
pub(super) struct StatusInterpreter<'a> {
    pub http: &'a Client,
    pub endpoints: &'a EndpointSet,
    pub active: &'a ActiveEndpoint,
    pub credential: Option<&'a AuthCredential>,
    pub league_id: u64,
}

impl StatusInterpreter<'_> {
    /// Turns a response into a parsed body or a terminal error, running the
    /// single league URL fallback on `401`.
    #[instrument(skip(self, request, response), fields(url = %request.url))]
    pub async fn resolve(
        &self,
        request: &SentRequest<'_>,
        response: Response,
    ) -> Result<Value, AppError> {
        match classify_status(response.status()) {
            ResponseStatus::Success => read_json(response, &request.url, request.shape).await,
            ResponseStatus::AuthFailure => self.fall_back(request).await,
            ResponseStatus::NotFound => {
                warn!("League {} not found (URL: {})", self.league_id, request.url);
                Err(AppError::invalid_league(self.league_id))
            }
            ResponseStatus::Unknown(status) => {
                warn!("Unexpected HTTP {} (URL: {})", status, request.url);
                Err(AppError::unknown_upstream(status, &request.url))
            }
        }
    }

    async fn fall_back(&self, request: &SentRequest<'_>) -> Result<Value, AppError> {
        let attempted = LeagueUrlForm::detect(&request.url);
        let (Some(attempted), Some((alternate, alternate_url))) =
            (attempted, self.endpoints.alternate_league_url(&request.url))
        else {
            warn!("HTTP 401 on a URL without an alternate form: {}", request.url);
            return Err(self.access_denied());
        };

        info!("HTTP 401 on {attempted:?} league URL, retrying with {alternate:?} form");
        let response = execute(
            self.http,
            &alternate_url,
            request.params,
            request.headers,
            self.credential,
        )
        .await?;

        if classify_status(response.status()) != ResponseStatus::Success {
            warn!(
                "Fallback league URL also rejected with HTTP {}",
                response.status().as_u16()
            );
            return Err(self.access_denied());
        }

        if self.active.commit(attempted, alternate) {
            info!("League {} now uses the {alternate:?} URL form", self.league_id);
        }
        read_json(response, &alternate_url, request.shape).await
    }

    fn access_denied(&self) -> AppError {
        let has_credential = self.credential.is_some();
        AppError::access_denied(self.league_id, has_credential, has_credential)
    }
}
