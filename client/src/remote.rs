//! Client side of the remote move endpoint.
//!
//! Each engine turn becomes one tokio task tagged with a [`Ticket`]. Resets
//! abort the task; anything that still slips through carries an old ticket
//! and is dropped by the app.
use std::time::Duration;

use board::{MoveQuery, MoveResponse, WIDTH};
use reqwest::{Client, Url};
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::app::Effect;
use crate::events::AppEvent;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to move endpoint failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("move endpoint answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("move endpoint chose column {0}, which is off the board")]
    ColumnOutOfRange(usize),
}

/// Identifies the position a request was issued for: the game (bumped on
/// every reset) and the number of moves played in it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ticket {
    pub game: u64,
    pub ply: u32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RemoteMove {
    pub ticket: Ticket,
    pub column: usize,
}

#[derive(Clone, Debug)]
pub struct RemoteEngine {
    client: Client,
    endpoint: Url,
}

impl RemoteEngine {
    pub fn new(endpoint: Url, connect_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn request_url(&self, query: &MoveQuery) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.pairs() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }

    /// One GET, no retry.
    pub async fn fetch_move(&self, query: &MoveQuery) -> Result<usize, FetchError> {
        let url = self.request_url(query);
        debug!(%url, "requesting engine move");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let MoveResponse { action } = response.json().await?;
        if action >= WIDTH {
            return Err(FetchError::ColumnOutOfRange(action));
        }
        Ok(action)
    }

    /// Fetches in the background and reports through `events`. Failures
    /// are only logged; the turn then never advances.
    pub fn spawn_move(
        &self,
        ticket: Ticket,
        query: MoveQuery,
        events: UnboundedSender<AppEvent>,
    ) -> JoinHandle<()> {
        let engine = self.clone();
        tokio::spawn(async move {
            match engine.fetch_move(&query).await {
                Ok(column) => {
                    info!(game = ticket.game, ply = ticket.ply, column, "engine answered");
                    let _ = events.send(AppEvent::RemoteMove(RemoteMove { ticket, column }));
                }
                Err(err) => {
                    warn!(game = ticket.game, ply = ticket.ply, error = %err, "engine move failed");
                }
            }
        })
    }
}

/// Owns the single in-flight engine request and carries out the effects
/// the app asks for.
pub struct RemotePlayer {
    engine: RemoteEngine,
    events: UnboundedSender<AppEvent>,
    in_flight: Option<(Ticket, JoinHandle<()>)>,
}

impl RemotePlayer {
    pub fn new(engine: RemoteEngine, events: UnboundedSender<AppEvent>) -> Self {
        Self {
            engine,
            events,
            in_flight: None,
        }
    }

    pub fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::RequestMove { ticket, query } => {
                self.cancel();
                let task = self.engine.spawn_move(ticket, query, self.events.clone());
                self.in_flight = Some((ticket, task));
            }
            Effect::CancelMove => self.cancel(),
        }
    }

    pub fn cancel(&mut self) {
        if let Some((ticket, task)) = self.in_flight.take() {
            if !task.is_finished() {
                debug!(game = ticket.game, ply = ticket.ply, "aborting engine request");
            }
            task.abort();
        }
    }

    pub fn in_flight(&self) -> Option<Ticket> {
        self.in_flight
            .as_ref()
            .filter(|(_, task)| !task.is_finished())
            .map(|(ticket, _)| *ticket)
    }
}

impl Drop for RemotePlayer {
    fn drop(&mut self) {
        self.cancel();
    }
}
