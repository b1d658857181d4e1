use std::time::{Duration, Instant};

use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::ErrorCode;
use crate::services::match_flow;
use crate::state::app_state::AppState;
use crate::state::match_store::DEFAULT_MATCH_ID;
use crate::ws::hub::Deliver;
use crate::ws::protocol::{ClientRequest, ServerMsg, JOIN_KIND};

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(20);
const CLIENT_TIMEOUT: Duration = Duration::from_secs(40);

pub async fn upgrade(
    req: HttpRequest,
    stream: web::Payload,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, Error> {
    let conn_id = Uuid::new_v4();
    let session = WsSession::new(conn_id, app_state);
    ws::start(session, &req, stream)
}

/// One observer connection (controller or overlay).
///
/// Every inbound frame is handled to completion synchronously: validate,
/// mutate, answer the requester, then fan out the broadcasts. Group members
/// receive broadcasts through their mailboxes, so a slow peer never holds an
/// action up.
pub struct WsSession {
    conn_id: Uuid,
    app_state: web::Data<AppState>,
    /// Match groups this connection joined, with their registry tokens.
    joined: Vec<(String, Uuid)>,
    last_heartbeat: Instant,
}

impl WsSession {
    fn new(conn_id: Uuid, app_state: web::Data<AppState>) -> Self {
        Self {
            conn_id,
            app_state,
            joined: Vec::new(),
            last_heartbeat: Instant::now(),
        }
    }

    fn send_json<T: Serialize>(ctx: &mut ws::WebsocketContext<Self>, msg: &T) {
        match serde_json::to_string(msg) {
            Ok(payload) => ctx.text(payload),
            Err(err) => warn!(error = %err, "[WS SESSION] failed to serialize outbound message"),
        }
    }

    fn send_error_and_close(
        &self,
        ctx: &mut ws::WebsocketContext<Self>,
        code: ErrorCode,
        message: impl Into<String>,
    ) {
        let msg = ServerMsg::Error {
            code: code.as_str().to_string(),
            message: message.into(),
        };
        Self::send_json(ctx, &msg);
        ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
        ctx.stop();
    }

    fn start_heartbeat(&mut self, ctx: &mut ws::WebsocketContext<Self>) {
        ctx.run_interval(HEARTBEAT_INTERVAL, |actor, ctx| {
            if Instant::now().duration_since(actor.last_heartbeat) > CLIENT_TIMEOUT {
                warn!(conn_id = %actor.conn_id, "[WS SESSION] heartbeat timed out");
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Normal)));
                ctx.stop();
                return;
            }
            ctx.ping(b"keepalive");
        });
    }

    /// Subscribe to a match group and immediately deliver the current view,
    /// so a late joiner is never stale.
    fn handle_join(&mut self, ctx: &mut ws::WebsocketContext<Self>, match_id: Option<String>) {
        let match_id = match_id.unwrap_or_else(|| DEFAULT_MATCH_ID.to_string());
        let registry = self.app_state.registry();

        let already_joined = self.joined.iter().any(|(joined, _)| *joined == match_id);
        if !already_joined {
            let recipient = ctx.address().recipient::<Deliver>();
            let token = registry.join(&match_id, recipient);
            self.joined.push((match_id.clone(), token));
        }

        let snap = match_flow::current_snapshot(&self.app_state, &match_id);
        Self::send_json(ctx, &ServerMsg::State(snap));

        info!(
            conn_id = %self.conn_id,
            match_id = %match_id,
            "[WS SESSION] joined match group"
        );
    }

    fn handle_action(&mut self, ctx: &mut ws::WebsocketContext<Self>, req: &ClientRequest) {
        let outcome = match_flow::dispatch(&self.app_state, req);

        // Requester first, then the group; a failed action stops here.
        Self::send_json(ctx, &outcome.result);

        let Some(bundle) = outcome.broadcast else {
            return;
        };
        let registry = self.app_state.registry();
        if let Ok(payload) = serde_json::to_string(&bundle.state) {
            registry.broadcast(&bundle.match_id, &payload);
        }
        if let Some(event) = &bundle.event {
            if let Ok(payload) = serde_json::to_string(event) {
                registry.broadcast(&bundle.match_id, &payload);
            }
        }
    }
}

impl Actor for WsSession {
    type Context = ws::WebsocketContext<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(conn_id = %self.conn_id, "[WS SESSION] started");
        self.start_heartbeat(ctx);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        let registry = self.app_state.registry();
        for (match_id, token) in self.joined.drain(..) {
            registry.leave(&match_id, token);
        }
        info!(conn_id = %self.conn_id, "[WS SESSION] stopped");
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for WsSession {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Ping(payload)) => {
                self.last_heartbeat = Instant::now();
                ctx.pong(&payload);
            }
            Ok(ws::Message::Pong(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Text(text)) => {
                self.last_heartbeat = Instant::now();

                let parsed: Result<ClientRequest, _> = serde_json::from_str(&text);
                let Ok(request) = parsed else {
                    self.send_error_and_close(ctx, ErrorCode::BadRequest, "Malformed JSON");
                    return;
                };

                if request.kind == JOIN_KIND {
                    self.handle_join(ctx, request.match_id);
                } else {
                    self.handle_action(ctx, &request);
                }
            }
            Ok(ws::Message::Binary(_)) => {
                self.last_heartbeat = Instant::now();
                self.send_error_and_close(ctx, ErrorCode::BadRequest, "Binary not supported");
            }
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Ok(ws::Message::Continuation(_)) => {
                self.last_heartbeat = Instant::now();
            }
            Ok(ws::Message::Nop) => {
                self.last_heartbeat = Instant::now();
            }
            Err(err) => {
                warn!(
                    conn_id = %self.conn_id,
                    error = %err,
                    "[WS SESSION] protocol error"
                );
                ctx.close(Some(ws::CloseReason::from(ws::CloseCode::Error)));
                ctx.stop();
            }
        }
    }
}

impl Handler<Deliver> for WsSession {
    type Result = ();

    fn handle(&mut self, msg: Deliver, ctx: &mut Self::Context) -> Self::Result {
        ctx.text(msg.payload);
    }
}
