//! Command dispatch routes for the chat relay.

use actix_web::{web, Result};

use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::protocol::command::Command;
use crate::protocol::messages::{IncomingMessage, Reply};
use crate::state::app_state::AppState;

/// POST /command
///
/// Dispatches one inbound chat message. The command text comes from the
/// message text or from a pressed button's action payload; unrecognized
/// input gets the help reply. Each command runs inside its own
/// transaction, so a rejected move or a lost update race rolls back
/// cleanly.
async fn command(
    app_state: web::Data<AppState>,
    body: web::Json<IncomingMessage>,
) -> Result<web::Json<Reply>, AppError> {
    let msg = body.into_inner();
    let user_id = msg.user_id.clone();
    let cmd = msg
        .command_text()
        .map(Command::parse)
        .unwrap_or(Command::Help);

    // Help needs no state and no transaction.
    if cmd == Command::Help {
        return Ok(web::Json(app_state.games.help(&user_id)));
    }

    let games = app_state.games.clone();
    let reply = with_txn(&app_state, |txn| {
        Box::pin(async move {
            let reply = match cmd {
                Command::New => games.create_game(txn, &user_id).await?,
                Command::List => games.list_games(txn, &user_id).await?,
                Command::Join { game_id } => games.join_game(txn, &user_id, &game_id).await?,
                Command::Move { game_id, coord } => {
                    games.make_move(txn, &user_id, &game_id, &coord).await?
                }
                Command::Show { game_id } => games.show_game(txn, &user_id, &game_id).await?,
                Command::MyGame => games.my_game(txn, &user_id).await?,
                Command::Help => games.help(&user_id),
            };
            Ok(reply)
        })
    })
    .await?;

    Ok(web::Json(reply))
}

/// POST /notify
///
/// Redelivers the per-player views for a game that a `/join` or `/move`
/// command already mutated. The views come from a fresh read, so a relay
/// that lost the original reply can fetch the current state. Commands
/// without a side effect have nothing to redeliver and are rejected.
async fn notify(
    app_state: web::Data<AppState>,
    body: web::Json<IncomingMessage>,
) -> Result<web::Json<Reply>, AppError> {
    let msg = body.into_inner();
    let cmd = msg
        .command_text()
        .map(Command::parse)
        .unwrap_or(Command::Help);

    let game_id = match cmd {
        Command::Join { game_id } | Command::Move { game_id, .. } => game_id,
        _ => {
            return Err(AppError::bad_request(
                ErrorCode::BadRequest,
                "Only join and move commands produce notifications",
            ))
        }
    };

    let games = app_state.games.clone();
    let reply = with_txn(&app_state, |txn| {
        Box::pin(async move { Ok(games.notifications(txn, &game_id).await?) })
    })
    .await?;

    Ok(web::Json(reply))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/command").route(web::post().to(command)));
    cfg.service(web::resource("/notify").route(web::post().to(notify)));
}
