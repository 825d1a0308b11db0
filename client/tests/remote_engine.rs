mod common;

use std::time::Duration;

use board::{Algorithm, Board, Coord, Difficulty, MatchSettings, MoveQuery, Player};
use client::{App, AppEvent, Effect, FetchError, Intent, RemoteEngine, RemotePlayer, Ticket};
use common::{dead_endpoint, FakeEngine, Reply};
use tokio::sync::mpsc;
use tokio::time::timeout;

fn engine(url: reqwest::Url) -> RemoteEngine {
    RemoteEngine::new(url, Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn fetch_move_sends_board_and_settings() {
    let fake = FakeEngine::start(Reply::Column(4)).await;
    let board = Board::empty().drop_token(3, Player::One).unwrap().board;
    let settings = MatchSettings {
        algorithm: Algorithm::AlphaBeta,
        difficulty: Difficulty::clamped(3),
        ai_player: Some(Player::Two),
    };

    let column = engine(fake.url.clone())
        .fetch_move(&MoveQuery::new(&board, &settings))
        .await
        .unwrap();
    assert_eq!(column, 4);

    let requests = fake.requests();
    assert_eq!(requests.len(), 1);
    let params = &requests[0];
    assert_eq!(params["board"], board.to_wire());
    assert_eq!(Board::from_wire(&params["board"]).unwrap(), board);
    assert_eq!(params["algorithm"], "ab");
    assert_eq!(params["difficulty"], "3");
}

#[tokio::test]
async fn http_error_is_reported() {
    let fake = FakeEngine::start(Reply::Status(500)).await;
    let query = MoveQuery::new(&Board::empty(), &MatchSettings::default());
    match engine(fake.url.clone()).fetch_move(&query).await {
        Err(FetchError::Status { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "engine exploded");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn off_board_column_is_rejected() {
    let fake = FakeEngine::start(Reply::Column(9)).await;
    let query = MoveQuery::new(&Board::empty(), &MatchSettings::default());
    let res = engine(fake.url.clone()).fetch_move(&query).await;
    assert!(matches!(res, Err(FetchError::ColumnOutOfRange(9))));
}

#[tokio::test]
async fn unreachable_engine_is_a_request_error() {
    let query = MoveQuery::new(&Board::empty(), &MatchSettings::default());
    let res = engine(dead_endpoint().await).fetch_move(&query).await;
    assert!(matches!(res, Err(FetchError::Request(_))));
}

#[tokio::test]
async fn failed_request_sends_nothing() {
    let fake = FakeEngine::start(Reply::Status(503)).await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let ticket = Ticket { game: 0, ply: 1 };
    let query = MoveQuery::new(&Board::empty(), &MatchSettings::default());
    let task = engine(fake.url.clone()).spawn_move(ticket, query, tx);
    task.await.unwrap();
    assert!(rx.recv().await.is_none());
}

#[tokio::test]
async fn human_and_engine_take_turns() {
    let fake = FakeEngine::start(Reply::Column(5)).await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut remote = RemotePlayer::new(engine(fake.url.clone()), tx);
    let mut app = App::default();

    for effect in app.dispatch(Intent::DropInColumn(2)) {
        remote.apply(effect);
    }
    assert_eq!(remote.in_flight(), app.awaiting());

    let event = timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("engine answered in time")
        .expect("channel open");
    let remote_move = match event {
        AppEvent::RemoteMove(remote_move) => remote_move,
        other => panic!("expected a remote move, got {other:?}"),
    };
    assert_eq!(remote_move.ticket, Ticket { game: 0, ply: 1 });

    let effects = app.dispatch(Intent::Remote(remote_move));
    assert!(effects.is_empty());
    assert_eq!(app.game().ply(), 2);
    assert_eq!(app.game().board().cell(Coord::new(5, 5)), Some(Player::Two));
    assert_eq!(app.status_message(), "Your turn, human");

    let params = &fake.requests()[0];
    assert_eq!(params["algorithm"], "mcts");
    assert_eq!(params["difficulty"], "1");
}

#[tokio::test]
async fn reset_aborts_the_pending_request() {
    let fake = FakeEngine::start(Reply::Delayed {
        delay: Duration::from_millis(500),
        column: 0,
    })
    .await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut remote = RemotePlayer::new(engine(fake.url.clone()), tx);
    let mut app = App::default();

    for effect in app.dispatch(Intent::DropInColumn(3)) {
        remote.apply(effect);
    }
    assert!(remote.in_flight().is_some());

    let effects = app.dispatch(Intent::Reset);
    assert_eq!(effects, vec![Effect::CancelMove]);
    for effect in effects {
        remote.apply(effect);
    }
    assert_eq!(remote.in_flight(), None);

    // the remote player still holds a sender, so silence means the task died
    let res = timeout(Duration::from_millis(1200), rx.recv()).await;
    assert!(res.is_err(), "no move may arrive after a reset");
    assert_eq!(app.game().board().filled(), 0);
}

#[tokio::test]
async fn engine_opening_move_is_applied() {
    let fake = FakeEngine::start(Reply::Column(3)).await;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut remote = RemotePlayer::new(engine(fake.url.clone()), tx);
    let mut app = App::new(MatchSettings {
        ai_player: Some(Player::One),
        ..MatchSettings::default()
    });

    for effect in app.start() {
        remote.apply(effect);
    }
    let Some(AppEvent::RemoteMove(remote_move)) =
        timeout(Duration::from_secs(5), rx.recv()).await.unwrap()
    else {
        panic!("expected a remote move");
    };
    app.dispatch(Intent::Remote(remote_move));
    assert_eq!(app.game().board().cell(Coord::new(5, 3)), Some(Player::One));
    assert!(app.accepts_human_input());
    assert_eq!(fake.requests()[0]["board"], Board::empty().to_wire());
}
