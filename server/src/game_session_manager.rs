use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use thiserror::Error;
use tokio::sync::Mutex;
use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    choose_ai_move, Board, GameSettings, InvalidMove, Mark, TicTacToeGameState,
};
use tictactoe_common::id_generator::{generate_game_id, generate_player_name};
use tictactoe_common::{log, GameId};

use crate::api::GameSnapshot;

const MAX_PLAYER_NAME_LEN: usize = 32;

pub type AiSearch = Arc<dyn Fn(&Board, &mut SessionRng) -> Option<usize> + Send + Sync>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("Game {0} not found")]
    GameNotFound(GameId),

    #[error(transparent)]
    InvalidMove(#[from] InvalidMove),

    #[error("AI search for game {0} failed: {1}")]
    SearchFailed(GameId, String),
}

struct GameSession {
    state: TicTacToeGameState,
    rng: SessionRng,
    player_name: String,
    last_ai_move: Option<usize>,
    last_activity: Instant,
}

impl GameSession {
    fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    fn snapshot(&self, game_id: &GameId, settings: &GameSettings) -> GameSnapshot {
        GameSnapshot {
            id: game_id.to_string(),
            player_name: self.player_name.clone(),
            cells: self.state.board().cells().iter().map(|cell| cell.symbol()).collect(),
            current_turn: self.state.current_mark(),
            first_player: self.state.first_mark(),
            outcome: self.state.outcome(),
            winning_cells: self.state.winning_cells(),
            is_board_full: self.state.is_board_full(),
            last_ai_move: self.last_ai_move,
            ai_move_delay_ms: settings.ai_move_delay_ms,
        }
    }
}

#[derive(Clone)]
pub struct GameSessionManager {
    sessions: Arc<Mutex<HashMap<GameId, GameSession>>>,
    settings: GameSettings,
    ai_search: AiSearch,
}

fn normalize_player_name(player_name: Option<String>) -> String {
    player_name
        .map(|name| name.trim().chars().take(MAX_PLAYER_NAME_LEN).collect::<String>())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(generate_player_name)
}

impl GameSessionManager {
    pub fn new(settings: GameSettings) -> Self {
        Self::with_search(
            settings,
            Arc::new(|board: &Board, rng: &mut SessionRng| choose_ai_move(board, rng)),
        )
    }

    pub fn with_search(settings: GameSettings, ai_search: AiSearch) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            settings,
            ai_search,
        }
    }

    pub async fn create_game(
        &self,
        player_name: Option<String>,
    ) -> Result<GameSnapshot, SessionError> {
        self.create_game_with_rng(player_name, SessionRng::from_random())
            .await
    }

    pub async fn create_game_with_rng(
        &self,
        player_name: Option<String>,
        mut rng: SessionRng,
    ) -> Result<GameSnapshot, SessionError> {
        let game_id = generate_game_id();
        let state = TicTacToeGameState::new(self.settings.first_player, &mut rng);
        let player_name = normalize_player_name(player_name);

        log!(
            "Game {} created for '{}' (first: {:?}, seed: {})",
            game_id,
            player_name,
            state.first_mark(),
            rng.seed()
        );

        let session = GameSession {
            state,
            rng,
            player_name,
            last_ai_move: None,
            last_activity: Instant::now(),
        };

        self.sessions.lock().await.insert(game_id.clone(), session);

        if let Err(e) = self.play_ai_turn(&game_id).await {
            log!("Game {}: opening AI move failed: {}", game_id, e);
        }

        self.get_game(&game_id).await
    }

    pub async fn get_game(&self, game_id: &GameId) -> Result<GameSnapshot, SessionError> {
        let sessions = self.sessions.lock().await;
        sessions
            .get(game_id)
            .map(|session| session.snapshot(game_id, &self.settings))
            .ok_or_else(|| SessionError::GameNotFound(game_id.clone()))
    }

    pub async fn place_human_mark(
        &self,
        game_id: &GameId,
        index: usize,
    ) -> Result<GameSnapshot, SessionError> {
        // A reply lost to an earlier failed search is played first.
        self.play_ai_turn(game_id).await?;

        {
            let mut sessions = self.sessions.lock().await;
            let session = sessions
                .get_mut(game_id)
                .ok_or_else(|| SessionError::GameNotFound(game_id.clone()))?;

            let outcome = session.state.apply_move(index, Mark::Human)?;
            session.touch();
            log!("Game {}: human played {} -> {:?}", game_id, index, outcome);
        }

        self.play_ai_turn(game_id).await?;
        self.get_game(game_id).await
    }

    pub async fn reset_game(&self, game_id: &GameId) -> Result<GameSnapshot, SessionError> {
        {
            let mut sessions = self.sessions.lock().await;
            let session = sessions
                .get_mut(game_id)
                .ok_or_else(|| SessionError::GameNotFound(game_id.clone()))?;

            session.state.reset(self.settings.first_player, &mut session.rng);
            session.last_ai_move = None;
            session.touch();
            log!("Game {} reset (first: {:?})", game_id, session.state.first_mark());
        }

        self.play_ai_turn(game_id).await?;
        self.get_game(game_id).await
    }

    pub async fn remove_game(&self, game_id: &GameId) -> Result<(), SessionError> {
        let removed = self.sessions.lock().await.remove(game_id);
        match removed {
            Some(_) => {
                log!("Game {} removed", game_id);
                Ok(())
            }
            None => Err(SessionError::GameNotFound(game_id.clone())),
        }
    }

    pub async fn get_inactive_games(&self, inactivity_timeout: Duration) -> Vec<GameId> {
        let sessions = self.sessions.lock().await;
        sessions
            .iter()
            .filter(|(_, session)| session.last_activity.elapsed() >= inactivity_timeout)
            .map(|(game_id, _)| game_id.clone())
            .collect()
    }

    pub async fn game_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    async fn play_ai_turn(&self, game_id: &GameId) -> Result<(), SessionError> {
        let (board, mut bot_rng) = {
            let mut sessions = self.sessions.lock().await;
            let session = sessions
                .get_mut(game_id)
                .ok_or_else(|| SessionError::GameNotFound(game_id.clone()))?;

            if session.state.is_over() || session.state.current_mark() != Mark::Ai {
                return Ok(());
            }
            (*session.state.board(), session.rng.fork())
        };

        let ai_search = Arc::clone(&self.ai_search);
        let calculated_move =
            tokio::task::spawn_blocking(move || ai_search(&board, &mut bot_rng)).await;

        let index = match calculated_move {
            Ok(Some(index)) => index,
            Ok(None) => return Ok(()),
            Err(e) => {
                log!("Game {}: AI search task failed: {}", game_id, e);
                return Err(SessionError::SearchFailed(game_id.clone(), e.to_string()));
            }
        };

        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(game_id)
            .ok_or_else(|| SessionError::GameNotFound(game_id.clone()))?;

        if session.state.board() != &board {
            log!("Game {} changed during AI search, dropping move {}", game_id, index);
            return Ok(());
        }

        let outcome = session.state.apply_move(index, Mark::Ai)?;
        session.last_ai_move = Some(index);
        session.touch();
        log!("Game {}: AI played {} -> {:?}", game_id, index, outcome);
        Ok(())
    }
}
