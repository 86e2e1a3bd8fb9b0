use std::time::Duration;

use tictactoe_common::log;

use crate::game_session_manager::GameSessionManager;

pub struct CleanupTask {
    session_manager: GameSessionManager,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(
        session_manager: GameSessionManager,
        check_interval: Duration,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            session_manager,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;
            self.cleanup_inactive_games().await;
        }
    }

    pub async fn cleanup_inactive_games(&self) -> usize {
        let inactive_games = self
            .session_manager
            .get_inactive_games(self.inactivity_timeout)
            .await;

        let mut removed = 0;
        for game_id in inactive_games {
            log!("Cleaning up inactive game: {}", game_id);
            if self.session_manager.remove_game(&game_id).await.is_ok() {
                removed += 1;
            }
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::games::SessionRng;
    use tictactoe_common::games::tictactoe::GameSettings;

    #[tokio::test]
    async fn test_only_inactive_games_are_removed() {
        let manager = GameSessionManager::new(GameSettings::default());
        manager
            .create_game_with_rng(None, SessionRng::new(1))
            .await
            .unwrap();

        let patient = CleanupTask::new(manager.clone(), Duration::from_secs(1), Duration::from_secs(3600));
        assert_eq!(patient.cleanup_inactive_games().await, 0);
        assert_eq!(manager.game_count().await, 1);

        let eager = CleanupTask::new(manager.clone(), Duration::from_secs(1), Duration::ZERO);
        assert_eq!(eager.cleanup_inactive_games().await, 1);
        assert_eq!(manager.game_count().await, 0);
    }
}
