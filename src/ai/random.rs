use crate::error::SearchError;
use crate::game::Game;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and scripted games
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, game: &Game) -> Result<usize, SearchError> {
        let actions = game.legal_actions();
        if actions.is_empty() {
            return Err(SearchError::NoMove);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let game = Game::new();
        let legal = game.legal_actions();

        for _ in 0..100 {
            let action = agent.select_action(&game).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_seeded_agents_agree() {
        let mut a = RandomAgent::with_seed(7);
        let mut b = RandomAgent::with_seed(7);
        let game = Game::new();
        for _ in 0..20 {
            assert_eq!(a.select_action(&game), b.select_action(&game));
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::with_seed(1);
        let mut agent2 = RandomAgent::with_seed(2);
        let mut game = Game::new();

        let mut turn = 0;
        while !game.is_terminal() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&game).unwrap()
            } else {
                agent2.select_action(&game).unwrap()
            };
            game.apply_move_mut(action).unwrap();
            turn += 1;
        }

        assert!(game.outcome().is_some());
        assert_eq!(agent1.select_action(&game), Err(SearchError::NoMove));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
