//! Full playthrough tests: round after round, game over, restart

use flagquiz::{Catalog, GameSession, Phase, SeededRandom, CHOICES_PER_ROUND};

fn seeded_session(seed: u64, max_rounds: u32) -> GameSession<SeededRandom> {
    GameSession::with_random(Catalog::reference(), max_rounds, SeededRandom::new(seed)).unwrap()
}

#[cfg(test)]
mod playthrough_tests {
    use super::*;

    #[test]
    fn test_perfect_game_of_eight_rounds() {
        let mut session = seeded_session(2024, 8);

        for round in 0..8 {
            assert_eq!(session.phase(), Phase::InRound);
            assert_eq!(session.rounds_played(), round);

            let target = session.current_round().target();
            let outcome = session.submit_answer(target).unwrap();
            assert!(outcome.correct);

            session.continue_game().unwrap();
        }

        assert_eq!(session.score(), 8);
        assert_eq!(session.rounds_played(), 8);
        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.final_message().as_deref(), Some("Your final score is 8"));
    }

    #[test]
    fn test_all_wrong_game() {
        let mut session = seeded_session(5, 8);

        while !session.is_over() {
            let wrong = (session.current_round().target() + 1) % CHOICES_PER_ROUND;
            assert!(!session.submit_answer(wrong).unwrap().correct);
            session.continue_game().unwrap();
        }

        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_played(), 8);
        assert_eq!(session.final_message().as_deref(), Some("Your final score is 0"));
    }

    #[test]
    fn test_game_over_after_exactly_max_rounds() {
        for max_rounds in [1, 2, 5, 8, 13] {
            let mut session = seeded_session(u64::from(max_rounds), max_rounds);
            let mut cycles = 0;

            while !session.is_over() {
                session.submit_answer(0).unwrap();
                session.continue_game().unwrap();
                cycles += 1;
            }

            assert_eq!(cycles, max_rounds);
            assert_eq!(session.rounds_played(), max_rounds);
        }
    }

    #[test]
    fn test_game_over_rejects_play() {
        let mut session = seeded_session(9, 1);
        session.submit_answer(1).unwrap();
        session.continue_game().unwrap();

        let score = session.score();
        assert!(session.submit_answer(0).unwrap_err().is_invalid_state());
        assert!(session.continue_game().unwrap_err().is_invalid_state());
        assert_eq!(session.score(), score);
        assert_eq!(session.phase(), Phase::GameOver);
    }

    #[test]
    fn test_restart_looks_like_a_fresh_session() {
        let mut session = seeded_session(77, 3);
        while !session.is_over() {
            let target = session.current_round().target();
            session.submit_answer(target).unwrap();
            session.continue_game().unwrap();
        }
        assert_eq!(session.score(), 3);

        session.restart().unwrap();

        assert_eq!(session.score(), 0);
        assert_eq!(session.rounds_played(), 0);
        assert_eq!(session.phase(), Phase::InRound);
        assert!(session.last_outcome().is_none());
        assert!(session.final_message().is_none());

        let round = session.current_round();
        assert!(round.target() < CHOICES_PER_ROUND);
        for choice in round.choices() {
            assert!(session.catalog().contains(choice));
        }

        // A second playthrough runs to completion as well
        while !session.is_over() {
            session.submit_answer(2).unwrap();
            session.continue_game().unwrap();
        }
        assert_eq!(session.rounds_played(), 3);
    }

    #[test]
    fn test_equal_seeds_replay_equal_games() {
        let mut first = seeded_session(31337, 8);
        let mut second = seeded_session(31337, 8);

        while !first.is_over() {
            assert_eq!(first.current_round(), second.current_round());
            first.submit_answer(1).unwrap();
            second.submit_answer(1).unwrap();
            first.continue_game().unwrap();
            second.continue_game().unwrap();
        }

        assert_eq!(first.score(), second.score());
    }

    #[test]
    fn test_snapshot_serializes_for_presentation() {
        let mut session = seeded_session(3, 8);
        session.submit_answer(0).unwrap();

        let json = serde_json::to_value(session.snapshot()).unwrap();

        assert_eq!(json["phase"], "awaiting_continue");
        assert_eq!(json["rounds_played"], 0);
        assert_eq!(json["max_rounds"], 8);
        assert_eq!(json["choices"].as_array().map(Vec::len), Some(3));
        assert!(json["last_outcome"]["message"].is_string());
    }
}
