//! Unit tests for session behaviour with exactly known rounds

use flagquiz::{Catalog, GameSession, ItemId, Phase, QuizError};

use crate::mocks::{ScriptedRandom, ScriptedRound};

fn scripted_session(rounds: Vec<ScriptedRound>, max_rounds: u32) -> GameSession<ScriptedRandom> {
    GameSession::with_random(Catalog::reference(), max_rounds, ScriptedRandom::new(rounds)).unwrap()
}

fn names(session: &GameSession<ScriptedRandom>) -> Vec<&str> {
    session
        .current_round()
        .choices()
        .iter()
        .map(ItemId::as_str)
        .collect()
}

#[cfg(test)]
mod round_generation_tests {
    use super::*;

    #[test]
    fn test_first_round_matches_script() {
        let session = scripted_session(
            vec![ScriptedRound::new(["Italy", "US", "Poland"], 2)],
            8,
        );

        assert_eq!(names(&session), ["Italy", "US", "Poland"]);
        assert_eq!(session.current_round().target(), 2);
        assert_eq!(session.prompt().as_str(), "Poland");
        assert_eq!(session.random().shuffles(), 1);
        assert_eq!(session.random().remaining(), 0);
    }

    #[test]
    fn test_continue_draws_next_scripted_round() {
        let mut session = scripted_session(
            vec![
                ScriptedRound::new(["Italy", "US", "Poland"], 2),
                ScriptedRound::new(["UK", "Spain", "Estonia"], 0),
            ],
            8,
        );

        session.submit_answer(1).unwrap();
        // The round is not replaced until continue
        assert_eq!(names(&session), ["Italy", "US", "Poland"]);

        session.continue_game().unwrap();
        assert_eq!(names(&session), ["UK", "Spain", "Estonia"]);
        assert_eq!(session.prompt().as_str(), "UK");
        assert_eq!(session.random().shuffles(), 2);
    }

    #[test]
    fn test_no_round_generated_on_game_over() {
        let mut session = scripted_session(
            vec![ScriptedRound::new(["France", "Germany", "Ireland"], 0)],
            1,
        );

        session.submit_answer(0).unwrap();
        session.continue_game().unwrap();

        assert_eq!(session.phase(), Phase::GameOver);
        assert_eq!(session.random().shuffles(), 1);
        // Last round stays readable for the summary screen
        assert_eq!(session.prompt().as_str(), "France");
    }
}

#[cfg(test)]
mod answer_evaluation_tests {
    use super::*;

    #[test]
    fn test_correct_pick_message() {
        let mut session = scripted_session(
            vec![ScriptedRound::new(["Nigeria", "Russia", "Spain"], 1)],
            8,
        );

        let outcome = session.submit_answer(1).unwrap();

        assert!(outcome.correct);
        assert_eq!(outcome.title, "Correct");
        assert_eq!(outcome.message, "Your score is 1");
        assert_eq!(outcome.answer.as_str(), "Russia");
        assert_eq!(outcome.score, 1);
    }

    #[test]
    fn test_wrong_pick_names_the_picked_flag() {
        let mut session = scripted_session(
            vec![ScriptedRound::new(["Nigeria", "Russia", "Spain"], 1)],
            8,
        );

        let outcome = session.submit_answer(2).unwrap();

        assert!(!outcome.correct);
        assert_eq!(outcome.title, "Wrong");
        assert_eq!(outcome.message, "That's the flag of Spain");
        assert_eq!(outcome.selected.as_str(), "Spain");
        assert_eq!(outcome.answer.as_str(), "Russia");
        assert_eq!(outcome.score, 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_choice_index_five_rejected() {
        let mut session = scripted_session(
            vec![ScriptedRound::new(["Nigeria", "Russia", "Spain"], 1)],
            8,
        );

        let err = session.submit_answer(5).unwrap_err();

        assert!(matches!(
            err,
            QuizError::InvalidArgument { ref field, .. } if field == "choice_index"
        ));
        assert_eq!(session.score(), 0);
        assert_eq!(session.phase(), Phase::InRound);
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn test_score_message_tracks_running_score() {
        let mut session = scripted_session(
            vec![
                ScriptedRound::new(["France", "Germany", "Ireland"], 0),
                ScriptedRound::new(["Italy", "US", "Poland"], 1),
                ScriptedRound::new(["UK", "Spain", "Estonia"], 2),
            ],
            3,
        );

        assert_eq!(session.submit_answer(0).unwrap().message, "Your score is 1");
        session.continue_game().unwrap();
        assert_eq!(session.submit_answer(0).unwrap().message, "That's the flag of Italy");
        session.continue_game().unwrap();
        assert_eq!(session.submit_answer(2).unwrap().message, "Your score is 2");
        session.continue_game().unwrap();

        assert_eq!(session.final_message().as_deref(), Some("Your final score is 2"));
    }
}
