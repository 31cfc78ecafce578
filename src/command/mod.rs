//! Textual command surface
//!
//! Compiles short delimited directives (from network or scripting callers)
//! into [`Action`]s. This surface must survive arbitrary external text:
//! unknown verbs, malformed arguments and unresolvable players all compile
//! to "no action" with a logged diagnostic, never an error.

use crate::actions::Action;
use crate::core::types::PlayerId;
use crate::game::GameView;

/// One raw directive: verb and arguments separated by commas
#[derive(Debug, Clone)]
pub struct AiCommand {
    pub message: String,
}

impl AiCommand {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The closed set of recognized verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Plant,
    Defuse,
    FollowMe,
}

impl Verb {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "plant" => Some(Verb::Plant),
            "defuse" => Some(Verb::Defuse),
            "follow_me" => Some(Verb::FollowMe),
            _ => None,
        }
    }
}

/// Translates [`AiCommand`]s into [`Action`]s via a fixed verb table.
///
/// Holds no game state; all effects are expressed in the returned action,
/// executed later by whichever inbox receives it.
#[derive(Debug, Default)]
pub struct CommandTranslator;

impl CommandTranslator {
    pub fn new() -> Self {
        Self
    }

    /// Compile a directive into an action, or `None` if the message is
    /// empty, the verb is unknown, or the arguments do not resolve.
    pub fn compile(&self, cmd: &AiCommand, game: &dyn GameView) -> Option<Action> {
        let message = cmd.message.trim();
        if message.is_empty() {
            return None;
        }

        let mut fields = message.split(',');
        let verb_text = fields.next()?.trim();
        let Some(verb) = Verb::parse(verb_text) else {
            tracing::warn!(verb = verb_text, "unknown AI command verb");
            return None;
        };

        match verb {
            Verb::Plant => Some(Action::PlantBomb),
            Verb::Defuse => Some(Action::DefuseBomb),
            Verb::FollowMe => self.parse_follow_me(fields.next(), game),
        }
    }

    fn parse_follow_me(&self, arg: Option<&str>, game: &dyn GameView) -> Option<Action> {
        let raw = arg?.trim();
        let id = match raw.parse::<u32>() {
            Ok(id) => PlayerId(id),
            Err(err) => {
                tracing::warn!(arg = raw, %err, "follow_me: malformed player id");
                return None;
            }
        };

        match game.player(id) {
            Some(player) if player.alive => Some(Action::CoverEntity(id)),
            Some(_) => {
                tracing::warn!(?id, "follow_me: player is dead");
                None
            }
            None => {
                tracing::warn!(?id, "follow_me: no such player");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec2;
    use crate::game::PlayerSnapshot;

    struct TestGame {
        players: Vec<PlayerSnapshot>,
    }

    impl GameView for TestGame {
        fn player(&self, id: PlayerId) -> Option<PlayerSnapshot> {
            self.players.iter().copied().find(|p| p.id == id)
        }
    }

    fn game() -> TestGame {
        TestGame {
            players: vec![
                PlayerSnapshot {
                    id: PlayerId(3),
                    alive: true,
                    bot: false,
                    position: Vec2::new(10.0, 10.0),
                },
                PlayerSnapshot {
                    id: PlayerId(7),
                    alive: false,
                    bot: false,
                    position: Vec2::default(),
                },
            ],
        }
    }

    #[test]
    fn test_plant_compiles() {
        let t = CommandTranslator::new();
        let action = t.compile(&AiCommand::new("plant"), &game());
        assert_eq!(action, Some(Action::PlantBomb));
    }

    #[test]
    fn test_defuse_compiles() {
        let t = CommandTranslator::new();
        let action = t.compile(&AiCommand::new("defuse"), &game());
        assert_eq!(action, Some(Action::DefuseBomb));
    }

    #[test]
    fn test_follow_me_live_player() {
        let t = CommandTranslator::new();
        let action = t.compile(&AiCommand::new("follow_me,3"), &game());
        assert_eq!(action, Some(Action::CoverEntity(PlayerId(3))));
    }

    #[test]
    fn test_follow_me_dead_player_is_no_action() {
        let t = CommandTranslator::new();
        assert_eq!(t.compile(&AiCommand::new("follow_me,7"), &game()), None);
    }

    #[test]
    fn test_follow_me_unknown_player_is_no_action() {
        let t = CommandTranslator::new();
        assert_eq!(t.compile(&AiCommand::new("follow_me,99"), &game()), None);
    }

    #[test]
    fn test_follow_me_malformed_id_is_no_action() {
        let t = CommandTranslator::new();
        assert_eq!(t.compile(&AiCommand::new("follow_me,banana"), &game()), None);
        assert_eq!(t.compile(&AiCommand::new("follow_me"), &game()), None);
    }

    #[test]
    fn test_unknown_verb_is_no_action() {
        let t = CommandTranslator::new();
        assert_eq!(t.compile(&AiCommand::new("bogus_verb"), &game()), None);
    }

    #[test]
    fn test_empty_message_is_no_action() {
        let t = CommandTranslator::new();
        assert_eq!(t.compile(&AiCommand::new(""), &game()), None);
        assert_eq!(t.compile(&AiCommand::new("   "), &game()), None);
    }
}
