//! Offense strategy integration tests
//!
//! Drives the state machine through a whole round against mock agents and
//! checks the order flow end to end, including the command-translator
//! override path.

use ironsight::actions::Action;
use ironsight::command::{AiCommand, CommandTranslator};
use ironsight::core::config::AiConfig;
use ironsight::core::types::{PlayerId, Rect, TargetId, TimeStep, Vec2, ZoneId};
use ironsight::game::{Agent, GameView, PlayerSnapshot};
use ironsight::strategy::{OffenseObjectiveStrategy, OffensiveState, TeamStrategy};
use ironsight::zone::{BombTarget, BombTargetState, ContestedOracle, Zone, ZoneIndex};

struct Bot {
    id: PlayerId,
    alive: bool,
    position: Vec2,
    inbox: Vec<Action>,
}

impl Bot {
    fn new(id: u32, x: f32, y: f32) -> Self {
        Self {
            id: PlayerId(id),
            alive: true,
            position: Vec2::new(x, y),
            inbox: Vec::new(),
        }
    }
}

impl Agent for Bot {
    fn id(&self) -> PlayerId {
        self.id
    }
    fn is_alive(&self) -> bool {
        self.alive
    }
    fn is_bot(&self) -> bool {
        true
    }
    fn position(&self) -> Vec2 {
        self.position
    }
    fn has_pending_orders(&self) -> bool {
        !self.inbox.is_empty()
    }
    fn post(&mut self, action: Action) {
        self.inbox.push(action);
    }
    fn post_top_priority(&mut self, action: Action) {
        self.inbox.insert(0, action);
    }
}

struct Roster(Vec<PlayerSnapshot>);

impl GameView for Roster {
    fn player(&self, id: PlayerId) -> Option<PlayerSnapshot> {
        self.0.iter().copied().find(|p| p.id == id)
    }
}

struct NoOracle;
impl ContestedOracle for NoOracle {
    fn deadliest_zone(&self) -> Option<ZoneId> {
        None
    }
}

fn two_site_map() -> ZoneIndex {
    ZoneIndex::new(vec![
        Zone::with_targets(
            ZoneId(0),
            Rect::new(0.0, 0.0, 256.0, 256.0),
            vec![BombTarget::new(TargetId(10), Vec2::new(128.0, 128.0))],
        ),
        Zone::with_targets(
            ZoneId(1),
            Rect::new(1024.0, 0.0, 256.0, 256.0),
            vec![BombTarget::new(TargetId(11), Vec2::new(1152.0, 128.0))],
        ),
    ])
}

fn tick(s: &mut OffenseObjectiveStrategy, zones: &ZoneIndex, squad: &mut [Bot], delta_ms: u64) {
    let mut refs: Vec<&mut dyn Agent> = squad.iter_mut().map(|b| b as &mut dyn Agent).collect();
    s.update(TimeStep::new(delta_ms), zones, &NoOracle, &mut refs);
}

#[test]
fn full_round_state_progression() {
    let mut zones = two_site_map();
    let mut strategy = OffenseObjectiveStrategy::with_seed(AiConfig::default(), 99);
    let mut squad = vec![Bot::new(1, 10.0, 10.0), Bot::new(2, 40.0, 10.0)];

    strategy.start_of_round(&zones, &NoOracle);
    assert_eq!(strategy.state(), OffensiveState::Random);
    let site = strategy.zone_to_attack().expect("a site is always tracked");

    // Opening window: everyone wanders.
    tick(&mut strategy, &zones, &mut squad, 1_000);
    assert_eq!(strategy.state(), OffensiveState::Random);
    assert!(squad.iter().all(|b| b.inbox.contains(&Action::Wander)));

    // Countdown is at most 15s + 24s; one oversized tick clears it.
    tick(&mut strategy, &zones, &mut squad, 45_000);
    tick(&mut strategy, &zones, &mut squad, 100);
    assert_eq!(strategy.state(), OffensiveState::PlantBomb);
    assert!(squad.iter().all(|b| b.inbox.contains(&Action::PlantBomb)));

    // The plant goes down: within one tick the team turns to defense.
    let target = zones.zone(site).unwrap().targets[0].id;
    zones.set_target_state(target, BombTargetState::Arming);
    tick(&mut strategy, &zones, &mut squad, 100);
    assert_eq!(strategy.state(), OffensiveState::Defend);
    assert!(squad
        .iter()
        .all(|b| b.inbox.contains(&Action::DefendPlantedTarget(target))));

    // Site cleared: recompute the zone and push toward the next one.
    zones.set_target_state(target, BombTargetState::Neutralized);
    tick(&mut strategy, &zones, &mut squad, 100);
    assert_eq!(strategy.state(), OffensiveState::Infiltrate);
    let next = strategy.zone_to_attack().unwrap();
    assert_ne!(next, site);
    assert!(squad.iter().all(|b| b.inbox.contains(&Action::Infiltrate(next))));

    // Round over: back to the reset state.
    strategy.end_of_round();
    assert_eq!(strategy.state(), OffensiveState::Random);
    assert_eq!(strategy.zone_to_attack(), None);
}

#[test]
fn orders_are_not_duplicated_while_busy() {
    let zones = two_site_map();
    let mut strategy = OffenseObjectiveStrategy::with_seed(AiConfig::default(), 5);
    let mut squad = vec![Bot::new(1, 10.0, 10.0)];

    strategy.start_of_round(&zones, &NoOracle);
    tick(&mut strategy, &zones, &mut squad, 45_000);
    tick(&mut strategy, &zones, &mut squad, 100);
    let backlog = squad[0].inbox.len();

    // Same state, inbox still busy: keep-alive must not enqueue again.
    for _ in 0..5 {
        tick(&mut strategy, &zones, &mut squad, 100);
    }
    assert_eq!(squad[0].inbox.len(), backlog);

    // Once the bot drains its inbox, the keep-alive re-issues exactly one.
    squad[0].inbox.clear();
    tick(&mut strategy, &zones, &mut squad, 100);
    assert_eq!(squad[0].inbox.len(), 1);
}

#[test]
fn translated_override_preempts_queued_orders() {
    let zones = two_site_map();
    let mut strategy = OffenseObjectiveStrategy::with_seed(AiConfig::default(), 5);
    let mut squad = vec![Bot::new(1, 10.0, 10.0)];
    strategy.start_of_round(&zones, &NoOracle);
    tick(&mut strategy, &zones, &mut squad, 1_000);
    assert!(squad[0].has_pending_orders());

    // Surface translator diagnostics when running with RUST_LOG set.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    // An externally triggered "plant" jumps the queue even though the bot
    // reports busy.
    let translator = CommandTranslator::new();
    let roster = Roster(vec![PlayerSnapshot {
        id: PlayerId(1),
        alive: true,
        bot: true,
        position: squad[0].position,
    }]);
    let action = translator
        .compile(&AiCommand::new("plant"), &roster)
        .expect("plant always compiles");
    squad[0].post_top_priority(action);

    assert_eq!(squad[0].inbox.first(), Some(&Action::PlantBomb));
}

#[test]
fn strategy_reports_constant_desirability() {
    let strategy = OffenseObjectiveStrategy::new(AiConfig::default());
    assert_eq!(
        strategy.desirability(),
        AiConfig::default().offense_desirability
    );
}

#[test]
fn spawned_bot_receives_current_order() {
    let zones = two_site_map();
    let mut strategy = OffenseObjectiveStrategy::with_seed(AiConfig::default(), 5);
    let mut squad = vec![Bot::new(1, 10.0, 10.0)];
    strategy.start_of_round(&zones, &NoOracle);
    tick(&mut strategy, &zones, &mut squad, 45_000);
    tick(&mut strategy, &zones, &mut squad, 100);

    let mut late_joiner = Bot::new(9, 50.0, 50.0);
    strategy.player_spawned(&mut late_joiner, &zones, &NoOracle);
    assert_eq!(late_joiner.inbox, vec![Action::PlantBomb]);
}
