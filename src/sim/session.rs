//! Scene cycle: play scene ⇄ end card, forever
//!
//! The session owns exactly one live scene. Replacing it drops the old
//! scene's timers and in-flight motions with it, so nothing scheduled by a
//! torn-down scene can run afterwards.

use serde::{Deserialize, Serialize};

use super::state::{Entity, GameEvent, PlayState, SceneBounds, SceneKind, Transition};
use super::tick::{Outcome, TickInput, tick};
use crate::audio::MusicTrack;
use crate::consts::*;
use crate::secs_to_ticks;

/// End-card state: which way the round ended, plus the display countdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverState {
    pub won: bool,
    /// Ticks left on the end-card display
    pub ticks_left: u32,
}

impl OverState {
    pub fn new(won: bool) -> Self {
        Self {
            won,
            ticks_left: secs_to_ticks(GAME_OVER_SECS),
        }
    }

    /// Line the host renders on the end card
    pub fn message(&self) -> &'static str {
        if self.won {
            "You won!"
        } else {
            "You lost. Try again!"
        }
    }

    /// Count down one tick; true once the display time has elapsed
    fn tick(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }
}

/// The currently live scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Scene {
    Play(PlayState),
    Over(OverState),
}

/// Drives the play/over cycle and collects side effects for the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub scene: Scene,
    bounds: SceneBounds,
    /// Seed for the next fresh round
    next_seed: u64,
    /// Completed play/over cycles
    pub rounds: u64,
    #[serde(skip)]
    events: Vec<GameEvent>,
}

impl Session {
    /// Start a session: constructs the first play scene and presents it
    pub fn new(bounds: SceneBounds, seed: u64) -> Self {
        let mut session = Self {
            scene: Scene::Play(PlayState::new(bounds, seed)),
            bounds,
            next_seed: seed.wrapping_add(1),
            rounds: 0,
            events: Vec::new(),
        };
        session.present_play();
        session
    }

    fn present_play(&mut self) {
        self.events.push(GameEvent::Presented {
            scene: SceneKind::Play,
            transition: Transition::Flip,
        });
        self.events.push(GameEvent::Music(MusicTrack::Background));
    }

    /// Advance one fixed timestep
    pub fn advance(&mut self, input: &TickInput, dt: f32) {
        match &mut self.scene {
            Scene::Play(play) => {
                if let Some(outcome) = tick(play, input, dt, &mut self.events) {
                    let won = outcome == Outcome::Won;
                    log::info!(
                        "round over after {} ticks: {} downed, won={}",
                        play.time_ticks,
                        play.downed,
                        won
                    );
                    self.scene = Scene::Over(OverState::new(won));
                    self.events.push(GameEvent::Presented {
                        scene: SceneKind::Over { won },
                        transition: Transition::Flip,
                    });
                }
            }
            Scene::Over(over) => {
                if over.tick() {
                    let seed = self.next_seed;
                    self.next_seed = seed.wrapping_add(1);
                    self.rounds += 1;
                    log::info!("starting round {} with seed {}", self.rounds + 1, seed);
                    self.scene = Scene::Play(PlayState::new(self.bounds, seed));
                    self.present_play();
                }
            }
        }
    }

    /// Drain side effects accumulated since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Live entities of the current scene (empty on the end card). The
    /// host's renderer and collision backend both read these.
    pub fn entities(&self) -> &[Entity] {
        match &self.scene {
            Scene::Play(play) => &play.entities,
            Scene::Over(_) => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::contact::ContactPair;
    use crate::sim::state::EntityKind;
    use glam::Vec2;

    fn bounds() -> SceneBounds {
        SceneBounds::new(480.0, 320.0)
    }

    fn presented_scenes(events: &[GameEvent]) -> Vec<SceneKind> {
        events
            .iter()
            .filter_map(|e| match e {
                GameEvent::Presented { scene, .. } => Some(*scene),
                _ => None,
            })
            .collect()
    }

    /// Drive with empty input until the current play scene ends
    fn run_until_over(session: &mut Session) {
        for _ in 0..100_000 {
            if matches!(session.scene, Scene::Over(_)) {
                return;
            }
            session.advance(&TickInput::default(), SIM_DT);
        }
        panic!("session never reached the end card");
    }

    #[test]
    fn test_new_session_presents_play_with_music() {
        let mut session = Session::new(bounds(), 1);
        let events = session.drain_events();
        assert_eq!(presented_scenes(&events), vec![SceneKind::Play]);
        assert!(events.contains(&GameEvent::Music(MusicTrack::Background)));
    }

    #[test]
    fn test_unattended_round_is_lost() {
        let mut session = Session::new(bounds(), 2);
        session.drain_events();

        run_until_over(&mut session);
        let events = session.drain_events();
        assert_eq!(
            presented_scenes(&events),
            vec![SceneKind::Over { won: false }]
        );
    }

    #[test]
    fn test_end_card_cycles_into_a_fresh_round() {
        let mut session = Session::new(bounds(), 3);
        session.drain_events();
        run_until_over(&mut session);
        session.drain_events();

        // Exactly the display delay later, a fresh play scene is presented
        for _ in 0..secs_to_ticks(GAME_OVER_SECS) {
            assert!(matches!(session.scene, Scene::Over(_)));
            session.advance(&TickInput::default(), SIM_DT);
        }
        let Scene::Play(play) = &session.scene else {
            panic!("expected a fresh play scene");
        };
        assert_eq!(play.downed, 0);
        assert!(play.entities.is_empty());
        assert_eq!(session.rounds, 1);

        let events = session.drain_events();
        assert_eq!(presented_scenes(&events), vec![SceneKind::Play]);
        assert!(events.contains(&GameEvent::Music(MusicTrack::Background)));
    }

    #[test]
    fn test_one_cycle_presents_exactly_twice() {
        let mut session = Session::new(bounds(), 4);
        session.drain_events();

        run_until_over(&mut session);
        for _ in 0..secs_to_ticks(GAME_OVER_SECS) {
            session.advance(&TickInput::default(), SIM_DT);
        }

        let events = session.drain_events();
        assert_eq!(
            presented_scenes(&events),
            vec![SceneKind::Over { won: false }, SceneKind::Play]
        );
    }

    #[test]
    fn test_won_round_presents_won_end_card() {
        let mut session = Session::new(bounds(), 5);
        session.drain_events();
        // Prime the tally to the brink, then feed the winning contact
        let Scene::Play(play) = &mut session.scene else {
            unreachable!()
        };
        play.downed = WIN_THRESHOLD;
        session.advance(&TickInput::default(), SIM_DT);

        let Scene::Play(play) = &mut session.scene else {
            unreachable!()
        };
        let target = play
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Target)
            .map(|e| e.id)
            .unwrap();
        let shooter = play.shooter_pos();

        let fire = TickInput {
            fire: Some(shooter + Vec2::new(100.0, 0.0)),
            ..Default::default()
        };
        session.advance(&fire, SIM_DT);
        let Scene::Play(play) = &session.scene else {
            unreachable!()
        };
        let shot = play
            .entities
            .iter()
            .find(|e| e.kind == EntityKind::Shot)
            .map(|e| e.id)
            .unwrap();

        let winning = TickInput {
            contacts: vec![ContactPair::new(target, shot)],
            ..Default::default()
        };
        session.advance(&winning, SIM_DT);

        let Scene::Over(over) = &session.scene else {
            panic!("expected the end card");
        };
        assert!(over.won);
        assert_eq!(over.message(), "You won!");
        assert!(session.entities().is_empty());
    }

    #[test]
    fn test_end_card_messages() {
        assert_eq!(OverState::new(true).message(), "You won!");
        assert_eq!(OverState::new(false).message(), "You lost. Try again!");
    }

    #[test]
    fn test_determinism_same_seed_same_trace() {
        let mut a = Session::new(bounds(), 42);
        let mut b = Session::new(bounds(), 42);

        let fire_at = Vec2::new(400.0, 200.0);
        for step in 0u64..2_000 {
            let input = TickInput {
                fire: (step % 50 == 0).then_some(fire_at),
                ..Default::default()
            };
            a.advance(&input, SIM_DT);
            b.advance(&input, SIM_DT);
        }

        assert_eq!(a.scene, b.scene);
        assert_eq!(a.rounds, b.rounds);
    }

    #[test]
    fn test_snapshot_resume_matches_uninterrupted_run() {
        let mut live = Session::new(bounds(), 77);
        live.drain_events();
        for _ in 0..300 {
            live.advance(&TickInput::default(), SIM_DT);
        }

        let json = serde_json::to_string(&live).unwrap();
        let mut resumed: Session = serde_json::from_str(&json).unwrap();

        for _ in 0..300 {
            live.advance(&TickInput::default(), SIM_DT);
            resumed.advance(&TickInput::default(), SIM_DT);
        }
        assert_eq!(live.scene, resumed.scene);
    }
}
