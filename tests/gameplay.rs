use std::{cell::RefCell, rc::Rc};

use flappy_web::config::{INITIAL_SPEED, PIPE_GAP};
use flappy_web::input::Action;
use flappy_web::phase::Phase;
use flappy_web::render::{Palette, Scene};
use flappy_web::storage::{parse_high_score, ScoreStore};
use flappy_web::Game;

/// Store that lets the test look at what the game persisted.
#[derive(Clone, Default)]
struct SharedStore(Rc<RefCell<Option<String>>>);

impl ScoreStore for SharedStore {
    fn load(&self) -> u32 {
        parse_high_score(self.0.borrow().as_deref())
    }

    fn save(&mut self, score: u32) {
        *self.0.borrow_mut() = Some(score.to_string());
    }
}

fn steer(game: &mut Game) {
    let world = game.world_mut();
    let bird_left = world.bird.x - world.bird.radius;
    let target = world
        .obstacles
        .iter()
        .find(|pipe| pipe.trailing_edge() > bird_left - 10.0)
        .map(|pipe| pipe.top_height + PIPE_GAP * 0.5);
    if let Some(y) = target {
        world.bird.y = y;
        world.bird.velocity = 0.0;
    } else if world.bird.y > world.height() * 0.6 {
        world.bird.flap();
    }
}

fn play_until_score(game: &mut Game, target: u32) -> Vec<(u32, f32)> {
    let mut history = Vec::new();
    for _ in 0..10_000 {
        steer(game);
        game.tick();
        assert_eq!(game.phase(), Phase::Playing, "bird crashed while steered");
        history.push((game.score(), game.world().speed));
        if game.score() >= target {
            return history;
        }
    }
    panic!("never reached score {target}");
}

#[test]
fn speed_steps_up_once_at_five_points() {
    let mut game = Game::new(800.0, 600.0, Box::new(SharedStore::default()), 11);
    game.handle(Action::Primary);

    let history = play_until_score(&mut game, 5);
    for (score, speed) in &history {
        if *score < 5 {
            assert_eq!(*speed, INITIAL_SPEED);
        }
    }
    assert_eq!(game.score(), 5);
    assert!((game.world().speed - 3.2).abs() < 1e-6);

    let scores: Vec<u32> = history.iter().map(|(s, _)| *s).collect();
    assert!(scores.windows(2).all(|w| w[1] == w[0] || w[1] == w[0] + 1));
}

#[test]
fn crash_persists_new_best_and_restart_resets() {
    let store = SharedStore::default();
    let mut game = Game::new(800.0, 600.0, Box::new(store.clone()), 3);
    game.handle(Action::Primary);
    play_until_score(&mut game, 2);

    // Stop steering and let gravity finish the run.
    let mut ticks = 0;
    while game.phase() == Phase::Playing {
        game.tick();
        ticks += 1;
        assert!(ticks < 1_000);
    }
    assert_eq!(game.phase(), Phase::GameOver);
    let final_score = game.score();
    assert!(final_score >= 2);
    assert_eq!(store.load(), final_score);
    assert_eq!(game.best_score(), final_score);

    game.handle(Action::Restart);
    assert_eq!(game.phase(), Phase::Start);
    let world = game.world();
    assert_eq!(world.score, 0);
    assert_eq!(world.speed, INITIAL_SPEED);
    assert_eq!(world.frames, 0);
    assert_eq!(world.bird.velocity, 0.0);
    assert_eq!(world.bird.y, 300.0);
    assert!(world.obstacles.is_empty());
    assert!(world.clouds.is_empty());
    assert_eq!(game.best_score(), final_score);
}

#[test]
fn lower_score_keeps_stored_best() {
    let store = SharedStore(Rc::new(RefCell::new(Some("50".into()))));
    let mut game = Game::new(800.0, 600.0, Box::new(store.clone()), 8);
    assert_eq!(game.best_score(), 50);
    game.handle(Action::Primary);
    while game.phase() == Phase::Playing {
        game.tick();
    }
    assert_eq!(store.load(), 50);
}

#[test]
fn malformed_store_starts_from_zero() {
    let store = SharedStore(Rc::new(RefCell::new(Some("not a number".into()))));
    let game = Game::new(800.0, 600.0, Box::new(store), 8);
    assert_eq!(game.best_score(), 0);
}

#[test]
fn resize_mid_run_keeps_state() {
    let mut game = Game::new(800.0, 600.0, Box::new(SharedStore::default()), 4);
    game.handle(Action::Primary);
    play_until_score(&mut game, 1);
    let pipes = game.world().obstacles.len();

    game.resize(1200.0, 700.0);
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.score(), 1);
    assert_eq!(game.world().obstacles.len(), pipes);
    assert_eq!(game.world().width(), 1200.0);
}

#[test]
fn render_fills_scene_for_current_size() {
    let mut game = Game::new(640.0, 480.0, Box::new(SharedStore::default()), 2);
    let mut scene = Scene::new(Palette::default());
    game.tick();
    game.render(&mut scene);
    assert_eq!(scene.size(), [640.0, 480.0]);
    assert!(!scene.instances().is_empty());
}

#[test]
fn hitting_a_pipe_ends_the_run_and_saves_best() {
    let store = SharedStore::default();
    let mut game = Game::new(800.0, 600.0, Box::new(store.clone()), 6);
    game.handle(Action::Primary);
    game.tick();
    assert_eq!(game.world().obstacles.len(), 1);

    let world = game.world_mut();
    world.score = 3;
    let top = world.obstacles[0].top_height;
    world.obstacles[0].x = 40.0;
    world.bird.y = top - 5.0;
    world.bird.velocity = 0.0;

    game.tick();
    assert_eq!(game.phase(), Phase::GameOver);
    assert_eq!(game.score(), 3);
    assert!(!game.world().obstacles[0].scored);
    assert_eq!(store.load(), 3);
    assert_eq!(game.best_score(), 3);
}
