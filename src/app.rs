use crate::clock::Clock;
use crate::command::InputSource;
use crate::game::Game;
use crate::render::Renderer;
use log::info;
use rand::Rng;
use std::io;

/// Runs a game at a fixed rate until the player quits
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng> {
    game: Game<R>,
}

impl<R: Rng> App<R> {
    pub(crate) fn new(game: Game<R>) -> App<R> {
        App { game }
    }

    /// Run the game loop: once per tick of `clock`, act on any commands from
    /// `input`, advance the game, and draw the result with `renderer`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading input or drawing fails.
    pub(crate) fn run<C, I, D>(
        mut self,
        clock: &mut C,
        input: &mut I,
        renderer: &mut D,
    ) -> io::Result<()>
    where
        C: Clock,
        I: InputSource,
        D: Renderer,
    {
        renderer.render(&self.game.scene(true))?;
        loop {
            clock.tick();
            for cmd in input.drain()? {
                if self.game.handle_command(cmd).is_break() {
                    info!("Quit requested");
                    return Ok(());
                }
            }
            let tick = self.game.tick();
            renderer.render(&self.game.scene(tick.resets_board()))?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::game::{Cell, Drawable, GameConfig, Scene};
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    struct CountingClock(usize);

    impl Clock for CountingClock {
        fn tick(&mut self) {
            self.0 += 1;
        }
    }

    /// Yields one batch of commands per tick, then quits
    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    struct ScriptedInput(VecDeque<Vec<Command>>);

    impl ScriptedInput {
        fn new<const N: usize>(batches: [Vec<Command>; N]) -> Self {
            ScriptedInput(VecDeque::from(batches))
        }
    }

    impl InputSource for ScriptedInput {
        fn drain(&mut self) -> io::Result<Vec<Command>> {
            Ok(self.0.pop_front().unwrap_or_else(|| vec![Command::Quit]))
        }
    }

    #[derive(Clone, Debug, Eq, PartialEq)]
    struct Frame {
        body: Vec<Cell>,
        food: Cell,
        vacated: Option<Cell>,
        clear: bool,
    }

    #[derive(Clone, Debug, Default, Eq, PartialEq)]
    struct RecordingRenderer(Vec<Frame>);

    impl Renderer for RecordingRenderer {
        fn render(&mut self, scene: &Scene<'_>) -> io::Result<()> {
            self.0.push(Frame {
                body: scene.creature.cells().collect(),
                food: scene.food.position(),
                vacated: scene.vacated,
                clear: scene.clear,
            });
            Ok(())
        }
    }

    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
    struct BrokenRenderer;

    impl Renderer for BrokenRenderer {
        fn render(&mut self, _scene: &Scene<'_>) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn run(input: &mut ScriptedInput) -> (CountingClock, RecordingRenderer) {
        let game = Game::new_with_rng(
            GameConfig::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        let mut clock = CountingClock::default();
        let mut renderer = RecordingRenderer::default();
        App::new(game)
            .run(&mut clock, input, &mut renderer)
            .expect("game loop should succeed");
        (clock, renderer)
    }

    fn heads(renderer: &RecordingRenderer) -> Vec<Cell> {
        renderer.0.iter().map(|f| f.body[0]).collect()
    }

    #[test]
    fn quit_before_first_tick() {
        let (clock, renderer) = run(&mut ScriptedInput::new([vec![Command::Quit]]));
        assert_eq!(clock.0, 1);
        assert_eq!(renderer.0.len(), 1);
        let first = &renderer.0[0];
        assert_eq!(first.body, vec![Cell::new(320, 240)]);
        assert_eq!(first.vacated, None);
        assert!(first.clear);
    }

    #[test]
    fn moves_once_per_tick() {
        let (clock, renderer) = run(&mut ScriptedInput::new([vec![], vec![]]));
        assert_eq!(clock.0, 3);
        assert_eq!(
            heads(&renderer),
            vec![
                Cell::new(320, 240),
                Cell::new(340, 240),
                Cell::new(360, 240)
            ]
        );
        assert!(renderer.0[1..].iter().all(|f| !f.clear));
    }

    #[test]
    fn turn() {
        let (_, renderer) = run(&mut ScriptedInput::new([vec![Command::Up], vec![]]));
        assert_eq!(
            heads(&renderer),
            vec![
                Cell::new(320, 240),
                Cell::new(320, 220),
                Cell::new(320, 200)
            ]
        );
    }

    #[test]
    fn reversal_is_ignored() {
        let (_, renderer) = run(&mut ScriptedInput::new([vec![Command::Left]]));
        assert_eq!(
            heads(&renderer),
            vec![Cell::new(320, 240), Cell::new(340, 240)]
        );
    }

    #[test]
    fn quit_mid_batch() {
        let (_, renderer) = run(&mut ScriptedInput::new([
            vec![],
            vec![Command::Down, Command::Quit, Command::Up],
        ]));
        assert_eq!(
            heads(&renderer),
            vec![Cell::new(320, 240), Cell::new(340, 240)]
        );
    }

    #[test]
    fn render_errors_propagate() {
        let game = Game::new_with_rng(
            GameConfig::default(),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        let mut input = ScriptedInput::new([vec![]]);
        let r = App::new(game).run(&mut CountingClock::default(), &mut input, &mut BrokenRenderer);
        assert!(r.is_err_and(|e| e.kind() == io::ErrorKind::BrokenPipe));
    }
}
