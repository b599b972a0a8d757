use blockfield_common::Seed;
use blockfield_input::Action;
use blockfield_kernel::{World, WorldConfig};
use rand::Rng;

use crate::editor::{EditError, Editor};

/// Where fresh seeds come from when the world is regenerated.
pub trait SeedSource {
    fn next_seed(&mut self) -> Seed;
}

/// Non-deterministic seeds in `0..1_000_000`.
#[derive(Debug, Default)]
pub struct RandomSeeds;

impl SeedSource for RandomSeeds {
    fn next_seed(&mut self) -> Seed {
        rand::thread_rng().gen_range(0..1_000_000)
    }
}

/// Always the same seed. Useful for reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedSeed(pub Seed);

impl SeedSource for FixedSeed {
    fn next_seed(&mut self) -> Seed {
        self.0
    }
}

/// Single controller for one live world and its editor state.
///
/// Actions are applied strictly in order; each one is fully applied before
/// the next is observed.
pub struct Session<S: SeedSource = RandomSeeds> {
    world: World,
    editor: Editor,
    seeds: S,
}

impl<S: SeedSource> Session<S> {
    /// Generate the first world from a seed drawn from `seeds`.
    pub fn new(config: &WorldConfig, mut seeds: S) -> Self {
        let world = World::generate(config, seeds.next_seed());
        Self::with_world(world, seeds)
    }

    /// Wrap an existing world.
    pub fn with_world(world: World, seeds: S) -> Self {
        Self {
            world,
            editor: Editor::new(),
            seeds,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Filled-cell count of the live world.
    pub fn block_count(&self) -> usize {
        self.world.count_filled()
    }

    /// Apply one action.
    pub fn apply(&mut self, action: Action) -> Result<(), EditError> {
        tracing::trace!(?action, "apply");
        match action {
            Action::Click { x, y } => {
                self.editor.click(&mut self.world, x, y);
            }
            Action::Erase { x, y } => {
                self.editor.erase(&mut self.world, x, y);
            }
            Action::ToggleMode => {
                self.editor.toggle_mode();
            }
            Action::SelectSlot(slot) => self.editor.select_slot(slot)?,
            Action::Select(kind) => self.editor.select(kind)?,
            Action::Regenerate(seed) => {
                let seed = seed.unwrap_or_else(|| self.seeds.next_seed());
                self.world.regenerate(seed);
            }
            Action::ClearNonGrass => self.world.clear_non_grass(),
            Action::Noop => {}
        }
        Ok(())
    }

    /// Apply actions in order, stopping at the first error.
    pub fn apply_all(
        &mut self,
        actions: impl IntoIterator<Item = Action>,
    ) -> Result<(), EditError> {
        actions.into_iter().try_for_each(|action| self.apply(action))
    }

    pub fn into_world(self) -> World {
        self.world
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::EditMode;
    use blockfield_common::BlockKind;

    /// Hands out seeds from a list, then repeats the last one.
    struct SeedList(Vec<Seed>);

    impl SeedSource for SeedList {
        fn next_seed(&mut self) -> Seed {
            if self.0.len() > 1 {
                self.0.remove(0)
            } else {
                self.0[0]
            }
        }
    }

    fn session(seed: Seed) -> Session<FixedSeed> {
        Session::new(&WorldConfig::default(), FixedSeed(seed))
    }

    #[test]
    fn initial_world_uses_seed_source() {
        let s = session(42);
        assert_eq!(s.world(), &World::with_seed(42));
        assert_eq!(s.block_count(), World::with_seed(42).count_filled());
    }

    #[test]
    fn regenerate_draws_fresh_seed() {
        let mut s = Session::new(&WorldConfig::default(), SeedList(vec![1, 2, 3]));
        assert_eq!(s.world().seed(), 1);
        s.apply(Action::Regenerate(None)).unwrap();
        assert_eq!(s.world().seed(), 2);
        s.apply(Action::Regenerate(Some(77))).unwrap();
        assert_eq!(s.world(), &World::with_seed(77));
    }

    #[test]
    fn click_then_count() {
        let mut s = session(8);
        s.apply(Action::Erase { x: 0, y: 0 }).unwrap();
        let base = s.block_count();
        s.apply_all([
            Action::SelectSlot(5),
            Action::Click { x: 0, y: 0 },
        ])
        .unwrap();
        assert_eq!(s.world().get(0, 0), Some(Some(BlockKind::Water)));
        assert_eq!(s.block_count(), base + 1);
    }

    #[test]
    fn keyboard_flow() {
        let mut s = session(8);
        s.apply(Action::from_key("3")).unwrap();
        assert_eq!(s.editor().selected(), BlockKind::Stone);
        s.apply(Action::from_key(" ")).unwrap();
        assert_eq!(s.editor().mode(), EditMode::Erase);

        let bottom = s.world().height() as i64 - 1;
        s.apply(Action::Click { x: 2, y: bottom }).unwrap();
        assert_eq!(s.world().get(2, bottom), Some(None));
    }

    #[test]
    fn out_of_bounds_actions_change_nothing() {
        let mut s = session(8);
        let before = s.world().clone();
        s.apply_all([
            Action::Click { x: -1, y: 0 },
            Action::Erase { x: 45, y: 0 },
            Action::Click { x: 0, y: 27 },
        ])
        .unwrap();
        assert_eq!(s.world(), &before);
    }

    #[test]
    fn clear_leaves_one_grass_per_column() {
        let mut s = session(8);
        s.apply(Action::ClearNonGrass).unwrap();
        assert_eq!(s.block_count(), 45);
        s.apply(Action::ClearNonGrass).unwrap();
        assert_eq!(s.block_count(), 45);
    }

    #[test]
    fn selecting_cloud_is_an_error() {
        let mut s = session(8);
        assert_eq!(
            s.apply(Action::Select(BlockKind::Cloud)),
            Err(EditError::NotPlaceable(BlockKind::Cloud))
        );
    }

    #[test]
    fn apply_all_stops_at_first_error() {
        let mut s = session(8);
        s.apply(Action::Erase { x: 1, y: 1 }).unwrap();
        let result = s.apply_all([
            Action::SelectSlot(9),
            Action::Click { x: 1, y: 1 },
        ]);
        assert_eq!(result, Err(EditError::NoSuchSlot(9)));
        assert_eq!(s.world().get(1, 1), Some(None));
    }

    #[test]
    fn random_seeds_stay_in_range() {
        let mut seeds = RandomSeeds;
        for _ in 0..100 {
            assert!((0..1_000_000).contains(&seeds.next_seed()));
        }
    }
}
