use crate::{
    algorithm::arena::{MarkerArena, PlacementRecord},
    algorithm::balance::BalanceCalculator,
    algorithm::history::PlacementHistory,
    algorithm::random::WalkRng,
    algorithm::selection::{SelectionParams, direction_between, select_next_cell},
    analysis::RunSummary,
    io::configuration::{
        DEFAULT_BALANCE_WINDOW, DEFAULT_ELEVATION, DEFAULT_FLOW_AMOUNT, DEFAULT_MARKER_COUNT,
        DEFAULT_RANDOMNESS, DEFAULT_SEED, DEFAULT_STEP_SIZE, MAX_FLOW_AMOUNT,
    },
    io::error::{Result, invalid_parameter},
    math::CoordinateTransform,
    spatial::{Footprint, OccupancyGrid, ReferenceImage},
};
use glam::{IVec2, Vec3};

/// Walk parameters supplied by the host for every run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScatterConfig {
    /// World position the walk starts from; must project inside the image
    pub starting_position: Vec3,
    /// Number of steps, and of marker slots
    pub marker_count: usize,
    /// Distance in image cells between a cell and its candidates
    pub step_size: u32,
    /// Weight of directional continuity, in `[0, 0.005]`
    pub flow_amount: f32,
    /// Exclusive upper bound of the non-negative candidate jitter
    pub randomness: f32,
    /// Number of recent markers a new scale is balanced against
    pub balance_window: usize,
    /// Always use the repeating scale ramp
    pub cycle_scale: bool,
    /// Seed the generator is reset to at the start of every run
    pub seed: u64,
    /// Elevation of every produced world position
    pub elevation: f32,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            starting_position: Vec3::new(0.0, DEFAULT_ELEVATION, 0.0),
            marker_count: DEFAULT_MARKER_COUNT,
            step_size: DEFAULT_STEP_SIZE,
            flow_amount: DEFAULT_FLOW_AMOUNT,
            randomness: DEFAULT_RANDOMNESS,
            balance_window: DEFAULT_BALANCE_WINDOW,
            cycle_scale: false,
            seed: DEFAULT_SEED,
            elevation: DEFAULT_ELEVATION,
        }
    }
}

impl ScatterConfig {
    /// Check every parameter against an image of `width` x `height` cells
    ///
    /// Returns the image cell the walk starts from.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParameter` error if:
    /// - `marker_count` or `step_size` is zero, or `step_size` exceeds `i32::MAX`
    /// - `flow_amount` is outside `[0, 0.005]` or not finite
    /// - `randomness` is negative or not finite
    /// - `elevation` is not finite
    /// - `starting_position` projects outside the image
    pub fn validate(&self, width: usize, height: usize) -> Result<IVec2> {
        if self.marker_count == 0 {
            return Err(invalid_parameter(
                "marker_count",
                &self.marker_count,
                &"must be greater than zero",
            ));
        }
        if self.step_size == 0 || i32::try_from(self.step_size).is_err() {
            return Err(invalid_parameter(
                "step_size",
                &self.step_size,
                &format!("must be in 1..={}", i32::MAX),
            ));
        }
        if !(0.0..=MAX_FLOW_AMOUNT).contains(&self.flow_amount) {
            return Err(invalid_parameter(
                "flow_amount",
                &self.flow_amount,
                &format!("must be in [0, {MAX_FLOW_AMOUNT}]"),
            ));
        }
        if !self.randomness.is_finite() || self.randomness < 0.0 {
            return Err(invalid_parameter(
                "randomness",
                &self.randomness,
                &"must be finite and non-negative",
            ));
        }
        if !self.elevation.is_finite() {
            return Err(invalid_parameter(
                "elevation",
                &self.elevation,
                &"must be finite",
            ));
        }

        let transform = CoordinateTransform::new(
            u32::try_from(width).unwrap_or(u32::MAX),
            u32::try_from(height).unwrap_or(u32::MAX),
            self.elevation,
        );
        let start = transform
            .image_cell(self.starting_position)
            .filter(|cell| {
                usize::try_from(cell.x).is_ok_and(|x| x < width)
                    && usize::try_from(cell.y).is_ok_and(|y| y < height)
            })
            .ok_or_else(|| {
                invalid_parameter(
                    "starting_position",
                    &self.starting_position,
                    &format!("must project inside the {width}x{height} image"),
                )
            })?;

        Ok(start)
    }

    fn selection_params(&self) -> SelectionParams {
        SelectionParams {
            step_size: i32::try_from(self.step_size).unwrap_or(i32::MAX),
            flow_amount: self.flow_amount,
            randomness: self.randomness,
        }
    }
}

/// Greedy image-guided walk that places one marker per step
///
/// Owns every piece of per-run state. Storage is sized once per configuration
/// and reset, not reallocated, at the start of each run.
pub struct WalkEngine {
    image: ReferenceImage,
    config: ScatterConfig,
    transform: CoordinateTransform,
    start_cell: IVec2,
    occupancy: OccupancyGrid,
    history: PlacementHistory,
    arena: MarkerArena,
    rng: WalkRng,
}

impl WalkEngine {
    /// Create an engine for `image` with a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails [`ScatterConfig::validate`].
    pub fn new(image: ReferenceImage, config: ScatterConfig) -> Result<Self> {
        let (width, height) = (image.width(), image.height());
        let start_cell = config.validate(width, height)?;

        Ok(Self {
            transform: Self::transform_for(&image, &config),
            start_cell,
            occupancy: OccupancyGrid::new(width, height),
            history: PlacementHistory::new(config.balance_window),
            arena: MarkerArena::new(config.marker_count),
            rng: WalkRng::new(config.seed),
            image,
            config,
        })
    }

    fn transform_for(image: &ReferenceImage, config: &ScatterConfig) -> CoordinateTransform {
        CoordinateTransform::new(
            u32::try_from(image.width()).unwrap_or(u32::MAX),
            u32::try_from(image.height()).unwrap_or(u32::MAX),
            config.elevation,
        )
    }

    /// Replace the configuration, keeping storage where sizes allow
    ///
    /// Records from the previous run stay in place until the next run.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation; the engine is unchanged.
    pub fn reconfigure(&mut self, config: ScatterConfig) -> Result<()> {
        self.start_cell = config.validate(self.image.width(), self.image.height())?;
        self.transform = Self::transform_for(&self.image, &config);
        self.history.set_capacity(config.balance_window);
        self.arena.resize(config.marker_count);
        self.config = config;
        Ok(())
    }

    /// Current configuration
    pub const fn config(&self) -> &ScatterConfig {
        &self.config
    }

    /// Reference image guiding the walk
    pub const fn image(&self) -> &ReferenceImage {
        &self.image
    }

    /// World/image mapping for this image and elevation
    pub const fn transform(&self) -> &CoordinateTransform {
        &self.transform
    }

    /// Image cell the walk starts from
    pub const fn start_cell(&self) -> IVec2 {
        self.start_cell
    }

    /// Occupancy left by the most recent run
    pub const fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// Accepted indices retained at the end of the most recent run
    pub const fn history(&self) -> &PlacementHistory {
        &self.history
    }

    /// Records of the most recent run, one per step
    pub fn records(&self) -> &[PlacementRecord] {
        self.arena.records()
    }

    /// Statistics for the most recent run
    pub fn summary(&self) -> RunSummary {
        RunSummary::from_records(self.arena.records(), &self.occupancy)
    }

    /// Execute one complete run and return its records
    ///
    /// Reseeds the generator and clears occupancy and history first, so runs
    /// with the same image and configuration produce identical records.
    pub fn run(&mut self) -> &[PlacementRecord] {
        self.rng.reseed(self.config.seed);
        self.occupancy.reset();
        self.history.clear();

        tracing::info!(
            markers = self.config.marker_count,
            step_size = self.config.step_size,
            flow = self.config.flow_amount,
            randomness = self.config.randomness,
            balance_window = self.config.balance_window,
            cycle_scale = self.config.cycle_scale,
            "Starting scatter walk at cell ({}, {})",
            self.start_cell.x,
            self.start_cell.y
        );

        let params = self.config.selection_params();
        let balance = BalanceCalculator::new(self.config.step_size, self.config.cycle_scale);
        let mut current = self.start_cell;
        let mut last_direction = IVec2::ONE;

        for step in 0..self.config.marker_count {
            let color = self.image.get_color(current);
            let next = select_next_cell(
                &self.image,
                current,
                color,
                last_direction,
                &params,
                &mut self.rng,
            );

            last_direction = direction_between(current, next.cell);
            current = next.cell;

            let position = self.transform.image_to_world(current);
            let scale = balance.scale_for(
                step,
                position,
                &self.history,
                &self.arena,
                &mut self.rng,
            );
            let active = self.occupancy.reserve(&Footprint::new(current, scale));

            self.arena.overwrite(PlacementRecord {
                index: step,
                position,
                scale,
                color,
                active,
            });

            if active {
                self.history.push(step);
                tracing::trace!(step, x = current.x, y = current.y, scale, "Placed marker");
            } else {
                tracing::debug!(step, x = current.x, y = current.y, scale, "Rejected overlapping marker");
            }
        }

        tracing::info!("Scatter walk finished: {}", self.summary());

        self.arena.records()
    }
}
