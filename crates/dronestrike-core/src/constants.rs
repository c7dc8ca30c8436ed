//! Simulation constants and tuning parameters.

/// Nominal frame rate of the driver loop (Hz).
pub const TICK_RATE: u32 = 60;

/// Milliseconds per tick at the nominal frame rate.
pub const FRAME_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- Field ---

/// Default play-field width (matches the widest canvas the HUD lays out).
pub const DEFAULT_FIELD_WIDTH: f64 = 800.0;

/// Default play-field height.
pub const DEFAULT_FIELD_HEIGHT: f64 = 500.0;

// --- Drones ---

/// Drone bounding box width.
pub const DRONE_WIDTH: f64 = 60.0;

/// Drone bounding box height.
pub const DRONE_HEIGHT: f64 = 40.0;

/// Horizontal entry position of a freshly spawned drone (off the left edge).
pub const DRONE_SPAWN_X: f64 = -50.0;

/// Lowest y of the spawn band.
pub const DRONE_SPAWN_BAND_TOP: f64 = 50.0;

/// Field height not covered by the spawn band (top margin + bottom clearance).
pub const DRONE_SPAWN_BAND_MARGIN: f64 = 150.0;

/// Minimum drone speed (units per tick).
pub const DRONE_SPEED_MIN: f64 = 2.0;

/// Width of the drone speed range: speed is drawn from [MIN, MIN + SPAN).
pub const DRONE_SPEED_SPAN: f64 = 2.0;

/// Rotation phase increment per tick.
pub const DRONE_ROTATION_STEP: f64 = 0.02;

/// Amplitude of the body sway derived from the rotation phase (radians).
pub const DRONE_TILT_AMPLITUDE: f64 = 0.1;

/// Number of cosmetic drone variants.
pub const DRONE_VARIANT_COUNT: u8 = 3;

// --- Projectiles ---

/// Projectile speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 10.0;

/// Projectile lifetime in ticks.
pub const PROJECTILE_LIFETIME: u32 = 100;

/// Drawn projectile radius.
pub const PROJECTILE_RADIUS: f64 = 3.0;

/// Turret distance above the bottom edge of the field.
pub const TURRET_BOTTOM_OFFSET: f64 = 20.0;

// --- Collision ---

/// Projectile-to-drone-center distance below which a kill is scored.
pub const PROXIMITY_KILL_RADIUS: f64 = 30.0;

// --- Explosions ---

/// Particles per explosion.
pub const EXPLOSION_PARTICLE_COUNT: usize = 15;

/// Particle life in ticks.
pub const PARTICLE_LIFE: u32 = 30;

/// Minimum outward particle speed.
pub const PARTICLE_SPEED_MIN: f64 = 2.0;

/// Width of the outward particle speed range.
pub const PARTICLE_SPEED_SPAN: f64 = 3.0;

/// Minimum initial particle size.
pub const PARTICLE_SIZE_MIN: f64 = 3.0;

/// Width of the initial particle size range.
pub const PARTICLE_SIZE_SPAN: f64 = 3.0;

/// Downward velocity added to every particle per tick.
pub const PARTICLE_GRAVITY: f64 = 0.2;

/// Per-tick particle size multiplier.
pub const PARTICLE_SHRINK: f64 = 0.95;

// --- Spawning ---

/// Spawn interval at the start of a session (ms).
pub const SPAWN_INTERVAL_START_MS: u32 = 2000;

/// Spawn interval decrement applied after each spawn (ms).
pub const SPAWN_INTERVAL_STEP_MS: u32 = 10;

/// Spawn interval floor (ms).
pub const SPAWN_INTERVAL_FLOOR_MS: u32 = 800;

// --- Scoring ---

/// Points awarded per destroyed drone.
pub const SCORE_PER_KILL: u32 = 10;
