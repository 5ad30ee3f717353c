/// Interaction and rendering tuning constants.
///
/// These express intended behavior (radii, frame budgets, observer margins)
/// and keep magic numbers out of the wiring code.

// Particle field
pub const PARTICLE_COUNT: usize = 30;
pub const REPULSION_RADIUS: f32 = 120.0;
pub const REPULSION_STRENGTH: f32 = 2.0;
pub const RETURN_RATE: f32 = 0.01; // fraction of the offset to base closed per tick
pub const DRIFT_SPEED_MAX: f32 = 0.15; // per-axis, either sign
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_SPAN: f32 = 2.0;
pub const PARTICLE_HUE_MIN: f32 = 240.0;
pub const PARTICLE_HUE_SPAN: f32 = 60.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_SPAN: f32 = 0.4;

// Connective lines
pub const LINK_DISTANCE: f32 = 100.0;
pub const LINK_LOOKAHEAD: usize = 4; // neighbours tested per particle, by index
pub const LINK_MAX_OPACITY: f32 = 0.12;
pub const LINK_WIDTH: f64 = 0.5;

// Pointer glow
pub const GLOW_RADIUS: f64 = 150.0;
pub const GLOW_CENTER_ALPHA: f32 = 0.08;

// Frame budget
pub const TARGET_FPS: f64 = 30.0;
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / TARGET_FPS;
pub const POINTER_INTERVAL_MS: f64 = 16.0;

// Canvas backing store
pub const RESIZE_DEBOUNCE_MS: i32 = 200;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 1.5;
pub const CANVAS_VISIBLE_THRESHOLD: f64 = 0.1;

// Sound
pub const MUTE_STORAGE_KEY: &str = "portfolioSoundMuted";
pub const DEFAULT_VOLUME: f32 = 0.3;
pub const CUE_GAIN_SCALE: f32 = 0.3; // peak gain = volume * scale
pub const CUE_GAIN_FLOOR: f32 = 0.01; // exponential ramps cannot reach zero
pub const SWEEP_END_RATIO: f32 = 0.5;

// Observers
pub const REVEAL_SELECTOR: &str = ".reveal, .reveal-left, .reveal-right, .reveal-scale";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_ACTIVE_CLASS: &str = "active";
pub const SECTION_ROOT_MARGIN: &str = "-45% 0px -45% 0px"; // middle 10% of the viewport
pub const SECTION_THRESHOLD: f64 = 0.0;

// Default page layout
pub const DEFAULT_SECTIONS: [&str; 10] = [
    "hero",
    "about",
    "services",
    "why-me",
    "portfolio",
    "casestudy",
    "how-it-works",
    "testimonials",
    "cta",
    "contact",
];
pub const DEFAULT_CANVAS_ID: &str = "particle-canvas";
pub const DEFAULT_HELP_OVERLAY_ID: &str = "shortcuts-overlay";
pub const DEFAULT_MUTE_BUTTON_ID: &str = "mute-toggle";
pub const HIDDEN_CLASS: &str = "hidden";
pub const MUTED_CLASS: &str = "muted";
