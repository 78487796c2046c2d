/// Simulation tuning constants.
///
/// Distances are in CSS pixels, velocities in pixels per frame. Nothing here
/// is scaled by elapsed time: the loop assumes one step per display refresh.

// Device classification
pub const NARROW_BREAKPOINT_PX: u32 = 768; // widths below this are "narrow"

// Field populations per device class
pub const NODE_COUNT_NARROW: usize = 50;
pub const NODE_COUNT_WIDE: usize = 80;
pub const DUST_COUNT_NARROW: usize = 30;
pub const DUST_COUNT_WIDE: usize = 60;

// Node seeding
pub const NODE_SPEED_SPAN: f32 = 0.5; // velocity per axis in [-span/2, span/2)
pub const NODE_RADIUS_MIN: f32 = 1.2;
pub const NODE_RADIUS_SPAN: f32 = 2.0;

// Dust seeding
pub const DUST_SPEED_SPAN: f32 = 0.2;
pub const DUST_RADIUS_MIN: f32 = 0.5;
pub const DUST_RADIUS_SPAN: f32 = 1.4;

// Pointer interaction
pub const INFLUENCE_RADIUS: f32 = 140.0; // pointer pull reaches this far
pub const ATTRACTION_STRENGTH: f32 = 0.25; // fraction of the gap closed at distance 0+

// Proximity graph
pub const CONNECTION_DISTANCE: f32 = 160.0; // nodes closer than this get a link
pub const LINK_ALPHA_SCALE: f32 = 0.18; // dims every link
pub const LINK_WIDTH: f32 = 1.0;

// Parallax
pub const PARALLAX_GAIN: f32 = 20.0; // offset at the viewport edge, in px
pub const PARALLAX_SMOOTHING: f32 = 0.08; // new = old + (target - old) * α
pub const PARALLAX_VERTICAL_DAMPING: f32 = 0.7;

// Palette (r, g, b, a)
pub const NODE_COLOR: [f32; 4] = [0.0, 255.0, 255.0, 0.9]; // cyan
pub const LINK_COLOR: [f32; 3] = [0.0, 255.0, 255.0];
pub const DUST_COLOR: [f32; 4] = [255.0, 255.0, 255.0, 0.65]; // soft white

// Diagnostics
pub const STATS_REPORT_INTERVAL_SEC: f32 = 5.0;
