/// Page hooks the backdrop attaches to.
///
/// Both canvases are required; the container is optional and only receives
/// the parallax transform.
pub const NETWORK_CANVAS_ID: &str = "neural-layer";
pub const DUST_CANVAS_ID: &str = "quantum-dust";
pub const CONTAINER_SELECTOR: &str = ".container-os";

// Console verbosity for the wasm build
pub const LOG_LEVEL: log::Level = log::Level::Info;
