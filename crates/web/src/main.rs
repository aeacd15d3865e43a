// =============================================================================
// Scenario Web - WASM Entry Point
// =============================================================================
// This is the main entry point for the WASM binary.
// Trunk compiles this and injects it into index.html.
// =============================================================================

fn main() {
    scenario_web::mount();
}
