// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the range sizing path of the width position manager.
//
// - width_specs.rs : alignment, bounds, tolerance and width monotonicity
//
// USAGE:
// - Certora build: cargo build --features certora -p width-position-manager
// - Verification: certoraSorobanProver width_position_manager.conf
//
// ============================================================================

pub mod width_specs;
