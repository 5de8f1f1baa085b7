/*! Integration tests for apidraft.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - command: Composite inversion order and command replay semantics
 * - navigation: Nearest-ancestor and partial-path resolution
 * - selection: Selection round-trips and highlight behavior
 * - session: The engine's history invariants, end to end
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("apidraft=debug".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod command;
mod helpers;
mod navigation;
mod session;
