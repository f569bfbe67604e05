// Binary entry point for tardis_em
// This is a thin wrapper that delegates to the library implementation

use anyhow::Result;

fn main() -> Result<()> {
    // SAFETY: first statement of main; no other thread exists yet.
    unsafe { tardis_em::enable_mps_fallback() };
    tardis_em::shell::run()
}
