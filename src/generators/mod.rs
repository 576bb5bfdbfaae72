use rand::{Rng, SeedableRng, rngs::StdRng};

mod backtrack;
mod expand;

pub use backtrack::{GenerationCell, recursive_backtrack};
pub use expand::expand_layout;

use crate::error::{MazeError, Result};
use crate::maze::Layout;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `rows` x `cols` logical cells and expands it into its
/// `(2 * rows + 1) x (2 * cols + 1)` layout.
///
/// The same generator state always yields the same layout.
pub fn generate<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Layout> {
    if rows == 0 || cols == 0 {
        return Err(MazeError::InvalidDimensions { rows, cols });
    }

    let (cells, _) = recursive_backtrack(rows, cols, rng);
    let layout = expand_layout(&cells);
    tracing::debug!(
        "[generate] expanded {}x{} maze into a {}x{} layout",
        rows,
        cols,
        layout.height(),
        layout.width()
    );
    Ok(layout)
}

/// Generates a maze with a fresh generator, seeded from `seed` or from the OS.
pub fn generate_maze(rows: usize, cols: usize, seed: Option<u64>) -> Result<Layout> {
    generate(rows, cols, &mut get_rng(seed))
}
