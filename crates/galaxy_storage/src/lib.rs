//! Raw binary snapshot writer for galaxies.
//!
//! Layout, all little-endian, no framing and no version marker:
//!
//! ```text
//! GalaxyRecord := count: i32, then `count` StarRecords back to back
//! StarRecord   := position.x .. position.z, velocity.x .. velocity.z,
//!                 mass — seven f64 fields, 56 bytes per star
//! ```
//!
//! Write-only: the matching loader lives with whatever tool consumes
//! the snapshots. The dump streams straight into the sink, so a failed
//! write leaves a truncated record behind — no rollback.

use galaxy_core::{Galaxy, Star};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Size in bytes of one serialized star record (7 × f64).
pub const STAR_RECORD_SIZE: usize = 56;

/// Size in bytes of the leading star-count field.
pub const COUNT_FIELD_SIZE: usize = 4;

/// Failure while dumping a galaxy snapshot.
#[derive(Debug, Error)]
pub enum DumpError {
    /// The sink failed mid-dump. `stars_written` counts complete star
    /// records flushed to the sink before the failure, so callers can
    /// decide whether to retry from scratch or abandon the snapshot.
    #[error("snapshot write failed after {stars_written} of {star_count} star records")]
    Write {
        stars_written: usize,
        star_count: usize,
        #[source]
        source: io::Error,
    },

    /// The snapshot file or its parent directory could not be created.
    #[error("failed to create snapshot file")]
    Create(#[from] io::Error),
}

/// Write one star record: position, velocity, mass, in declared order.
pub fn dump_star<W: Write>(star: &Star, sink: &mut W) -> io::Result<()> {
    for c in star.position {
        sink.write_all(&c.to_le_bytes())?;
    }
    for c in star.velocity {
        sink.write_all(&c.to_le_bytes())?;
    }
    sink.write_all(&star.mass.to_le_bytes())
}

/// Write a galaxy snapshot: the star count, then every star in
/// insertion order with no separators.
pub fn dump_galaxy<W: Write>(galaxy: &Galaxy, sink: &mut W) -> Result<(), DumpError> {
    let star_count = galaxy.len();
    let write_err = |stars_written, source| DumpError::Write {
        stars_written,
        star_count,
        source,
    };

    sink.write_all(&(star_count as i32).to_le_bytes())
        .map_err(|e| write_err(0, e))?;
    for (i, star) in galaxy.stars().iter().enumerate() {
        dump_star(star, sink).map_err(|e| write_err(i, e))?;
    }
    sink.flush().map_err(|e| write_err(star_count, e))
}

/// Dump a galaxy snapshot to disk, creating parent directories as needed.
pub fn dump_to_file(galaxy: &Galaxy, path: &Path) -> Result<(), DumpError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut sink = BufWriter::new(File::create(path)?);
    dump_galaxy(galaxy, &mut sink)
}
