//! Tabular trajectory writer
//!
//! One row per (snapshot, body):
//! `Snapshot, Body, x, y, z, vx, vy, vz`

use std::io::Write;

use crate::simulation::states::{Snapshot, BODY_COUNT};

pub const CSV_HEADER: &str = "Snapshot, Body, x, y, z, vx, vy, vz";

/// Write every snapshot of a run. Bodies are labelled `Body 1`..`Body 3`.
pub fn write_csv<W: Write>(mut out: W, snapshots: &[Snapshot]) -> std::io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for s in snapshots {
        for body in 0..BODY_COUNT {
            let [x, y, z] = s.positions[body];
            let [vx, vy, vz] = s.velocities[body];
            writeln!(
                out,
                "{}, Body {}, {x}, {y}, {z}, {vx}, {vy}, {vz}",
                s.index,
                body + 1
            )?;
        }
    }
    out.flush()
}
