/// Log capture for tests.
pub mod logging;
/// Listener call recording.
pub mod recorder;

pub use logging::init_logging;
pub use recorder::{Recorded, Recorder};

use crate::{NodeId, Stage, error::Result};

/// Create one node per class name and attach each to the one before it.
/// Returns the handles, root first.
pub fn chain(stage: &mut Stage, classes: &[&str]) -> Result<Vec<NodeId>> {
    let ids: Vec<NodeId> = classes.iter().map(|c| stage.create(*c)).collect();
    for pair in ids.windows(2) {
        stage.attach(pair[0], pair[1])?;
    }
    Ok(ids)
}
