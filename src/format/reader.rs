//! Reads replay scripts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::engine::{NullRenderer, ReplayReport, Replayer, Session};
use crate::types::SocialResult;

/// Open a script file for buffered line reading.
pub fn open_script(path: &Path) -> SocialResult<BufReader<File>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file))
}

/// Replay a script into a fresh session, ignoring searches.
pub fn load_script(path: &Path) -> SocialResult<(Session, ReplayReport)> {
    let mut session = Session::new();
    let report = Replayer::new(&mut NullRenderer).replay_file(&mut session, path)?;
    log::debug!(
        "loaded {}: {} people, {} relations",
        path.display(),
        session.graph().order(),
        session.graph().size()
    );
    Ok((session, report))
}
