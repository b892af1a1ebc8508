use ignore::{WalkBuilder, WalkState};
use std::path::Path;

use super::visit::{Flow, Visited};
use crate::config::Config;
use crate::error::WalkError;

/// Walk `root` on a pool of `config.workers` threads (0 picks a default).
/// `visit` may run on any of them; returning [`Flow::Quit`] stops all workers.
pub(super) fn walk<F>(root: &Path, config: &Config, visit: F)
where
    F: Fn(Result<Visited, WalkError>) -> Flow + Sync,
{
    let mut builder = WalkBuilder::new(root);
    builder
        .standard_filters(false)
        .follow_links(config.follow)
        .threads(config.workers);

    let visit = &visit;
    builder.build_parallel().run(|| {
        Box::new(move |result: Result<ignore::DirEntry, ignore::Error>| {
            let entry = match result {
                Ok(entry) if entry.depth() == 0 => return WalkState::Continue,
                Ok(entry) => Ok(Visited::new(
                    entry.file_type(),
                    entry.into_path(),
                    config.follow,
                )),
                Err(err) => Err(WalkError::parallel(root, err)),
            };
            match visit(entry) {
                Flow::Continue => WalkState::Continue,
                Flow::Quit => WalkState::Quit,
            }
        })
    });
}
