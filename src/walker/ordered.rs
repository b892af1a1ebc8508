use std::cmp::Ordering;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use super::visit::{Flow, Visited};
use crate::config::{Config, SortMode};
use crate::error::WalkError;

/// Walk `root` on the calling thread in the order `config.sort` asks for.
pub(super) fn walk<F>(root: &Path, config: &Config, mut visit: F)
where
    F: FnMut(Result<Visited, WalkError>) -> Flow,
{
    let walker = WalkDir::new(root).follow_links(config.follow).min_depth(1);
    let walker = match config.sort {
        SortMode::Name => walker.sort_by_file_name(),
        SortMode::DirsFirst => walker.sort_by(dirs_first),
        SortMode::None => walker,
    };

    for result in walker {
        let entry = result
            .map(|e| Visited::new(Some(e.file_type()), e.into_path(), config.follow))
            .map_err(|e| WalkError::ordered(root, e));
        if visit(entry) == Flow::Quit {
            break;
        }
    }
}

fn dirs_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    b.file_type()
        .is_dir()
        .cmp(&a.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
