use crate::commands::{CmdMessage, CmdResult, DoctorReport};
use crate::error::Result;
use crate::photos::PhotoStore;
use crate::store::RecipeStore;
use std::collections::HashSet;

/// Reconciles the photo directory with the collection: files no recipe
/// references are deleted, references to missing files are pruned.
///
/// Loads through `store.load()` directly. An unreadable document must fail
/// the pass; the empty-collection fallback would make every photo on disk
/// look orphaned.
pub fn run<S: RecipeStore>(store: &mut S, photos: &PhotoStore) -> Result<CmdResult> {
    let mut recipes = store.load()?;

    let referenced: HashSet<&String> = recipes.iter().flat_map(|r| r.photos.iter()).collect();
    let orphans: Vec<String> = photos
        .list_files()?
        .into_iter()
        .filter(|file| !referenced.contains(file))
        .collect();
    photos.delete(&orphans);

    let mut pruned_refs = 0;
    for recipe in &mut recipes {
        let before = recipe.photos.len();
        recipe.photos.retain(|path| photos.exists(path));
        pruned_refs += before - recipe.photos.len();
    }
    if pruned_refs > 0 {
        store.save(&recipes)?;
    }

    let report = DoctorReport {
        removed_orphans: orphans.len(),
        pruned_refs,
    };

    let mut result = CmdResult::default();
    if report.removed_orphans == 0 && report.pruned_refs == 0 {
        result.add_message(CmdMessage::success("No inconsistencies found."));
    } else {
        result.add_message(CmdMessage::warning("Inconsistencies found and fixed:"));
        if report.removed_orphans > 0 {
            result.add_message(CmdMessage::info(format!(
                "  - Deleted {} photo file(s) no recipe references.",
                report.removed_orphans
            )));
        }
        if report.pruned_refs > 0 {
            result.add_message(CmdMessage::info(format!(
                "  - Pruned {} photo reference(s) whose file is missing.",
                report.pruned_refs
            )));
        }
    }

    Ok(result.with_report(report))
}
