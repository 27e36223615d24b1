use super::{CmdMessage, CmdResult};
use crate::store::backend::StorageBackend;
use crate::store::{ClinicStore, PersistReport};

/// Reloads every data file. Problems come back as warnings; whatever could be
/// read becomes the in-memory state.
pub fn load<B: StorageBackend>(store: &mut ClinicStore<B>) -> CmdResult {
    let report = store.load();
    let mut result = CmdResult::default();
    for diagnostic in report.diagnostics {
        result.add_message(CmdMessage::warning(diagnostic));
    }
    result
}

pub fn save<B: StorageBackend>(store: &ClinicStore<B>) -> CmdResult {
    let report = store.save();
    save_messages(report)
}

fn save_messages(report: PersistReport) -> CmdResult {
    let mut result = CmdResult::default();
    if report.files_failed == 0 {
        result.add_message(CmdMessage::success("Data saved successfully."));
        return result;
    }

    for diagnostic in report.diagnostics {
        result.add_message(CmdMessage::error(diagnostic));
    }
    result.add_message(CmdMessage::warning(format!(
        "Saved {} of {} data files.",
        report.files_ok,
        report.files_ok + report.files_failed
    )));
    result
}
