use super::options::{inline_array, status_block, EDITOR_OPTIONS};
use crate::core::{LineEdit, Patch};

pub const NAME: &str = "table";
pub const PATH: &str = "src/components/tracker/TrackerTable.tsx";
pub const CONFIRMATION: &str = "table fixed";

const DEFAULT_EDITOR_OPTIONS_LINE: usize = 39;
const DEFAULT_STATUS_OPTIONS_START: usize = 41;

/// The status block is written over a fixed range, not located by terminator:
/// whatever sat in lines 41..52 is overwritten regardless of the old block's length.
pub fn patch() -> Patch {
    Patch {
        name: NAME.to_string(),
        path: PATH.to_string(),
        edits: vec![
            LineEdit::overwrite_line(
                DEFAULT_EDITOR_OPTIONS_LINE,
                inline_array("DEFAULT_EDITOR_OPTIONS", &EDITOR_OPTIONS),
            ),
            LineEdit::overwrite_range(
                DEFAULT_STATUS_OPTIONS_START,
                status_block("DEFAULT_STATUS_OPTIONS"),
            ),
        ],
        confirmation: CONFIRMATION.to_string(),
    }
}
