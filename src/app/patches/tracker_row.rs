use super::options::{inline_array, status_block, BLOCK_TERMINATOR, EDITOR_OPTIONS};
use crate::core::{BlockStart, LineEdit, Patch};

pub const NAME: &str = "row";
pub const PATH: &str = "src/components/tracker/TrackerRow.tsx";
pub const CONFIRMATION: &str = "row fixed";

const EDITOR_OPTIONS_LINE: usize = 18;
const STATUS_OPTIONS_MARKER: &str = "const STATUS_OPTIONS";

pub fn patch() -> Patch {
    Patch {
        name: NAME.to_string(),
        path: PATH.to_string(),
        edits: vec![
            LineEdit::overwrite_line(EDITOR_OPTIONS_LINE, inline_array("EDITOR_OPTIONS", &EDITOR_OPTIONS)),
            LineEdit::replace_block(
                BlockStart::Marker(STATUS_OPTIONS_MARKER.to_string()),
                BLOCK_TERMINATOR,
                status_block("STATUS_OPTIONS"),
            ),
        ],
        confirmation: CONFIRMATION.to_string(),
    }
}
