use super::options::{inline_array, status_block, BLOCK_TERMINATOR};
use crate::core::{BlockStart, LineEdit, Patch};

pub const NAME: &str = "page";
pub const PATH: &str = "src/pages/TrackerPage.tsx";
pub const CONFIRMATION: &str = "page fixed";

const STATUS_BOARD_LINE: usize = 24;
const IMAGE_STATUS_BOARD_LINE: usize = 25;
const STATUS_OPTIONS_START: usize = 26;

/// Splits the board into writing and image columns and rewrites the status list.
pub fn patch() -> Patch {
    Patch {
        name: NAME.to_string(),
        path: PATH.to_string(),
        edits: vec![
            LineEdit::overwrite_line(
                STATUS_BOARD_LINE,
                inline_array("STATUS_BOARD", &["리뷰", "추천", "본문 작성", "본문 완료"]),
            ),
            LineEdit::overwrite_line(
                IMAGE_STATUS_BOARD_LINE,
                inline_array("IMAGE_STATUS_BOARD", &["이미지 생성", "이미지 완료", "업로드 예정"]),
            ),
            LineEdit::replace_block(
                BlockStart::Index(STATUS_OPTIONS_START),
                BLOCK_TERMINATOR,
                status_block("STATUS_OPTIONS"),
            ),
        ],
        confirmation: CONFIRMATION.to_string(),
    }
}
