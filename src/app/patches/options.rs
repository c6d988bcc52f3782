pub const STATUS_OPTIONS: [&str; 9] = [
    "리뷰",
    "추천",
    "보류",
    "본문 작성",
    "본문 완료",
    "이미지 생성",
    "이미지 완료",
    "업로드 예정",
    "중복",
];

pub const EDITOR_OPTIONS: [&str; 3] = ["지민", "아라", "지안"];

pub const BLOCK_TERMINATOR: &str = "];";

/// `const NAME = [` / one quoted entry per line / `];`
pub fn status_block(const_name: &str) -> Vec<String> {
    let mut block = Vec::with_capacity(STATUS_OPTIONS.len() + 2);
    block.push(format!("const {} = [", const_name));
    block.extend(STATUS_OPTIONS.iter().map(|status| format!("  \"{}\",", status)));
    block.push(BLOCK_TERMINATOR.to_string());
    block
}

/// Single-line array declaration, e.g. `const A = ["x", "y"];`.
pub fn inline_array(const_name: &str, values: &[&str]) -> String {
    let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
    format!("const {} = [{}];", const_name, quoted.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_block_shape() {
        let block = status_block("STATUS_OPTIONS");
        assert_eq!(block.len(), 11);
        assert_eq!(block[0], "const STATUS_OPTIONS = [");
        assert_eq!(block[1], "  \"리뷰\",");
        assert_eq!(block[9], "  \"중복\",");
        assert_eq!(block[10], "];");
    }

    #[test]
    fn test_inline_array() {
        assert_eq!(
            inline_array("EDITOR_OPTIONS", &EDITOR_OPTIONS),
            r#"const EDITOR_OPTIONS = ["지민", "아라", "지안"];"#
        );
    }
}
