use serde::{Deserialize, Serialize};

/// Body of `/sanic/file/read_file` and `/sanic/file/read_file_column`.
///
/// `file_qa_str` is `<object key>|<display name>`; the backend only reads the
/// part before the first `|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileQaRequest {
    pub file_qa_str: String,
}

impl FileQaRequest {
    /// The object key portion of `file_qa_str`.
    #[must_use]
    pub fn object_key(&self) -> &str {
        self.file_qa_str
            .split('|')
            .next()
            .unwrap_or(&self.file_qa_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_strips_display_name() {
        let req = FileQaRequest {
            file_qa_str: "uploads/a1b2.xlsx|sales.xlsx".into(),
        };
        assert_eq!(req.object_key(), "uploads/a1b2.xlsx");
    }

    #[test]
    fn object_key_without_separator_is_whole_string() {
        let req = FileQaRequest {
            file_qa_str: "uploads/a1b2.xlsx".into(),
        };
        assert_eq!(req.object_key(), "uploads/a1b2.xlsx");
    }
}
