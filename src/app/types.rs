use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum FileType {
    Image,
    Video,
    Pdf,
    Other,
}

impl From<String> for FileType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "image" => FileType::Image,
            "video" => FileType::Video,
            "pdf" => FileType::Pdf,
            _ => FileType::Other,
        }
    }
}

impl FileType {
    pub fn as_str(self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Video => "video",
            FileType::Pdf => "pdf",
            FileType::Other => "other",
        }
    }
}

/// One server-described file. Instances are transient copies fetched per
/// query; the client never owns their lifecycle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(rename = "type")]
    pub file_type: FileType,
}

pub const TAB_LABELS: [&str; 4] = ["All", "Images", "Videos", "PDFs"];

/// Fixed tab-to-type table: 0 is the unfiltered "All" tab.
pub fn type_for_tab(tab: usize) -> Option<FileType> {
    match tab {
        1 => Some(FileType::Image),
        2 => Some(FileType::Video),
        3 => Some(FileType::Pdf),
        _ => None,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
    Warning,
}

impl Severity {
    pub fn as_class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
            Severity::Warning => "warning",
        }
    }
}

/// Single-slot outcome notification. A new feedback replaces any unshown one.
#[derive(Clone, Debug, PartialEq)]
pub struct Feedback {
    pub message: String,
    pub severity: Severity,
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Success }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Error }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::Info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_table_matches_the_fixed_mapping() {
        assert_eq!(type_for_tab(0), None);
        assert_eq!(type_for_tab(1), Some(FileType::Image));
        assert_eq!(type_for_tab(2), Some(FileType::Video));
        assert_eq!(type_for_tab(3), Some(FileType::Pdf));
    }

    #[test]
    fn file_record_deserializes_the_wire_shape() {
        let record: FileRecord = serde_json::from_str(
            r#"{"id":"1","filename":"a.png","tags":["x"],"views":3,"type":"image"}"#,
        )
        .unwrap();
        assert_eq!(record.id, "1");
        assert_eq!(record.filename, "a.png");
        assert_eq!(record.tags, vec!["x".to_string()]);
        assert_eq!(record.views, 3);
        assert_eq!(record.file_type, FileType::Image);
    }

    #[test]
    fn missing_views_and_tags_default() {
        let record: FileRecord =
            serde_json::from_str(r#"{"id":"2","filename":"b.mp4","type":"video"}"#).unwrap();
        assert_eq!(record.views, 0);
        assert!(record.tags.is_empty());
    }

    #[test]
    fn unknown_type_falls_back_to_other() {
        let record: FileRecord =
            serde_json::from_str(r#"{"id":"3","filename":"c.zip","type":"archive"}"#).unwrap();
        assert_eq!(record.file_type, FileType::Other);
    }

    #[test]
    fn duplicate_tags_are_kept_in_order() {
        let record: FileRecord = serde_json::from_str(
            r#"{"id":"4","filename":"d.pdf","tags":["x","y","x"],"type":"pdf"}"#,
        )
        .unwrap();
        assert_eq!(record.tags, vec!["x", "y", "x"]);
    }

    #[test]
    fn severity_classes() {
        assert_eq!(Severity::Success.as_class(), "success");
        assert_eq!(Severity::Error.as_class(), "error");
        assert_eq!(Severity::Info.as_class(), "info");
        assert_eq!(Severity::Warning.as_class(), "warning");
    }

    #[test]
    fn feedback_constructors_set_severity() {
        assert_eq!(Feedback::success("ok").severity, Severity::Success);
        assert_eq!(Feedback::error("no").severity, Severity::Error);
        assert_eq!(Feedback::info("fyi").severity, Severity::Info);
    }
}
