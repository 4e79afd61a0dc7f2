use serde::{Deserialize, Serialize};

/// Best match found inside one candidate sentence.
///
/// `distance` is 0 whenever the query occurs (case-insensitively) in
/// `sentence`; otherwise it is the edit distance of the closest window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// The sentence as uploaded, casing untouched.
    pub sentence: String,
    /// Position of the sentence inside its document.
    pub index: usize,
    /// The query itself for containment matches, else the closest window.
    #[serde(rename = "match")]
    pub matched_text: String,
    pub distance: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub file_id: String,
    pub query: String,
    #[serde(default)]
    pub highlight: bool,
}

/// Wire shape of one search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(flatten)]
    pub result: MatchResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted: Option<String>,
}
