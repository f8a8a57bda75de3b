use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A stored resume: a server-assigned integer id plus whatever fields the
/// client sent, carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// The on-disk document: the resume collection and the id counter.
/// Missing keys are repaired with defaults when an older or hand-edited
/// file is loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistedStore {
    #[serde(default)]
    pub resumes: Vec<Resume>,
    #[serde(default = "default_next_id")]
    pub next_id: u64,
}

fn default_next_id() -> u64 {
    1
}

impl Default for PersistedStore {
    fn default() -> Self {
        Self {
            resumes: Vec::new(),
            next_id: 1,
        }
    }
}
