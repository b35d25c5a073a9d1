use serde_derive::Deserialize;
use serde_json::Value;

/// One mint log entry.
///
/// https://github.com/minio/mint#mint-log-format
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct MintLog {
    pub name: String,
    #[serde(default)]
    pub function: Option<String>,
    #[serde(default)]
    pub args: Option<Value>,
    pub duration: u64,
    pub status: String,
    #[serde(default)]
    pub alert: Option<Value>,
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl MintLog {
    /// Rewrites a composite "suite:case" name in place: `name` becomes the
    /// trimmed part before the first separator, `function` the trimmed rest.
    pub fn split_name(&mut self) {
        if let Some(position) = self.name.find(':') {
            let case = self.name[position + 1..].trim().to_owned();
            let suite = self.name[..position].trim().to_owned();
            self.name = suite;
            self.function = Some(case);
        }
    }
}
