//! Dataset sources beyond the local filesystem.
//!
//! Remote datasets must already be in the JSON rendition described in
//! `crates/sc2_dicts/data/README.md`; the python-sc2 modules themselves are
//! not parsed.

use sc2_dicts_codegen::{CodegenError, DatasetSource, FileSource};
use std::time::Duration;

/// Dataset served over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        HttpSource {
            url: url.into(),
            timeout,
        }
    }
}

impl DatasetSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> sc2_dicts_codegen::Result<String> {
        let unavailable = |reason: String| CodegenError::DatasetUnavailable {
            origin: self.describe(),
            reason,
        };

        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        tracing::debug!(url = %self.url, timeout = ?self.timeout, "fetching dataset");

        match agent.get(&self.url).call() {
            Ok(resp) => resp.into_string().map_err(|e| unavailable(e.to_string())),
            Err(ureq::Error::Status(code, _)) => {
                Err(unavailable(format!("server returned {}", code)))
            }
            Err(e) => Err(unavailable(e.to_string())),
        }
    }
}

fn is_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Pick a source for a dataset location: URLs go over HTTP, anything else
/// is a path.
pub fn open_source(location: &str, timeout: Duration) -> Box<dyn DatasetSource> {
    if is_url(location) {
        Box::new(HttpSource::new(location, timeout))
    } else {
        Box::new(FileSource::new(location))
    }
}
