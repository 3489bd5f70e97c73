use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parse `"1=4,2=3"` style answer pairs into raw question/level entries.
pub(crate) fn parse_answers(raw: &str) -> Result<BTreeMap<u32, i64>, String> {
    let mut answers = BTreeMap::new();

    for pair in raw.split(',').map(str::trim).filter(|pair| !pair.is_empty()) {
        let (question, level) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected QUESTION=LEVEL, found '{pair}'"))?;
        let question = question
            .trim()
            .parse::<u32>()
            .map_err(|err| format!("invalid question id '{}' ({err})", question.trim()))?;
        let level = level
            .trim()
            .parse::<i64>()
            .map_err(|err| format!("invalid level '{}' ({err})", level.trim()))?;

        if answers.insert(question, level).is_some() {
            return Err(format!("question {question} answered more than once"));
        }
    }

    Ok(answers)
}

/// Read answers from a JSON file holding either `{"answers": {...}}` or a bare
/// question→level object.
pub(crate) fn parse_answer_file(contents: &str) -> Result<BTreeMap<u32, i64>, serde_json::Error> {
    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Wrapped {
        answers: BTreeMap<u32, i64>,
    }

    match serde_json::from_str::<Wrapped>(contents) {
        Ok(wrapped) => Ok(wrapped.answers),
        Err(_) => serde_json::from_str::<BTreeMap<u32, i64>>(contents),
    }
}

pub(crate) fn load_answer_file(path: &Path) -> Result<BTreeMap<u32, i64>, std::io::Error> {
    let contents = std::fs::read_to_string(path)?;
    parse_answer_file(&contents)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))
}
