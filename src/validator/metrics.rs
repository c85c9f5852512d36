use crate::observability::labels::Labels;
use crate::verdict::Verdict;
use metrics::counter;

const KIND: &str = "kind";
const RESULT: &str = "result";
const REASON: &str = "reason";

pub struct ValidatorMetrics {
    labels: Labels,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidatorMetrics {
            labels: labels.clone(),
        }
    }

    pub fn record_verdict(&self, verdict: &Verdict) {
        let kind = verdict.kind.as_str();
        let result = if verdict.is_valid() { "valid" } else { "invalid" };
        counter!(
            "identifier.validations",
            self.labels.clone_with_labels(&[(KIND, kind), (RESULT, result)])
        )
        .increment(1);

        if let Some(reason) = verdict.reason {
            counter!(
                "identifier.rejections",
                self.labels
                    .clone_with_labels(&[(KIND, kind), (REASON, reason.as_str())])
            )
            .increment(1);
        }
    }

    pub fn record_unknown_kind(&self) {
        counter!("identifier.unknown_kind", self.labels.clone()).increment(1);
    }
}

impl Default for ValidatorMetrics {
    fn default() -> Self {
        ValidatorMetrics::new(&Labels::empty())
    }
}
