//! Rule tables and the accumulator every assessor scores into.

use wardwatch_core::{
    clamp_score, Confidence, DiagnosisResult, Mode, Patient, RiskLevel, RiskResult, Trigger,
};

/// Outcome of testing one rule against a patient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    Miss,
    Hit,
    /// Fired on a measurement. The value is kept on the trigger and
    /// substituted for `{}` in the factor text.
    Observed(f64),
}

impl From<bool> for Check {
    fn from(fired: bool) -> Self {
        if fired { Check::Hit } else { Check::Miss }
    }
}

impl Check {
    /// Fires with the value when one is present and satisfies `test`.
    pub fn value(value: Option<f64>, test: impl Fn(f64) -> bool) -> Self {
        match value {
            Some(v) if test(v) => Check::Observed(v),
            _ => Check::Miss,
        }
    }

    pub fn fired(&self) -> bool {
        !matches!(self, Check::Miss)
    }
}

/// A weighted condition with the factor it reports when it fires.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Stable identifier, reported on the trigger.
    pub code: &'static str,
    pub points: f64,
    /// Factor text; a `{}` is replaced by the observed value.
    pub text: &'static str,
    pub check: fn(&Patient) -> Check,
}

/// One entry in an assessor's rule table.
#[derive(Clone, Copy)]
pub enum Step {
    Rule(Rule),
    /// Mutually exclusive tiers, most severe first. Only the first tier
    /// that fires contributes.
    FirstOf(&'static [Rule]),
}

/// Running score and the ordered factors that produced it.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    score: f64,
    factors: Vec<String>,
    triggers: Vec<Trigger>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate a rule table in order.
    pub fn apply(&mut self, steps: &[Step], patient: &Patient) -> &mut Self {
        for step in steps {
            match step {
                Step::Rule(rule) => {
                    self.try_rule(rule, patient);
                }
                Step::FirstOf(tiers) => {
                    for rule in tiers.iter() {
                        if self.try_rule(rule, patient) {
                            break;
                        }
                    }
                }
            }
        }
        self
    }

    fn try_rule(&mut self, rule: &Rule, patient: &Patient) -> bool {
        match (rule.check)(patient) {
            Check::Miss => false,
            Check::Hit => {
                self.add(rule.points, rule.code, rule.text);
                true
            }
            Check::Observed(v) => {
                self.add_observed(rule.points, rule.code, v, render(rule.text, v));
                true
            }
        }
    }

    pub fn add(&mut self, points: f64, code: &str, text: impl Into<String>) {
        self.push(points, code, None, text.into());
    }

    pub fn add_observed(&mut self, points: f64, code: &str, value: f64, text: impl Into<String>) {
        self.push(points, code, Some(value), text.into());
    }

    /// Record a factor that carries no points.
    pub fn note(&mut self, code: &str, value: Option<f64>, text: impl Into<String>) {
        self.push(0.0, code, value, text.into());
    }

    fn push(&mut self, points: f64, code: &str, value: Option<f64>, text: String) {
        self.score += points;
        self.factors.push(text);
        self.triggers.push(Trigger {
            code: code.to_string(),
            value,
        });
    }

    /// Replace the accumulated score, for assessors whose score is a band
    /// lookup rather than a sum.
    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    /// Raw, unclamped accumulated score.
    pub fn raw(&self) -> f64 {
        self.score
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    pub fn has(&self, code: &str) -> bool {
        self.triggers.iter().any(|t| t.code == code)
    }

    /// Finish as a risk result: clamp, then band.
    pub fn into_risk(self, mode: Mode, guideline: &str) -> RiskResult {
        let score = self.score;
        self.into_normalized_risk(mode, guideline, score)
    }

    /// Finish a point-sum instrument: the raw sum is divided by `max_points`
    /// before clamping.
    pub fn into_points_risk(self, mode: Mode, guideline: &str, max_points: f64) -> RiskResult {
        let score = self.score / max_points;
        self.into_normalized_risk(mode, guideline, score)
    }

    fn into_normalized_risk(self, mode: Mode, guideline: &str, score: f64) -> RiskResult {
        let score = clamp_score(score);
        RiskResult {
            score,
            level: RiskLevel::from_score(score),
            factors: self.factors,
            triggers: self.triggers,
            ..RiskResult::empty(mode, guideline)
        }
    }

    pub fn into_diagnosis(
        self,
        condition: &str,
        guideline: &str,
        confidence: Confidence,
    ) -> DiagnosisResult {
        let score = clamp_score(self.score);
        DiagnosisResult {
            condition: condition.to_string(),
            guideline: guideline.to_string(),
            score,
            confidence,
            level: RiskLevel::from_score(score),
            factors: self.factors,
            triggers: self.triggers,
            clinical_level: None,
            wells_score: None,
            curb65_score: None,
            criteria_met: None,
        }
    }
}

fn render(text: &str, value: f64) -> String {
    text.replacen("{}", &value.to_string(), 1)
}
