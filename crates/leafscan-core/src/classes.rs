use serde::{Deserialize, Serialize};

/// Fixed index of the healthy class in every catalog.
pub const HEALTHY_INDEX: usize = 0;

/// Ordered list of class names the classifier predicts over.
///
/// Index 0 is always the healthy class; every other index is a disease.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCatalog {
    names: Vec<String>,
}

/// Errors produced while interpreting a raw classifier output.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ScoresError {
    #[error("score vector length {got} does not match catalog size {expected}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("score at index {index} is not finite")]
    NonFinite { index: usize },
    #[error("empty score vector")]
    Empty,
}

impl ClassCatalog {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// The catalog the sugarcane model was trained on.
    pub fn sugarcane() -> Self {
        Self::new(vec![
            "Healthy".to_string(),
            "Bacterial Blight".to_string(),
            "Red Rot".to_string(),
        ])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }
}

/// Probability distribution over a [`ClassCatalog`], as returned by the
/// injected classifier for one tile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassScores(pub Vec<f32>);

impl ClassScores {
    /// Reject malformed classifier output before it reaches the pipeline.
    ///
    /// Wrong length and non-finite entries are failures per the run contract;
    /// values slightly outside `[0,1]` are tolerated (softmax roundoff).
    pub fn validate(&self, catalog_len: usize) -> Result<(), ScoresError> {
        if self.0.is_empty() {
            return Err(ScoresError::Empty);
        }
        if self.0.len() != catalog_len {
            return Err(ScoresError::LengthMismatch {
                expected: catalog_len,
                got: self.0.len(),
            });
        }
        for (index, s) in self.0.iter().enumerate() {
            if !s.is_finite() {
                return Err(ScoresError::NonFinite { index });
            }
        }
        Ok(())
    }

    /// Index and score of the strongest class.
    ///
    /// Expects a non-empty, validated vector; on ties the lowest index wins.
    pub fn argmax(&self) -> (usize, f32) {
        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (i, &s) in self.0.iter().enumerate() {
            if s > best_score {
                best = i;
                best_score = s;
            }
        }
        (best, best_score)
    }

    /// Collapse the distribution into a [`ClassificationResult`].
    pub fn into_result(self, catalog_len: usize) -> Result<ClassificationResult, ScoresError> {
        self.validate(catalog_len)?;
        let (class_index, confidence) = self.argmax();
        Ok(ClassificationResult {
            class_index,
            confidence: confidence.clamp(0.0, 1.0),
        })
    }
}

/// Collapsed classifier output for one tile.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub class_index: usize,
    /// Confidence in `[0, 1]`.
    pub confidence: f32,
}

impl ClassificationResult {
    #[inline]
    pub fn is_healthy(&self) -> bool {
        self.class_index == HEALTHY_INDEX
    }
}
