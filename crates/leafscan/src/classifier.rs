use leafscan_core::ClassScores;

use crate::preprocess::TileTensor;

/// Opaque failure raised by a classifier implementation.
///
/// The pipeline never inspects the cause; it attaches the failing tile index
/// and aborts the run.
pub type ClassifierError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The injected classification capability.
///
/// Given a normalized fixed-size tile, return a probability distribution over
/// the class catalog. Implementations own the model lifecycle (loading,
/// caching, batching); the pipeline only issues one synchronous call per tile,
/// strictly in tile order.
pub trait TileClassifier {
    fn classify(&self, input: &TileTensor) -> Result<ClassScores, ClassifierError>;
}

impl<F> TileClassifier for F
where
    F: Fn(&TileTensor) -> Result<ClassScores, ClassifierError>,
{
    fn classify(&self, input: &TileTensor) -> Result<ClassScores, ClassifierError> {
        self(input)
    }
}
