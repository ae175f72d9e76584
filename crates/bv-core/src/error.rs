use thiserror::Error;

/// Errors originating from the transform core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Zero component in a reshape target ratio.
    #[error("Ratio invalide : {width}×{height}")]
    InvalidRatio {
        /// Requested width component.
        width: u32,
        /// Requested height component.
        height: u32,
    },

    /// Sample whose truncated value falls outside the digraph index range.
    #[error("Échantillon hors plage [0,255] à l'index {index} : {value}")]
    SampleOutOfRange {
        /// Position of the offending sample in the input sequence.
        index: usize,
        /// The raw sample value.
        value: f64,
    },
}
