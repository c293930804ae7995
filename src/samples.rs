//! letter sample templates for handwriting capture.
//!
//! Entirely ephemeral UI state; nothing here is persisted or uploaded.

/// Each letter gets this many transcription slots.
pub const SAMPLE_SLOTS: usize = 5;

/// A glyph label paired with five freeform transcription entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    pub letter: String,
    samples: [String; SAMPLE_SLOTS],
}

impl SampleSet {
    pub fn new(letter: impl Into<String>) -> SampleSet {
        SampleSet {
            letter: letter.into(),
            samples: Default::default(),
        }
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    /// Replace one slot; out-of-range slots are ignored.
    pub fn set_sample(&mut self, slot: usize, text: impl Into<String>) {
        match self.samples.get_mut(slot) {
            Some(entry) => *entry = text.into(),
            None => log::warn!("sample slot {} out of range", slot),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleLanguage {
    English,
    Hindi,
}

/// Blank sample sets for the capture screen's letter grid.
pub fn sample_templates(language: SampleLanguage) -> Vec<SampleSet> {
    let letters: &[&str] = match language {
        SampleLanguage::English => &["A", "B", "C", "D", "E"],
        SampleLanguage::Hindi => &["अ", "आ", "इ", "ई", "उ"],
    };
    letters.iter().copied().map(SampleSet::new).collect()
}
