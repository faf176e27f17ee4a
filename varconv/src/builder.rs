//! Stateful assembly of converters.
use crate::conversion::{Conversion, ConversionChain};
use crate::converter::Converter;
use crate::dictionary::Dictionary;
use crate::errors::{Result, VarconvError};
use crate::segmenter::MaxMatchSegmenter;

/// Builder of [`Converter`].
///
/// Dictionaries for segmentation and for conversion stages are accumulated
/// separately. A stage is closed with [`finalize_stage()`](Self::finalize_stage),
/// after which dictionaries added with
/// [`add_stage_source()`](Self::add_stage_source) go to the next stage.
///
/// [`build()`](Self::build) does not consume the accumulated dictionaries, so
/// the builder can produce several converters sharing them.
///
/// # Examples
///
/// ```
/// use varconv::PipelineBuilder;
///
/// let mut builder = PipelineBuilder::new();
/// builder.add_segmentation_source("头发\t頭髮\n发\t發 髮")?;
/// builder.add_stage_source("头\t頭\n发\t發 髮")?;
/// builder.finalize_stage()?;
/// let converter = builder.build("s2t")?;
///
/// assert_eq!(converter.convert("头发发"), "頭髮發");
/// # Ok::<(), varconv::errors::VarconvError>(())
/// ```
#[derive(Default, Debug)]
pub struct PipelineBuilder {
    segmentation_sources: Vec<Dictionary>,
    pending_stage_sources: Vec<Dictionary>,
    finished_stages: Vec<Conversion>,
}

impl PipelineBuilder {
    /// Creates a new empty instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dictionary text for segmentation.
    ///
    /// # Errors
    ///
    /// [`VarconvError`] is returned when the text has an invalid line.
    /// The builder is left unchanged.
    pub fn add_segmentation_source(&mut self, text: &str) -> Result<()> {
        let dict = Dictionary::from_text(text)?;
        self.add_segmentation_dictionary(dict);
        Ok(())
    }

    /// Adds a prebuilt dictionary for segmentation.
    pub fn add_segmentation_dictionary(&mut self, dict: Dictionary) {
        self.segmentation_sources.push(dict);
    }

    /// Adds a dictionary text to the stage being assembled.
    ///
    /// # Errors
    ///
    /// [`VarconvError`] is returned when the text has an invalid line.
    /// The builder is left unchanged.
    pub fn add_stage_source(&mut self, text: &str) -> Result<()> {
        let dict = Dictionary::from_text(text)?;
        self.add_stage_dictionary(dict);
        Ok(())
    }

    /// Adds a prebuilt dictionary to the stage being assembled.
    pub fn add_stage_dictionary(&mut self, dict: Dictionary) {
        self.pending_stage_sources.push(dict);
    }

    /// Closes the stage being assembled.
    ///
    /// Several dictionaries of a stage are grouped in the order they were
    /// added; see [`DictGroup`](crate::dictionary::DictGroup).
    ///
    /// # Errors
    ///
    /// [`VarconvError::NoStageSources`] is returned when no dictionary was
    /// added since the last stage.
    pub fn finalize_stage(&mut self) -> Result<()> {
        let num_sources = self.pending_stage_sources.len();
        let dict = Dictionary::combine(std::mem::take(&mut self.pending_stage_sources))
            .ok_or(VarconvError::NoStageSources)?;
        self.finished_stages.push(Conversion::new(dict));
        log::debug!(
            "Finalized conversion stage #{} from {} dictionaries",
            self.finished_stages.len(),
            num_sources
        );
        Ok(())
    }

    /// Gets the number of segmentation dictionaries.
    pub fn num_segmentation_sources(&self) -> usize {
        self.segmentation_sources.len()
    }

    /// Gets the number of dictionaries in the stage being assembled.
    pub fn num_pending_stage_sources(&self) -> usize {
        self.pending_stage_sources.len()
    }

    /// Gets the number of finalized stages.
    pub fn num_finished_stages(&self) -> usize {
        self.finished_stages.len()
    }

    /// Builds a converter.
    ///
    /// Dictionaries added to a stage that has not been finalized are not used.
    ///
    /// # Arguments
    ///
    ///  - `name`: Name of the converter.
    ///
    /// # Errors
    ///
    ///  - [`VarconvError::NoSegmentationSources`] when no segmentation dictionary was added.
    ///  - [`VarconvError::NoConversionStages`] when no stage was finalized.
    pub fn build<S>(&self, name: S) -> Result<Converter>
    where
        S: Into<String>,
    {
        let dict = Dictionary::combine(self.segmentation_sources.clone())
            .ok_or(VarconvError::NoSegmentationSources)?;
        if self.finished_stages.is_empty() {
            return Err(VarconvError::NoConversionStages);
        }
        if !self.pending_stage_sources.is_empty() {
            log::warn!(
                "{} dictionaries of an unfinalized stage are ignored",
                self.pending_stage_sources.len()
            );
        }
        let converter = Converter::new(
            name,
            MaxMatchSegmenter::new(dict),
            ConversionChain::new(self.finished_stages.iter().cloned()),
        );
        log::info!(
            "Built converter {:?} with {} segmentation dictionaries and {} stages",
            converter.name(),
            self.segmentation_sources.len(),
            self.finished_stages.len()
        );
        Ok(converter)
    }
}
