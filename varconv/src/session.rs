//! Host-facing facade over [`PipelineBuilder`].
use std::sync::Arc;

use crate::builder::PipelineBuilder;
use crate::converter::Converter;
use crate::errors::{Result, VarconvError};

/// Session holding a builder and the last converter built from it.
///
/// Its methods map one to one onto the operations an embedding host exposes.
#[derive(Default, Debug)]
pub struct Session {
    builder: PipelineBuilder,
    converter: Option<Arc<Converter>>,
}

impl Session {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dictionary text for segmentation.
    ///
    /// # Errors
    ///
    /// See [`PipelineBuilder::add_segmentation_source()`].
    pub fn push_segmentation_source(&mut self, text: &str) -> Result<()> {
        self.builder.add_segmentation_source(text)
    }

    /// Adds a dictionary text to the stage being assembled.
    ///
    /// # Errors
    ///
    /// See [`PipelineBuilder::add_stage_source()`].
    pub fn push_stage_source(&mut self, text: &str) -> Result<()> {
        self.builder.add_stage_source(text)
    }

    /// Closes the stage being assembled.
    ///
    /// # Errors
    ///
    /// See [`PipelineBuilder::finalize_stage()`].
    pub fn finalize_stage(&mut self) -> Result<()> {
        self.builder.finalize_stage()
    }

    /// Builds a converter and makes it the one used by [`convert()`](Self::convert).
    ///
    /// # Errors
    ///
    /// See [`PipelineBuilder::build()`].
    pub fn build<S>(&mut self, name: S) -> Result<Arc<Converter>>
    where
        S: Into<String>,
    {
        let converter = Arc::new(self.builder.build(name)?);
        self.converter = Some(Arc::clone(&converter));
        Ok(converter)
    }

    /// Gets the last built converter.
    pub fn converter(&self) -> Option<&Arc<Converter>> {
        self.converter.as_ref()
    }

    /// Converts a text with the last built converter.
    ///
    /// # Errors
    ///
    /// [`VarconvError::ConverterNotBuilt`] is returned when no converter has
    /// been built yet.
    pub fn convert(&self, text: &str) -> Result<String> {
        let converter = self
            .converter
            .as_ref()
            .ok_or(VarconvError::ConverterNotBuilt)?;
        Ok(converter.convert(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_before_build() {
        let session = Session::new();
        let e = session.convert("a").unwrap_err();
        assert!(matches!(e, VarconvError::ConverterNotBuilt));
    }

    #[test]
    fn test_failed_finalize_keeps_converter() {
        let mut session = Session::new();
        session.push_segmentation_source("ab\tAB").unwrap();
        session.push_stage_source("AB\tCD").unwrap();
        session.finalize_stage().unwrap();
        let handle = session.build("first").unwrap();
        assert_eq!(session.convert("ab").unwrap(), "CD");
        assert_eq!(handle.convert("ab"), "CD");

        // Nothing pending: finalizing fails and the converter survives.
        assert!(matches!(
            session.finalize_stage().unwrap_err(),
            VarconvError::NoStageSources
        ));
        assert_eq!(session.converter().unwrap().name(), "first");
        assert_eq!(session.convert("xab").unwrap(), "xCD");
    }

    #[test]
    fn test_failed_first_build() {
        let mut session = Session::new();
        let e = session.build("none").unwrap_err();
        assert!(matches!(e, VarconvError::NoSegmentationSources));
        assert!(session.converter().is_none());
        assert!(matches!(
            session.convert("a").unwrap_err(),
            VarconvError::ConverterNotBuilt
        ));
    }

    #[test]
    fn test_rebuild_replaces_converter() {
        let mut session = Session::new();
        session.push_segmentation_source("a\tA").unwrap();
        session.push_stage_source("A\tB").unwrap();
        session.finalize_stage().unwrap();
        let first = session.build("first").unwrap();

        session.push_stage_source("B\tC").unwrap();
        session.finalize_stage().unwrap();
        session.build("second").unwrap();

        assert_eq!(first.convert("a"), "B");
        assert_eq!(session.convert("a").unwrap(), "C");
        assert_eq!(session.converter().unwrap().name(), "second");
    }
}
