//! Converter combining segmentation and conversion.
use crate::conversion::ConversionChain;
use crate::segmenter::MaxMatchSegmenter;

/// Converter from one script variant into another.
///
/// The input is segmented first. Each segment is rendered through the
/// segmentation dictionary (the primary value of its entry, or the surface
/// when nothing matched) and then passed through the conversion chain.
///
/// A converter is immutable and can be shared among threads.
#[derive(Clone, Debug)]
pub struct Converter {
    name: String,
    segmenter: MaxMatchSegmenter,
    chain: ConversionChain,
}

impl Converter {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `name`: Name of the converter.
    ///  - `segmenter`: Segmenter for the input.
    ///  - `chain`: Conversions applied to each segment.
    pub fn new<S>(name: S, segmenter: MaxMatchSegmenter, chain: ConversionChain) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            segmenter,
            chain,
        }
    }

    /// Gets the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the reference to the segmenter.
    pub const fn segmenter(&self) -> &MaxMatchSegmenter {
        &self.segmenter
    }

    /// Gets the reference to the conversion chain.
    pub const fn chain(&self) -> &ConversionChain {
        &self.chain
    }

    /// Converts a text.
    pub fn convert(&self, text: &str) -> String {
        let mut output = String::with_capacity(text.len());
        for segment in self.segmenter.segment(text) {
            output.push_str(&self.chain.convert(segment.rendered()));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversion::Conversion;
    use crate::dictionary::Dictionary;

    #[test]
    fn test_convert() {
        let converter = Converter::new(
            "test",
            MaxMatchSegmenter::new(Dictionary::from_text("ab\tAB").unwrap()),
            ConversionChain::new([Conversion::new(Dictionary::from_text("AB\tCD").unwrap())]),
        );
        assert_eq!(converter.name(), "test");
        assert_eq!(converter.convert("ab"), "CD");
        assert_eq!(converter.convert("xaby"), "xCDy");
        assert_eq!(converter.convert(""), "");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Converter>();
    }
}
