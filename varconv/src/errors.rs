//! Definition of errors.

use std::error::Error;
use std::fmt;

/// A specialized Result type for Varconv.
pub type Result<T, E = VarconvError> = std::result::Result<T, E>;

/// The error type for Varconv.
#[derive(Debug)]
pub enum VarconvError {
    /// A dictionary line has no tab between its key and values.
    MalformedDictionaryLine(DictionaryLineError),

    /// A dictionary line has nothing before its tab.
    EmptyKey(DictionaryLineError),

    /// A dictionary line has a key but no values.
    EmptyValueList(DictionaryLineError),

    /// A converter was requested without any segmentation dictionary.
    NoSegmentationSources,

    /// A conversion stage was finalized without any dictionary.
    NoStageSources,

    /// A converter was requested without any finalized conversion stage.
    NoConversionStages,

    /// Text was submitted for conversion before a converter was built.
    ConverterNotBuilt,

    /// The error variant for [`InvalidArgumentError`].
    InvalidArgument(InvalidArgumentError),

    /// The error variant for [`TryFromIntError`](std::num::TryFromIntError).
    TryFromInt(std::num::TryFromIntError),
}

impl VarconvError {
    pub(crate) fn invalid_argument<S>(arg: &'static str, msg: S) -> Self
    where
        S: Into<String>,
    {
        Self::InvalidArgument(InvalidArgumentError {
            arg,
            msg: msg.into(),
        })
    }

    pub(crate) fn malformed_line<S>(line_num: usize, text: S) -> Self
    where
        S: Into<String>,
    {
        Self::MalformedDictionaryLine(DictionaryLineError::new(line_num, text))
    }

    pub(crate) fn empty_key<S>(line_num: usize, text: S) -> Self
    where
        S: Into<String>,
    {
        Self::EmptyKey(DictionaryLineError::new(line_num, text))
    }

    pub(crate) fn empty_value_list<S>(line_num: usize, text: S) -> Self
    where
        S: Into<String>,
    {
        Self::EmptyValueList(DictionaryLineError::new(line_num, text))
    }

    /// Gets the 1-based line number if the error comes from a dictionary line.
    pub fn line_num(&self) -> Option<usize> {
        match self {
            Self::MalformedDictionaryLine(e) | Self::EmptyKey(e) | Self::EmptyValueList(e) => {
                Some(e.line_num)
            }
            _ => None,
        }
    }
}

impl fmt::Display for VarconvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::MalformedDictionaryLine(e) => {
                write!(f, "MalformedDictionaryLine: tab not found: {}", e)
            }
            Self::EmptyKey(e) => write!(f, "EmptyKey: {}", e),
            Self::EmptyValueList(e) => write!(f, "EmptyValueList: no value in an item: {}", e),
            Self::NoSegmentationSources => write!(
                f,
                "NoSegmentationSources: a converter needs at least one segmentation dictionary"
            ),
            Self::NoStageSources => write!(
                f,
                "NoStageSources: a conversion stage needs at least one dictionary"
            ),
            Self::NoConversionStages => write!(
                f,
                "NoConversionStages: a converter needs at least one conversion stage"
            ),
            Self::ConverterNotBuilt => write!(
                f,
                "ConverterNotBuilt: a converter must be built before converting"
            ),
            Self::InvalidArgument(e) => e.fmt(f),
            Self::TryFromInt(e) => e.fmt(f),
        }
    }
}

impl Error for VarconvError {}

/// Error used when a line of a dictionary text is invalid.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DictionaryLineError {
    /// 1-based line number.
    pub(crate) line_num: usize,

    /// Raw text of the line.
    pub(crate) text: String,
}

impl DictionaryLineError {
    fn new<S>(line_num: usize, text: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            line_num,
            text: text.into(),
        }
    }

    /// Gets the 1-based line number.
    pub const fn line_num(&self) -> usize {
        self.line_num
    }

    /// Gets the raw text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DictionaryLineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "line {}: {:?}", self.line_num, self.text)
    }
}

impl Error for DictionaryLineError {}

/// Error used when the argument is invalid.
#[derive(Debug)]
pub struct InvalidArgumentError {
    /// Name of the argument.
    pub(crate) arg: &'static str,

    /// Error message.
    pub(crate) msg: String,
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "InvalidArgumentError: {}: {}", self.arg, self.msg)
    }
}

impl Error for InvalidArgumentError {}

impl From<std::num::TryFromIntError> for VarconvError {
    fn from(error: std::num::TryFromIntError) -> Self {
        Self::TryFromInt(error)
    }
}
