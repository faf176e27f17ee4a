//! # Varconv
//!
//! Varconv converts text between script variants, such as Simplified and
//! Traditional Chinese or regional vocabularies, with plain-text dictionaries.
//!
//! The input is segmented by greedy longest match against a segmentation
//! dictionary, and every segment is rewritten by a chain of conversion
//! stages, each backed by one or more dictionaries.
//!
//! ## Examples
//!
//! ```
//! use varconv::PipelineBuilder;
//!
//! let mut builder = PipelineBuilder::new();
//! builder.add_segmentation_source("计算机\t計算機")?;
//!
//! // Characters, then regional vocabulary.
//! builder.add_stage_source("计\t計\n机\t機 机")?;
//! builder.finalize_stage()?;
//! builder.add_stage_source("計算機\t電腦")?;
//! builder.finalize_stage()?;
//!
//! let converter = builder.build("s2twp")?;
//! assert_eq!(converter.convert("计算机和机器"), "電腦和機器");
//! # Ok::<(), varconv::errors::VarconvError>(())
//! ```
#![deny(missing_docs)]

#[cfg(target_pointer_width = "16")]
compile_error!("`target_pointer_width` must be larger than or equal to 32");

pub mod builder;
pub mod conversion;
pub mod converter;
pub mod dictionary;
pub mod errors;
pub mod segmenter;
pub mod session;


pub use builder::PipelineBuilder;
pub use converter::Converter;
pub use dictionary::Dictionary;
pub use session::Session;
