use crate::conversion::Conversion;

/// Conversions applied one after another.
///
/// The output of each stage is the input of the next one.
#[derive(Clone, Debug)]
pub struct ConversionChain {
    stages: Vec<Conversion>,
}

impl ConversionChain {
    /// Creates a new instance.
    ///
    /// # Arguments
    ///
    ///  - `stages`: Conversions in the order of application.
    pub fn new<I>(stages: I) -> Self
    where
        I: IntoIterator<Item = Conversion>,
    {
        Self {
            stages: stages.into_iter().collect(),
        }
    }

    /// Gets the stages.
    #[inline(always)]
    pub fn stages(&self) -> &[Conversion] {
        &self.stages
    }

    /// Converts a token through all the stages.
    pub fn convert(&self, token: &str) -> String {
        let mut current = token.to_string();
        let mut next = String::with_capacity(token.len());
        for stage in &self.stages {
            next.clear();
            stage.convert_into(&current, &mut next);
            std::mem::swap(&mut current, &mut next);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn conversion(text: &str) -> Conversion {
        Conversion::new(Dictionary::from_text(text).unwrap())
    }

    #[test]
    fn test_order() {
        let chain = ConversionChain::new([conversion("a\tb"), conversion("b\tc")]);
        assert_eq!(chain.convert("a"), "c");

        let chain = ConversionChain::new([conversion("b\tc"), conversion("a\tb")]);
        assert_eq!(chain.convert("a"), "b");
    }

    #[test]
    fn test_multi_char_values() {
        let chain = ConversionChain::new([conversion("计算机\t計算機"), conversion("計算機\t電腦")]);
        assert_eq!(chain.convert("计算机"), "電腦");
        assert_eq!(chain.convert("用计算机"), "用電腦");
    }

    #[test]
    fn test_no_stages() {
        let chain = ConversionChain::new(Vec::<Conversion>::new());
        assert_eq!(chain.convert("abc"), "abc");
    }
}
