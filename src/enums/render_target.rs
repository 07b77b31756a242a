#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderTarget {
    SingleTier,
    Hierarchical,
    #[default]
    All,
}

impl RenderTarget {
    #[doc = "Expands `All` into the concrete renders, in the order they are produced"]
    pub fn expand(self) -> Vec<RenderTarget> {
        match self {
            RenderTarget::All => vec![RenderTarget::SingleTier, RenderTarget::Hierarchical],
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_both_renders() {
        assert_eq!(
            RenderTarget::All.expand(),
            vec![RenderTarget::SingleTier, RenderTarget::Hierarchical]
        );
        assert_eq!(
            RenderTarget::Hierarchical.expand(),
            vec![RenderTarget::Hierarchical]
        );
    }
}
