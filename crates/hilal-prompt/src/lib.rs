pub mod chain;
pub mod fragment;

pub use chain::PromptChain;
pub use fragment::StaticFragment;
