pub mod research_client;

pub use research_client::{DeepResearchClient, ResearchApi};
