pub mod research_service;

pub use research_service::ResearchService;
