/// Application layer: use cases that orchestrate domain and infrastructure
pub mod use_cases;
