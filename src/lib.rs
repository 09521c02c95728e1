// Tue Jan 15 2026 - Alex

pub mod config;
pub mod names;
pub mod input;
pub mod resolver;
pub mod orchestration;
pub mod output;
pub mod ui;

pub use config::Config;
pub use names::{QueryName, RawName, ResolvedName};
pub use input::InputReader;
pub use resolver::{NameResolver, ResolverClient, TaxonomyBrowserClient};
pub use orchestration::{ResolutionBatch, ResolutionPipeline};
pub use output::ArtifactWriter;
