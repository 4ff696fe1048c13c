pub mod collect;
pub mod config;
pub mod decode;
pub mod error;
pub mod gather;
pub mod prompt;
pub mod rules;

pub use collect::{Collection, collect, collect_code};
pub use config::{Config, DEFAULT_OUTPUT_FILENAME, TraversalOrder};
pub use decode::decode_lossy;
pub use error::{AppError, Result};
pub use gather::{FileEntry, gather_files};
pub use prompt::{format_block, render_prompt, write_prompt};
pub use rules::{CollectRules, ExclusionRules, InclusionRules};
