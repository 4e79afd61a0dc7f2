//! Service Configuration
//!
//! Defaults suit a single local node; command-line flags override them.

use crate::search::engine::{EmptyQueryPolicy, MatcherConfig, ResultLimit};

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::num::NonZeroUsize;

const BYTES_PER_MB: usize = 1024 * 1024;

/// Command-line flags of the search node.
#[derive(Debug, Parser)]
#[command(name = "fuzzy-search-node", version, about = "Fuzzy sentence search over uploaded text files")]
pub struct Cli {
    /// HTTP listen address
    #[arg(long, default_value = "127.0.0.1:8080")]
    pub bind: SocketAddr,

    /// Result cache capacity in MiB
    #[arg(long, default_value_t = 50)]
    pub cache_mb: usize,

    /// Maximum upload size in MiB
    #[arg(long, default_value_t = 10)]
    pub upload_mb: usize,

    /// Return at most this many results per search
    #[arg(long, default_value = "10")]
    pub top_n: NonZeroUsize,

    /// Return the best match of every sentence (overrides --top-n)
    #[arg(long)]
    pub all_results: bool,

    /// Drop window matches farther than this many edits
    #[arg(long)]
    pub max_distance: Option<usize>,

    /// What an empty query does
    #[arg(long, value_enum, default_value_t = EmptyQueryPolicy::Reject)]
    pub empty_query: EmptyQueryPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    /// Fixed for the lifetime of the cache.
    pub cache_capacity_mb: usize,
    pub max_upload_mb: usize,
    pub matcher: MatcherConfig,
}

impl From<Cli> for ServiceConfig {
    fn from(cli: Cli) -> Self {
        let limit = if cli.all_results {
            ResultLimit::All
        } else {
            ResultLimit::Top(cli.top_n.get())
        };

        Self {
            bind_addr: cli.bind,
            cache_capacity_mb: cli.cache_mb,
            max_upload_mb: cli.upload_mb,
            matcher: MatcherConfig {
                limit,
                max_distance: cli.max_distance,
                empty_query: cli.empty_query,
            },
        }
    }
}

impl ServiceConfig {
    pub fn cache_capacity_bytes(&self) -> usize {
        self.cache_capacity_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(BYTES_PER_MB)
    }
}
