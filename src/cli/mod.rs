use anyhow::Result;
use clap::{Parser, Subcommand};
use client::mock::MockTransport;
use client::{MetricsQuery, QueryClient, Settings, Transport};
use common::TrafficTag;
use log::Level;
use std::io::Write;
use std::rc::Rc;
use tracing::{debug, info};

pub mod commands;

use crate::settings::Overrides;
use crate::transport::ReqwestTransport;
use commands::{dashboard, metric, report, reports};

#[derive(Parser)]
#[command(name = "prophet-console")]
#[command(about = "Terminal view of the Prophet Labs analytics console")]
#[command(version)]
pub struct Cli {
    /// Origin of the analytics API, e.g. http://localhost:8000
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Serve all data from the built-in mock API
    #[arg(long, global = true)]
    pub mock: bool,

    /// Environment label
    #[arg(long = "env", global = true)]
    pub environment: Option<String>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tag summary, preview cards and the full metrics table
    Dashboard {
        /// Category key, e.g. economy or health
        #[arg(long)]
        category: Option<String>,

        /// Traffic tag: RED, GREEN, WHITE or BLACK
        #[arg(long)]
        status: Option<TrafficTag>,

        /// Case-insensitive text matched against name and identifier
        #[arg(long)]
        search: Option<String>,
    },
    /// Detail, historical series and forecast of one metric
    Metric {
        metric_id: String,
    },
    /// Generated reports with their tag counts
    Reports,
    /// Highlights and notes of one report
    Report {
        report_id: String,
    },
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_base_url: self.api_base_url.clone(),
            mock: self.mock,
            environment: self.environment.clone(),
            log_level: self.log_level,
        }
    }

    pub async fn run(self, settings: Settings, out: &mut impl Write) -> Result<()> {
        let client = query_client(settings)?;
        match self.command {
            Commands::Dashboard {
                category,
                status,
                search,
            } => {
                let query = MetricsQuery::new(category.as_deref(), status, search.as_deref());
                dashboard(&client, query, out).await?;
            }
            Commands::Metric { metric_id } => {
                metric(&client, &metric_id, out).await?;
            }
            Commands::Reports => {
                reports(&client, out).await?;
            }
            Commands::Report { report_id } => {
                report(&client, &report_id, out).await?;
            }
        }
        Ok(())
    }
}

/// Builds the query client over the transport the settings select.
pub fn query_client(settings: Settings) -> Result<QueryClient> {
    let transport: Rc<dyn Transport> = if settings.enable_mock {
        info!("Mock mode enabled, serving data from the in-process API");
        Rc::new(MockTransport::new())
    } else {
        debug!("Using API at {}", settings.api_base_url);
        Rc::new(ReqwestTransport::new()?)
    };
    Ok(QueryClient::new(Rc::new(settings), transport))
}
