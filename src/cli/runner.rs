//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::{list_builtin, load_dataset, Dataset};
use crate::cursor::decode;
use crate::engine::{read_entries, read_ids, EntryRequest, IdRequest};
use crate::error::Result;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Entries { cursor, limit } => self.entries(cursor, *limit),
            Commands::Ids {
                cursor,
                limit,
                page_size,
                pages,
            } => self.ids(cursor, *limit, *page_size, *pages),
            Commands::Cursor { cursor } => self.cursor(cursor),
            Commands::Datasets => self.list_datasets(),
            Commands::Serve { port } => {
                let dataset = self.load_dataset()?;
                crate::cli::serve(Arc::new(dataset), *port).await
            }
        }
    }

    /// Load the selected dataset
    fn load_dataset(&self) -> Result<Dataset> {
        let dataset = load_dataset(&self.cli.dataset)?;
        info!(
            "Loaded dataset '{}' ({} entries, {} sub-queries)",
            dataset.name,
            dataset.store.len(),
            dataset.conditions.len()
        );
        Ok(dataset)
    }

    /// Print one page of entries followed by the resume cursor
    fn entries(&self, cursor: &str, limit: Option<u64>) -> Result<()> {
        let dataset = self.load_dataset()?;
        let page = read_entries(&dataset, &EntryRequest::new(cursor, limit))?;

        for entry in &page.items {
            self.output_message(&json!({
                "type": "ENTRY",
                "entry": entry
            }));
        }

        self.output_message(&json!({
            "type": "CURSOR",
            "count": page.items.len(),
            "cursor": page.cursor
        }));

        Ok(())
    }

    /// Print identifier pages followed by the resume cursor
    fn ids(
        &self,
        cursor: &str,
        limit: Option<u64>,
        page_size: Option<usize>,
        pages: usize,
    ) -> Result<()> {
        let dataset = self.load_dataset()?;
        let request = IdRequest {
            cursor: cursor.to_string(),
            page_size,
            pages: Some(pages),
            limit,
        };
        let result = read_ids(&dataset, &request)?;

        for (index, page) in result.pages.iter().enumerate() {
            self.output_message(&json!({
                "type": "PAGE",
                "page": index,
                "ids": page
            }));
        }

        self.output_message(&json!({
            "type": "CURSOR",
            "pages": result.pages.len(),
            "cursor": result.cursor,
            "remaining": result.remaining
        }));

        Ok(())
    }

    /// Decode and print a cursor
    fn cursor(&self, cursor: &str) -> Result<()> {
        let decoded = decode(cursor)?;

        self.output_message(&json!({
            "type": "CURSOR",
            "offset": decoded.offset,
            "token": decoded.state.token(),
            "start": decoded.state.is_start()
        }));

        Ok(())
    }

    /// List built-in datasets
    fn list_datasets(&self) -> Result<()> {
        let datasets: Vec<Value> = list_builtin()
            .into_iter()
            .map(|name| json!({ "name": name }))
            .collect();

        self.output_message(&json!({
            "type": "DATASETS",
            "datasets": datasets
        }));

        Ok(())
    }

    /// Output a message in the selected format
    fn output_message(&self, msg: &Value) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}
