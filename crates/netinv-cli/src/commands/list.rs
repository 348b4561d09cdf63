//! List command
//!
//! Usage: netinv list [--db PATH] [--location L | --make M]

use clap::Args;
use netinv_engine::commands::{apply_inventory_query, InventoryQuery};

use super::{open_database, StoreArgs};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only records at this location (exact match)
    #[arg(long, conflicts_with = "make")]
    pub location: Option<String>,

    /// Only records of this make (exact match)
    #[arg(long)]
    pub make: Option<String>,

    #[command(flatten)]
    pub store: StoreArgs,
}

impl ListArgs {
    fn query(&self) -> InventoryQuery {
        match (&self.location, &self.make) {
            (Some(location), _) => InventoryQuery::ByLocation {
                location: location.clone(),
            },
            (None, Some(make)) => InventoryQuery::ByMake { make: make.clone() },
            (None, None) => InventoryQuery::List,
        }
    }
}

pub fn execute(args: ListArgs) -> anyhow::Result<()> {
    let config = args.store.load_config()?;
    let db = open_database(&config)?;
    let conn = db.connect()?;

    let records = apply_inventory_query(args.query(), &conn)?.into_records();
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
