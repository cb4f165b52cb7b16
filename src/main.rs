//! placetree command-line entry point
//!
//! Every command connects to `DATABASE_URL` and applies pending migrations first.
//!
//! - Apply migrations only
//!   $ placetree migrate
//!
//! - Rebuild all autocomplete tables
//!   $ placetree rebuild
//!
//! - Refresh one place and everything below it
//!   $ placetree reindex 2988507 --cascade
//!
//! - Inspect a place in Portuguese
//!   $ placetree show 2988507 --language pt
//!
//! - Query the index like a consumer would
//!   $ placetree search "europe, fra" --language en
mod args;

use clap::Parser;
use serde_json::json;

use placetree::{
    config::Config,
    data::autocomplete::AutocompleteRepository,
    service::{
        hierarchy::HierarchyResolver, indexer::AutocompleteIndexer, store::PlaceStore,
        translate::NameTranslator,
    },
    startup,
    worker::{IndexJobHandler, Worker},
};

use crate::args::{CliArgs, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let args = CliArgs::parse();
    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    match args.command {
        Commands::Migrate => {
            tracing::info!("Database migrations are up to date");
        }

        Commands::Rebuild => {
            let report = AutocompleteIndexer::new(&db, &config.indexer)
                .rebuild()
                .await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Reindex { id, cascade } => {
            let report = AutocompleteIndexer::new(&db, &config.indexer)
                .reindex_by_id(id, cascade)
                .await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }

        Commands::Show { id, language } => {
            let worker = Worker::new(IndexJobHandler::new(db.clone(), config.indexer.clone()));
            let store = PlaceStore::new(&db, &worker.queue);
            let translator = NameTranslator::new(&db);
            let autocomplete_repo = AutocompleteRepository::new(&db);

            let place = store.get_place(id).await?;
            let chain = HierarchyResolver::new(&db).resolve(&place).await?;
            let row = match autocomplete_repo.has_table(&language).await? {
                true => autocomplete_repo.find(&language, id).await?,
                false => None,
            };

            let output = json!({
                "place": place,
                "chain": chain.iter().map(|p| p.id).collect::<Vec<_>>(),
                "name": translator.translate(&place, &language).await?,
                "full_name": translator.translated_full_name(&place, &language).await?,
                "slug": translator.absolute_slug(&place).await?,
                "full_code": store.full_code(id).await?,
                "alternative_names": store.alternative_names_for_place(id).await?,
                "autocomplete": row,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Commands::Search {
            prefix,
            language,
            limit,
        } => {
            let rows = AutocompleteRepository::new(&db)
                .search_prefix(&language, &prefix, limit)
                .await?;

            for row in rows {
                println!("{}\t{}\t{}", row.id, row.name, row.slug);
            }
        }
    }

    Ok(())
}
