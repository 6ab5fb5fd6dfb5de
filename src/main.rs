use anyhow::Result;
use clap::{Parser, Subcommand};
use sea_orm::{ActiveValue, DatabaseConnection, IntoActiveModel};
use std::path::PathBuf;

use knowledge_reinforce::config::Config;
use knowledge_reinforce::constants::{
    ASSOCIATION_NOT_FOUND, CLASS_CREATED, CLASS_NOT_FOUND, CONFIG_GENERATED, SCHEMA_CREATED, TERM_CREATED,
    TERM_DELETED, TERM_NOT_FOUND, TERM_TAGGED, TERM_UNTAGGED,
};
use knowledge_reinforce::{class, db, logger, schema, term, ClassRepository, Repository, TermRepository};

/// Manage vocabulary terms and the classes they belong to
#[derive(Parser, Debug)]
#[command(name = "knowledge-reinforce", version, about)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Database URL, overrides the config file and the DB_* variables
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default configuration file
    GenerateConfig {
        /// Target path, defaults to the user config directory
        path: Option<PathBuf>,
    },
    #[command(flatten)]
    Store(StoreCommand),
}

/// Commands that need a database connection.
#[derive(Subcommand, Debug)]
enum StoreCommand {
    /// Create the tables
    Init,
    /// Add a term with its translation
    AddTerm { term: String, translation: String },
    /// List every term
    ListTerms,
    /// Show one term
    FindTerm { term: String },
    /// List terms with the given translation
    Translations { translation: String },
    /// Change the translation of a term
    UpdateTerm { term: String, translation: String },
    /// Delete a term
    DeleteTerm { term: String },
    /// Add a class
    AddClass { name: String },
    /// List every class
    ListClasses,
    /// Put a term into a class
    Tag { term: String, class: String },
    /// Take a term out of a class
    Untag { term: String, class: String },
    /// List the terms of a class
    ClassTerms { class: String },
    /// List the classes of a term
    TermClasses { term: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if let Some(url) = cli.database_url.clone() {
        config.database.url = Some(url);
    }
    logger::init(&config.logging)?;

    match cli.command {
        Command::GenerateConfig { path } => generate_config(path),
        Command::Store(command) => {
            let conn = db::connect(&config.database).await?;
            run(&conn, command, cli.json).await
        }
    }
}

fn generate_config(path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(path) => path,
        None => Config::get_default_config_path()?,
    };
    Config::generate_default_config(&path)?;
    println!("{}: {}", CONFIG_GENERATED, path.display());
    Ok(())
}

async fn run(conn: &DatabaseConnection, command: StoreCommand, json: bool) -> Result<()> {
    let terms = TermRepository::new(conn);
    let classes = ClassRepository::new(conn);

    match command {
        StoreCommand::Init => {
            schema::create_all(conn).await?;
            println!("{}", SCHEMA_CREATED);
        }
        StoreCommand::AddTerm { term, translation } => {
            let created = terms.create(term::ActiveModel::new_term(term, translation)).await?;
            println!("{} (id {})", TERM_CREATED, created.id);
        }
        StoreCommand::ListTerms => print_terms(&terms.get_all().await?, json)?,
        StoreCommand::FindTerm { term } => match terms.get_by_term(&term).await? {
            Some(found) => print_terms(&[found], json)?,
            None => println!("{}: {}", TERM_NOT_FOUND, term),
        },
        StoreCommand::Translations { translation } => {
            print_terms(&terms.get_by_translation(&translation).await?, json)?
        }
        StoreCommand::UpdateTerm { term, translation } => {
            let updated = match terms.get_by_term(&term).await? {
                Some(found) => {
                    let mut active = found.into_active_model();
                    active.translation = ActiveValue::Set(translation);
                    terms.update(active).await?
                }
                None => None,
            };
            match updated {
                Some(updated) => print_terms(&[updated], json)?,
                None => println!("{}: {}", TERM_NOT_FOUND, term),
            }
        }
        StoreCommand::DeleteTerm { term } => {
            let deleted = match terms.get_by_term(&term).await? {
                Some(found) => terms.delete(&found.into_active_model()).await?,
                None => false,
            };
            if deleted {
                println!("{}: {}", TERM_DELETED, term);
            } else {
                println!("{}: {}", TERM_NOT_FOUND, term);
            }
        }
        StoreCommand::AddClass { name } => {
            let created = classes.create(class::ActiveModel::new_class(name)).await?;
            println!("{} (id {})", CLASS_CREATED, created.id);
        }
        StoreCommand::ListClasses => print_classes(&classes.get_all().await?, json)?,
        StoreCommand::Tag { term, class } => {
            let Some((term_id, class_id)) = resolve_pair(&terms, &classes, &term, &class).await? else {
                return Ok(());
            };
            terms.add_class(term_id, class_id).await?;
            println!("{}: {} -> {}", TERM_TAGGED, term, class);
        }
        StoreCommand::Untag { term, class } => {
            let Some((term_id, class_id)) = resolve_pair(&terms, &classes, &term, &class).await? else {
                return Ok(());
            };
            if terms.remove_class(term_id, class_id).await? {
                println!("{}: {} -> {}", TERM_UNTAGGED, term, class);
            } else {
                println!("{}", ASSOCIATION_NOT_FOUND);
            }
        }
        StoreCommand::ClassTerms { class } => match classes.get_by_class_name(&class).await? {
            Some(found) => print_terms(&classes.get_terms(found.id).await?, json)?,
            None => println!("{}: {}", CLASS_NOT_FOUND, class),
        },
        StoreCommand::TermClasses { term } => match terms.get_by_term(&term).await? {
            Some(found) => print_classes(&terms.get_classes(found.id).await?, json)?,
            None => println!("{}: {}", TERM_NOT_FOUND, term),
        },
    }

    Ok(())
}

/// Look up a term and a class by name, reporting whichever is missing.
async fn resolve_pair(
    terms: &TermRepository<'_, DatabaseConnection>,
    classes: &ClassRepository<'_, DatabaseConnection>,
    term: &str,
    class: &str,
) -> Result<Option<(i32, i32)>> {
    let Some(found_term) = terms.get_by_term(term).await? else {
        println!("{}: {}", TERM_NOT_FOUND, term);
        return Ok(None);
    };
    let Some(found_class) = classes.get_by_class_name(class).await? else {
        println!("{}: {}", CLASS_NOT_FOUND, class);
        return Ok(None);
    };
    Ok(Some((found_term.id, found_class.id)))
}

fn print_terms(items: &[term::Model], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}\t{}\t{}", item.id, item.term, item.translation);
        }
    }
    Ok(())
}

fn print_classes(items: &[class::Model], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}\t{}", item.id, item.class_name);
        }
    }
    Ok(())
}
