use crate::{
    db::{
        db::Db,
        migrations::{get_db_version, needs_migration, MigrationManager},
    },
    libs::messages::Message,
    msg_info, msg_print,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

#[derive(Debug, Args)]
pub struct MigrationsArgs {
    #[command(subcommand)]
    command: MigrationsCommand,
}

#[derive(Debug, Subcommand)]
enum MigrationsCommand {
    /// Show current database version
    Status,
    /// Show migration history
    History,
}

/// Reads the schema state without applying anything.
pub fn cmd(args: MigrationsArgs, db_path: &Path) -> Result<()> {
    let db = Db::open_without_migrations(db_path)?;

    match args.command {
        MigrationsCommand::Status => {
            let version = get_db_version(&db.conn)?;
            msg_print!(Message::DatabaseVersion(version));

            if needs_migration(&db.conn)? {
                let pending = MigrationManager::new().latest_version().saturating_sub(version);
                msg_info!(Message::MigrationsFound(pending as usize));
                msg_info!(Message::DatabaseNeedsUpdate);
            } else {
                msg_info!(Message::DatabaseUpToDate);
            }
        }
        MigrationsCommand::History => {
            msg_print!(Message::MigrationHistory, true);
            for (version, name, applied_at) in MigrationManager::new().get_migration_history(&db.conn)? {
                println!("  v{version:>3}  {name:<28} {applied_at}");
            }
        }
    }

    Ok(())
}
