use super::args::{Cli, Commands};
use super::handlers;
use crate::identity::FileIdentity;
use anyhow::Result;
use std::path::{Path, PathBuf};
use turndown_core::Config;
use turndown_store::Database;

const DB_FILE: &str = "turndown.db";
const CONFIG_FILE: &str = "config.toml";

/// Everything a handler needs, opened once per invocation.
pub(crate) struct AppContext {
    pub data_dir: PathBuf,
    pub config: Config,
    pub db: Database,
    pub identity: FileIdentity,
}

impl AppContext {
    pub fn open(data_dir: &Path) -> Result<Self> {
        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;
        let db = Database::open(&data_dir.join(DB_FILE))?;
        let identity = FileIdentity::new(data_dir, config.quotas);

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
            db,
            identity,
        })
    }

    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILE)
    }
}

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = expand_tilde(&cli.data_dir);

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    match command {
        Commands::Init => handlers::init::handle(&data_dir, &cli.format),

        Commands::Login { user_id, role } => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::auth::login(&ctx, &user_id, role, &cli.format)
        }
        Commands::Logout => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::auth::logout(&ctx, &cli.format)
        }
        Commands::Whoami => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::auth::whoami(&ctx, &cli.format)
        }

        Commands::Room { command } => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::catalog::handle_room(&ctx, command, &cli.format)
        }
        Commands::Task { command } => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::catalog::handle_task(&ctx, command, &cli.format)
        }

        Commands::Clean { command } => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::clean::handle(&ctx, command, &cli.format)
        }
        Commands::Spotcheck { command } => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::spot_check::handle(&ctx, command, &cli.format)
        }
        Commands::Session { command } => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::session::handle(&ctx, command, &cli.format)
        }

        Commands::Config { command } => {
            let ctx = AppContext::open(&data_dir)?;
            handlers::config::handle(&ctx, command, &cli.format)
        }
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}

fn show_guidance(data_dir: &Path) {
    let db_exists = data_dir.join(DB_FILE).exists();

    println!("turndown - Housekeeping shift tracker\n");

    if !db_exists {
        println!("Get started:");
        println!("  turndown init\n");
        println!("The init command will:");
        println!("  1. Create the data directory");
        println!("  2. Set up the session store");
        println!("  3. Seed the default room and task catalog\n");
    } else {
        println!("Quick commands:");
        println!("  turndown login <user> --role staff   # Start a shift");
        println!("  turndown clean start <room>          # Begin cleaning a room");
        println!("  turndown clean finish <room>         # Finish the cleaning");
        println!("  turndown session status <room>       # Check a room's state\n");
    }

    println!("For more commands:");
    println!("  turndown --help");
}
