use crate::args::ConfigCommand;
use crate::commands::AppContext;
use crate::output;
use crate::types::OutputFormat;
use anyhow::{bail, Result};
use turndown_core::QuotaTracking;
use turndown_types::Permission;

pub fn handle(ctx: &AppContext, command: ConfigCommand, format: &OutputFormat) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            require_permission(ctx, Permission::ViewConfig)?;

            if format.is_json() {
                println!("{}", serde_json::to_string_pretty(&ctx.config)?);
            } else {
                print!("{}", toml::to_string_pretty(&ctx.config)?);
            }
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            require_permission(ctx, Permission::EditConfig)?;

            let mut config = ctx.config.clone();
            apply(&mut config, &key, &value)?;
            config.save_to(&ctx.config_path())?;

            if format.is_json() {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                output::success(&format!("Set {} = {}", key, value));
            }
            Ok(())
        }
    }
}

fn require_permission(ctx: &AppContext, permission: Permission) -> Result<()> {
    let Some(login) = ctx.identity.current() else {
        bail!("Permission denied: not logged in");
    };
    if !login.role.has_permission(permission) {
        bail!(
            "Permission denied: role {} cannot perform this operation",
            login.role
        );
    }
    Ok(())
}

fn apply(config: &mut turndown_core::Config, key: &str, value: &str) -> Result<()> {
    match key {
        "quotas.staff" => config.quotas.staff = parse_quota(value)?,
        "quotas.supervisor" => config.quotas.supervisor = parse_quota(value)?,
        "quotas.manager" => config.quotas.manager = parse_quota(value)?,
        "quotas.owner" => config.quotas.owner = parse_quota(value)?,
        "quota_tracking" => {
            config.quota_tracking = match value {
                "process" => QuotaTracking::Process,
                "calendar-day" => QuotaTracking::CalendarDay,
                other => bail!(
                    "invalid quota_tracking '{}' (expected process or calendar-day)",
                    other
                ),
            }
        }
        "default_locale" => config.default_locale = value.to_string(),
        "spot_check_time" => {
            config.spot_check_time = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        other => bail!("unknown config key '{}'", other),
    }
    Ok(())
}

fn parse_quota(value: &str) -> Result<u32> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid quota '{}' (expected a number, 0 = unlimited)", value))
}
