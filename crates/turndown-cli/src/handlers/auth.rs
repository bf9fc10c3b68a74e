use crate::commands::AppContext;
use crate::output;
use crate::types::OutputFormat;
use anyhow::Result;
use turndown_core::{ShiftController, StoreCatalog, SystemClock};
use turndown_types::{Role, SessionKind};

pub fn login(ctx: &AppContext, user_id: &str, role: Role, format: &OutputFormat) -> Result<()> {
    let login = ctx.identity.login(user_id, role)?;

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&login)?);
    } else {
        output::success(&format!("Logged in as {} ({})", login.user_id, login.role));
    }
    Ok(())
}

pub fn logout(ctx: &AppContext, format: &OutputFormat) -> Result<()> {
    let was_logged_in = ctx.identity.logout()?;

    if format.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "logged_out": was_logged_in }))?
        );
    } else if was_logged_in {
        output::success("Logged out");
    } else {
        println!("Nobody was logged in");
    }
    Ok(())
}

pub fn whoami(ctx: &AppContext, format: &OutputFormat) -> Result<()> {
    let Some(login) = ctx.identity.current() else {
        anyhow::bail!("not logged in (sessions expire after 24 hours)");
    };

    // Staff and supervisors get their daily usage; other roles start
    // nothing that is quota-tracked.
    let quota_kind = match login.role {
        Role::Staff => Some(("Cleanings started today", SessionKind::Cleaning)),
        Role::Supervisor => Some(("Spot checks started today", SessionKind::SpotCheck)),
        Role::Manager | Role::Owner => None,
    };

    let usage = match quota_kind {
        Some((label, kind)) => {
            let catalog = StoreCatalog::new(&ctx.db);
            let clock = SystemClock;
            let mut controller = ShiftController::new(
                &ctx.db,
                &ctx.identity,
                &catalog,
                &clock,
                ctx.config.quota_tracking,
            );
            let used = controller.quota_used(kind)?;
            let limit = ctx.config.quotas.daily_quota(login.role, kind);
            Some((label, kind, used, limit))
        }
        None => None,
    };

    if format.is_json() {
        let mut value = serde_json::to_value(&login)?;
        if let (Some((_, kind, used, limit)), Some(obj)) = (usage, value.as_object_mut()) {
            obj.insert(
                "quota".to_string(),
                serde_json::json!({ "kind": kind, "used": used, "limit": limit }),
            );
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} ({})", login.user_id, login.role);
    println!("Logged in since {}", output::format_time(login.logged_in_at));
    if let Some((label, _, used, limit)) = usage {
        if limit == 0 {
            println!("{}: {} (no limit)", label, used);
        } else {
            println!("{}: {}/{}", label, used, limit);
        }
    }
    Ok(())
}
