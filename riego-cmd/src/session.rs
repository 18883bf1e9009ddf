//! `login`, `logout` and `status` commands.

use crate::store::FileStore;
use log::{info, warn};
use riego_core::credentials::Credentials;
use riego_core::notice::LogoutPrompt;
use riego_core::session::Session;
use std::io::{BufRead, Write};
use std::path::Path;

pub fn run_login(
    user: &str,
    password: &str,
    persist: bool,
    session_file: &Path,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let credentials = Credentials::default();
    let route = credentials.authenticate(user, password)?;
    writeln!(out, "Sesión iniciada como {}", credentials.identifier())?;

    if persist {
        let mut session = Session::load(FileStore::open(session_file)?);
        session.begin(credentials.identifier())?;
        info!("Session flag written to {}", session_file.display());
    }
    info!("Next view: {}", route);
    Ok(())
}

/// Ask the logout question on `out` and read the answer from `input`.
/// Only an explicit yes confirms.
fn confirm(input: impl BufRead, out: &mut impl Write) -> anyhow::Result<bool> {
    write!(
        out,
        "{} {} [s/N] ",
        LogoutPrompt::TITLE,
        LogoutPrompt::TEXT
    )?;
    out.flush()?;

    let answer = input.lines().next().transpose()?.unwrap_or_default();
    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "si" | "sí" | "y" | "yes"
    ))
}

pub fn run_logout(
    yes: bool,
    session_file: &Path,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let confirmed = yes || confirm(input, &mut *out)?;
    let mut session = Session::load(FileStore::open(session_file)?);

    match session.logout(confirmed)? {
        Some(sign_out) => writeln!(out, "{}", sign_out.notice)?,
        None => {
            warn!("Logout declined");
            writeln!(out, "{}", LogoutPrompt::CANCEL)?;
        }
    }
    Ok(())
}

pub fn run_status(session_file: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let session = Session::load(FileStore::open(session_file)?);
    match session.token() {
        Some(token) => writeln!(out, "Sesión activa ({})", token)?,
        None => writeln!(out, "Sin sesión activa")?,
    }
    Ok(())
}
