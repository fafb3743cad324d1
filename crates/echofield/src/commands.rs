use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use console::Style;
use echofield_palette::{
    alpha_blend, brightness, contrast_color, css, derive::ACCENT_SOFT_ALPHA, inspect,
    shadow_color, ColorTheme, Rgb, ThemeColors, ThemeRegistry,
};
use echofield_pipe::{
    run_command, run_hooks, BuildHook, GenerateThemesHook, HookError, DEFAULT_GENERATE_COMMAND,
};
use echofield_select::{CookieJar, MemoryStore, SelectionChain, THEME_STORAGE_KEY};
use serde::Serialize;

use crate::cli::{Cli, Command};
use crate::config::Config;

/// Runs the parsed command, writing user-facing output to `out`.
pub fn run(cli: &Cli, cwd: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let registry = ThemeRegistry::builtin().context("built-in theme table is invalid")?;
    let config = Config::load(cli.config.as_deref(), cwd)?;

    match &cli.command {
        Command::Generate { output } => {
            let path = resolve_path(cwd, output.as_deref().unwrap_or(&config.output));
            generate(registry, &path, out)
        }
        Command::Build => build(registry, &config, cwd, out),
        Command::List { json } => list(registry, *json, out),
        Command::Show { id, json } => show(registry, id, *json, out),
        Command::Resolve { stored, cookie } => {
            resolve(registry, stored.as_deref(), cookie.as_deref(), out)
        }
        Command::Check { path } => {
            let path = resolve_path(cwd, path.as_deref().unwrap_or(&config.output));
            check(registry, &path, out)
        }
    }
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

fn generate(registry: &ThemeRegistry, path: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let report = css::write_stylesheet(registry, path)?;
    writeln!(
        out,
        "Generated themes.css with {} themes ({}, {} bytes)",
        report.themes,
        report.path.display(),
        report.bytes
    )?;
    Ok(())
}

/// Writes the stylesheet from this process, honouring the loaded config.
struct WriteStylesheetHook {
    registry: &'static ThemeRegistry,
    output: PathBuf,
}

impl BuildHook for WriteStylesheetHook {
    fn name(&self) -> &str {
        "generate-themes"
    }

    fn on_build_start(&self) -> Result<(), HookError> {
        css::write_stylesheet(self.registry, &self.output)
            .map_err(|err| HookError::Other(Box::new(err)))?;
        Ok(())
    }

    fn failure_message(&self) -> &str {
        "Failed to generate themes, continuing anyway"
    }
}

fn generate_hook(
    registry: &'static ThemeRegistry,
    config: &Config,
    cwd: &Path,
) -> Box<dyn BuildHook> {
    if config.hook.command == DEFAULT_GENERATE_COMMAND {
        Box::new(WriteStylesheetHook {
            registry,
            output: resolve_path(cwd, &config.output),
        })
    } else {
        Box::new(
            GenerateThemesHook::new(config.hook.command.clone())
                .with_timeout(config.hook.timeout()),
        )
    }
}

fn build(
    registry: &'static ThemeRegistry,
    config: &Config,
    cwd: &Path,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let hooks = vec![generate_hook(registry, config, cwd)];

    for outcome in run_hooks(&hooks) {
        let status = match &outcome.error {
            None => "ok".to_string(),
            Some(err) => format!("failed ({})", err),
        };
        writeln!(out, "hook {}: {}", outcome.name, status)?;
    }

    if let Some(bundle) = &config.bundle.command {
        tracing::info!(command = %bundle, "running bundle command");
        run_command(bundle, None).with_context(|| format!("bundle command `{}` failed", bundle))?;
        writeln!(out, "bundle: ok")?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ThemeSummary<'a> {
    id: &'a str,
    name: &'a str,
    default: bool,
    brightness: String,
}

fn list(registry: &ThemeRegistry, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let summaries: Vec<ThemeSummary> = registry
        .iter()
        .map(|theme| ThemeSummary {
            id: theme.id,
            name: theme.name,
            default: theme.id == registry.default_id(),
            brightness: brightness(theme.colors.base).to_string(),
        })
        .collect();

    if json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
        return Ok(());
    }

    let width = registry.ids().map(str::len).max().unwrap_or(0);
    for summary in &summaries {
        let marker = if summary.default { "*" } else { " " };
        writeln!(
            out,
            "{} {:<width$}  {:<5}  {}",
            marker,
            summary.id,
            summary.brightness,
            summary.name,
            width = width
        )?;
    }
    Ok(())
}

#[derive(Serialize)]
struct ThemeDetail<'a> {
    id: &'a str,
    name: &'a str,
    colors: &'a ThemeColors,
    brightness: String,
    bg_header: String,
    accent_soft: String,
    accent_contrast: &'static str,
    shadow_soft: &'static str,
}

impl<'a> ThemeDetail<'a> {
    fn new(theme: &'a ColorTheme) -> Self {
        let colors = &theme.colors;
        Self {
            id: theme.id,
            name: theme.name,
            colors,
            brightness: brightness(colors.base).to_string(),
            bg_header: format!("{}{}", colors.base, css::HEADER_ALPHA_SUFFIX),
            accent_soft: alpha_blend(colors.blue, ACCENT_SOFT_ALPHA).to_string(),
            accent_contrast: contrast_color(colors.base),
            shadow_soft: shadow_color(colors.base),
        }
    }
}

fn show(registry: &ThemeRegistry, id: &str, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    if !registry.contains(id) {
        tracing::warn!("Theme {} not found, showing {}", id, registry.default_id());
    }
    let theme = registry.resolve(Some(id));
    let detail = ThemeDetail::new(theme);

    if json {
        serde_json::to_writer_pretty(&mut *out, &detail)?;
        writeln!(out)?;
        return Ok(());
    }

    let heading = Style::new().bold();
    writeln!(out, "{} ({})", heading.apply_to(theme.name), theme.id)?;
    writeln!(out)?;
    for (role, value) in theme.colors.iter() {
        let swatch = Style::new()
            .on_color256(Rgb::from_hex(value).unwrap_or_default().to_ansi256())
            .apply_to("    ");
        writeln!(out, "  {} {:<10} {}", swatch, role.name(), value)?;
    }
    writeln!(out)?;
    writeln!(out, "  {:<18} {}", "brightness", detail.brightness)?;
    writeln!(out, "  {:<18} {}", "--bg-header", detail.bg_header)?;
    writeln!(out, "  {:<18} {}", "--accent-soft", detail.accent_soft)?;
    writeln!(out, "  {:<18} {}", "--accent-contrast", detail.accent_contrast)?;
    writeln!(out, "  {:<18} {}", "--shadow-soft", detail.shadow_soft)?;
    Ok(())
}

fn resolve(
    registry: &ThemeRegistry,
    stored: Option<&str>,
    cookie: Option<&str>,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let mut storage = MemoryStore::new();
    if let Some(id) = stored {
        storage = storage.with(THEME_STORAGE_KEY, id);
    }
    let cookies = CookieJar::from_header(cookie.unwrap_or_default());

    let resolved =
        SelectionChain::standard(registry, Arc::new(storage), Arc::new(cookies)).resolve();
    writeln!(out, "{} (from {})", resolved.id, resolved.source)?;
    Ok(())
}

fn check(registry: &ThemeRegistry, path: &Path, out: &mut dyn Write) -> anyhow::Result<()> {
    let themes = inspect::verify_file(registry, path)?;
    writeln!(out, "{}: {} themes up to date", path.display(), themes)?;
    Ok(())
}
