//! The update loop: collect, composite, apply, sleep

use crate::apply::apply_background;
use crate::background::Workspace;
use crate::collectors::{collect_facts, identity::collect_identity};
use crate::config::{Config, Profile};
use crate::display::overlay_lines;
use crate::error::Result;
use crate::overlay::{render_overlay, OverlayStyle};
use crate::platform::{Desktop, SystemProbe};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Everything a cycle needs, fixed at startup
pub struct Context<'a> {
    pub probe: &'a dyn SystemProbe,
    pub desktop: &'a dyn Desktop,
    pub workspace: Workspace,
    /// Backdrop chosen by the resolver; never written after startup
    pub backdrop: PathBuf,
    pub config: Config,
    pub style: OverlayStyle,
}

impl<'a> Context<'a> {
    pub fn new(
        probe: &'a dyn SystemProbe,
        desktop: &'a dyn Desktop,
        workspace: Workspace,
        backdrop: PathBuf,
        config: Config,
    ) -> Result<Self> {
        let style = OverlayStyle::from_config(&config.overlay)?;
        Ok(Context {
            probe,
            desktop,
            workspace,
            backdrop,
            config,
            style,
        })
    }

    pub fn profile(&self) -> Profile {
        self.config.general.profile
    }

    /// Fail fast when no user variable is set
    pub fn preflight(&self) -> Result<()> {
        collect_identity(self.probe, &self.config.identity).map(|_| ())
    }

    /// Overlay lines for the current machine state
    pub fn current_lines(&self) -> Result<Vec<String>> {
        let record = collect_facts(self.probe, &self.config.identity)?;
        Ok(overlay_lines(&record, self.profile(), &self.config.branding.lines))
    }
}

/// One collect → composite → apply pass. Returns the applied image path.
pub fn run_cycle(ctx: &Context<'_>) -> Result<PathBuf> {
    let lines = ctx.current_lines()?;
    render_overlay(&lines, &ctx.backdrop, &ctx.workspace.output, &ctx.style)?;
    apply_background(ctx.desktop, &ctx.workspace.output)
}

/// Run cycles every `interval`. A failing cycle is logged and the loop goes on.
/// With `max_cycles` of `None` this never returns.
pub fn run_loop(ctx: &Context<'_>, interval: Duration, max_cycles: Option<u64>) -> u64 {
    let mut completed = 0u64;
    let mut cycle = 0u64;

    loop {
        cycle += 1;
        match run_cycle(ctx) {
            Ok(path) => {
                completed += 1;
                log::info!("Cycle {}: background updated ({})", cycle, path.display());
            }
            Err(e) => log::error!("Cycle {} failed: {}", cycle, e),
        }

        if max_cycles.is_some_and(|max| cycle >= max) {
            return completed;
        }
        thread::sleep(interval);
    }
}
