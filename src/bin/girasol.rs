use std::{
    io::{BufRead as _, Write as _},
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "girasol", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the flower geometry as JSON.
    Geometry(GeometryArgs),
    /// Print the reveal timeline as JSON.
    Timeline(TimelineArgs),
    /// Commit a name and print the full reveal plan as JSON.
    Plan(PlanArgs),
    /// Interactive name prompt on stdin (`reset` returns to the prompt, `plan` prints it).
    Session(SessionArgs),
}

#[derive(Parser, Debug)]
struct GeometryArgs {
    /// Settings JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Settings JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Petal count to schedule; defaults to the configured flower's.
    #[arg(long)]
    petals: Option<u32>,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Settings JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name to reveal the flower for.
    #[arg(long)]
    name: String,

    /// Write JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Settings JSON (defaults apply to missing fields).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Geometry(args) => cmd_geometry(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Plan(args) => cmd_plan(args),
        Command::Session(args) => cmd_session(args),
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<girasol::RevealSettings> {
    let Some(path) = path else {
        return Ok(girasol::RevealSettings::default());
    };
    girasol::RevealSettings::from_path(path)
        .with_context(|| format!("load settings '{}'", path.display()))
}

fn emit_json<T: serde::Serialize>(value: &T, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize JSON")?;
    let Some(out) = out else {
        println!("{json}");
        return Ok(());
    };

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, json).with_context(|| format!("write json '{}'", out.display()))?;
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_geometry(args: GeometryArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let geometry = girasol::generate(&settings.flower);
    emit_json(&geometry, args.out.as_deref())
}

fn cmd_timeline(args: TimelineArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let petals = args.petals.unwrap_or(settings.flower.petal_count);
    if petals == 0 {
        anyhow::bail!("--petals must be >= 1");
    }
    let timeline = girasol::schedule_with(petals, &settings.timeline);
    emit_json(&timeline, args.out.as_deref())
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let field = girasol::NameField::new(settings.max_name_chars);
    let name = field
        .capture(&args.name)
        .with_context(|| format!("--name {:?}", args.name))?;

    let mut controller = girasol::RevealController::from_settings(&settings)?;
    let outcome = controller.submit_name(&name, Instant::now());
    if outcome != girasol::SubmitOutcome::Revealed {
        anyhow::bail!("reveal did not start ({outcome:?}) (bug)");
    }
    let plan = controller
        .plan()
        .context("revealed controller produced no plan (bug)")?;
    emit_json(&plan, args.out.as_deref())
}

fn cmd_session(args: SessionArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let field = girasol::NameField::new(settings.max_name_chars);
    let mut controller = girasol::RevealController::from_settings(&settings)?;

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line.context("read stdin")?;

        if controller.is_awaiting_name() {
            match field.capture(&line) {
                Ok(name) => match controller.submit_name(&name, Instant::now()) {
                    girasol::SubmitOutcome::Revealed => {
                        let reveal = controller
                            .state()
                            .reveal()
                            .context("revealed controller has no reveal (bug)")?;
                        writeln!(
                            stdout,
                            "hello {}: {} petals, {:.1}s bloom",
                            reveal.name(),
                            reveal.geometry().petals.len(),
                            reveal.timeline().total_duration_secs()
                        )?;
                    }
                    girasol::SubmitOutcome::Rejected(rejection) => {
                        writeln!(stdout, "{rejection}")?;
                        prompt(&mut stdout)?;
                    }
                    girasol::SubmitOutcome::Ignored => {}
                },
                Err(rejection) => {
                    writeln!(stdout, "{rejection}")?;
                    prompt(&mut stdout)?;
                }
            }
            continue;
        }

        match line.trim() {
            "reset" => {
                controller.reset();
                prompt(&mut stdout)?;
            }
            "plan" => {
                if let Some(plan) = controller.plan() {
                    writeln!(stdout, "{}", plan.to_json_pretty()?)?;
                }
            }
            _ => writeln!(stdout, "type `reset` to change the name or `plan` to print it")?,
        }
    }

    Ok(())
}

fn prompt(out: &mut impl std::io::Write) -> anyhow::Result<()> {
    writeln!(out, "name?")?;
    out.flush()?;
    Ok(())
}
