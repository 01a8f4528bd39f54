use std::time::Instant;

use girasol::{AnimatedProperty, RevealController, RevealSettings, SubmitOutcome};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let settings = RevealSettings::from_json_str(include_str!("../tests/data/settings.json"))?;
    let mut controller = RevealController::from_settings(&settings)?;

    let outcome = controller.submit_name("  Ana  ", Instant::now());
    anyhow::ensure!(outcome == SubmitOutcome::Revealed, "unexpected {outcome:?}");
    let plan = controller
        .plan()
        .ok_or_else(|| anyhow::anyhow!("no plan after reveal"))?;

    println!(
        "{}: {} cues, {:.2}s",
        plan.name,
        plan.cues.len(),
        plan.total_duration_secs
    );
    for t in [0.0, 1.0, 2.5, 4.0, plan.total_duration_secs] {
        let visible = plan
            .cues
            .iter()
            .filter(|cue| {
                let k = cue.timing.eased_at(t);
                cue.tweens
                    .iter()
                    .any(|tw| tw.property == AnimatedProperty::Opacity && tw.value_at(k) > 0.0)
            })
            .count();
        println!("t={t:.2}s: {visible} elements showing");
    }

    controller.reset();
    println!("awaiting name: {}", controller.is_awaiting_name());
    Ok(())
}
