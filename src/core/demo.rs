use crate::domain::model::Cuboid;
use crate::domain::ports::ScenarioProvider;
use crate::utils::error::BoxError;
use std::io::Write;

const BANNER_RULE: &str = "======================";
const SECTION_RULE: &str = "============================";

/// Drives the demonstration: builds a default and a sized box, prints them,
/// resizes the default one and prints it again.
///
/// This is the only place a [`BoxError`] is caught. It is written to the
/// error stream and returned, so the caller can carry on.
pub struct DemoEngine<P: ScenarioProvider> {
    scenario: P,
}

impl<P: ScenarioProvider> DemoEngine<P> {
    pub fn new(scenario: P) -> Self {
        Self { scenario }
    }

    pub fn run<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> anyhow::Result<Option<BoxError>> {
        writeln!(out, "Box Class Demo")?;
        writeln!(out, "{}", BANNER_RULE)?;

        let outcome = match self.run_scenario(out) {
            Ok(()) => None,
            Err(e) => match e.downcast::<BoxError>() {
                Ok(rejected) => {
                    tracing::warn!("❌ Box rejected a {}: {}", rejected.dimension(), rejected);
                    write!(err, "{}", rejected)?;
                    Some(rejected)
                }
                Err(other) => return Err(other),
            },
        };

        writeln!(out)?;
        writeln!(out)?;
        Ok(outcome)
    }

    fn run_scenario<O: Write>(&self, out: &mut O) -> anyhow::Result<()> {
        let initial = self.scenario.initial();
        let resize = self.scenario.resize();

        let mut box1 = Cuboid::default();
        let box2 = Cuboid::new(initial.height, initial.width, initial.depth)?;
        tracing::info!("Built boxes with volumes {} and {}", box1.volume(), box2.volume());

        writeln!(out, "As Initialized")?;
        writeln!(out, "{}", SECTION_RULE)?;
        writeln!(out, "box1:\n{}", box1)?;
        writeln!(out, "\nbox2:\n{}\n", box2)?;

        box1.resize(resize.height, resize.width, resize.depth)?;
        tracing::info!("✅ Resized box1, volume is now {}", box1.volume());

        writeln!(out, "After resizing:")?;
        writeln!(out, "{}", SECTION_RULE)?;
        writeln!(out, "box1:\n{}", box1)?;
        Ok(())
    }
}
