use rand::Rng;

use crate::model::{ActivityStatus, Id, Intern, Performance, Segregation, YesNo};

/// Builds tracker records for batch insertion. Injectable so tests can run
/// the batch path with a seeded generator.
pub trait InternFactory {
    fn build(&mut self, id: Id<Intern>) -> Intern;
}

/// Production factory: blank-named records with randomized fields.
///
/// Weights: 85% Active / 10% Inactive / 5% Leave; 65% excel submitted;
/// 55% AI chat; 45% data mining; speakers uniform in [0, 140]; segregation
/// 90% none, 4% Resign, 4% Warning, 1% Terminated, 1% Relocated; 30% data
/// repurposed. Sheet status and performance are derived from the rolled
/// values through the same rules the editors apply.
pub struct RandomInternFactory<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomInternFactory<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> InternFactory for RandomInternFactory<R> {
    fn build(&mut self, id: Id<Intern>) -> Intern {
        let mut intern = Intern::create(id, String::new(), String::new());

        intern.activity = match self.rng.gen_range(0..100) {
            0..=84 => ActivityStatus::Active,
            85..=94 => ActivityStatus::Inactive,
            _ => ActivityStatus::Leave,
        };
        intern.excel_submitted = YesNo::from_bool(self.rng.gen_bool(0.65));
        intern.ai_chat_added = self.rng.gen_bool(0.55);
        intern.data_mining_gc = self.rng.gen_bool(0.45);
        intern.data_repurposed = YesNo::from_bool(self.rng.gen_bool(0.30));

        let segregation = match self.rng.gen_range(0..100) {
            0..=89 => None,
            90..=93 => Some(Segregation::Resign),
            94..=97 => Some(Segregation::Warning),
            98 => Some(Segregation::Terminated),
            _ => Some(Segregation::Relocated),
        };
        let speakers = self.rng.gen_range(0..=140);

        // Creation goes through the mutation rules so a batch row ends up in
        // the same state an edited row would: Black on a disqualifying exit,
        // Green on target reached, Red otherwise.
        intern.set_segregation(segregation);
        intern.set_speakers_count(speakers);
        intern.performance = if intern.speakers_count >= intern.speakers_target / 2 {
            Performance::Good
        } else {
            Performance::Weak
        };

        intern
    }
}
