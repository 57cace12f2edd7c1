use std::time::{Duration, Instant};

use serde::Serialize;

use crate::content::resume::ResumeData;

pub const HERO_COMMAND: &str = "./show-profile.sh";

const START_DELAY: Duration = Duration::from_millis(320);
const TYPING_INTERVAL: Duration = Duration::from_millis(38);
const EXECUTION_DELAY: Duration = Duration::from_millis(260);
const EXECUTION_TIME: Duration = Duration::from_millis(760);
const OUTPUT_SETTLE_DELAY: Duration = Duration::from_millis(280);
const COPY_RESET: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroPhase {
    Idle,
    Typing,
    Executing,
    Output,
    Done,
}

/// The profile object printed by the fake terminal once the command has
/// "executed". Mirrors the copy-to-clipboard payload.
#[derive(Serialize)]
struct ProfileOutput<'a> {
    name: &'a str,
    role: &'a str,
    status: &'a str,
    location: &'a str,
    stack: &'a [String],
    tagline: &'a str,
}

/// Typewriter state machine for the hero terminal window. Driven purely by
/// tick timestamps; all waits are deadlines, so skipping simply jumps to
/// the final phase and the stale deadlines become inert.
pub struct HeroModel {
    pub phase: HeroPhase,
    typing_started: Instant,
    deadline: Instant,
    pub typed_len: usize,
    pub show_raw_json: bool,
    copied_until: Option<Instant>,
}

impl HeroModel {
    pub fn new(now: Instant) -> Self {
        HeroModel {
            phase: HeroPhase::Idle,
            typing_started: now,
            deadline: now + START_DELAY,
            typed_len: 0,
            show_raw_json: false,
            copied_until: None,
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        match self.phase {
            HeroPhase::Idle => {
                if now >= self.deadline {
                    self.phase = HeroPhase::Typing;
                    self.typing_started = now;
                }
            }
            HeroPhase::Typing => {
                let elapsed = now.duration_since(self.typing_started);
                let chars =
                    usize::try_from(elapsed.as_millis() / TYPING_INTERVAL.as_millis()).unwrap_or(0);
                self.typed_len = chars.min(HERO_COMMAND.len());
                if self.typed_len == HERO_COMMAND.len() {
                    let typed_out = self.typing_started
                        + TYPING_INTERVAL * u32::try_from(HERO_COMMAND.len()).unwrap_or(u32::MAX);
                    if now >= typed_out + EXECUTION_DELAY {
                        self.phase = HeroPhase::Executing;
                        self.deadline = now + EXECUTION_TIME;
                    }
                }
            }
            HeroPhase::Executing => {
                if now >= self.deadline {
                    self.phase = HeroPhase::Output;
                    self.deadline = now + OUTPUT_SETTLE_DELAY;
                }
            }
            HeroPhase::Output => {
                if now >= self.deadline {
                    self.phase = HeroPhase::Done;
                }
            }
            HeroPhase::Done => {}
        }

        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    /// Jumps straight to the finished state with the command fully typed.
    pub fn skip(&mut self) {
        self.typed_len = HERO_COMMAND.len();
        self.phase = HeroPhase::Done;
    }

    pub fn typed(&self) -> &'static str {
        &HERO_COMMAND[..self.typed_len]
    }

    /// True once the profile output is on screen.
    pub fn output_visible(&self) -> bool {
        matches!(self.phase, HeroPhase::Output | HeroPhase::Done)
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.phase, HeroPhase::Done)
    }

    pub fn toggle_raw_json(&mut self) {
        self.show_raw_json = !self.show_raw_json;
    }

    pub fn mark_copied(&mut self, now: Instant) {
        self.copied_until = Some(now + COPY_RESET);
    }

    pub fn is_copied(&self) -> bool {
        self.copied_until.is_some()
    }

    /// Pretty JSON payload for the copy-output control.
    pub fn profile_json(resume: &ResumeData) -> String {
        let output = ProfileOutput {
            name: &resume.profile.name,
            role: &resume.profile.role,
            status: &resume.profile.status,
            location: &resume.profile.location,
            stack: &resume.skills.core,
            tagline: &resume.profile.tagline,
        };
        serde_json::to_string_pretty(&output).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::content::Locale;

    use super::*;

    #[test]
    fn phases_progress_in_order() {
        let start = Instant::now();
        let mut hero = HeroModel::new(start);
        assert_eq!(hero.phase, HeroPhase::Idle);

        hero.on_tick(start + START_DELAY);
        assert_eq!(hero.phase, HeroPhase::Typing);

        // Half the command typed out
        let half = TYPING_INTERVAL * u32::try_from(HERO_COMMAND.len() / 2).unwrap();
        hero.on_tick(start + START_DELAY + half);
        assert_eq!(hero.phase, HeroPhase::Typing);
        assert_eq!(hero.typed_len, HERO_COMMAND.len() / 2);

        // Fully typed plus the execution delay
        let typed_out = TYPING_INTERVAL * u32::try_from(HERO_COMMAND.len()).unwrap();
        let exec_at = start + START_DELAY + typed_out + EXECUTION_DELAY;
        hero.on_tick(exec_at);
        assert_eq!(hero.phase, HeroPhase::Executing);
        assert_eq!(hero.typed(), HERO_COMMAND);

        hero.on_tick(exec_at + EXECUTION_TIME);
        assert_eq!(hero.phase, HeroPhase::Output);
        assert!(hero.output_visible());

        hero.on_tick(exec_at + EXECUTION_TIME + OUTPUT_SETTLE_DELAY);
        assert_eq!(hero.phase, HeroPhase::Done);
        assert!(!hero.is_running());
    }

    #[test]
    fn skip_jumps_to_done_with_full_command() {
        let start = Instant::now();
        let mut hero = HeroModel::new(start);
        hero.on_tick(start + START_DELAY);
        hero.skip();

        assert_eq!(hero.phase, HeroPhase::Done);
        assert_eq!(hero.typed(), HERO_COMMAND);

        // Stale deadlines from the interrupted phases stay inert
        hero.on_tick(start + Duration::from_secs(10));
        assert_eq!(hero.phase, HeroPhase::Done);
    }

    #[test]
    fn copied_indicator_resets_after_the_deadline() {
        let start = Instant::now();
        let mut hero = HeroModel::new(start);
        hero.mark_copied(start);
        assert!(hero.is_copied());

        hero.on_tick(start + COPY_RESET - Duration::from_millis(1));
        assert!(hero.is_copied());
        hero.on_tick(start + COPY_RESET);
        assert!(!hero.is_copied());
    }

    #[test]
    fn profile_json_contains_the_core_fields() {
        let resume = ResumeData::for_locale(Locale::En);
        let json = HeroModel::profile_json(resume);
        assert!(json.contains("\"name\""));
        assert!(json.contains(&resume.profile.role));
        assert!(json.contains(&resume.skills.core[0]));
    }
}
